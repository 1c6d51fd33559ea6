//! The contact section's form: schema plus focus and highlight state

use std::collections::BTreeSet;
use std::sync::Arc;

use super::field::FieldEdit;
use super::form_state::{FormState, SubmissionResult, UnknownFieldError};
use super::notifier::SubmissionNotifier;
use super::schema::{FieldSchema, FieldSpec, SchemaError};
use crate::content::SERVICE_OPTIONS;

/// Buttons on the last row of the form
pub const CONTACT_BUTTONS: &[&str] = &["Send Message", "Schedule Call"];
pub const SEND_BUTTON: usize = 0;
pub const SCHEDULE_BUTTON: usize = 1;

/// Schema of the "Send Me a Message" form
pub fn contact_schema() -> Result<FieldSchema, SchemaError> {
    FieldSchema::new(vec![
        FieldSpec::text("name", "Full Name *")
            .required()
            .placeholder("Your full name"),
        FieldSpec::email("email", "Email Address *")
            .required()
            .placeholder("your@email.com"),
        FieldSpec::phone("phone", "Phone Number").placeholder("+254 7123456789"),
        FieldSpec::select("service", "Service Needed", SERVICE_OPTIONS.iter().copied())
            .placeholder("Select a service"),
        FieldSpec::text("message", "Message *")
            .required()
            .multiline()
            .placeholder("Tell me about your project or IT needs..."),
    ])
}

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub state: FormState,
    /// One slot per schema field, plus the buttons row at the end
    pub active_field_index: usize,
    pub selected_button: usize,
    /// Required fields left blank by the last rejected submit
    pub flagged: BTreeSet<String>,
}

impl ContactForm {
    pub fn new(schema: Arc<FieldSchema>) -> Self {
        Self {
            state: FormState::initialize(schema),
            active_field_index: 0,
            selected_button: SEND_BUTTON,
            flagged: BTreeSet::new(),
        }
    }

    pub fn schema(&self) -> &FieldSchema {
        self.state.schema()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.schema().len()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % CONTACT_BUTTONS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = CONTACT_BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn active_spec(&self) -> Option<&FieldSpec> {
        self.schema().fields().get(self.active_field_index)
    }

    pub fn is_flagged(&self, key: &str) -> bool {
        self.flagged.contains(key)
    }

    /// Apply an edit to the focused field; no-op on the buttons row
    pub fn edit_active(&mut self, edit: FieldEdit) -> Result<(), UnknownFieldError> {
        let Some(key) = self.active_spec().map(|f| f.key.clone()) else {
            return Ok(());
        };
        self.state = self.state.edit(&key, edit)?;
        self.flagged.remove(&key);
        Ok(())
    }

    /// Submit through `notifier`, then flag or reset depending on the outcome
    pub fn submit<N>(&mut self, notifier: &mut N) -> SubmissionResult
    where
        N: SubmissionNotifier + ?Sized,
    {
        let result = self.state.validate();
        self.state = self.state.clone().submit(notifier);

        match &result {
            SubmissionResult::Accepted => {
                self.flagged.clear();
                self.active_field_index = 0;
                self.selected_button = SEND_BUTTON;
            }
            SubmissionResult::Rejected { missing_keys } => {
                self.flagged = missing_keys.clone();
                // Jump to the first blank required field
                if let Some(index) = self
                    .schema()
                    .fields()
                    .iter()
                    .position(|f| missing_keys.contains(&f.key))
                {
                    self.active_field_index = index;
                }
            }
        }
        result
    }

    /// Discard everything typed so far
    pub fn reset(&mut self) {
        self.state = self.state.reset();
        self.flagged.clear();
        self.active_field_index = 0;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.schema().len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.schema().len());
    }
}
