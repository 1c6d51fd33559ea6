//! Form domain layer
//!
//! Schema-driven form state with explicit validation and a pluggable
//! submission notifier. Nothing in here knows about the terminal.

mod contact;
mod field;
mod form_state;
mod notifier;
mod schema;

pub use contact::{
    contact_schema, ContactForm, Form, CONTACT_BUTTONS, SCHEDULE_BUTTON, SEND_BUTTON,
};
pub use field::{display_value, FieldEdit};
pub use form_state::{FormValues, SubmissionResult};
pub use notifier::SubmissionNotifier;
pub use schema::{FieldSchema, FieldSpec};
