//! Form state and the operations that drive it
//!
//! A [`FormState`] is an immutable snapshot: every mutation returns a new
//! state and leaves the receiver untouched. Values are reference counted, so
//! entries a mutation does not touch are shared between the old and the new
//! snapshot rather than copied.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

use super::field::FieldEdit;
use super::notifier::SubmissionNotifier;
use super::schema::{FieldSchema, FieldSpec};

/// Raised when a mutation names a key the schema doesn't declare
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {key}")]
pub struct UnknownFieldError {
    pub key: String,
}

/// Outcome of checking a form's required fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted,
    Rejected { missing_keys: BTreeSet<String> },
}

impl SubmissionResult {
    #[allow(dead_code)] // callers match on the variants instead
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted)
    }

    /// Keys that kept the form from being accepted (`None` when accepted)
    pub fn missing_keys(&self) -> Option<&BTreeSet<String>> {
        match self {
            SubmissionResult::Accepted => None,
            SubmissionResult::Rejected { missing_keys } => Some(missing_keys),
        }
    }
}

/// Field values in schema order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    entries: Vec<(String, Arc<str>)>,
}

impl FormValues {
    fn empty_for(schema: &FieldSchema) -> Self {
        let blank: Arc<str> = Arc::from("");
        Self {
            entries: schema
                .keys()
                .map(|key| (key.to_string(), Arc::clone(&blank)))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Arc::from(v.as_ref())))
                .collect(),
        }
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value.as_ref())?;
        }
        map.end()
    }
}

/// Current values of one form, bound to the schema it was created from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    schema: Arc<FieldSchema>,
    values: FormValues,
}

impl FormState {
    /// Fresh state with every schema key mapped to an empty string
    pub fn initialize(schema: Arc<FieldSchema>) -> Self {
        let values = FormValues::empty_for(&schema);
        Self { schema, values }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    #[allow(dead_code)] // values leave the form through the notifier
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Value of a key, `None` if the schema doesn't declare it
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key)
    }

    /// True when no field holds anything
    #[allow(dead_code)]
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|(_, v)| v.is_empty())
    }

    /// Return a copy of this state with exactly one value replaced
    pub fn set_field(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<FormState, UnknownFieldError> {
        let index = self.schema.position(key).ok_or_else(|| UnknownFieldError {
            key: key.to_string(),
        })?;

        let mut next = self.clone();
        next.values.entries[index].1 = Arc::from(value.into());
        Ok(next)
    }

    /// Apply an editing keystroke to one field
    pub fn edit(&self, key: &str, edit: FieldEdit) -> Result<FormState, UnknownFieldError> {
        let spec = self.field_spec(key)?;
        let current = self.values.get(key).unwrap_or("");
        let updated = edit.apply(spec, current);
        self.set_field(key, updated)
    }

    fn field_spec(&self, key: &str) -> Result<&FieldSpec, UnknownFieldError> {
        self.schema.field_by_key(key).ok_or_else(|| UnknownFieldError {
            key: key.to_string(),
        })
    }

    /// Check required fields against the schema this state was created from
    pub fn validate(&self) -> SubmissionResult {
        self.schema.validate(&self.values)
    }

    /// Discard all values
    pub fn reset(&self) -> FormState {
        FormState::initialize(Arc::clone(&self.schema))
    }

    /// Submit the form.
    ///
    /// An accepted form is handed to `notifier.on_accepted` once and a fresh
    /// state is returned. A rejected form is reported through
    /// `notifier.on_rejected` and comes back unchanged.
    pub fn submit<N>(self, notifier: &mut N) -> FormState
    where
        N: SubmissionNotifier + ?Sized,
    {
        match self.validate() {
            SubmissionResult::Accepted => {
                notifier.on_accepted(&self.values);
                self.reset()
            }
            SubmissionResult::Rejected { missing_keys } => {
                notifier.on_rejected(&missing_keys);
                self
            }
        }
    }
}
