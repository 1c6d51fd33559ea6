//! Field schema: which fields a form has and what they accept

use std::collections::BTreeSet;
use thiserror::Error;

use super::form_state::{FormValues, SubmissionResult};

/// Errors raised while building a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema has no fields")]
    Empty,
    #[error("duplicate field key: {0}")]
    DuplicateKey(String),
    #[error("select field '{0}' has no options")]
    EmptyOptions(String),
    #[error("select field '{key}' lists option '{option}' more than once")]
    DuplicateOption { key: String, option: String },
}

/// What kind of value a field holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    /// One of a fixed list of options; the empty string means "nothing picked"
    Select(Vec<String>),
}

impl FieldKind {
    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Select(_))
    }

    /// Options of a select field (empty for free-text kinds)
    #[allow(dead_code)]
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }
}

/// Declaration of a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
    pub placeholder: String,
    pub is_multiline: bool,
}

impl FieldSpec {
    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            required: false,
            kind,
            placeholder: String::new(),
            is_multiline: false,
        }
    }

    /// Create a free-text field
    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    /// Create an email field
    pub fn email(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Email)
    }

    /// Create a phone number field
    pub fn phone(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Phone)
    }

    /// Create a single-select field
    pub fn select<I, S>(key: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(key, label, FieldKind::Select(options))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.is_multiline = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// A required field is satisfied by any value that is not blank
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        !self.required || !value.trim().is_empty()
    }
}

/// Ordered, validated set of field declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Build a schema, rejecting duplicate keys and option-less selects
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = BTreeSet::new();
        for field in &fields {
            if !seen.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey(field.key.clone()));
            }
            if let FieldKind::Select(options) = &field.kind {
                if options.is_empty() {
                    return Err(SchemaError::EmptyOptions(field.key.clone()));
                }
                let mut seen_options = BTreeSet::new();
                for option in options {
                    if !seen_options.insert(option.as_str()) {
                        return Err(SchemaError::DuplicateOption {
                            key: field.key.clone(),
                            option: option.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[allow(dead_code)] // construction rejects empty schemas
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_by_key(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Position of a key in schema order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// Check a set of values against the required flags of this schema.
    ///
    /// Keys the values don't carry count as empty.
    pub fn validate(&self, values: &FormValues) -> SubmissionResult {
        let missing_keys: BTreeSet<String> = self
            .fields
            .iter()
            .filter(|f| !f.is_satisfied_by(values.get(&f.key).unwrap_or("")))
            .map(|f| f.key.clone())
            .collect();

        if missing_keys.is_empty() {
            SubmissionResult::Accepted
        } else {
            SubmissionResult::Rejected { missing_keys }
        }
    }

    /// Human-readable labels for a set of keys, in schema order
    pub fn labels_for<'a>(&'a self, keys: &BTreeSet<String>) -> Vec<&'a str> {
        self.fields
            .iter()
            .filter(|f| keys.contains(&f.key))
            .map(|f| f.label.trim_end_matches(" *"))
            .collect()
    }
}
