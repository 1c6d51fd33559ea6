//! Keystroke-level edits of a single field value

use super::schema::{FieldKind, FieldSpec};

/// An editing action on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// Append a character (ignored by select fields)
    Insert(char),
    /// Remove the last character (select fields go back to "nothing picked")
    Backspace,
    /// Empty the field
    Clear,
    /// Select the next option, wrapping through "nothing picked"
    NextOption,
    /// Select the previous option, wrapping through "nothing picked"
    PrevOption,
}

impl FieldEdit {
    /// Compute the value that results from applying this edit to `current`
    pub fn apply(self, spec: &FieldSpec, current: &str) -> String {
        match (&spec.kind, self) {
            (FieldKind::Select(options), FieldEdit::NextOption) => {
                cycle_option(options, current, true)
            }
            (FieldKind::Select(options), FieldEdit::PrevOption) => {
                cycle_option(options, current, false)
            }
            (FieldKind::Select(_), FieldEdit::Insert(_)) => current.to_string(),
            (FieldKind::Select(_), FieldEdit::Backspace | FieldEdit::Clear) => String::new(),
            (_, FieldEdit::Insert('\n')) if !spec.is_multiline => current.to_string(),
            (_, FieldEdit::Insert(c)) => {
                let mut value = current.to_string();
                value.push(c);
                value
            }
            (_, FieldEdit::Backspace) => {
                let mut value = current.to_string();
                value.pop();
                value
            }
            (_, FieldEdit::Clear) => String::new(),
            (_, FieldEdit::NextOption | FieldEdit::PrevOption) => current.to_string(),
        }
    }
}

/// Step through `["", options...]` as a ring
fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    // Slot 0 is "nothing picked"; unknown values are treated as slot 0 too
    let slots = options.len() + 1;
    let slot = options
        .iter()
        .position(|o| o == current)
        .map(|i| i + 1)
        .unwrap_or(0);

    let next = if forward {
        (slot + 1) % slots
    } else if slot == 0 {
        slots - 1
    } else {
        slot - 1
    };

    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}

/// Text to render for a field: the value, or its placeholder when empty
pub fn display_value<'a>(spec: &'a FieldSpec, value: &'a str) -> (&'a str, bool) {
    if value.is_empty() {
        (spec.placeholder.as_str(), true)
    } else {
        (value, false)
    }
}
