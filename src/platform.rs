//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts (submit, reset, clear field).
/// Terminals rarely forward Cmd, so Ctrl is used on every platform.
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset form shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Clear field shortcut display
pub const CLEAR_FIELD_SHORTCUT: &str = "Ctrl+U";
