//! Feedback hook for form submissions

use std::collections::BTreeSet;

use super::form_state::FormValues;

/// Receives the outcome of [`FormState::submit`](super::FormState::submit).
///
/// The form itself performs no I/O; whatever the surrounding application
/// does with a submission (toast, log line, delivery) happens here.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionNotifier {
    /// Called exactly once per accepted submission, before the form resets
    fn on_accepted(&mut self, values: &FormValues);

    /// Called when required fields are still blank. Default: ignore.
    fn on_rejected(&mut self, _missing_keys: &BTreeSet<String>) {}
}
