//! Toast notifications and the notifier that raises them

use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::forms::{FieldSchema, FormValues, SubmissionNotifier};
use crate::content::{SENT_DESCRIPTION, SENT_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    shown_at: Instant,
}

/// Toasts in arrival order; each one lives for a fixed time
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    /// Default lifetime of a toast
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
            shown_at: Instant::now(),
        };
        let id = toast.id;
        self.toasts.push_back(toast);
        id
    }

    /// Drop every toast whose lifetime has ended by `now`
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < ttl);
    }

    /// Most recent toast, drawn on top
    pub fn newest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Dismiss the most recent toast
    pub fn dismiss(&mut self) -> Option<Toast> {
        self.toasts.pop_back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

/// Turns form submissions into toasts and log lines
pub struct ToastNotifier<'a> {
    toasts: &'a mut ToastQueue,
    schema: Arc<FieldSchema>,
}

impl<'a> ToastNotifier<'a> {
    pub fn new(toasts: &'a mut ToastQueue, schema: Arc<FieldSchema>) -> Self {
        Self { toasts, schema }
    }
}

impl SubmissionNotifier for ToastNotifier<'_> {
    fn on_accepted(&mut self, values: &FormValues) {
        match serde_json::to_string(values) {
            Ok(payload) => {
                tracing::info!(fields = values.len(), %payload, "Contact form submitted")
            }
            Err(e) => tracing::warn!("Failed to serialize submission: {e}"),
        }
        self.toasts
            .push(ToastKind::Success, SENT_TITLE, SENT_DESCRIPTION);
    }

    fn on_rejected(&mut self, missing_keys: &BTreeSet<String>) {
        tracing::debug!(?missing_keys, "Contact form rejected");
        let labels = self.schema.labels_for(missing_keys);
        self.toasts.push(
            ToastKind::Error,
            "Missing information",
            format!("Please fill in: {}", labels.join(", ")),
        );
    }
}
