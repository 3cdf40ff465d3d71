//! In-memory email log.

use crate::{DeliveryId, EmailKind, EmailMessage};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tessera_error::{NotifyError, NotifyErrorKind, NotifyResult};
use tracing::debug;
use uuid::Uuid;

/// Opaque handle to a log entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct LogId(Uuid);

impl LogId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Delivery state of a logged message.
///
/// Entries start `Pending` and move exactly once, to `Sent` or `Failed`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeliveryStatus {
    /// Handed to the notifier, no result yet
    Pending,
    /// Notifier accepted the message
    Sent,
    /// Notifier reported an error
    Failed,
}

/// One logged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct LogEntry {
    id: LogId,
    kind: EmailKind,
    to: String,
    subject: String,
    status: DeliveryStatus,
    delivery_id: Option<DeliveryId>,
    error: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Entries kept by [`EmailLog::default`].
pub const DEFAULT_LOG_CAPACITY: usize = 500;

/// Record of the most recent messages the service attempted, oldest first.
///
/// Holds at most [`EmailLog::capacity`] entries; recording past that drops
/// the oldest.
///
/// # Examples
///
/// ```
/// use tessera_notify::{DeliveryId, DeliveryStatus, EmailKind, EmailLog, EmailMessage};
///
/// let log = EmailLog::default();
/// let message = EmailMessage::new(EmailKind::Test, "ops@example.com", "Hi", "<p>Hi</p>", "Hi");
/// let id = log.record(&message);
/// assert_eq!(*log.get(id).unwrap().status(), DeliveryStatus::Pending);
///
/// log.mark_sent(id, DeliveryId::new()).unwrap();
/// assert_eq!(*log.get(id).unwrap().status(), DeliveryStatus::Sent);
/// assert!(log.mark_failed(id, "late").is_err());
/// ```
#[derive(Debug)]
pub struct EmailLog {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl Default for EmailLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl EmailLog {
    /// Log keeping at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY))),
            capacity,
        }
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a pending entry for `message`.
    pub fn record(&self, message: &EmailMessage) -> LogId {
        let now = Utc::now();
        let entry = LogEntry {
            id: LogId::new(),
            kind: *message.kind(),
            to: message.to().clone(),
            subject: message.subject().clone(),
            status: DeliveryStatus::Pending,
            delivery_id: None,
            error: None,
            created_at: now,
            updated_at: now,
        };
        let id = entry.id;
        debug!(%id, kind = %entry.kind, to = %entry.to, "Logged pending email");

        let mut entries = self.entries.lock();
        entries.push_back(entry);
        let mut evicted = 0usize;
        while entries.len() > self.capacity {
            entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            debug!(evicted, capacity = self.capacity, "Dropped oldest email log entries");
        }
        id
    }

    /// Move a pending entry to `Sent`.
    pub fn mark_sent(&self, id: LogId, delivery_id: DeliveryId) -> NotifyResult<()> {
        self.transition(id, DeliveryStatus::Sent, |entry| {
            entry.delivery_id = Some(delivery_id);
        })
    }

    /// Move a pending entry to `Failed`.
    pub fn mark_failed(&self, id: LogId, error: impl Into<String>) -> NotifyResult<()> {
        let error = error.into();
        self.transition(id, DeliveryStatus::Failed, |entry| {
            entry.error = Some(error);
        })
    }

    fn transition(
        &self,
        id: LogId,
        to: DeliveryStatus,
        apply: impl FnOnce(&mut LogEntry),
    ) -> NotifyResult<()> {
        let mut entries = self.entries.lock();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| NotifyError::new(NotifyErrorKind::LogEntryNotFound(id.to_string())))?;

        if entry.status != DeliveryStatus::Pending {
            return Err(NotifyError::new(NotifyErrorKind::InvalidTransition {
                id: id.to_string(),
                from: entry.status.to_string(),
                to: to.to_string(),
            }));
        }

        entry.status = to;
        entry.updated_at = Utc::now();
        apply(entry);
        debug!(%id, status = %to, "Updated email log entry");
        Ok(())
    }

    /// Snapshot of every retained entry, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Entry by id.
    pub fn get(&self, id: LogId) -> Option<LogEntry> {
        self.entries.lock().iter().find(|e| e.id == id).cloned()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// No entries yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
