//! Notification error types.

/// Error kinds for notification delivery and the email log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotifyErrorKind {
    /// The notifier failed to hand off the message
    #[display("Delivery failed: {}", _0)]
    Delivery(String),

    /// No log entry exists for the id
    #[display("Email log entry not found: {}", _0)]
    LogEntryNotFound(String),

    /// Log entries only move out of `pending`
    #[display("Email log entry {} cannot move from {} to {}", id, from, to)]
    InvalidTransition {
        /// Log entry id
        id: String,
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },
}

/// Notification error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Notify Error: {} at line {} in {}", kind, line, file)]
pub struct NotifyError {
    /// The error kind
    pub kind: NotifyErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl NotifyError {
    /// Create a new NotifyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NotifyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for notification operations.
pub type NotifyResult<T> = std::result::Result<T, NotifyError>;
