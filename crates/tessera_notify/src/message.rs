//! Outgoing message shape.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which flow produced a message.
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
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmailKind {
    /// Waitlist signup confirmation
    WaitlistConfirmation,
    /// Contact form acknowledgement
    ContactConfirmation,
    /// Settings screen test message
    Test,
}

/// Identifier a notifier hands back for an accepted message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct DeliveryId(Uuid);

impl DeliveryId {
    /// Fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DeliveryId {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered email ready to hand to a [`Notifier`](crate::Notifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct EmailMessage {
    kind: EmailKind,
    to: String,
    subject: String,
    html: String,
    text: String,
}

impl EmailMessage {
    /// Assemble a message.
    pub fn new(
        kind: EmailKind,
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
            text: text.into(),
        }
    }
}
