//! Delivery capability and its simulated implementation.

use crate::{DeliveryId, EmailKind, EmailMessage};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tessera_error::{NotifyError, NotifyErrorKind, NotifyResult};
use tracing::{info, instrument, warn};

/// Something that can hand a message off for delivery.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message`, returning the delivery id on acceptance.
    async fn send(&self, message: &EmailMessage) -> NotifyResult<DeliveryId>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Per-flow simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailDelays {
    /// Waitlist confirmation
    pub waitlist: Duration,
    /// Contact acknowledgement
    pub contact: Duration,
    /// Settings test message
    pub test: Duration,
}

impl Default for EmailDelays {
    fn default() -> Self {
        Self {
            waitlist: Duration::from_millis(1000),
            contact: Duration::from_millis(500),
            test: Duration::from_millis(2000),
        }
    }
}

impl EmailDelays {
    /// No latency at all.
    pub const ZERO: Self = Self {
        waitlist: Duration::ZERO,
        contact: Duration::ZERO,
        test: Duration::ZERO,
    };

    /// Delay for messages of `kind`.
    pub fn for_kind(&self, kind: EmailKind) -> Duration {
        match kind {
            EmailKind::WaitlistConfirmation => self.waitlist,
            EmailKind::ContactConfirmation => self.contact,
            EmailKind::Test => self.test,
        }
    }
}

/// Notifier that waits and succeeds without transmitting anything.
///
/// Failures can be injected for every send ([`failing`](Self::failing)) or
/// for the next few ([`fail_next`](Self::fail_next)).
#[derive(Debug, Default)]
pub struct SimulatedNotifier {
    delays: EmailDelays,
    always_fail: Option<String>,
    fail_next: AtomicUsize,
    sent: AtomicU64,
}

impl SimulatedNotifier {
    /// Simulated notifier with the given latencies.
    pub fn new(delays: EmailDelays) -> Self {
        Self {
            delays,
            ..Self::default()
        }
    }

    /// Simulated notifier with no latency.
    pub fn instant() -> Self {
        Self::new(EmailDelays::ZERO)
    }

    /// Notifier whose every send fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            delays: EmailDelays::ZERO,
            always_fail: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Make the next `count` sends fail.
    pub fn fail_next(&self, count: usize) {
        self.fail_next.store(count, Ordering::SeqCst);
    }

    /// Latencies in use.
    pub fn delays(&self) -> EmailDelays {
        self.delays
    }

    /// Messages accepted so far.
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    fn take_injected_failure(&self) -> Option<String> {
        if let Some(reason) = &self.always_fail {
            return Some(reason.clone());
        }
        self.fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .ok()
            .map(|_| "Simulated delivery failure".to_string())
    }
}

#[async_trait]
impl Notifier for SimulatedNotifier {
    #[instrument(skip(self, message), fields(kind = %message.kind(), to = %message.to()))]
    async fn send(&self, message: &EmailMessage) -> NotifyResult<DeliveryId> {
        tokio::time::sleep(self.delays.for_kind(*message.kind())).await;

        if let Some(reason) = self.take_injected_failure() {
            warn!(%reason, "Simulated send failed");
            return Err(NotifyError::new(NotifyErrorKind::Delivery(reason)));
        }

        let delivery_id = DeliveryId::new();
        self.sent.fetch_add(1, Ordering::Relaxed);
        info!(%delivery_id, subject = %message.subject(), "Simulated email sent");
        Ok(delivery_id)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
