//! Counters for the notification flow.

use crate::EmailKind;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared counters for sends and SMTP probes.
#[derive(Debug, Clone)]
pub struct NotificationMetrics {
    inner: Arc<NotificationMetricsInner>,
}

#[derive(Debug)]
struct NotificationMetricsInner {
    waitlist_sent: AtomicU64,
    contact_sent: AtomicU64,
    test_sent: AtomicU64,
    failures: AtomicU64,
    smtp_probes: AtomicU64,
    last_success: parking_lot::Mutex<Option<Instant>>,
}

impl Default for NotificationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationMetrics {
    /// Creates a zeroed collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(NotificationMetricsInner {
                waitlist_sent: AtomicU64::new(0),
                contact_sent: AtomicU64::new(0),
                test_sent: AtomicU64::new(0),
                failures: AtomicU64::new(0),
                smtp_probes: AtomicU64::new(0),
                last_success: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records an accepted message.
    pub fn record_sent(&self, kind: EmailKind) {
        let counter = match kind {
            EmailKind::WaitlistConfirmation => &self.inner.waitlist_sent,
            EmailKind::ContactConfirmation => &self.inner.contact_sent,
            EmailKind::Test => &self.inner.test_sent,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_success.lock() = Some(Instant::now());
    }

    /// Records a failed send.
    pub fn record_failure(&self) {
        self.inner.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an SMTP settings probe.
    pub fn record_probe(&self) {
        self.inner.smtp_probes.fetch_add(1, Ordering::Relaxed);
    }

    /// Messages accepted across all flows.
    pub fn total_sent(&self) -> u64 {
        self.inner.waitlist_sent.load(Ordering::Relaxed)
            + self.inner.contact_sent.load(Ordering::Relaxed)
            + self.inner.test_sent.load(Ordering::Relaxed)
    }

    /// Failed sends.
    pub fn failures(&self) -> u64 {
        self.inner.failures.load(Ordering::Relaxed)
    }

    /// Fraction of attempts that succeeded (1.0 before any attempt).
    pub fn success_rate(&self) -> f64 {
        let sent = self.total_sent();
        let attempts = sent + self.failures();
        if attempts == 0 {
            return 1.0;
        }
        sent as f64 / attempts as f64
    }

    /// Creates a serializable snapshot of current counters.
    pub fn snapshot(&self) -> NotificationMetricsSnapshot {
        NotificationMetricsSnapshot {
            waitlist_sent: self.inner.waitlist_sent.load(Ordering::Relaxed),
            contact_sent: self.inner.contact_sent.load(Ordering::Relaxed),
            test_sent: self.inner.test_sent.load(Ordering::Relaxed),
            failures: self.failures(),
            smtp_probes: self.inner.smtp_probes.load(Ordering::Relaxed),
            success_rate: self.success_rate(),
            seconds_since_success: self
                .inner
                .last_success
                .lock()
                .map(|instant| instant.elapsed().as_secs()),
        }
    }
}

/// Point-in-time view of [`NotificationMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationMetricsSnapshot {
    /// Waitlist confirmations accepted
    pub waitlist_sent: u64,
    /// Contact acknowledgements accepted
    pub contact_sent: u64,
    /// Test messages accepted
    pub test_sent: u64,
    /// Failed sends
    pub failures: u64,
    /// SMTP probes run
    pub smtp_probes: u64,
    /// Fraction of sends that succeeded
    pub success_rate: f64,
    /// Seconds since the last accepted message
    pub seconds_since_success: Option<u64>,
}
