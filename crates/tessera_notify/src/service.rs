//! Notification flow: template, log, send, update.

use crate::templates::{self, Template};
use crate::{DeliveryId, EmailKind, EmailLog, EmailMessage, LogId, NotificationMetrics, Notifier};
use serde::Serialize;
use std::sync::Arc;
use tessera_core::SmtpConfig;
use tessera_error::NotifyResult;
use tracing::{error, info, instrument, warn};

/// Result reported to callers of the send operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendOutcome {
    /// Message was accepted
    pub success: bool,
    /// Failure text, when not accepted
    pub error: Option<String>,
    /// Log entry for the attempt
    pub log_id: LogId,
    /// Id assigned by the notifier
    pub delivery_id: Option<DeliveryId>,
}

/// Renders, logs, and dispatches confirmation emails.
///
/// Each send records a pending log entry, calls the notifier, then marks
/// the entry sent or failed. A notifier error is returned to the caller
/// after the entry is marked failed. Nothing is retried.
pub struct EmailService {
    notifier: Arc<dyn Notifier>,
    log: EmailLog,
    metrics: NotificationMetrics,
}

impl EmailService {
    /// Service over `notifier` with a fresh log and metrics.
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self::from_arc(Arc::new(notifier))
    }

    /// Service over a shared notifier.
    pub fn from_arc(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            log: EmailLog::default(),
            metrics: NotificationMetrics::new(),
        }
    }

    /// Keep at most `capacity` log entries.
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log = EmailLog::with_capacity(capacity);
        self
    }

    /// Report into an existing metrics collector.
    pub fn with_metrics(mut self, metrics: NotificationMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Attempt history.
    pub fn log(&self) -> &EmailLog {
        &self.log
    }

    /// Counters.
    pub fn metrics(&self) -> &NotificationMetrics {
        &self.metrics
    }

    /// Underlying notifier.
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Confirm a waitlist signup.
    #[instrument(skip(self))]
    pub async fn send_waitlist_confirmation(
        &self,
        email: &str,
        product_name: &str,
        user_name: Option<&str>,
    ) -> NotifyResult<SendOutcome> {
        let template = templates::waitlist_confirmation(product_name, user_name);
        self.dispatch(EmailKind::WaitlistConfirmation, email, template)
            .await
    }

    /// Acknowledge a contact form submission.
    #[instrument(skip(self))]
    pub async fn send_contact_confirmation(
        &self,
        email: &str,
        name: &str,
        subject: &str,
    ) -> NotifyResult<SendOutcome> {
        let template = templates::contact_confirmation(name, subject);
        self.dispatch(EmailKind::ContactConfirmation, email, template)
            .await
    }

    /// Send the settings screen's test message through `smtp`.
    #[instrument(skip(self, smtp), fields(host = %smtp.host))]
    pub async fn send_test_email(&self, to: &str, smtp: &SmtpConfig) -> NotifyResult<SendOutcome> {
        let template = templates::test_email(smtp);
        self.dispatch(EmailKind::Test, to, template).await
    }

    async fn dispatch(
        &self,
        kind: EmailKind,
        to: &str,
        template: Template,
    ) -> NotifyResult<SendOutcome> {
        let message = EmailMessage::new(kind, to, template.subject, template.html, template.text);
        let log_id = self.log.record(&message);

        match self.notifier.send(&message).await {
            Ok(delivery_id) => {
                if let Err(e) = self.log.mark_sent(log_id, delivery_id) {
                    warn!(%log_id, error = %e, "Sent email no longer in log");
                }
                self.metrics.record_sent(kind);
                info!(%log_id, %delivery_id, notifier = self.notifier.name(), "Email dispatched");
                Ok(SendOutcome {
                    success: true,
                    error: None,
                    log_id,
                    delivery_id: Some(delivery_id),
                })
            }
            Err(e) => {
                error!(%log_id, error = %e, "Email dispatch failed");
                self.metrics.record_failure();
                if let Err(log_err) = self.log.mark_failed(log_id, e.kind.to_string()) {
                    warn!(%log_id, error = %log_err, "Failed email no longer in log");
                }
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for EmailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailService")
            .field("notifier", &self.notifier.name())
            .field("log_entries", &self.log.len())
            .finish()
    }
}
