//! Simulated SMTP settings check.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tessera_core::SmtpConfig;
use tessera_error::{ValidationError, ValidationErrorKind};
use tracing::{info, instrument};

/// Result of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Always true; failures are returned as errors
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// When the probe finished
    pub timestamp: DateTime<Utc>,
}

/// Check that `smtp` names a host, port, user, and password, then wait
/// `delay` as if a handshake happened.
///
/// No connection is opened.
#[instrument(skip(smtp), fields(host = %smtp.host, port = smtp.port))]
pub async fn probe_smtp(smtp: &SmtpConfig, delay: Duration) -> Result<ProbeReport, ValidationError> {
    let missing = smtp.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::MissingFields(
            missing.into_iter().map(String::from).collect(),
        )));
    }

    tokio::time::sleep(delay).await;
    info!("SMTP settings accepted (simulated)");

    Ok(ProbeReport {
        success: true,
        message: format!(
            "SMTP connection to {}:{} successful (simulated)",
            smtp.host, smtp.port
        ),
        timestamp: Utc::now(),
    })
}
