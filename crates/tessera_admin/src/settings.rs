//! Settings screen: SMTP relay, API keys, feature toggles.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tessera_core::SmtpConfig;
use tessera_error::{ValidationError, ValidationErrorKind};
use tracing::{info, instrument};

/// Third-party keys shown (masked) on the settings screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeys {
    /// Backend project URL
    pub supabase_url: String,
    /// Backend public key
    pub supabase_anon_key: String,
    /// Payments publishable key
    pub stripe_publishable_key: String,
}

/// Site feature switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    /// Waitlist signup form enabled
    pub waitlist_enabled: bool,
    /// Blog visible
    pub blog_enabled: bool,
    /// Confirmation emails sent on signup/contact
    pub email_notifications: bool,
    /// Public pages replaced by a maintenance notice
    pub maintenance_mode: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            waitlist_enabled: true,
            blog_enabled: true,
            email_notifications: true,
            maintenance_mode: false,
        }
    }
}

/// Everything on the settings screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Outgoing mail relay
    pub smtp: SmtpConfig,
    /// Third-party keys
    pub api_keys: ApiKeys,
    /// Feature switches
    pub features: FeatureToggles,
}

/// Acknowledgement of a simulated save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SaveReceipt {
    saved_at: DateTime<Utc>,
    persisted: bool,
}

/// Keep the last four characters of a secret.
///
/// # Examples
///
/// ```
/// use tessera_admin::mask_secret;
///
/// assert_eq!(mask_secret("pk_test_51HxYz9876"), "**************9876");
/// assert_eq!(mask_secret("abc"), "***");
/// assert_eq!(mask_secret(""), "");
/// ```
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

impl Settings {
    /// Copy safe to send to the browser: keys masked, SMTP password blanked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.smtp.password.clear();
        copy.api_keys.supabase_anon_key = mask_secret(&self.api_keys.supabase_anon_key);
        copy.api_keys.stripe_publishable_key = mask_secret(&self.api_keys.stripe_publishable_key);
        copy
    }

    /// SMTP fields must be complete while email notifications are on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.features.email_notifications {
            return Ok(());
        }
        let missing = self.smtp.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::MissingFields(
                missing.into_iter().map(|f| format!("smtp.{}", f)).collect(),
            )))
        }
    }

    /// Validate, wait `delay`, and discard.
    #[instrument(skip(self), fields(smtp_host = %self.smtp.host))]
    pub async fn save(&self, delay: Duration) -> Result<SaveReceipt, ValidationError> {
        self.validate()?;
        tokio::time::sleep(delay).await;
        info!("Settings saved (discarded; nothing is persisted)");
        Ok(SaveReceipt {
            saved_at: Utc::now(),
            persisted: false,
        })
    }
}
