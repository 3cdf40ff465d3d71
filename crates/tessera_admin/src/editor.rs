//! User editor form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tessera_core::{User, UserRole, UserStatus, is_plausible_email};
use tracing::{info, instrument};

/// Field name → message, for inline form errors.
///
/// # Examples
///
/// ```
/// use tessera_admin::FieldErrors;
///
/// let mut errors = FieldErrors::default();
/// assert!(errors.is_empty());
/// errors.insert("email", "Email is required");
/// assert_eq!(errors.get("email"), Some("Email is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record a message for `field`, keeping the first one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Message for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// No errors recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field/message pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Editable fields of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Console role
    pub role: UserRole,
    /// Account status
    pub status: UserStatus,
    /// Identity verification completed
    #[serde(default)]
    pub verified: bool,
    /// Platforms enrolled in
    #[serde(default)]
    pub platforms_used: u32,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            verified: user.verified,
            platforms_used: user.platforms_used,
        }
    }
}

impl UserDraft {
    /// Check required fields and the email shape.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_plausible_email(email) {
            errors.insert("email", "Please enter a valid email address");
        }
        errors
    }
}

/// Edit session for one user.
///
/// Saving validates, waits the save delay, and returns the edited record;
/// the catalog keeps the original.
pub struct UserEditor<'a> {
    original: &'a User,
    draft: UserDraft,
    save_delay: Duration,
}

impl<'a> UserEditor<'a> {
    /// Start editing `user` with its current values.
    pub fn new(user: &'a User) -> Self {
        Self {
            original: user,
            draft: UserDraft::from(user),
            save_delay: Duration::from_millis(1000),
        }
    }

    /// Override the simulated save latency.
    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    /// Record being edited.
    pub fn original(&self) -> &User {
        self.original
    }

    /// Current form values.
    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Mutable form values.
    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.draft
    }

    /// Replace every form value.
    pub fn set_draft(&mut self, draft: UserDraft) {
        self.draft = draft;
    }

    /// Whether any field differs from the original.
    pub fn is_dirty(&self) -> bool {
        self.draft != UserDraft::from(self.original)
    }

    /// Validate and simulate the save.
    #[instrument(skip(self), fields(user_id = self.original.id))]
    pub async fn save(&self) -> Result<User, FieldErrors> {
        let errors = self.draft.validate();
        if !errors.is_empty() {
            info!(fields = errors.len(), "User edit rejected");
            return Err(errors);
        }

        tokio::time::sleep(self.save_delay).await;

        let mut updated = self.original.clone();
        updated.name = self.draft.name.trim().to_string();
        updated.email = self.draft.email.trim().to_string();
        updated.role = self.draft.role;
        updated.status = self.draft.status;
        updated.verified = self.draft.verified;
        updated.platforms_used = self.draft.platforms_used;

        info!(dirty = self.is_dirty(), "User edit accepted (not persisted)");
        Ok(updated)
    }
}
