//! Outgoing mail relay settings.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// SMTP relay configuration edited on the settings screen.
///
/// Held only in request or form state; nothing transmits through it.
/// `Debug` masks the password.
///
/// # Examples
///
/// ```
/// use tessera_core::SmtpConfigBuilder;
///
/// let smtp = SmtpConfigBuilder::default()
///     .host("smtp.example.com")
///     .user("mailer")
///     .password("hunter2")
///     .build()
///     .unwrap();
///
/// assert_eq!(smtp.port, 587);
/// assert!(smtp.missing_fields().is_empty());
/// assert!(!format!("{:?}", smtp).contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase", default)]
pub struct SmtpConfig {
    /// Relay hostname
    #[builder(default)]
    pub host: String,
    /// Relay port
    #[builder(default = "587")]
    pub port: u16,
    /// Use implicit TLS
    #[builder(default)]
    pub secure: bool,
    /// Login user
    #[builder(default)]
    pub user: String,
    /// Login password
    #[builder(default)]
    pub password: String,
    /// Envelope sender address
    #[builder(default = "String::from(\"noreply@tessera.example\")")]
    pub from_email: String,
    /// Sender display name
    #[builder(default = "String::from(\"Tessera Financial\")")]
    pub from_name: String,
}

impl SmtpConfig {
    /// Names of the required fields (host, port, user, password) that are blank.
    ///
    /// A port of zero counts as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.trim().is_empty() {
            missing.push("host");
        }
        if self.port == 0 {
            missing.push("port");
        }
        if self.user.trim().is_empty() {
            missing.push("user");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        missing
    }

    /// `"Name <address>"` sender line.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("user", &self.user)
            .field("password", &"********")
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 587,
            secure: false,
            user: String::new(),
            password: String::new(),
            from_email: "noreply@tessera.example".to_string(),
            from_name: "Tessera Financial".to_string(),
        }
    }
}
