//! Site configuration.
//!
//! Layered, later sources winning:
//! - Bundled defaults (`tessera.toml` embedded at build time)
//! - `~/.config/tessera/tessera.toml`
//! - `./tessera.toml`
//! - `TESSERA__SECTION__KEY` environment variables

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tessera_admin::Settings;
use tessera_error::ConfigError;
use tessera_notify::{DEFAULT_LOG_CAPACITY, EmailDelays};

const DEFAULT_CONFIG: &str = include_str!("../tessera.toml");

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ServerConfig {
    /// Socket address to bind
    bind: String,
}

/// Where the content catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Catalog TOML file; blank means the bundled catalog
    #[serde(default)]
    pub catalog_path: String,
}

impl ContentConfig {
    /// Configured catalog path, if any.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let trimmed = self.catalog_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// Simulated latencies in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayConfig {
    /// Waitlist confirmation send
    pub waitlist_email_ms: u64,
    /// Contact acknowledgement send
    pub contact_email_ms: u64,
    /// `send-test-email` function
    pub send_test_email_ms: u64,
    /// `test-smtp` function
    pub test_smtp_ms: u64,
    /// Admin delete confirmation
    pub delete_ms: u64,
    /// Admin form saves
    pub save_ms: u64,
}

impl DelayConfig {
    /// No latency anywhere; used by tests.
    pub const ZERO: Self = Self {
        waitlist_email_ms: 0,
        contact_email_ms: 0,
        send_test_email_ms: 0,
        test_smtp_ms: 0,
        delete_ms: 0,
        save_ms: 0,
    };

    /// Per-flow notifier latencies.
    pub fn email_delays(&self) -> EmailDelays {
        EmailDelays {
            waitlist: Duration::from_millis(self.waitlist_email_ms),
            contact: Duration::from_millis(self.contact_email_ms),
            test: Duration::from_millis(self.send_test_email_ms),
        }
    }

    /// SMTP probe latency.
    pub fn test_smtp(&self) -> Duration {
        Duration::from_millis(self.test_smtp_ms)
    }

    /// Delete confirmation latency.
    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    /// Form save latency.
    pub fn save(&self) -> Duration {
        Duration::from_millis(self.save_ms)
    }
}

/// Bounds on the in-memory email log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailLogConfig {
    /// Entries kept before the oldest are dropped
    pub max_entries: usize,
}

impl Default for EmailLogConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_LOG_CAPACITY,
        }
    }
}

/// Complete site configuration.
///
/// # Examples
///
/// ```
/// use tessera_server::SiteConfig;
///
/// let config = SiteConfig::bundled().unwrap();
/// assert_eq!(config.server().bind(), "127.0.0.1:3000");
/// assert_eq!(config.delays().contact_email_ms, 500);
/// assert_eq!(config.email_log().max_entries, 500);
/// assert!(config.settings().features.email_notifications);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SiteConfig {
    /// Listener
    server: ServerConfig,
    /// Catalog source
    #[serde(default)]
    content: ContentConfig,
    /// Simulated latencies
    delays: DelayConfig,
    /// Email log retention
    #[serde(default)]
    email_log: EmailLogConfig,
    /// Initial settings screen values
    #[serde(default)]
    settings: Settings,
}

impl SiteConfig {
    /// Load with every layer applied.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tessera/tessera.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("tessera").required(false))
            .add_source(
                Environment::with_prefix("TESSERA")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Bundled defaults only.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str("")
    }

    /// Bundled defaults overlaid with `overrides`.
    pub fn from_toml_str(overrides: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        tracing::debug!(bind = %config.server.bind, "Configuration loaded");
        Ok(config)
    }

    /// Replace the simulated latencies.
    pub fn with_delays(mut self, delays: DelayConfig) -> Self {
        self.delays = delays;
        self
    }

    /// Replace the email log bound.
    pub fn with_email_log(mut self, email_log: EmailLogConfig) -> Self {
        self.email_log = email_log;
        self
    }

    /// Replace the bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.server.bind = bind.into();
        self
    }

    /// Replace the initial settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}
