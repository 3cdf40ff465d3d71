//! Shared handler state.

use crate::SiteConfig;
use std::sync::Arc;
use tessera_content::Catalog;
use tessera_error::TesseraResult;
use tessera_notify::{EmailService, NotificationMetrics, Notifier, SimulatedNotifier};
use tracing::info;

/// State handed to every handler.
///
/// Cloning is cheap; everything sits behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    catalog: Arc<Catalog>,
    email: Arc<EmailService>,
    config: Arc<SiteConfig>,
}

impl AppState {
    /// State over an explicit catalog and notifier.
    pub fn new(config: SiteConfig, catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        let email =
            EmailService::from_arc(notifier).with_log_capacity(config.email_log().max_entries);
        Self {
            catalog: Arc::new(catalog),
            email: Arc::new(email),
            config: Arc::new(config),
        }
    }

    /// Load the configured catalog and wire a simulated notifier.
    pub fn from_config(config: SiteConfig) -> TesseraResult<Self> {
        let catalog = match config.content().catalog_path() {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::bundled()?,
        };
        let notifier = SimulatedNotifier::new(config.delays().email_delays());
        info!(
            articles = catalog.articles().len(),
            users = catalog.users().len(),
            notifier = notifier.name(),
            "Application state ready"
        );
        Ok(Self::new(config, catalog, Arc::new(notifier)))
    }

    /// Read-only content.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Notification flow.
    pub fn email(&self) -> &EmailService {
        &self.email
    }

    /// Notification counters.
    pub fn metrics(&self) -> &NotificationMetrics {
        self.email.metrics()
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
