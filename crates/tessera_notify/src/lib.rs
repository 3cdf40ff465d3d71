//! Mock email notifications for the Tessera site.
//!
//! Confirmation emails are rendered from fixed templates, recorded in an
//! in-memory [`EmailLog`], and handed to a [`Notifier`]. The bundled
//! [`SimulatedNotifier`] never touches the network: it waits a short delay
//! and reports success, or fails on request so error paths can be exercised.
//!
//! # Examples
//!
//! ```
//! use tessera_notify::{EmailService, SimulatedNotifier};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let service = EmailService::new(SimulatedNotifier::instant());
//! let outcome = service
//!     .send_waitlist_confirmation("a@b.com", "Tessera Card", None)
//!     .await
//!     .unwrap();
//! assert!(outcome.success);
//! assert_eq!(service.log().entries().len(), 1);
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod log;
mod message;
mod metrics;
mod notifier;
mod probe;
mod service;
pub mod templates;

pub use log::{DEFAULT_LOG_CAPACITY, DeliveryStatus, EmailLog, LogEntry, LogId};
pub use message::{DeliveryId, EmailKind, EmailMessage};
pub use metrics::{NotificationMetrics, NotificationMetricsSnapshot};
pub use notifier::{EmailDelays, Notifier, SimulatedNotifier};
pub use probe::{ProbeReport, probe_smtp};
pub use service::{EmailService, SendOutcome};
