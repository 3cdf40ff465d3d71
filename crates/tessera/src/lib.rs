//! Tessera - marketing site and admin console for a fictitious financial company.
//!
//! The site is a read-only content catalog rendered as HTML pages, an admin
//! console (list screens with search, filters, sort, and a delete dialog
//! that never mutates), and a mock email flow behind a [`Notifier`].
//!
//! # Architecture
//!
//! - `tessera_error` - Error types
//! - `tessera_core` - Records shared by every crate
//! - `tessera_content` - The bundled TOML catalog
//! - `tessera_admin` - Admin list screens, dialog, editor, settings
//! - `tessera_notify` - Templates, email log, simulated notifier
//! - `tessera_server` - axum router, pages, JSON API, function endpoints
//!
//! This crate re-exports everything and provides the `tessera` binary.
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry stdout span exporter

pub use tessera_admin::*;
pub use tessera_content::*;
pub use tessera_core::*;
pub use tessera_error::*;
pub use tessera_notify::*;
pub use tessera_server::*;

pub mod cli;
pub mod logging;

#[cfg(feature = "observability")]
pub mod observability;
