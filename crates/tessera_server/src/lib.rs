//! HTTP surface for the Tessera site.
//!
//! One axum [`Router`](axum::Router) serves:
//! - marketing pages (`/`, `/divisions/:slug`, `/blog`, ...)
//! - the admin JSON API under `/api/admin`
//! - the public waitlist and contact forms
//! - the `send-test-email` and `test-smtp` function endpoints
//! - `/health` and `/metrics`
//!
//! ```no_run
//! use tessera_server::{SiteConfig, serve};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! serve(SiteConfig::load()?).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod extract;
mod functions;
mod pages;
mod router;
mod state;

pub use api::{ContactForm, FormResponse, ListParams, WaitlistSignup};
pub use config::{ContentConfig, DelayConfig, EmailLogConfig, ServerConfig, SiteConfig};
pub use error::{ApiError, ApiResult};
pub use extract::FormOrJson;
pub use functions::{
    CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, FunctionResponse, PortInput, SendTestEmailRequest,
    SmtpFields, TestSmtpRequest,
};
pub use pages::status_badge;
pub use router::{create_router, serve};
pub use state::AppState;
