//! Error types for the Tessera site.
//!
//! Every crate in the workspace reports failures through the types defined here.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tessera_error::{TesseraResult, ConfigError};
//!
//! fn load_settings() -> TesseraResult<String> {
//!     Err(ConfigError::new("bind address missing"))?
//! }
//!
//! match load_settings() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod content;
mod error;
mod message;
mod notify;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use content::{ContentError, ContentErrorKind};
pub use error::{TesseraError, TesseraErrorKind, TesseraResult};
pub use message::{ConfigError, HttpError, JsonError};
pub use notify::{NotifyError, NotifyErrorKind, NotifyResult};
pub use validation::{ValidationError, ValidationErrorKind};
