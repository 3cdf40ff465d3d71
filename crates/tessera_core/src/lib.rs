//! Core data types for the Tessera site.
//!
//! These are the flat records shared by the content catalog, the admin
//! console, and the HTTP surface. None of them are persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod division;
mod email;
mod faq;
mod html;
mod smtp;
mod user;
mod waitlist;

pub use article::Article;
pub use division::{Division, LaunchStatus, Product};
pub use email::is_plausible_email;
pub use faq::Faq;
pub use html::escape_html;
pub use smtp::{SmtpConfig, SmtpConfigBuilder};
pub use user::{User, UserBuilder, UserRole, UserStatus};
pub use waitlist::{LaunchWindow, Priority, WaitlistItem};
