//! Content catalog for the Tessera site.
//!
//! The catalog is the only data source for pages and the admin console. It is
//! parsed from TOML (the bundled `content/catalog.toml` by default), checked
//! for duplicate identifiers, and never mutated afterwards.
//!
//! ```
//! use tessera_content::Catalog;
//!
//! let catalog = Catalog::bundled().unwrap();
//! assert!(!catalog.articles().is_empty());
//! assert!(catalog.division("wealth").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod company;

pub use catalog::Catalog;
pub use company::Company;
