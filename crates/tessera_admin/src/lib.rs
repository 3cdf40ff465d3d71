//! Admin console for the Tessera site.
//!
//! Each admin screen (articles, FAQs, users, waitlist) is a [`Manager`]: a
//! borrowed slice of catalog records plus local list state (search text,
//! category and status filters, sort field and direction) and a
//! [`DeleteDialog`]. Deleting never mutates the catalog.
//!
//! ```
//! use tessera_admin::{Manager, SortOrder};
//! use tessera_content::Catalog;
//! use tessera_core::Article;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut articles: Manager<'_, Article> = Manager::new(catalog.articles());
//! articles.state_mut().set_search("maya");
//! assert!(articles.view().iter().all(|a| a.author == "Maya Chen"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dashboard;
mod dialog;
mod editor;
mod entities;
mod listing;
mod manager;
mod settings;
mod state;

pub use dashboard::{ArticleSummary, DashboardStats};
pub use dialog::{DeleteDialog, DialogAction, DialogView};
pub use editor::{FieldErrors, UserDraft, UserEditor};
pub use entities::{ArticleSort, FaqSort, UserSort, WaitlistSort};
pub use listing::{CategoryFilter, ListQuery, Listing, SortOrder};
pub use manager::{DEFAULT_DELETE_DELAY, DeleteOutcome, Manager};
pub use settings::{ApiKeys, FeatureToggles, SaveReceipt, Settings, mask_secret};
pub use state::ListState;
