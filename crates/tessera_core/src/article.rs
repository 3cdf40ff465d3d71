//! Blog article records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog article shown on `/blog` and managed in the admin console.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tessera_core::Article;
///
/// let article = Article {
///     id: 1,
///     title: "Understanding Index Funds".to_string(),
///     author: "Maya Chen".to_string(),
///     category: "Investing".to_string(),
///     excerpt: "Why low-cost funds win over time.".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
///     featured: true,
///     read_time_minutes: 6,
/// };
///
/// assert_eq!(article.category, "Investing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Headline
    pub title: String,
    /// Byline
    pub author: String,
    /// Category label, matched exactly by the admin filter
    pub category: String,
    /// Short teaser shown in listings
    pub excerpt: String,
    /// Publication date
    pub date: NaiveDate,
    /// Pinned to the top of the blog index
    #[serde(default)]
    pub featured: bool,
    /// Estimated reading time
    #[serde(default = "default_read_time")]
    pub read_time_minutes: u16,
}

fn default_read_time() -> u16 {
    5
}
