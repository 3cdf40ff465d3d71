//! Frequently asked questions.

use serde::{Deserialize, Serialize};

/// A question/answer pair shown on `/faq`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Unique identifier within the catalog
    pub id: u32,
    /// The question
    pub question: String,
    /// The answer, plain text
    pub answer: String,
    /// Category label
    pub category: String,
    /// Shown in the home page FAQ teaser
    #[serde(default)]
    pub featured: bool,
}
