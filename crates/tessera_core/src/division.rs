//! Divisions (subsidiaries) and their products.

use serde::{Deserialize, Serialize};

/// Availability of a division or product.
///
/// # Examples
///
/// ```
/// use tessera_core::LaunchStatus;
///
/// assert_eq!(LaunchStatus::Live.badge(), None);
/// assert_eq!(LaunchStatus::ComingSoon.badge(), Some("Coming Soon"));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LaunchStatus {
    /// Generally available
    #[default]
    Live,
    /// Open to early users
    Beta,
    /// Announced, not yet available
    ComingSoon,
}

impl LaunchStatus {
    /// Badge text for the page header; live offerings carry no badge.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Self::Live => None,
            Self::Beta => Some("Beta"),
            Self::ComingSoon => Some("Coming Soon"),
        }
    }
}

/// A company division rendered by the division template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// URL slug, unique within the catalog
    pub slug: String,
    /// Display name
    pub name: String,
    /// Hero tagline
    pub tagline: String,
    /// Intro paragraph
    pub description: String,
    /// Availability
    #[serde(default)]
    pub status: LaunchStatus,
    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
    /// Benefit bullet points
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// A product rendered by the product template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// URL slug, unique within the catalog
    pub slug: String,
    /// Display name
    pub name: String,
    /// Slug of the owning division
    pub division: String,
    /// Hero tagline
    pub tagline: String,
    /// Intro paragraph
    pub description: String,
    /// Availability
    #[serde(default)]
    pub status: LaunchStatus,
    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
    /// Pricing note shown under the feature list
    #[serde(default)]
    pub pricing: Option<String>,
}
