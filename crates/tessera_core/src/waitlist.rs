//! Waitlist items: products and subsidiaries that have not launched yet.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Launch priority tag.
///
/// Orders from most to least urgent, so an ascending sort lists `High` first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    /// Launching next
    High,
    /// Scheduled
    Medium,
    /// Exploratory
    Low,
}

/// Parsed form of an expected-launch label such as `"Q3 2025"` or `"2026"`.
///
/// A bare year sorts after every quarter of that year.
///
/// # Examples
///
/// ```
/// use tessera_core::LaunchWindow;
///
/// let q3 = LaunchWindow::parse("Q3 2025").unwrap();
/// let year = LaunchWindow::parse("2025").unwrap();
/// assert!(q3 < year);
/// assert!(LaunchWindow::parse("soon").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaunchWindow {
    year: i32,
    quarter: u8,
}

impl LaunchWindow {
    /// Parse `"Q<n> <year>"` or `"<year>"`.
    pub fn parse(label: &str) -> Option<Self> {
        let mut parts = label.split_whitespace();
        let first = parts.next()?;
        match parts.next() {
            None => first.parse().ok().map(|year| Self { year, quarter: 5 }),
            Some(year) => {
                let quarter = first
                    .strip_prefix(['Q', 'q'])?
                    .parse::<u8>()
                    .ok()
                    .filter(|q| (1..=4).contains(q))?;
                let year = year.parse().ok()?;
                parts.next().is_none().then_some(Self { year, quarter })
            }
        }
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Quarter 1-4, or `None` for a whole-year estimate.
    pub fn quarter(&self) -> Option<u8> {
        (self.quarter <= 4).then_some(self.quarter)
    }
}

/// A product or subsidiary on the waitlist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistItem {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Product name
    pub name: String,
    /// One-line positioning statement
    pub subtitle: String,
    /// Longer description
    pub description: String,
    /// Category label
    pub category: String,
    /// Launch priority
    pub priority: Priority,
    /// Free-form launch estimate, e.g. `"Q2 2025"`
    pub expected_launch: String,
    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
}

impl WaitlistItem {
    /// Compare launch estimates chronologically.
    ///
    /// Labels that do not parse sort after parsed ones and compare as text.
    pub fn cmp_launch(&self, other: &Self) -> Ordering {
        match (
            LaunchWindow::parse(&self.expected_launch),
            LaunchWindow::parse(&other.expected_launch),
        ) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.expected_launch.cmp(&other.expected_launch),
        }
    }
}
