//! Dashboard aggregates.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tessera_content::Catalog;
use tessera_core::{Priority, UserStatus};

/// Compact article row for the "recent posts" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    /// Article id
    pub id: u32,
    /// Headline
    pub title: String,
    /// Publication date
    pub date: NaiveDate,
}

/// Numbers shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Blog articles
    pub articles: usize,
    /// Featured blog articles
    pub featured_articles: usize,
    /// FAQ entries
    pub faqs: usize,
    /// User accounts
    pub users: usize,
    /// Users with completed verification
    pub verified_users: usize,
    /// Users per status; every status is present
    pub users_by_status: BTreeMap<UserStatus, usize>,
    /// Sum of user investment totals
    pub total_investment: f64,
    /// Waitlist items per priority; every priority is present
    pub waitlist_by_priority: BTreeMap<Priority, usize>,
    /// Newest articles first
    pub recent_articles: Vec<ArticleSummary>,
}

impl DashboardStats {
    /// Number of rows in the recent posts panel.
    pub const RECENT_LIMIT: usize = 3;

    /// Aggregate over the catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut users_by_status: BTreeMap<UserStatus, usize> =
            UserStatus::iter().map(|s| (s, 0)).collect();
        for user in catalog.users() {
            *users_by_status.entry(user.status).or_default() += 1;
        }

        let mut waitlist_by_priority: BTreeMap<Priority, usize> =
            Priority::iter().map(|p| (p, 0)).collect();
        for item in catalog.waitlist() {
            *waitlist_by_priority.entry(item.priority).or_default() += 1;
        }

        let mut recent: Vec<_> = catalog.articles().iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            articles: catalog.articles().len(),
            featured_articles: catalog.articles().iter().filter(|a| a.featured).count(),
            faqs: catalog.faqs().len(),
            users: catalog.users().len(),
            verified_users: catalog.users().iter().filter(|u| u.verified).count(),
            users_by_status,
            total_investment: catalog.users().iter().map(|u| u.investment_total).sum(),
            waitlist_by_priority,
            recent_articles: recent
                .into_iter()
                .take(Self::RECENT_LIMIT)
                .map(|a| ArticleSummary {
                    id: a.id,
                    title: a.title.clone(),
                    date: a.date,
                })
                .collect(),
        }
    }
}
