//! Filtering and sorting over catalog slices.

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::Debug;
use std::str::FromStr;

/// A record that can appear in an admin list screen.
pub trait Listing {
    /// Fields this record can be sorted by.
    type SortField: Copy + Eq + Debug;

    /// Singular noun used in dialogs and logs ("article", "user", ...).
    const KIND: &'static str;

    /// Catalog identifier.
    fn id(&self) -> u32;

    /// Human label used in the delete dialog.
    fn label(&self) -> &str;

    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared by the category filter.
    fn category(&self) -> Cow<'_, str>;

    /// Value compared by the status filter, if the record has one.
    fn status(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Compare two records by `field`, ascending.
    fn compare(&self, other: &Self, field: Self::SortField) -> Ordering;

    /// Sort applied when a screen first opens.
    fn default_sort() -> (Self::SortField, SortOrder);
}

/// Sort direction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Exact-match filter with an `All` wildcard.
///
/// # Examples
///
/// ```
/// use tessera_admin::CategoryFilter;
///
/// assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
/// assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
/// assert!(CategoryFilter::only("Investing").matches("Investing"));
/// assert!(!CategoryFilter::only("Investing").matches("investing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Wildcard
    #[default]
    All,
    /// Exactly this value
    Only(String),
}

impl CategoryFilter {
    /// Filter on one exact value.
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Whether `value` passes the filter.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    fn matches_optional(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Only(_), None) => false,
            (Self::Only(wanted), Some(value)) => wanted == value,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(trimmed.to_string()))
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(value) => write!(f, "{}", value),
        }
    }
}

/// A complete list request: search text, filters, and sort.
///
/// Search is a case-insensitive substring match against the record's
/// [`Listing::search_fields`]; blank search matches everything. Sorting is
/// stable, so ties keep catalog order in both directions.
///
/// # Examples
///
/// ```
/// use tessera_admin::{ArticleSort, CategoryFilter, ListQuery, SortOrder};
/// use tessera_content::Catalog;
///
/// let catalog = Catalog::bundled().unwrap();
/// let query = ListQuery::default()
///     .with_category(CategoryFilter::only("Lending"))
///     .with_sort(ArticleSort::Date)
///     .with_order(SortOrder::Desc);
///
/// let view = query.apply(catalog.articles());
/// assert!(view.iter().all(|a| a.category == "Lending"));
/// assert!(view.windows(2).all(|w| w[0].date >= w[1].date));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(prefix = "with_")]
pub struct ListQuery<F> {
    /// Free-text search
    #[setters(into)]
    search: String,
    /// Category filter
    category: CategoryFilter,
    /// Status filter
    status: CategoryFilter,
    /// Sort field; `None` keeps catalog order
    #[setters(strip_option)]
    sort: Option<F>,
    /// Sort direction
    order: SortOrder,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            status: CategoryFilter::All,
            sort: None,
            order: SortOrder::Asc,
        }
    }
}

impl<F: Copy + Eq + Debug> ListQuery<F> {
    /// Free-text search.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Category filter.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Status filter.
    pub fn status(&self) -> &CategoryFilter {
        &self.status
    }

    /// Sort field.
    pub fn sort(&self) -> Option<F> {
        self.sort
    }

    /// Sort direction.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Drop the sort field, keeping catalog order.
    pub fn unsorted(mut self) -> Self {
        self.sort = None;
        self
    }

    /// Whether a single record passes search and both filters.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Listing<SortField = F>,
    {
        self.matches_needle(item, &self.needle())
    }

    /// Lowercased query as typed; empty when the query is blank.
    fn needle(&self) -> String {
        if self.search.trim().is_empty() {
            String::new()
        } else {
            self.search.to_lowercase()
        }
    }

    fn matches_needle<T>(&self, item: &T, needle: &str) -> bool
    where
        T: Listing<SortField = F>,
    {
        let found = needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle));
        found
            && self.category.matches(&item.category())
            && self.status.matches_optional(item.status().as_deref())
    }

    /// Filter then sort `items`, borrowing from the slice.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Listing<SortField = F>,
    {
        let needle = self.needle();
        let mut view: Vec<&T> = items
            .iter()
            .filter(|item| self.matches_needle(*item, &needle))
            .collect();

        if let Some(field) = self.sort {
            let order = self.order;
            view.sort_by(|a, b| order.apply(a.compare(b, field)));
        }

        tracing::trace!(
            kind = T::KIND,
            total = items.len(),
            shown = view.len(),
            "Applied list query"
        );
        view
    }
}
