//! Per-screen list state.

use crate::{CategoryFilter, ListQuery, SortOrder};
use std::fmt::Debug;

/// Search, filter, and sort state owned by one admin screen.
///
/// Selecting the current sort field flips the direction; selecting a new
/// field switches to it in ascending order.
///
/// # Examples
///
/// ```
/// use tessera_admin::{ListState, SortOrder, UserSort};
///
/// let mut state = ListState::new(UserSort::Name, SortOrder::Asc);
/// state.toggle_sort(UserSort::Name);
/// assert_eq!(state.order(), SortOrder::Desc);
///
/// state.toggle_sort(UserSort::Joined);
/// assert_eq!(state.sort_field(), UserSort::Joined);
/// assert_eq!(state.order(), SortOrder::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<F> {
    search: String,
    category: CategoryFilter,
    status: CategoryFilter,
    sort_field: F,
    order: SortOrder,
}

impl<F: Copy + Eq + Debug> ListState<F> {
    /// Fresh state with no search or filters.
    pub fn new(sort_field: F, order: SortOrder) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            status: CategoryFilter::All,
            sort_field,
            order,
        }
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Current category filter.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Replace the category filter.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Current status filter.
    pub fn status(&self) -> &CategoryFilter {
        &self.status
    }

    /// Replace the status filter.
    pub fn set_status(&mut self, status: CategoryFilter) {
        self.status = status;
    }

    /// Current sort field.
    pub fn sort_field(&self) -> F {
        self.sort_field
    }

    /// Current sort direction.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Set field and direction directly.
    pub fn set_sort(&mut self, field: F, order: SortOrder) {
        self.sort_field = field;
        self.order = order;
    }

    /// Column-header click.
    pub fn toggle_sort(&mut self, field: F) {
        if field == self.sort_field {
            self.order = self.order.toggled();
        } else {
            self.sort_field = field;
            self.order = SortOrder::Asc;
        }
        tracing::debug!(field = ?self.sort_field, order = %self.order, "Sort changed");
    }

    /// Clear search and filters, keeping the sort.
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
        self.status = CategoryFilter::All;
    }

    /// Snapshot as a [`ListQuery`].
    pub fn query(&self) -> ListQuery<F> {
        ListQuery::default()
            .with_search(self.search.clone())
            .with_category(self.category.clone())
            .with_status(self.status.clone())
            .with_sort(self.sort_field)
            .with_order(self.order)
    }
}
