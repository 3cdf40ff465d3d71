//! [`Listing`] implementations for the catalog records.

use crate::{Listing, SortOrder};
use std::borrow::Cow;
use std::cmp::Ordering;
use tessera_core::{Article, Faq, User, WaitlistItem};

macro_rules! sort_field {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            strum::Display,
            strum::EnumString,
            strum::EnumIter,
        )]
        #[serde(rename_all = "snake_case")]
        #[strum(serialize_all = "snake_case", ascii_case_insensitive)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }
    };
}

sort_field! {
    /// Sortable article columns.
    ArticleSort {
        /// Headline
        Title,
        /// Byline
        Author,
        /// Category label
        Category,
        /// Publication date
        Date,
    }
}

sort_field! {
    /// Sortable FAQ columns.
    FaqSort {
        /// Question text
        Question,
        /// Category label
        Category,
    }
}

sort_field! {
    /// Sortable user columns.
    UserSort {
        /// Display name
        Name,
        /// Email address
        Email,
        /// Console role
        Role,
        /// Account status
        Status,
        /// Total invested
        InvestmentTotal,
        /// Sign-up date
        Joined,
    }
}

sort_field! {
    /// Sortable waitlist columns.
    WaitlistSort {
        /// Product name
        Name,
        /// Category label
        Category,
        /// Launch priority, most urgent first
        Priority,
        /// Launch estimate, earliest first
        ExpectedLaunch,
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl Listing for Article {
    type SortField = ArticleSort;
    const KIND: &'static str = "article";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str(), self.excerpt.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.category)
    }

    fn compare(&self, other: &Self, field: ArticleSort) -> Ordering {
        match field {
            ArticleSort::Title => cmp_text(&self.title, &other.title),
            ArticleSort::Author => cmp_text(&self.author, &other.author),
            ArticleSort::Category => cmp_text(&self.category, &other.category),
            ArticleSort::Date => self.date.cmp(&other.date),
        }
    }

    fn default_sort() -> (ArticleSort, SortOrder) {
        (ArticleSort::Date, SortOrder::Desc)
    }
}

impl Listing for Faq {
    type SortField = FaqSort;
    const KIND: &'static str = "faq";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.question
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.category)
    }

    fn compare(&self, other: &Self, field: FaqSort) -> Ordering {
        match field {
            FaqSort::Question => cmp_text(&self.question, &other.question),
            FaqSort::Category => cmp_text(&self.category, &other.category),
        }
    }

    fn default_sort() -> (FaqSort, SortOrder) {
        (FaqSort::Category, SortOrder::Asc)
    }
}

impl Listing for User {
    type SortField = UserSort;
    const KIND: &'static str = "user";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Owned(self.role.to_string())
    }

    fn status(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.status.to_string()))
    }

    fn compare(&self, other: &Self, field: UserSort) -> Ordering {
        match field {
            UserSort::Name => cmp_text(&self.name, &other.name),
            UserSort::Email => cmp_text(&self.email, &other.email),
            UserSort::Role => self.role.cmp(&other.role),
            UserSort::Status => self.status.cmp(&other.status),
            UserSort::InvestmentTotal => self.investment_total.total_cmp(&other.investment_total),
            UserSort::Joined => self.joined.cmp(&other.joined),
        }
    }

    fn default_sort() -> (UserSort, SortOrder) {
        (UserSort::Name, SortOrder::Asc)
    }
}

impl Listing for WaitlistItem {
    type SortField = WaitlistSort;
    const KIND: &'static str = "waitlist item";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.subtitle.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.category)
    }

    fn status(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.priority.to_string()))
    }

    fn compare(&self, other: &Self, field: WaitlistSort) -> Ordering {
        match field {
            WaitlistSort::Name => cmp_text(&self.name, &other.name),
            WaitlistSort::Category => cmp_text(&self.category, &other.category),
            WaitlistSort::Priority => self.priority.cmp(&other.priority),
            WaitlistSort::ExpectedLaunch => self.cmp_launch(other),
        }
    }

    fn default_sort() -> (WaitlistSort, SortOrder) {
        (WaitlistSort::Priority, SortOrder::Asc)
    }
}
