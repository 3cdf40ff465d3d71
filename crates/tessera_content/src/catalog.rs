//! Catalog loading and lookups.

use crate::Company;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tessera_core::{Article, Division, Faq, Product, User, WaitlistItem};
use tessera_error::{ContentError, ContentErrorKind};
use tracing::{debug, instrument};

/// Catalog shipped inside the binary.
const BUNDLED_CATALOG: &str = include_str!("../content/catalog.toml");

/// Every record the site renders or the admin console lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    company: Company,
    #[serde(default)]
    divisions: Vec<Division>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    faqs: Vec<Faq>,
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    waitlist: Vec<WaitlistItem>,
}

impl Catalog {
    /// Load the catalog bundled with the crate.
    pub fn bundled() -> Result<Self, ContentError> {
        BUNDLED_CATALOG.parse()
    }

    /// Load a catalog from a TOML file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ContentError::new(ContentErrorKind::FileRead(e.to_string())))?;
        content.parse()
    }

    /// Reject duplicate ids and slugs, and products pointing at unknown divisions.
    fn validate(&self) -> Result<(), ContentError> {
        ensure_unique("divisions", self.divisions.iter().map(|d| d.slug.as_str()))?;
        ensure_unique("products", self.products.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("articles", self.articles.iter().map(|a| a.id))?;
        ensure_unique("faqs", self.faqs.iter().map(|f| f.id))?;
        ensure_unique("users", self.users.iter().map(|u| u.id))?;
        ensure_unique("waitlist", self.waitlist.iter().map(|w| w.id))?;

        for product in &self.products {
            if self.division(&product.division).is_err() {
                return Err(ContentError::new(ContentErrorKind::Parse(format!(
                    "product '{}' references unknown division '{}'",
                    product.slug, product.division
                ))));
            }
        }
        Ok(())
    }

    /// Company profile.
    pub fn company(&self) -> &Company {
        &self.company
    }

    /// All divisions in catalog order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All articles in catalog order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// All FAQs in catalog order.
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// All users in catalog order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All waitlist items in catalog order.
    pub fn waitlist(&self) -> &[WaitlistItem] {
        &self.waitlist
    }

    /// Division by slug.
    pub fn division(&self, slug: &str) -> Result<&Division, ContentError> {
        self.divisions
            .iter()
            .find(|d| d.slug == slug)
            .ok_or_else(|| ContentError::not_found("divisions", slug))
    }

    /// Product by slug.
    pub fn product(&self, slug: &str) -> Result<&Product, ContentError> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::not_found("products", slug))
    }

    /// Products belonging to a division, in catalog order.
    pub fn products_for<'a>(&'a self, division: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.division == division)
    }

    /// Article by id.
    pub fn article(&self, id: u32) -> Result<&Article, ContentError> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ContentError::not_found("articles", id.to_string()))
    }

    /// FAQ by id.
    pub fn faq(&self, id: u32) -> Result<&Faq, ContentError> {
        self.faqs
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| ContentError::not_found("faqs", id.to_string()))
    }

    /// User by id.
    pub fn user(&self, id: u32) -> Result<&User, ContentError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| ContentError::not_found("users", id.to_string()))
    }

    /// Waitlist item by id.
    pub fn waitlist_item(&self, id: u32) -> Result<&WaitlistItem, ContentError> {
        self.waitlist
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| ContentError::not_found("waitlist", id.to_string()))
    }

    /// Waitlist item by product name, compared case-insensitively.
    pub fn waitlist_by_name(&self, name: &str) -> Option<&WaitlistItem> {
        self.waitlist
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Featured articles, newest first.
    pub fn featured_articles(&self) -> Vec<&Article> {
        let mut featured: Vec<_> = self.articles.iter().filter(|a| a.featured).collect();
        featured.sort_by(|a, b| b.date.cmp(&a.date));
        featured
    }

    /// Featured FAQs in catalog order.
    pub fn featured_faqs(&self) -> impl Iterator<Item = &Faq> {
        self.faqs.iter().filter(|f| f.featured)
    }
}

impl FromStr for Catalog {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let catalog: Catalog =
            toml::from_str(s).map_err(|e| ContentError::new(ContentErrorKind::Parse(e.to_string())))?;
        catalog.validate()?;
        debug!(
            divisions = catalog.divisions.len(),
            products = catalog.products.len(),
            articles = catalog.articles.len(),
            faqs = catalog.faqs.len(),
            users = catalog.users.len(),
            waitlist = catalog.waitlist.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }
}

fn ensure_unique<K>(collection: &str, keys: impl Iterator<Item = K>) -> Result<(), ContentError>
where
    K: Display,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.to_string()) {
            return Err(ContentError::new(ContentErrorKind::DuplicateId {
                collection: collection.to_string(),
                id: key.to_string(),
            }));
        }
    }
    Ok(())
}
