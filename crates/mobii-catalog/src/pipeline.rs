//! Catalog filter/sort pipeline
//!
//! Produces the ordered visible subset for the product listing page:
//!
//! 1. Category filter: [`Category::All`] passes everything, otherwise exact
//!    label equality.
//! 2. Text filter: case-insensitive substring on name or description. The
//!    query is trimmed first, so a whitespace-only query matches everything.
//! 3. Ordering by [`SortKey`], always stable so equal keys keep catalog
//!    order.
//!
//! The pipeline is a pure function of its inputs and is recomputed on every
//! call; it never mutates or caches the catalog.

use crate::entry::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Label of the category sentinel that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Category selector for the listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// No category filtering
    #[default]
    All,
    /// Only entries whose category label equals this one
    Named(String),
}

impl Category {
    /// Parse a selector label; `"All"` is the sentinel
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    /// Whether an entry passes this selector
    #[inline]
    #[must_use]
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => entry.category == *name,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(value)
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::All => ALL_CATEGORIES.to_string(),
            Category::Named(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Newest,
    /// Ascending price
    PriceLowToHigh,
    /// Descending price
    PriceHighToLow,
    /// Descending rating
    MostPopular,
}

impl SortKey {
    /// All keys in menu order
    pub const ALL: [Self; 4] = [
        Self::Newest,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::MostPopular,
    ];

    /// Menu label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::MostPopular => "Most Popular",
        }
    }

    /// Parse a sort label leniently
    ///
    /// Case, punctuation and spacing are ignored, so `"Price: Low to High"`,
    /// `"PriceLowToHigh"` and `"price-low-to-high"` are equivalent.
    /// Unrecognized labels fall back to [`SortKey::Newest`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let wanted = normalize_label(label);
        Self::ALL
            .into_iter()
            .find(|key| normalize_label(key.label()) == wanted)
            .unwrap_or(Self::Newest)
    }

    /// Compare two entries under this key
    ///
    /// [`SortKey::Newest`] reports every pair as equal so a stable sort keeps
    /// catalog order.
    #[must_use]
    pub fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            Self::Newest => Ordering::Equal,
            Self::PriceLowToHigh => a.price.total_cmp(&b.price),
            Self::PriceHighToLow => b.price.total_cmp(&a.price),
            Self::MostPopular => b.rating.total_cmp(&a.rating),
        }
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Listing page inputs bundled together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Free-text search
    pub text: String,
    /// Category selector
    pub category: Category,
    /// Ordering
    pub sort: SortKey,
}

impl ListingQuery {
    /// Unfiltered query in catalog order
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With search text
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// With category selector
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    /// With sort key
    #[inline]
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Filter and order catalog entries for display
///
/// Returns references into `catalog`; the slice itself is never reordered.
#[must_use]
pub fn visible_entries<'a>(
    catalog: &'a [CatalogEntry],
    query: &str,
    category: &Category,
    sort: SortKey,
) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();

    let mut visible: Vec<&CatalogEntry> = catalog
        .iter()
        .filter(|entry| category.admits(entry) && entry.matches_query(&needle))
        .collect();

    // slice::sort_by is stable
    visible.sort_by(|a, b| sort.compare(a, b));

    tracing::debug!(
        query = %needle,
        category = %category,
        sort = %sort,
        total = catalog.len(),
        visible = visible.len(),
        "computed visible entries"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: &str, price: f64, rating: f64) -> CatalogEntry {
        CatalogEntry::new(id, format!("Skin {id}"), format!("{category} skin"), price, category)
            .with_images(["img.jpg"])
            .with_rating(rating, 1)
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn sort_labels_parse_leniently() {
        assert_eq!(SortKey::from_label("Price: Low to High"), SortKey::PriceLowToHigh);
        assert_eq!(SortKey::from_label("PriceHighToLow"), SortKey::PriceHighToLow);
        assert_eq!(SortKey::from_label("most-popular"), SortKey::MostPopular);
        assert_eq!(SortKey::from_label("Cheapest"), SortKey::Newest);
        assert_eq!(SortKey::from_label(""), SortKey::Newest);
    }

    #[test]
    fn category_sentinel() {
        assert_eq!(Category::from_label("All"), Category::All);
        assert_eq!(Category::from_label("all"), Category::Named("all".into()));
        assert_eq!(Category::from("Pixel").label(), "Pixel");
    }

    #[test]
    fn equal_prices_keep_catalog_order() {
        let catalog = vec![
            entry("a", "iPhone", 10.0, 1.0),
            entry("b", "iPhone", 5.0, 1.0),
            entry("c", "iPhone", 10.0, 1.0),
            entry("d", "iPhone", 5.0, 1.0),
        ];
        let asc = visible_entries(&catalog, "", &Category::All, SortKey::PriceLowToHigh);
        assert_eq!(ids(&asc), ["b", "d", "a", "c"]);
        let desc = visible_entries(&catalog, "", &Category::All, SortKey::PriceHighToLow);
        assert_eq!(ids(&desc), ["a", "c", "b", "d"]);
    }

    #[test]
    fn category_and_text_filters_combine() {
        let catalog = vec![
            entry("1", "iPhone", 10.0, 4.0),
            entry("2", "Samsung", 10.0, 4.0),
            entry("3", "iPhone", 10.0, 4.0),
        ];
        let hits = visible_entries(&catalog, "skin 3", &Category::from("iPhone"), SortKey::Newest);
        assert_eq!(ids(&hits), ["3"]);

        let none = visible_entries(&catalog, "samsung", &Category::from("iPhone"), SortKey::Newest);
        assert!(none.is_empty());
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let catalog = vec![entry("1", "Samsung", 10.0, 4.0)];
        let hits = visible_entries(&catalog, "  SAMSUNG  ", &Category::All, SortKey::Newest);
        assert_eq!(ids(&hits), ["1"]);
        let blank = visible_entries(&catalog, "   ", &Category::All, SortKey::Newest);
        assert_eq!(blank.len(), 1);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(visible_entries(&[], "x", &Category::All, SortKey::MostPopular).is_empty());
    }

    #[test]
    fn listing_query_builder() {
        let query = ListingQuery::new()
            .with_text("marble")
            .with_category("Samsung")
            .with_sort(SortKey::MostPopular);
        assert_eq!(query.category, Category::Named("Samsung".into()));
        assert_eq!(query.sort, SortKey::MostPopular);
    }
}
