//! Product listing page
//!
//! [`ListingState`] holds the user's search text, category and sort choice.
//! The visible cards are recomputed from the catalog every time the page is
//! built, so they always reflect the latest inputs.

use crate::route::Route;
use mobii_catalog::{
    format_price, Catalog, CatalogEntry, Category, ListingQuery, SortKey, LISTING_CATEGORIES,
};
use serde::{Deserialize, Serialize};

/// Search and filter inputs for the listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingState {
    query: ListingQuery,
}

impl ListingState {
    /// Unfiltered listing in the given order
    #[inline]
    #[must_use]
    pub fn new(sort: SortKey) -> Self {
        Self {
            query: ListingQuery::new().with_sort(sort),
        }
    }

    /// Current inputs
    #[inline]
    #[must_use]
    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Replace the search text
    #[inline]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Replace the category selector
    #[inline]
    pub fn set_category(&mut self, category: impl Into<Category>) {
        self.query.category = category.into();
    }

    /// Replace the sort key
    #[inline]
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Entries visible under the current inputs
    #[inline]
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        catalog.visible(&self.query)
    }
}

impl From<ListingQuery> for ListingState {
    fn from(query: ListingQuery) -> Self {
        Self { query }
    }
}

/// Product card on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCard {
    /// Entry id
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Price with currency and two decimals
    pub price: String,
    /// First image
    pub image: String,
    /// Detail page path
    pub href: String,
}

impl ListingCard {
    /// Build a card for an entry
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry, currency: &str) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            price: format_price(entry.price, currency),
            image: entry.primary_image().unwrap_or_default().to_string(),
            href: Route::product(entry.id.clone()).to_string(),
        }
    }
}

/// Listing page model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Inputs the page was built from
    pub query: ListingQuery,
    /// Category filter choices, sentinel first
    pub categories: Vec<String>,
    /// Sort menu labels
    pub sort_options: Vec<String>,
    /// Visible cards in display order
    pub cards: Vec<ListingCard>,
    /// Catalog size before filtering
    pub total: usize,
}

impl ListingPage {
    /// Build the listing for the current state
    #[must_use]
    pub fn build(catalog: &Catalog, state: &ListingState, currency: &str) -> Self {
        let cards = state
            .visible(catalog)
            .into_iter()
            .map(|entry| ListingCard::from_entry(entry, currency))
            .collect();

        Self {
            query: state.query().clone(),
            categories: category_choices(catalog),
            sort_options: SortKey::ALL.iter().map(|key| key.label().to_string()).collect(),
            cards,
            total: catalog.len(),
        }
    }
}

/// Standard categories followed by any extra ones the catalog uses
fn category_choices(catalog: &Catalog) -> Vec<String> {
    let mut choices: Vec<String> = LISTING_CATEGORIES.iter().map(ToString::to_string).collect();
    for category in catalog.categories() {
        if !choices.iter().any(|c| c == category) {
            choices.push(category.to_string());
        }
    }
    choices
}
