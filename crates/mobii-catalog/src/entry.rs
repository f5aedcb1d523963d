//! Catalog entry types
//!
//! Defines the immutable product record shown on every storefront page:
//! - [`EntryId`]: opaque identifier used by routes and lookups
//! - [`CatalogEntry`]: a single skin with its display and detail attributes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque catalog entry identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create identifier from any string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single product record
///
/// Entries are never mutated once a [`crate::Catalog`] has validated them.
/// The `colors`, `features` and `specifications` attributes are only read by
/// the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Display name
    pub name: String,
    /// Short marketing description
    pub description: String,
    /// Price, currency-agnostic and kept at full precision
    pub price: f64,
    /// Image references in display order
    pub images: Vec<String>,
    /// Category label (e.g. device family)
    pub category: String,
    /// Average rating in `[0, 5]`
    pub rating: f64,
    /// Number of reviews
    pub reviews: u32,
    /// Color variants, first one is the default selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Feature bullet points
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Specification label to value
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub specifications: IndexMap<String, String>,
}

impl CatalogEntry {
    /// Create an entry with the required listing attributes
    #[must_use]
    pub fn new(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            images: Vec::new(),
            category: category.into(),
            rating: 0.0,
            reviews: 0,
            colors: None,
            features: Vec::new(),
            specifications: IndexMap::new(),
        }
    }

    /// With image references
    #[inline]
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// With rating and review count
    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// With color variants
    #[inline]
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// With feature bullet points
    #[inline]
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Add a specification row
    #[inline]
    #[must_use]
    pub fn with_spec(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(label.into(), value.into());
        self
    }

    /// First image, used for tiles and cards
    #[inline]
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Color variants, empty when the entry has none
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[String] {
        self.colors.as_deref().unwrap_or_default()
    }

    /// Case-insensitive substring match on name or description
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
