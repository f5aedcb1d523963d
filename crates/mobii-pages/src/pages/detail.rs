//! Product detail page

use mobii_catalog::{filled_stars, format_price};
use mobii_detail::{DetailVisit, ZoomOrigin};
use serde::{Deserialize, Serialize};

/// Badges shown under the purchase buttons
pub const TRUST_BADGES: [&str; 3] = ["Free Shipping", "30-Day Returns", "2-Year Warranty"];

/// Number of stars in the rating row
pub const RATING_STARS: usize = 5;

/// Text shown on the cart notification
pub const ADDED_TO_CART: &str = "Added to cart!";

/// Detail page model, rendered from a visit's current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailPage {
    /// Entry id
    pub id: String,
    /// Display name
    pub name: String,
    /// Full description
    pub description: String,
    /// Price with currency and two decimals
    pub price: String,
    /// Average rating
    pub rating: f64,
    /// Filled stars out of [`RATING_STARS`]
    pub stars: usize,
    /// Review count
    pub reviews: u32,
    /// Gallery images
    pub images: Vec<String>,
    /// Displayed image index
    pub image_index: usize,
    /// Color variants
    pub colors: Vec<String>,
    /// Selected variant
    pub selected_color: Option<String>,
    /// Whether the main image is zoomed
    pub zoomed: bool,
    /// Zoom origin in percent
    pub zoom_origin: ZoomOrigin,
    /// Whether the cart notification is showing
    pub notification_active: bool,
    /// Feature bullets
    pub features: Vec<String>,
    /// Specification rows in catalog order
    pub specifications: Vec<(String, String)>,
    /// Shipping / returns / warranty badges
    pub badges: Vec<String>,
}

impl DetailPage {
    /// Render the visit's current state
    #[must_use]
    pub fn from_visit(visit: &DetailVisit<'_>, currency: &str) -> Self {
        let entry = visit.entry();
        let snapshot = visit.snapshot();

        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            price: format_price(entry.price, currency),
            rating: entry.rating,
            stars: filled_stars(entry.rating),
            reviews: entry.reviews,
            images: entry.images.clone(),
            image_index: snapshot.image_index,
            colors: entry.colors().to_vec(),
            selected_color: snapshot.selected_color,
            zoomed: snapshot.zoomed,
            zoom_origin: snapshot.zoom_origin,
            notification_active: snapshot.notification_active,
            features: entry.features.clone(),
            specifications: entry
                .specifications
                .iter()
                .map(|(label, value)| (label.clone(), value.clone()))
                .collect(),
            badges: TRUST_BADGES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Displayed image reference
    #[inline]
    #[must_use]
    pub fn current_image(&self) -> &str {
        self.images
            .get(self.image_index)
            .map_or("", String::as_str)
    }
}

/// Shown when a detail route names an unknown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundPage {
    /// Requested id
    pub id: String,
    /// User-facing message
    pub message: String,
}

impl NotFoundPage {
    /// Not-found page for an id
    #[must_use]
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: "Product not found!".to_string(),
        }
    }
}
