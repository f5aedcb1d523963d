//! Landing page

use crate::route::Route;
use mobii_catalog::{format_price, Catalog, CatalogEntry};
use serde::{Deserialize, Serialize};

/// Page banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Headline
    pub title: String,
    /// Supporting line
    pub subtitle: String,
    /// Button label and target, if any
    pub call_to_action: Option<(String, Route)>,
}

/// One selling point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    /// Short heading
    pub title: String,
    /// One-line explanation
    pub detail: String,
}

/// Compact product card linking to its detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTile {
    /// Entry id
    pub id: String,
    /// Display name
    pub name: String,
    /// Price with currency and two decimals
    pub price: String,
    /// First image
    pub image: String,
    /// Detail page path
    pub href: String,
}

impl ProductTile {
    /// Build a tile for an entry
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry, currency: &str) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            price: format_price(entry.price, currency),
            image: entry.primary_image().unwrap_or_default().to_string(),
            href: Route::product(entry.id.clone()).to_string(),
        }
    }
}

/// Landing page model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    /// Banner
    pub hero: Hero,
    /// Selling points
    pub benefits: Vec<Benefit>,
    /// Featured products in catalog order
    pub featured: Vec<ProductTile>,
}

impl HomePage {
    /// Build the landing page, featuring up to `limit` entries
    #[must_use]
    pub fn build(catalog: &Catalog, currency: &str, limit: Option<usize>) -> Self {
        let featured = catalog
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|entry| ProductTile::from_entry(entry, currency))
            .collect();

        Self {
            hero: Hero {
                title: "Transform Your Device".to_string(),
                subtitle: "Premium mobile skins that protect and personalize your device with style."
                    .to_string(),
                call_to_action: Some(("Shop Now".to_string(), Route::Products)),
            },
            benefits: vec![
                benefit("Free Shipping", "On all orders over $50"),
                benefit("Easy Returns", "30-day money back guarantee"),
                benefit("Premium Quality", "Durable materials that last"),
            ],
            featured,
        }
    }
}

fn benefit(title: &str, detail: &str) -> Benefit {
    Benefit {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobii_catalog::sample_catalog;

    #[test]
    fn tiles_use_first_image_and_two_decimals() {
        let entry = CatalogEntry::new("7", "Skin", "d", 30.0, "Pixel").with_images(["a", "b"]);
        let tile = ProductTile::from_entry(&entry, "$");
        assert_eq!(tile.price, "$30.00");
        assert_eq!(tile.image, "a");
        assert_eq!(tile.href, "/products/7");
    }

    #[test]
    fn featured_follows_catalog_order_and_limit() {
        let page = HomePage::build(sample_catalog(), "$", None);
        let ids: Vec<&str> = page.featured.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);

        let page = HomePage::build(sample_catalog(), "$", Some(2));
        assert_eq!(page.featured.len(), 2);
    }

    #[test]
    fn three_benefits() {
        let page = HomePage::build(&Catalog::empty(), "$", None);
        assert_eq!(page.benefits.len(), 3);
        assert!(page.featured.is_empty());
    }
}
