//! Testing utilities for the MobiiWrap workspace
//!
//! Shared fixtures and catalog builders.

#![allow(missing_docs)]

use mobii_catalog::{Catalog, CatalogEntry};

pub const TEST_IMAGE: &str = "https://example.test/skin.jpg";

/// The two-entry catalog used throughout the listing examples
pub fn two_entry_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "1",
            "Carbon Fiber iPhone Skin",
            "Premium carbon fiber texture skin for iPhone",
            29.99,
            "iPhone",
        )
        .with_images([TEST_IMAGE])
        .with_rating(4.5, 128),
        CatalogEntry::new(
            "2",
            "Marble Samsung Skin",
            "Elegant marble design skin for Samsung phones",
            24.99,
            "Samsung",
        )
        .with_images([TEST_IMAGE])
        .with_rating(4.8, 95),
    ]
}

pub fn two_entry_catalog() -> Catalog {
    Catalog::new(two_entry_entries()).unwrap()
}

/// Entry with `image_count` images and the given colors
pub fn gallery_entry(id: &str, image_count: usize, colors: &[&str]) -> CatalogEntry {
    let images = (0..image_count).map(|i| format!("{TEST_IMAGE}?view={i}"));
    let entry = CatalogEntry::new(id, format!("Gallery Skin {id}"), "Skin with a gallery", 19.99, "Pixel")
        .with_images(images)
        .with_rating(4.0, 10);
    if colors.is_empty() {
        entry
    } else {
        entry.with_colors(colors.iter().copied())
    }
}

/// Entry builder for property tests
pub fn make_entry(id: usize, category: &str, price: f64, rating: f64) -> CatalogEntry {
    CatalogEntry::new(
        id.to_string(),
        format!("Skin {id}"),
        format!("{category} skin number {id}"),
        price,
        category,
    )
    .with_images([TEST_IMAGE])
    .with_rating(rating, 1)
}

pub fn catalog_of(entries: Vec<CatalogEntry>) -> Catalog {
    Catalog::new(entries).unwrap()
}

pub fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}
