//! Built-in sample catalog
//!
//! Used when no catalog file is configured.
//!
//! The listing fields (name, description, price, category, rating and the
//! lead image) are the launch catalog. Extra gallery images, colors,
//! features and specifications are placeholder detail-page content.

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;
use once_cell::sync::Lazy;

const SKIN_IMAGE: &str =
    "https://images.unsplash.com/photo-1592899677977-9c10ca588bbd?auto=format&fit=crop&q=80";

/// Category choices offered by the listing page filter, sentinel first
pub const LISTING_CATEGORIES: [&str; 5] = ["All", "iPhone", "Samsung", "Pixel", "OnePlus"];

static SAMPLE: Lazy<Catalog> = Lazy::new(|| match Catalog::new(sample_entries()) {
    Ok(catalog) => catalog,
    Err(err) => {
        tracing::error!(error = %err, "built-in sample catalog failed validation");
        Catalog::empty()
    }
});

/// Shared sample catalog, built on first use
#[inline]
#[must_use]
pub fn sample_catalog() -> &'static Catalog {
    &SAMPLE
}

/// Fresh copy of the sample entries in catalog order
#[must_use]
pub fn sample_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "1",
            "Carbon Fiber iPhone Skin",
            "Premium carbon fiber texture skin for iPhone",
            29.99,
            "iPhone",
        )
        .with_images([
            SKIN_IMAGE.to_string(),
            format!("{SKIN_IMAGE}&w=1200"),
            format!("{SKIN_IMAGE}&w=1200&sat=-100"),
        ])
        .with_rating(4.5, 128)
        .with_colors(["Black", "Graphite", "Silver"])
        .with_features([
            "Genuine 3M vinyl with carbon fiber texture",
            "Precision cut for camera and buttons",
            "Bubble-free application",
            "Residue-free removal",
        ])
        .with_spec("Material", "3M vinyl")
        .with_spec("Thickness", "0.23mm")
        .with_spec("Finish", "Textured")
        .with_spec("Compatibility", "iPhone 15 series"),
        CatalogEntry::new(
            "2",
            "Marble Samsung Skin",
            "Elegant marble design skin for Samsung phones",
            24.99,
            "Samsung",
        )
        .with_images([SKIN_IMAGE.to_string(), format!("{SKIN_IMAGE}&w=1200")])
        .with_rating(4.8, 95)
        .with_colors(["White Marble", "Black Marble"])
        .with_features([
            "High-resolution marble print",
            "Scratch-resistant laminate",
            "Precision cut for Galaxy S series",
        ])
        .with_spec("Material", "Laminated vinyl")
        .with_spec("Thickness", "0.2mm")
        .with_spec("Finish", "Gloss")
        .with_spec("Compatibility", "Galaxy S24 series"),
        CatalogEntry::new(
            "3",
            "Wood Grain Pixel Skin",
            "Natural wood grain texture for Google Pixel",
            27.99,
            "Pixel",
        )
        .with_images([SKIN_IMAGE])
        .with_rating(4.3, 67)
        .with_colors(["Walnut", "Oak"])
        .with_features([
            "Real wood grain texture",
            "Adds grip without bulk",
            "Precision cut for camera bar",
        ])
        .with_spec("Material", "Textured vinyl")
        .with_spec("Thickness", "0.25mm")
        .with_spec("Finish", "Matte")
        .with_spec("Compatibility", "Pixel 8 series"),
    ]
}
