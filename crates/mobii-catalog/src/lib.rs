//! MobiiWrap Catalog
//!
//! Read-only product catalog and the listing page's filter/sort pipeline.
//!
//! # Core Concepts
//!
//! - [`CatalogEntry`]: a single skin product
//! - [`Catalog`]: validated, immutable collection of entries with id lookup
//! - [`visible_entries`]: pure filter/sort pipeline
//! - [`ListingQuery`]: query text, [`Category`] and [`SortKey`] bundled
//! - [`format_price`]: two-decimal currency display
//!
//! # Example
//!
//! ```rust
//! use mobii_catalog::{sample_catalog, ListingQuery, SortKey};
//!
//! let query = ListingQuery::new().with_sort(SortKey::PriceLowToHigh);
//! let visible = sample_catalog().visible(&query);
//! assert_eq!(visible[0].id.as_str(), "2");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod entry;
mod error;
mod pipeline;
mod price;
mod sample;

pub use catalog::{Catalog, CatalogFile};
pub use entry::{CatalogEntry, EntryId};
pub use error::CatalogError;
pub use pipeline::{visible_entries, Category, ListingQuery, SortKey, ALL_CATEGORIES};
pub use price::{filled_stars, format_price, DEFAULT_CURRENCY};
pub use sample::{sample_catalog, sample_entries, LISTING_CATEGORIES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
