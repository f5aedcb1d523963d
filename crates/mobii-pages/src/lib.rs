//! MobiiWrap Storefront Pages
//!
//! Routing, configuration and page models for the MobiiWrap storefront.
//!
//! # Core Concepts
//!
//! - [`Storefront`]: owns the catalog and configuration, builds pages
//! - [`Route`]: the four page addresses and their paths
//! - [`Page`]: serializable page models (home, listing, detail, not found, about)
//! - [`StorefrontConfig`]: TOML configuration
//!
//! # Example
//!
//! ```rust
//! use mobii_pages::{Page, Storefront};
//!
//! let store = Storefront::sample();
//! let page = store.resolve("/products/2").unwrap();
//! assert_eq!(page.title(), "Marble Samsung Skin");
//! assert!(store.resolve("/products/42").unwrap().is_not_found());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod pages;
pub mod render;
mod route;
mod storefront;

pub use config::{ConfigError, StorefrontConfig, DEFAULT_LOG_FILTER};
pub use error::{Result, StorefrontError};
pub use pages::{
    AboutPage, Benefit, CompanyValue, DetailPage, Hero, HomePage, ListingCard, ListingPage,
    ListingState, Milestone, NotFoundPage, Page, ProductTile, TeamMember, ADDED_TO_CART,
    RATING_STARS, TRUST_BADGES,
};
pub use route::{Route, RouteError};
pub use storefront::Storefront;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
