//! MobiiWrap Detail View
//!
//! Transient, per-visit state for the product detail page.
//!
//! # Core Concepts
//!
//! - [`open_visit`]: resolve an entry id to a [`DetailOutcome`]
//! - [`DetailVisit`]: image carousel, color variant and zoom selection
//! - [`NotificationTimer`]: re-armable "added to cart" flag
//! - [`ViewEvent`]: interactions applied to a visit
//!
//! # Example
//!
//! ```rust
//! use mobii_catalog::sample_catalog;
//! use mobii_detail::{open_visit, DetailConfig, ViewEvent};
//!
//! let mut visit = open_visit(sample_catalog(), "1", DetailConfig::default())
//!     .into_visit()
//!     .unwrap();
//! visit.apply(ViewEvent::NextImage);
//! visit.apply(ViewEvent::AddToCart);
//! assert!(visit.notification_active());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod notification;
mod selection;
mod visit;

pub use notification::{NotificationTimer, DEFAULT_NOTIFICATION_DELAY};
pub use selection::{SelectionState, ZoomOrigin};
pub use visit::{open_visit, DetailConfig, DetailOutcome, DetailSnapshot, DetailVisit, ViewEvent};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
