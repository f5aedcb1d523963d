//! Detail page visits
//!
//! A [`DetailVisit`] owns all transient state for one display of one entry.
//! Resolving an id that the catalog does not hold yields
//! [`DetailOutcome::NotFound`], an ordinary outcome rather than an error.

use crate::notification::{NotificationTimer, DEFAULT_NOTIFICATION_DELAY};
use crate::selection::{SelectionState, ZoomOrigin};
use mobii_catalog::{Catalog, CatalogEntry, EntryId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Detail view settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailConfig {
    /// How long the "added to cart" notification stays visible
    pub notification_delay: Duration,
}

impl DetailConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With notification delay
    #[inline]
    #[must_use]
    pub fn with_notification_delay(mut self, delay: Duration) -> Self {
        self.notification_delay = delay;
        self
    }
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            notification_delay: DEFAULT_NOTIFICATION_DELAY,
        }
    }
}

/// User interactions on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// Thumbnail click
    SelectImage(usize),
    /// Carousel forward arrow
    NextImage,
    /// Carousel back arrow
    PrevImage,
    /// Color button
    SelectColor(String),
    /// Pointer entered (`true`) or left (`false`) the main image
    Zoom(bool),
    /// Pointer moved over the main image
    Pointer {
        /// Offset from the left edge
        x: f64,
        /// Offset from the top edge
        y: f64,
        /// Image box width
        width: f64,
        /// Image box height
        height: f64,
    },
    /// "Add to Cart" button
    AddToCart,
}

/// Point-in-time view of a visit, for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailSnapshot {
    /// Entry being shown
    pub entry_id: EntryId,
    /// Displayed image index
    pub image_index: usize,
    /// Displayed image reference
    pub image: String,
    /// Selected color variant
    pub selected_color: Option<String>,
    /// Whether the main image is zoomed
    pub zoomed: bool,
    /// Zoom origin in percent
    pub zoom_origin: ZoomOrigin,
    /// Whether "added to cart" is showing
    pub notification_active: bool,
}

/// Transient state for one detail page display
#[derive(Debug)]
pub struct DetailVisit<'a> {
    entry: &'a CatalogEntry,
    selection: SelectionState,
    notification: NotificationTimer,
}

impl<'a> DetailVisit<'a> {
    /// Start a visit: first image, first color, no notification
    #[must_use]
    pub fn new(entry: &'a CatalogEntry, config: DetailConfig) -> Self {
        tracing::info!(entry = %entry.id, "detail visit opened");
        Self {
            entry,
            selection: SelectionState::for_entry(entry),
            notification: NotificationTimer::new(config.notification_delay),
        }
    }

    /// Entry being shown
    #[inline]
    #[must_use]
    pub fn entry(&self) -> &'a CatalogEntry {
        self.entry
    }

    /// Selection state
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Notification timer
    #[inline]
    #[must_use]
    pub fn notification(&self) -> &NotificationTimer {
        &self.notification
    }

    /// Displayed image index
    #[inline]
    #[must_use]
    pub fn image_index(&self) -> usize {
        self.selection.image_index()
    }

    /// Displayed image reference
    #[inline]
    #[must_use]
    pub fn current_image(&self) -> &'a str {
        // image_index always stays below images.len()
        &self.entry.images[self.selection.image_index()]
    }

    /// Selected color variant
    #[inline]
    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selection.selected_color()
    }

    /// Whether "added to cart" is showing
    #[inline]
    #[must_use]
    pub fn notification_active(&self) -> bool {
        self.notification.is_active()
    }

    /// Show image `index`; returns `false` and changes nothing if out of range
    pub fn select_image(&mut self, index: usize) -> bool {
        let accepted = self.selection.select_image(index);
        if !accepted {
            tracing::debug!(entry = %self.entry.id, index, "ignored out-of-range image");
        }
        accepted
    }

    /// Next image, wrapping
    pub fn next_image(&mut self) -> usize {
        self.selection.next_image()
    }

    /// Previous image, wrapping
    pub fn prev_image(&mut self) -> usize {
        self.selection.prev_image()
    }

    /// Select a color; returns `false` and changes nothing if not offered
    pub fn select_color(&mut self, color: &str) -> bool {
        let accepted = self.selection.select_color(color);
        if !accepted {
            tracing::debug!(entry = %self.entry.id, color, "ignored unknown color");
        }
        accepted
    }

    /// Show the notification and restart its dismiss countdown
    ///
    /// The countdown is measured from this call.
    pub fn add_to_cart(&mut self) {
        tracing::info!(
            entry = %self.entry.id,
            color = self.selection.selected_color().unwrap_or_default(),
            "added to cart"
        );
        self.notification.arm();
    }

    /// Apply one interaction; returns whether it changed anything
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::SelectImage(index) => self.select_image(index),
            ViewEvent::NextImage => {
                let before = self.image_index();
                before != self.next_image()
            }
            ViewEvent::PrevImage => {
                let before = self.image_index();
                before != self.prev_image()
            }
            ViewEvent::SelectColor(color) => self.select_color(&color),
            ViewEvent::Zoom(zoomed) => {
                let changed = self.selection.is_zoomed() != zoomed;
                self.selection.set_zoomed(zoomed);
                changed
            }
            ViewEvent::Pointer {
                x,
                y,
                width,
                height,
            } => self.selection.track_pointer(x, y, width, height),
            ViewEvent::AddToCart => {
                self.add_to_cart();
                true
            }
        }
    }

    /// Capture the state for rendering
    #[must_use]
    pub fn snapshot(&self) -> DetailSnapshot {
        DetailSnapshot {
            entry_id: self.entry.id.clone(),
            image_index: self.selection.image_index(),
            image: self.current_image().to_string(),
            selected_color: self.selection.selected_color().map(str::to_string),
            zoomed: self.selection.is_zoomed(),
            zoom_origin: self.selection.zoom_origin(),
            notification_active: self.notification.is_active(),
        }
    }
}

/// Result of resolving a detail route
#[derive(Debug)]
pub enum DetailOutcome<'a> {
    /// Entry exists; the visit has started
    Found(DetailVisit<'a>),
    /// No entry has this id
    NotFound(EntryId),
}

impl<'a> DetailOutcome<'a> {
    /// Whether the id resolved
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The visit, if the id resolved
    #[inline]
    #[must_use]
    pub fn into_visit(self) -> Option<DetailVisit<'a>> {
        match self {
            Self::Found(visit) => Some(visit),
            Self::NotFound(_) => None,
        }
    }
}

/// Resolve an id against the catalog and start a visit
///
/// Matching is exact; there are no partial or case-insensitive matches.
#[must_use]
pub fn open_visit<'a>(catalog: &'a Catalog, id: &str, config: DetailConfig) -> DetailOutcome<'a> {
    match catalog.get(id) {
        Some(entry) => DetailOutcome::Found(DetailVisit::new(entry, config)),
        None => {
            tracing::info!(entry = id, "detail visit for unknown entry");
            DetailOutcome::NotFound(EntryId::new(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![CatalogEntry::new("a", "Skin", "A skin", 9.5, "Pixel")
            .with_images(["0.jpg", "1.jpg", "2.jpg"])
            .with_colors(["Red", "Blue"])])
        .unwrap()
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = catalog();
        match open_visit(&catalog, "b", DetailConfig::default()) {
            DetailOutcome::NotFound(id) => assert_eq!(id.as_str(), "b"),
            DetailOutcome::Found(_) => panic!("unexpected visit"),
        }
        assert!(!open_visit(&catalog, "A", DetailConfig::default()).is_found());
    }

    #[test]
    fn events_drive_selection() {
        let catalog = catalog();
        let mut visit = open_visit(&catalog, "a", DetailConfig::default())
            .into_visit()
            .unwrap();

        assert!(visit.apply(ViewEvent::PrevImage));
        assert_eq!(visit.current_image(), "2.jpg");
        assert!(visit.apply(ViewEvent::NextImage));
        assert_eq!(visit.image_index(), 0);
        assert!(!visit.apply(ViewEvent::SelectImage(7)));
        assert!(visit.apply(ViewEvent::SelectColor("Blue".into())));
        assert!(!visit.apply(ViewEvent::SelectColor("Green".into())));
        assert!(visit.apply(ViewEvent::Zoom(true)));
        assert!(!visit.apply(ViewEvent::Zoom(true)));

        let snapshot = visit.snapshot();
        assert_eq!(snapshot.selected_color.as_deref(), Some("Blue"));
        assert!(snapshot.zoomed);
        assert!(!snapshot.notification_active);
    }

    #[test]
    fn config_builder() {
        let config = DetailConfig::new().with_notification_delay(Duration::from_millis(10));
        assert_eq!(config.notification_delay, Duration::from_millis(10));
    }
}
