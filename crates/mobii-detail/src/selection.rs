//! Image, color and zoom selection for one detail visit
//!
//! Direct selection rejects anything the entry does not offer and leaves
//! the state untouched. Carousel navigation wraps around instead.

use mobii_catalog::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Zoom origin in percent of the image box, each axis in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomOrigin {
    /// Horizontal percent from the left edge
    pub x: f64,
    /// Vertical percent from the top edge
    pub y: f64,
}

impl ZoomOrigin {
    /// Top-left corner
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
}

impl Default for ZoomOrigin {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Selection state seeded from a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    image_index: usize,
    image_count: usize,
    colors: Vec<String>,
    selected_color: Option<String>,
    zoomed: bool,
    zoom_origin: ZoomOrigin,
}

impl SelectionState {
    /// Seed state for a new visit: first image, first color
    #[must_use]
    pub fn for_entry(entry: &CatalogEntry) -> Self {
        let colors = entry.colors().to_vec();
        let selected_color = colors.first().cloned();
        Self {
            image_index: 0,
            image_count: entry.images.len(),
            colors,
            selected_color,
            zoomed: false,
            zoom_origin: ZoomOrigin::default(),
        }
    }

    /// Index of the displayed image
    #[inline]
    #[must_use]
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Number of images in the carousel
    #[inline]
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Selected color variant, `None` only for entries without colors
    #[inline]
    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selected_color.as_deref()
    }

    /// Whether the main image is zoomed
    #[inline]
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Current zoom origin
    #[inline]
    #[must_use]
    pub fn zoom_origin(&self) -> ZoomOrigin {
        self.zoom_origin
    }

    /// Show image `index`; out-of-range indices are ignored
    pub fn select_image(&mut self, index: usize) -> bool {
        if index < self.image_count {
            self.image_index = index;
            true
        } else {
            false
        }
    }

    /// Advance the carousel, wrapping to the first image
    pub fn next_image(&mut self) -> usize {
        if self.image_count > 0 {
            self.image_index = (self.image_index + 1) % self.image_count;
        }
        self.image_index
    }

    /// Step the carousel back, wrapping to the last image
    pub fn prev_image(&mut self) -> usize {
        if self.image_count > 0 {
            self.image_index = (self.image_index + self.image_count - 1) % self.image_count;
        }
        self.image_index
    }

    /// Select a color variant; colors the entry does not offer are ignored
    pub fn select_color(&mut self, color: &str) -> bool {
        if self.colors.iter().any(|c| c == color) {
            self.selected_color = Some(color.to_string());
            true
        } else {
            false
        }
    }

    /// Turn zoom on or off; the last origin is kept
    pub fn set_zoomed(&mut self, zoomed: bool) {
        self.zoomed = zoomed;
    }

    /// Move the zoom origin to a pointer position inside the image box
    ///
    /// Only tracked while zoomed. Offsets are relative to the box's top-left
    /// corner and the result is clamped to the box.
    pub fn track_pointer(&mut self, offset_x: f64, offset_y: f64, width: f64, height: f64) -> bool {
        if !self.zoomed || !(width > 0.0 && height > 0.0) {
            return false;
        }
        self.zoom_origin = ZoomOrigin {
            x: (offset_x / width * 100.0).clamp(0.0, 100.0),
            y: (offset_y / height * 100.0).clamp(0.0, 100.0),
        };
        true
    }
}
