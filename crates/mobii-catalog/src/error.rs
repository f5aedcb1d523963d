//! Error types for the catalog
//!
//! Catalog errors only arise while a catalog is being built or loaded.
//! Once a [`crate::Catalog`] exists every query against it is infallible;
//! a missing entry is an ordinary `None`, not an error.

use crate::entry::EntryId;
use std::path::PathBuf;

/// Catalog construction and loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two entries share an identifier
    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    /// Identifier is empty or whitespace
    #[error("entry at position {0} has an empty id")]
    EmptyId(usize),

    /// Entry has no images
    #[error("entry {0} has no images")]
    NoImages(EntryId),

    /// Entry declares a color list with no colors
    #[error("entry {0} declares an empty color list")]
    EmptyColors(EntryId),

    /// Price is negative or not finite
    #[error("entry {id} has invalid price {price}")]
    InvalidPrice { id: EntryId, price: f64 },

    /// Rating outside `[0, 5]`
    #[error("entry {id} has rating {rating} outside [0, 5]")]
    InvalidRating { id: EntryId, rating: f64 },

    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file extension is not `.json` or `.toml`
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),

    /// JSON catalog did not parse
    #[error("invalid JSON catalog: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// TOML catalog did not parse
    #[error("invalid TOML catalog: {0}")]
    InvalidToml(#[from] toml::de::Error),
}

impl CatalogError {
    /// Entry the error refers to, when there is one
    #[must_use]
    pub fn entry_id(&self) -> Option<&EntryId> {
        match self {
            Self::DuplicateId(id) | Self::NoImages(id) | Self::EmptyColors(id) => Some(id),
            Self::InvalidPrice { id, .. } | Self::InvalidRating { id, .. } => Some(id),
            Self::EmptyId(_)
            | Self::Io { .. }
            | Self::UnsupportedFormat(_)
            | Self::InvalidJson(_)
            | Self::InvalidToml(_) => None,
        }
    }

    /// Whether the error came from reading or parsing a file
    #[inline]
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::UnsupportedFormat(_) | Self::InvalidJson(_) | Self::InvalidToml(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_entry() {
        let err = CatalogError::NoImages(EntryId::from("7"));
        assert_eq!(err.to_string(), "entry 7 has no images");
        assert_eq!(err.entry_id().map(EntryId::as_str), Some("7"));
    }

    #[test]
    fn source_errors_are_classified() {
        let err = CatalogError::UnsupportedFormat(PathBuf::from("catalog.csv"));
        assert!(err.is_source_error());
        assert!(err.entry_id().is_none());

        let err = CatalogError::DuplicateId(EntryId::from("1"));
        assert!(!err.is_source_error());
    }
}
