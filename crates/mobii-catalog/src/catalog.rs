//! Validated, read-only product catalog
//!
//! A [`Catalog`] is built once at startup, either from the built-in sample
//! data or from a JSON/TOML file, and shared read-only by every page.

use crate::entry::{CatalogEntry, EntryId};
use crate::error::CatalogError;
use crate::pipeline::{visible_entries, ListingQuery};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk catalog layout (`entries = [...]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Entries in display order
    pub entries: Vec<CatalogEntry>,
}

/// Immutable product catalog
///
/// Entry order is the catalog's display order ("newest first" is simply the
/// order entries were supplied in).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Build a catalog, validating every entry
    ///
    /// # Errors
    /// Returns the first invariant violation found: duplicate or empty id,
    /// missing images, empty color list, invalid price or rating.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            validate_entry(position, entry)?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Empty catalog
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON catalog (`{"entries": [...]}`)
    ///
    /// # Errors
    /// Returns error if JSON is invalid or an entry fails validation
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.entries)
    }

    /// Parse a TOML catalog (`[[entries]]` tables)
    ///
    /// # Errors
    /// Returns error if TOML is invalid or an entry fails validation
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.entries)
    }

    /// Load a catalog file, choosing the format by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read, has an unknown extension,
    /// fails to parse, or contains an invalid entry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&source)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// All entries in catalog order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Exact-match lookup by identifier
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Whether an identifier is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Distinct categories in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    /// Run the filter/sort pipeline for a listing query
    #[inline]
    #[must_use]
    pub fn visible(&self, query: &ListingQuery) -> Vec<&CatalogEntry> {
        visible_entries(&self.entries, &query.text, &query.category, query.sort)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate_entry(position: usize, entry: &CatalogEntry) -> Result<(), CatalogError> {
    if entry.id.as_str().trim().is_empty() {
        return Err(CatalogError::EmptyId(position));
    }
    if entry.images.is_empty() {
        return Err(CatalogError::NoImages(entry.id.clone()));
    }
    if matches!(&entry.colors, Some(colors) if colors.is_empty()) {
        return Err(CatalogError::EmptyColors(entry.id.clone()));
    }
    if !entry.price.is_finite() || entry.price < 0.0 {
        return Err(CatalogError::InvalidPrice {
            id: entry.id.clone(),
            price: entry.price,
        });
    }
    if !(0.0..=5.0).contains(&entry.rating) {
        return Err(CatalogError::InvalidRating {
            id: entry.id.clone(),
            rating: entry.rating,
        });
    }
    Ok(())
}
