//! Storefront configuration
//!
//! Loaded from TOML. Every key is optional; missing keys take the defaults
//! below.
//!
//! ```toml
//! notification_delay_ms = 2000
//! default_sort = "Newest"
//! currency_symbol = "$"
//! featured_limit = 3
//! catalog_path = "catalog.json"
//! log_filter = "mobii=info"
//! ```

use mobii_catalog::{SortKey, DEFAULT_CURRENCY};
use mobii_detail::DetailConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        reason: String,
    },
}

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// "Added to cart" notification lifetime in milliseconds
    pub notification_delay_ms: u64,
    /// Listing order when none is requested
    pub default_sort: SortKey,
    /// Currency symbol prefixed to prices
    pub currency_symbol: String,
    /// Maximum number of featured tiles on the home page
    pub featured_limit: Option<usize>,
    /// Catalog file; the built-in sample catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Returns error if TOML is invalid or a value is out of range
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// A relative `catalog_path` is resolved against the config file's
    /// directory.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&source)?;

        if let (Some(catalog), Some(base)) = (config.catalog_path.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog_path = Some(base.join(catalog));
            }
        }

        tracing::info!(path = %path.display(), "loaded storefront config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns the first out-of-range value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notification_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "notification_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.featured_limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "featured_limit",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }

    /// With notification delay in milliseconds
    #[inline]
    #[must_use]
    pub fn with_notification_delay_ms(mut self, millis: u64) -> Self {
        self.notification_delay_ms = millis;
        self
    }

    /// With default sort key
    #[inline]
    #[must_use]
    pub fn with_default_sort(mut self, sort: SortKey) -> Self {
        self.default_sort = sort;
        self
    }

    /// With currency symbol
    #[inline]
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// With featured tile limit
    #[inline]
    #[must_use]
    pub fn with_featured_limit(mut self, limit: usize) -> Self {
        self.featured_limit = Some(limit);
        self
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Notification lifetime
    #[inline]
    #[must_use]
    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_delay_ms)
    }

    /// Settings for detail page visits
    #[inline]
    #[must_use]
    pub fn detail_config(&self) -> DetailConfig {
        DetailConfig::new().with_notification_delay(self.notification_delay())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            notification_delay_ms: 2000,
            default_sort: SortKey::Newest,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            featured_limit: None,
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(StorefrontConfig::from_toml("").unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn parses_every_key() {
        let config = StorefrontConfig::from_toml(
            r#"
            notification_delay_ms = 1500
            default_sort = "Price: High to Low"
            currency_symbol = "€"
            featured_limit = 2
            catalog_path = "/srv/catalog.json"
            log_filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.notification_delay(), Duration::from_millis(1500));
        assert_eq!(config.default_sort, SortKey::PriceHighToLow);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.featured_limit, Some(2));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn zero_delay_is_rejected() {
        let err = StorefrontConfig::from_toml("notification_delay_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "notification_delay_ms",
                ..
            }
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            StorefrontConfig::from_toml("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn detail_config_carries_delay() {
        let config = StorefrontConfig::new().with_notification_delay_ms(750);
        assert_eq!(
            config.detail_config().notification_delay,
            Duration::from_millis(750)
        );
    }
}
