//! Storefront error types

use crate::config::ConfigError;
use crate::route::RouteError;
use mobii_catalog::CatalogError;

/// Storefront errors
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Path names no page
    #[error(transparent)]
    Route(#[from] RouteError),
}

impl StorefrontError {
    /// Whether the error came from a request rather than from setup
    #[inline]
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Route(_))
    }
}

/// Result type for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_errors_are_request_errors() {
        let err: StorefrontError = RouteError::UnknownPath("/cart".into()).into();
        assert!(err.is_request_error());
        assert_eq!(err.to_string(), "no page at /cart");

        let err: StorefrontError = CatalogError::NoImages("1".into()).into();
        assert!(!err.is_request_error());
    }
}
