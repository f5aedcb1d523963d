//! Storefront routes
//!
//! | Path             | Route                   |
//! |------------------|-------------------------|
//! | `/`              | [`Route::Home`]         |
//! | `/products`      | [`Route::Products`]     |
//! | `/products/{id}` | [`Route::ProductDetail`] |
//! | `/about`         | [`Route::About`]        |
//!
//! A single trailing slash is accepted. Anything after `?` or `#` is ignored.

use mobii_catalog::EntryId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Route parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Path does not start with `/`
    #[error("path must be absolute: {0}")]
    NotAbsolute(String),

    /// Path matches no page
    #[error("no page at {0}")]
    UnknownPath(String),
}

/// A page address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// Landing page
    Home,
    /// Product listing
    Products,
    /// One product
    ProductDetail(EntryId),
    /// Company page
    About,
}

impl Route {
    /// Parse a request path
    ///
    /// # Errors
    /// Returns error if the path is relative or names no page
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let Some(rest) = path.strip_prefix('/') else {
            return Err(RouteError::NotAbsolute(path.to_string()));
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let segments: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["products"] => Ok(Self::Products),
            ["products", id] if !id.is_empty() => Ok(Self::ProductDetail(EntryId::from(*id))),
            ["about"] => Ok(Self::About),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    /// Link to a product's detail page
    #[inline]
    #[must_use]
    pub fn product(id: impl Into<EntryId>) -> Self {
        Self::ProductDetail(id.into())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Products => f.write_str("/products"),
            Self::ProductDetail(id) => write!(f, "/products/{id}"),
            Self::About => f.write_str("/about"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("/products").unwrap(), Route::Products);
        assert_eq!(Route::parse("/products/").unwrap(), Route::Products);
        assert_eq!(Route::parse("/products/2").unwrap(), Route::product("2"));
        assert_eq!(Route::parse("/about/").unwrap(), Route::About);
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(Route::parse("/products?sort=newest").unwrap(), Route::Products);
        assert_eq!(Route::parse("/products/3#reviews").unwrap(), Route::product("3"));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(matches!(Route::parse("/cart"), Err(RouteError::UnknownPath(_))));
        assert!(matches!(Route::parse("/products/1/reviews"), Err(RouteError::UnknownPath(_))));
        assert!(matches!(Route::parse("/products//"), Err(RouteError::UnknownPath(_))));
        assert!(matches!(Route::parse("products"), Err(RouteError::NotAbsolute(_))));
    }

    #[test]
    fn display_is_parseable() {
        for route in [Route::Home, Route::Products, Route::product("42"), Route::About] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }
}
