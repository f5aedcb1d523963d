//! Storefront facade
//!
//! Owns the catalog and configuration and builds pages for routes.

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::pages::{AboutPage, DetailPage, HomePage, ListingPage, ListingState, NotFoundPage, Page};
use crate::route::Route;
use mobii_catalog::{sample_catalog, Catalog};
use mobii_detail::{open_visit, DetailOutcome, DetailVisit};

/// The storefront: one catalog, one configuration
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    config: StorefrontConfig,
}

impl Storefront {
    /// Storefront over an existing catalog
    #[inline]
    #[must_use]
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        Self { catalog, config }
    }

    /// Sample catalog with default configuration
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_catalog().clone(), StorefrontConfig::default())
    }

    /// Load the configured catalog, or the sample catalog when none is set
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the catalog file
    /// cannot be loaded
    pub fn from_config(config: StorefrontConfig) -> Result<Self> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => sample_catalog().clone(),
        };

        tracing::info!(
            entries = catalog.len(),
            sort = %config.default_sort,
            "storefront ready"
        );
        Ok(Self::new(catalog, config))
    }

    /// Product catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Landing page
    #[must_use]
    pub fn home(&self) -> HomePage {
        HomePage::build(
            &self.catalog,
            &self.config.currency_symbol,
            self.config.featured_limit,
        )
    }

    /// Fresh listing inputs in the configured default order
    #[inline]
    #[must_use]
    pub fn listing_state(&self) -> ListingState {
        ListingState::new(self.config.default_sort)
    }

    /// Listing page for the given inputs
    #[must_use]
    pub fn products(&self, state: &ListingState) -> ListingPage {
        ListingPage::build(&self.catalog, state, &self.config.currency_symbol)
    }

    /// Start a detail visit
    ///
    /// The visit borrows the storefront's catalog; every call starts from
    /// the first image and the first color.
    #[must_use]
    pub fn open_product(&self, id: &str) -> DetailOutcome<'_> {
        open_visit(&self.catalog, id, self.config.detail_config())
    }

    /// Render a visit's current state
    #[must_use]
    pub fn detail_page(&self, visit: &DetailVisit<'_>) -> DetailPage {
        DetailPage::from_visit(visit, &self.config.currency_symbol)
    }

    /// Company page
    #[inline]
    #[must_use]
    pub fn about(&self) -> AboutPage {
        AboutPage::build()
    }

    /// Build the page a route points at
    ///
    /// Detail routes render a freshly opened visit. Unknown ids give the
    /// not-found page.
    #[must_use]
    pub fn page(&self, route: &Route) -> Page {
        tracing::debug!(%route, "building page");
        match route {
            Route::Home => Page::Home(self.home()),
            Route::Products => Page::Products(self.products(&self.listing_state())),
            Route::ProductDetail(id) => match self.open_product(id.as_str()) {
                DetailOutcome::Found(visit) => Page::Detail(Box::new(self.detail_page(&visit))),
                DetailOutcome::NotFound(id) => Page::NotFound(NotFoundPage::for_id(id.as_str())),
            },
            Route::About => Page::About(self.about()),
        }
    }

    /// Parse a path and build its page
    ///
    /// # Errors
    /// Returns error if the path names no page
    pub fn resolve(&self, path: &str) -> Result<Page> {
        let route = Route::parse(path)?;
        Ok(self.page(&route))
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobii_catalog::SortKey;

    #[test]
    fn routes_map_to_pages() {
        let store = Storefront::sample();
        assert!(matches!(store.page(&Route::Home), Page::Home(_)));
        assert!(matches!(store.page(&Route::Products), Page::Products(_)));
        assert!(matches!(store.page(&Route::About), Page::About(_)));
        assert!(matches!(store.page(&Route::product("2")), Page::Detail(_)));
        assert!(store.page(&Route::product("99")).is_not_found());
    }

    #[test]
    fn listing_uses_configured_default_sort() {
        let config = StorefrontConfig::new().with_default_sort(SortKey::PriceLowToHigh);
        let store = Storefront::new(sample_catalog().clone(), config);
        let Page::Products(page) = store.page(&Route::Products) else {
            panic!("expected listing");
        };
        let ids: Vec<&str> = page.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn currency_symbol_is_applied() {
        let config = StorefrontConfig::new().with_currency_symbol("€");
        let store = Storefront::new(sample_catalog().clone(), config);
        assert_eq!(store.home().featured[0].price, "€29.99");
    }

    #[test]
    fn resolve_rejects_unknown_paths() {
        assert!(Storefront::sample().resolve("/checkout").is_err());
        assert_eq!(Storefront::sample().resolve("/about").unwrap().title(), "Our Story");
    }
}
