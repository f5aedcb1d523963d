//! Page models
//!
//! Each page is plain, owned, serializable data built from the catalog (and,
//! for the detail page, a visit's state). Markup and styling are left to
//! whatever renders these models; [`crate::render`] provides a text form.

mod about;
mod detail;
mod home;
mod listing;

pub use about::{AboutPage, CompanyValue, Milestone, TeamMember};
pub use detail::{DetailPage, NotFoundPage, ADDED_TO_CART, RATING_STARS, TRUST_BADGES};
pub use home::{Benefit, Hero, HomePage, ProductTile};
pub use listing::{ListingCard, ListingPage, ListingState};

use serde::{Deserialize, Serialize};

/// Any storefront page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    /// Landing page
    Home(HomePage),
    /// Product listing
    Products(ListingPage),
    /// Product detail
    Detail(Box<DetailPage>),
    /// Unknown product
    NotFound(NotFoundPage),
    /// Company page
    About(AboutPage),
}

impl Page {
    /// Page title
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Home(_) => "Home",
            Self::Products(_) => "Our Products",
            Self::Detail(page) => &page.name,
            Self::NotFound(_) => "Not Found",
            Self::About(page) => &page.hero.title,
        }
    }

    /// Pretty-printed JSON form
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether this is the not-found page
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
