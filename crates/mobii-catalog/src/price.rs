//! Currency display
//!
//! Prices are stored at full precision and only rounded when shown.

/// Default currency symbol
pub const DEFAULT_CURRENCY: &str = "$";

/// Format a price with exactly two decimal places
///
/// # Examples
/// ```
/// # use mobii_catalog::format_price;
/// assert_eq!(format_price(29.99, "$"), "$29.99");
/// assert_eq!(format_price(5.0, "€"), "€5.00");
/// ```
#[inline]
#[must_use]
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{currency}{price:.2}")
}

/// Star rating as shown on the detail page: `floor(rating)` filled of five
#[inline]
#[must_use]
pub fn filled_stars(rating: f64) -> usize {
    // rating is validated to [0, 5]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    filled
}
