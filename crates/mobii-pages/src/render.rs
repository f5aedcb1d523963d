//! Plain-text page rendering
//!
//! Used by the CLI. Every page implements [`fmt::Display`].

use crate::pages::{
    AboutPage, DetailPage, HomePage, ListingPage, NotFoundPage, Page, ADDED_TO_CART, RATING_STARS,
};
use std::fmt::{self, Write as _};

const RULE: &str = "----------------------------------------";

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")
}

/// Five-character star row, `*` filled and `.` empty
#[must_use]
pub fn star_row(filled: usize) -> String {
    let filled = filled.min(RATING_STARS);
    let mut row = String::with_capacity(RATING_STARS);
    for i in 0..RATING_STARS {
        row.push(if i < filled { '*' } else { '.' });
    }
    row
}

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, &self.hero.title)?;
        writeln!(f, "{}", self.hero.subtitle)?;
        if let Some((label, route)) = &self.hero.call_to_action {
            writeln!(f, "[{label}] -> {route}")?;
        }

        section(f, "Why MobiiWrap")?;
        for benefit in &self.benefits {
            writeln!(f, "- {}: {}", benefit.title, benefit.detail)?;
        }

        section(f, "Featured Products")?;
        if self.featured.is_empty() {
            writeln!(f, "(no products yet)")?;
        }
        for tile in &self.featured {
            writeln!(f, "{:<32} {:>10}  {}", tile.name, tile.price, tile.href)?;
        }
        Ok(())
    }
}

impl fmt::Display for ListingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Our Products")?;

        let mut filters = String::new();
        if !self.query.text.trim().is_empty() {
            write!(filters, "search \"{}\", ", self.query.text.trim())?;
        }
        write!(filters, "category {}, sorted by {}", self.query.category, self.query.sort)?;
        writeln!(f, "{filters}")?;
        writeln!(f, "Showing {} of {} products", self.cards.len(), self.total)?;

        writeln!(f)?;
        if self.cards.is_empty() {
            writeln!(f, "No products match your filters.")?;
        }
        for card in &self.cards {
            writeln!(f, "{:<32} {:>10}  {}", card.name, card.price, card.href)?;
            writeln!(f, "    {}", card.description)?;
        }

        section(f, "Categories")?;
        writeln!(f, "{}", self.categories.join(" | "))?;
        section(f, "Sort By")?;
        writeln!(f, "{}", self.sort_options.join(" | "))
    }
}

impl fmt::Display for DetailPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, &self.name)?;
        writeln!(
            f,
            "{} {} ({} reviews)",
            star_row(self.stars),
            self.rating,
            self.reviews
        )?;
        writeln!(f, "{}", self.price)?;

        section(f, "Gallery")?;
        writeln!(
            f,
            "Image {} of {}: {}",
            self.image_index + 1,
            self.images.len(),
            self.current_image()
        )?;
        if self.zoomed {
            writeln!(
                f,
                "Zoomed at {:.0}% x {:.0}%",
                self.zoom_origin.x, self.zoom_origin.y
            )?;
        }

        if !self.colors.is_empty() {
            section(f, "Color")?;
            for color in &self.colors {
                let marker = if self.selected_color.as_deref() == Some(color.as_str()) {
                    "(x)"
                } else {
                    "( )"
                };
                writeln!(f, "{marker} {color}")?;
            }
        }

        section(f, "Description")?;
        writeln!(f, "{}", self.description)?;
        for feature in &self.features {
            writeln!(f, "  + {feature}")?;
        }

        if !self.specifications.is_empty() {
            section(f, "Specifications")?;
            let width = self
                .specifications
                .iter()
                .map(|(label, _)| label.chars().count())
                .max()
                .unwrap_or(0);
            for (label, value) in &self.specifications {
                writeln!(f, "{label:<width$}  {value}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.badges.join(" | "))?;
        if self.notification_active {
            writeln!(f)?;
            writeln!(f, ">> {ADDED_TO_CART}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NotFoundPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "No product with id \"{}\".", self.id)
    }
}

impl fmt::Display for AboutPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, &self.hero.title)?;
        writeln!(f, "{}", self.hero.subtitle)?;

        section(f, "Our Journey")?;
        for milestone in &self.timeline {
            writeln!(f, "{}  {}", milestone.year, milestone.title)?;
            writeln!(f, "      {}", milestone.description)?;
        }

        section(f, "Our Values")?;
        for value in &self.values {
            writeln!(f, "- {}: {}", value.title, value.description)?;
        }

        section(f, "Meet Our Team")?;
        for member in &self.team {
            writeln!(f, "{} ({})", member.name, member.role)?;
            writeln!(f, "      {}", member.bio)?;
        }
        Ok(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home(page) => fmt::Display::fmt(page, f),
            Self::Products(page) => fmt::Display::fmt(page, f),
            Self::Detail(page) => fmt::Display::fmt(page.as_ref(), f),
            Self::NotFound(page) => fmt::Display::fmt(page, f),
            Self::About(page) => fmt::Display::fmt(page, f),
        }
    }
}
