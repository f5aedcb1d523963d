//! Functional tests for the listing pipeline.
//!
//! These exercise the ordering and filtering guarantees the listing page
//! relies on:
//! - Catalog order is preserved for `Newest` and for ties under every key.
//! - Price and popularity orderings are monotone.
//! - Recomputing with the same inputs gives the same answer.

use mobii_catalog::{visible_entries, Category, SortKey};
use mobii_test_utils::{catalog_of, ids, make_entry, two_entry_catalog};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const CATEGORIES: [&str; 4] = ["iPhone", "Samsung", "Pixel", "OnePlus"];

fn arb_catalog() -> impl Strategy<Value = Vec<mobii_catalog::CatalogEntry>> {
    proptest::collection::vec((0..4usize, 0u32..5000, 0u32..=50), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (cat, cents, tenths))| {
                make_entry(
                    id,
                    CATEGORIES[cat],
                    f64::from(cents) / 100.0,
                    f64::from(tenths) / 10.0,
                )
            })
            .collect()
    })
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Newest),
        Just(SortKey::PriceLowToHigh),
        Just(SortKey::PriceHighToLow),
        Just(SortKey::MostPopular),
    ]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::All),
        (0..4usize).prop_map(|i| Category::from(CATEGORIES[i])),
    ]
}

/// Position of an entry id within the source catalog.
fn position(id: &str) -> usize {
    id.parse().unwrap()
}

#[test]
fn example_price_low_to_high() {
    let catalog = two_entry_catalog();
    let visible = visible_entries(catalog.entries(), "", &Category::All, SortKey::PriceLowToHigh);
    assert_eq!(ids(&visible), ["2", "1"]);
}

#[test]
fn example_marble_query() {
    let catalog = two_entry_catalog();
    let visible = visible_entries(catalog.entries(), "marble", &Category::All, SortKey::Newest);
    assert_eq!(ids(&visible), ["2"]);
}

#[test]
fn example_most_popular() {
    let catalog = two_entry_catalog();
    let visible = visible_entries(catalog.entries(), "", &Category::All, SortKey::MostPopular);
    assert_eq!(ids(&visible), ["2", "1"]);
}

#[test]
fn pipeline_does_not_touch_catalog() {
    let catalog = two_entry_catalog();
    let before = catalog.entries().to_vec();
    let _ = visible_entries(catalog.entries(), "", &Category::All, SortKey::PriceLowToHigh);
    assert_eq!(catalog.entries(), before.as_slice());
}

proptest! {
    #[test]
    fn prop_identity_on_default_query(entries in arb_catalog()) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "", &Category::All, SortKey::Newest);
        let expected: Vec<&mobii_catalog::CatalogEntry> = catalog.iter().collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn prop_newest_preserves_relative_order(
        entries in arb_catalog(),
        category in arb_category(),
    ) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "", &category, SortKey::Newest);
        for pair in visible.windows(2) {
            prop_assert!(position(pair[0].id.as_str()) < position(pair[1].id.as_str()));
        }
    }

    #[test]
    fn prop_price_ascending(entries in arb_catalog()) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "", &Category::All, SortKey::PriceLowToHigh);
        for pair in visible.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn prop_price_descending(entries in arb_catalog()) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "", &Category::All, SortKey::PriceHighToLow);
        for pair in visible.windows(2) {
            prop_assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn prop_most_popular_descending(entries in arb_catalog()) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "", &Category::All, SortKey::MostPopular);
        for pair in visible.windows(2) {
            prop_assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn prop_ties_keep_catalog_order(entries in arb_catalog(), sort in arb_sort()) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "", &Category::All, sort);
        for pair in visible.windows(2) {
            if sort.compare(pair[0], pair[1]).is_eq() {
                prop_assert!(position(pair[0].id.as_str()) < position(pair[1].id.as_str()));
            }
        }
    }

    #[test]
    fn prop_filtering_is_idempotent(
        entries in arb_catalog(),
        category in arb_category(),
        sort in arb_sort(),
        query in "[a-z ]{0,6}",
    ) {
        let catalog = catalog_of(entries);
        let first = visible_entries(catalog.entries(), &query, &category, sort);
        let second = visible_entries(catalog.entries(), &query, &category, sort);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_results_satisfy_filters(
        entries in arb_catalog(),
        category in arb_category(),
        sort in arb_sort(),
    ) {
        let catalog = catalog_of(entries);
        let visible = visible_entries(catalog.entries(), "SKIN", &category, sort);
        let expected = catalog.iter().filter(|e| category.admits(e)).count();
        prop_assert_eq!(visible.len(), expected);
        for entry in visible {
            prop_assert!(category.admits(entry));
        }
    }
}
