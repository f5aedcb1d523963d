//! CLI command tests.
//!
//! Commands run against the sample storefront with output captured in
//! memory.

use mobii_cli::{command, load_config, run, Exit};
use mobii_pages::Storefront;
use pretty_assertions::assert_eq;
use std::time::Duration;

async fn invoke(args: &[&str]) -> (Exit, String) {
    let matches = command()
        .try_get_matches_from(std::iter::once("mobii").chain(args.iter().copied()))
        .unwrap();
    let store = Storefront::sample();
    let mut out = Vec::new();
    let exit = run(&matches, &store, &mut out).await.unwrap();
    (exit, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn home_lists_featured_products() {
    let (exit, out) = invoke(&["home"]).await;
    assert_eq!(exit, Exit::Success);
    assert!(out.starts_with("Transform Your Device\n"));
    assert!(out.contains("/products/3"));
}

#[tokio::test]
async fn products_filters_and_sorts() {
    let (exit, out) = invoke(&["products", "--sort", "price-low-to-high", "--json"]).await;
    assert_eq!(exit, Exit::Success);

    let page: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<&str> = page["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["2", "3", "1"]);

    let (_, out) = invoke(&["products", "-q", "wood", "-c", "All"]).await;
    assert!(out.contains("Showing 1 of 3 products"));
    assert!(out.contains("Wood Grain Pixel Skin"));
}

#[tokio::test]
async fn product_applies_interactions() {
    let (exit, out) = invoke(&[
        "--json", "product", "1", "--next", "4", "--color", "Silver", "--zoom-at", "50,25",
    ])
    .await;
    assert_eq!(exit, Exit::Success);

    let page: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(page["page"], "detail");
    assert_eq!(page["image_index"], 1);
    assert_eq!(page["selected_color"], "Silver");
    assert_eq!(page["zoomed"], true);
    assert_eq!(page["zoom_origin"]["x"], 50.0);
    assert_eq!(page["zoom_origin"]["y"], 25.0);
}

#[tokio::test]
async fn carousel_steps_wrap_around_the_gallery() {
    let (_, out) = invoke(&["--json", "product", "1", "--next", "1000000000000"]).await;
    let page: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(page["image_index"], 1);

    let (_, out) = invoke(&["--json", "product", "1", "--prev", "1000000000000"]).await;
    let page: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(page["image_index"], 2);

    let (_, out) = invoke(&["--json", "product", "3", "--next", "7", "--prev", "5"]).await;
    let page: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(page["image_index"], 0);
}

#[tokio::test]
async fn rejected_selection_keeps_state() {
    let (exit, out) = invoke(&["--json", "product", "3", "--image", "5", "--color", "Red"]).await;
    assert_eq!(exit, Exit::Success);

    let page: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(page["image_index"], 0);
    assert_eq!(page["selected_color"], "Walnut");
}

#[tokio::test]
async fn unknown_product_exits_not_found() {
    let (exit, out) = invoke(&["product", "404"]).await;
    assert_eq!(exit, Exit::NotFound);
    assert!(out.contains("Product not found!"));
}

#[tokio::test]
async fn route_command() {
    let (exit, out) = invoke(&["route", "/about"]).await;
    assert_eq!(exit, Exit::Success);
    assert!(out.contains("Our Journey"));

    let (exit, _) = invoke(&["route", "/products/nope"]).await;
    assert_eq!(exit, Exit::NotFound);

    let (exit, out) = invoke(&["route", "/cart"]).await;
    assert_eq!(exit, Exit::NotFound);
    assert_eq!(out.trim(), "no page at /cart");
}

#[tokio::test(start_paused = true)]
async fn await_dismiss_prints_page_twice() {
    let started = tokio::time::Instant::now();
    let (exit, out) = invoke(&["product", "2", "--add-to-cart", "--await-dismiss"]).await;
    assert_eq!(exit, Exit::Success);
    assert!(started.elapsed() >= Duration::from_millis(2000));

    let shown = out.matches("Added to cart!").count();
    assert_eq!(shown, 1);
    assert_eq!(out.matches("Marble Samsung Skin\n===").count(), 2);
}

#[test]
fn await_dismiss_requires_add_to_cart() {
    assert!(command()
        .try_get_matches_from(["mobii", "product", "1", "--await-dismiss"])
        .is_err());
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load config"));
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mobii.toml");
    std::fs::write(&path, "default_sort = \"Most Popular\"\n").unwrap();
    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.default_sort, mobii_catalog::SortKey::MostPopular);
}
