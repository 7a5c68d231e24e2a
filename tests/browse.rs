#![cfg(target_arch = "wasm32")]

mod common;

use common::{mount_at, settle};
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn category_link_narrows_the_listing() {
    let app = mount_at("/parts?category=Brakes").await;
    assert_eq!(app.text(".result-count"), "Showing 2 results");
    assert!(app.text(".chip").contains("Brakes"));

    app.click(".chip-clear");
    settle().await;
    assert_eq!(app.text(".result-count"), "Showing 13 results");
    app.unmount();
}

#[wasm_bindgen_test]
async fn no_matches_offer_to_clear_filters() {
    let app = mount_at("/parts?search=flux%20capacitor").await;
    assert_eq!(app.text(".result-count"), "Showing 0 results");
    app.click(".empty-state .button");
    settle().await;
    assert_eq!(app.text(".result-count"), "Showing 13 results");
    app.unmount();
}

#[wasm_bindgen_test]
async fn unknown_part_renders_not_found() {
    let app = mount_at("/part/flux-capacitor").await;
    assert!(app.text(".empty-state").contains("Part not found"));
    app.unmount();
}

#[wasm_bindgen_test]
async fn unknown_order_falls_back_with_a_notice() {
    let app = mount_at("/orders?order=ORD-1999-999").await;
    assert!(app.find(".order-notice").is_some());
    assert_eq!(app.text("h2.order-number"), "Order ORD-2024-001");
    app.unmount();
}

#[wasm_bindgen_test]
async fn vin_scan_toasts_in_sequence() {
    let app = mount_at("/").await;
    app.click(".vin-button");
    assert!(app.text(".toast-title").contains("VIN Scanner Activated"));

    sleep(Duration::from_millis(40)).await;
    let titles = app.container.text_content().unwrap_or_default();
    assert!(titles.contains("VIN Detected!"));
    assert!(titles.contains("1HGBH41JXMN109186 - 2021 Honda Accord"));

    sleep(Duration::from_millis(150)).await;
    assert_eq!(app.count(".toast"), 0);
    app.unmount();
}

#[wasm_bindgen_test]
async fn theme_toggle_flips_the_document_class() {
    let app = mount_at("/").await;
    let root = leptos::document().document_element().unwrap();
    assert!(root.class_list().contains("dark"));
    app.click(".theme-toggle");
    assert!(!root.class_list().contains("dark"));
    app.click(".theme-toggle");
    assert!(root.class_list().contains("dark"));
    app.unmount();
}

#[wasm_bindgen_test]
async fn placeholder_routes_say_coming_soon() {
    let app = mount_at("/checkout").await;
    assert!(app.text(".coming-soon").contains("Coming Soon"));
    app.unmount();
}
