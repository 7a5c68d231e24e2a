#![cfg(target_arch = "wasm32")]

mod common;

use common::{mount_at, settle};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn header_badges_start_from_the_seeded_session() {
    let app = mount_at("/").await;
    assert_eq!(app.text(".cart-count"), "3");
    assert_eq!(app.text(".wishlist-count"), "3");
    app.unmount();
}

#[wasm_bindgen_test]
async fn add_to_cart_from_details_lands_on_the_cart() {
    let app = mount_at("/part/ngk-spark-plugs").await;
    app.click(".increase");
    assert_eq!(app.text(".stepper-value"), "2");

    app.click(".add-to-cart");
    settle().await;

    assert_eq!(app.count(".cart-line"), 4);
    assert_eq!(app.text(".cart-count"), "4");
    app.unmount();
}

#[wasm_bindgen_test]
async fn promo_code_applies_once() {
    let app = mount_at("/cart").await;
    assert_eq!(app.text("dd.total"), "$173.84");

    app.type_into(".promo-input", "save10");
    app.click(".apply-promo");
    settle().await;

    assert_eq!(app.text(".promo-discount"), "-$16.10");
    assert_eq!(app.text("dd.total"), "$156.45");
    assert!(app.is_disabled(".apply-promo"));
    assert!(app.is_disabled(".promo-input"));
    app.unmount();
}

#[wasm_bindgen_test]
async fn unknown_promo_code_shows_an_error() {
    let app = mount_at("/cart").await;
    app.type_into(".promo-input", "FREESTUFF");
    app.click(".apply-promo");
    settle().await;

    assert!(app.text(".promo-error").contains("FREESTUFF"));
    assert!(app.find(".promo-discount").is_none());
    assert!(!app.is_disabled(".apply-promo"));
    app.unmount();
}

#[wasm_bindgen_test]
async fn moving_an_already_saved_line_keeps_one_wishlist_entry() {
    let app = mount_at("/cart").await;
    assert_eq!(app.count(".move-to-wishlist"), 3);
    app.click(".cart-line:nth-child(2) .move-to-wishlist");
    settle().await;

    assert_eq!(app.count(".cart-line"), 2);
    assert_eq!(app.text(".cart-count"), "2");
    assert_eq!(app.text(".wishlist-count"), "3");
    app.unmount();
}

#[wasm_bindgen_test]
async fn emptying_the_cart_shows_the_empty_state() {
    let app = mount_at("/cart").await;
    for _ in 0..3 {
        app.click(".remove");
        settle().await;
    }
    assert_eq!(app.count(".cart-line"), 0);
    assert!(app.text(".empty-state").contains("Your cart is empty"));
    app.unmount();
}
