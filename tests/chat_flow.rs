#![cfg(target_arch = "wasm32")]

mod common;

use common::mount_at;
use gearnest::models::chat::MECHANIC_AUTO_REPLY;
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn sending_appends_then_the_mechanic_replies() {
    let app = mount_at("/chat").await;
    assert_eq!(app.count(".message"), 3);
    assert!(app.is_disabled(".send"));

    app.type_into(".message-input", "My brakes squeal when cold");
    app.click(".send");
    assert_eq!(app.count(".message"), 4);
    assert_eq!(app.count(".undo"), 1);

    sleep(Duration::from_millis(100)).await;
    assert_eq!(app.count(".message"), 5);
    assert!(app
        .container
        .text_content()
        .unwrap_or_default()
        .contains(MECHANIC_AUTO_REPLY));
    app.unmount();
}

#[wasm_bindgen_test]
async fn undo_takes_back_the_users_message() {
    let app = mount_at("/chat").await;
    app.type_into(".message-input", "Never mind");
    app.click(".send");
    assert_eq!(app.count(".message.from-user"), 2);

    app.click(".undo");
    assert_eq!(app.count(".message.from-user"), 1);
    assert_eq!(app.count(".undo"), 0);
    app.unmount();
}

#[wasm_bindgen_test]
async fn leaving_the_chat_cancels_the_pending_reply() {
    let app = mount_at("/chat").await;
    app.type_into(".message-input", "Hello?");
    app.click(".send");
    // navigating away disposes the chat before its reply timer fires
    app.click(".logo");
    sleep(Duration::from_millis(100)).await;
    assert_eq!(app.count(".message"), 0);
    app.unmount();
}
