pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod pages;
pub mod routes;
pub mod search;
pub mod store;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
