//! Mounting and DOM helpers shared by the browser tests.

use gearnest::app::Shell;
use gearnest::config::AppConfig;
use gloo_timers::future::sleep;
use leptos::*;
use leptos_meta::provide_meta_context;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventInit, HtmlElement, HtmlInputElement};

/// A mounted app inside its own container. Queries are scoped to it, since
/// earlier tests leave their apps on the page.
pub struct Mounted {
    pub container: HtmlElement,
}

/// Mounts the whole app at `path` with delays shortened for tests.
pub async fn mount_at(path: &str) -> Mounted {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();

    let container: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone(), || {
        provide_meta_context();
        view! { <Shell config=AppConfig::with_short_delays()/> }
    });
    settle().await;
    Mounted { container }
}

/// Lets the router and any spawned tasks catch up.
pub async fn settle() {
    sleep(Duration::from_millis(30)).await;
}

impl Mounted {
    pub fn find(&self, selector: &str) -> Option<Element> {
        self.container.query_selector(selector).unwrap()
    }

    pub fn get(&self, selector: &str) -> Element {
        self.find(selector)
            .unwrap_or_else(|| panic!("no element matches {selector}"))
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.container.query_selector_all(selector).unwrap().length()
    }

    pub fn text(&self, selector: &str) -> String {
        self.get(selector).text_content().unwrap_or_default()
    }

    pub fn click(&self, selector: &str) {
        self.get(selector).unchecked_into::<HtmlElement>().click();
    }

    /// Sets an input's value and fires a bubbling `input` event.
    pub fn type_into(&self, selector: &str, value: &str) {
        let input: HtmlInputElement = self.get(selector).unchecked_into();
        input.set_value(value);
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    pub fn is_disabled(&self, selector: &str) -> bool {
        self.get(selector).has_attribute("disabled")
    }

    pub fn unmount(self) {
        self.container.remove();
    }
}
