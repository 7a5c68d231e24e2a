//! Session state shared by every page: the catalog, the cart, the wishlist,
//! toasts and the colour theme. Nothing here outlives the tab.

use crate::config::AppConfig;
use crate::error::MarketResult;
use crate::fixtures;
use crate::models::cart::Cart;
use crate::models::part::{find_part, Part};
use crate::models::wishlist::Wishlist;
use crate::utils::leptos_owner::Timers;
use chrono::Utc;
use leptos::logging::log;
use leptos::*;
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct Store {
    pub catalog: StoredValue<Vec<Part>>,
    pub cart: RwSignal<Cart>,
    pub wishlist: RwSignal<Wishlist>,
}

impl Store {
    pub fn new(catalog: Vec<Part>, cart: Cart, wishlist: Wishlist) -> Self {
        Store {
            catalog: store_value(catalog),
            cart: create_rw_signal(cart),
            wishlist: create_rw_signal(wishlist),
        }
    }

    /// The sample session: full catalog, three cart lines, three saved parts.
    pub fn seeded() -> Self {
        let catalog = fixtures::parts();
        let cart = fixtures::starter_cart(&catalog);
        Store::new(catalog, cart, fixtures::starter_wishlist(Utc::now()))
    }

    pub fn part(self, id: &str) -> MarketResult<Part> {
        self.catalog.with_value(|parts| find_part(parts, id).cloned())
    }

    pub fn add_to_cart(self, part_id: &str, quantity: u32) -> MarketResult<()> {
        let part = self.part(part_id)?;
        self.cart.update(|cart| cart.add(&part, quantity));
        log!("[CART] added {} x{}", part_id, quantity);
        Ok(())
    }

    /// Saves or unsaves a part; returns whether it is saved afterwards.
    pub fn toggle_saved(self, part_id: &str) -> bool {
        let mut saved = false;
        self.wishlist
            .update(|wishlist| saved = wishlist.toggle(part_id, Utc::now()));
        log!("[WISHLIST] {} {}", if saved { "saved" } else { "removed" }, part_id);
        saved
    }

    pub fn is_saved(self, part_id: &str) -> bool {
        self.wishlist.with(|wishlist| wishlist.contains(part_id))
    }

    pub fn move_to_wishlist(self, part_id: &str) {
        let mut moved = false;
        self.cart.update(|cart| moved = cart.remove(part_id).is_some());
        if moved {
            self.wishlist
                .update(|wishlist| {
                    wishlist.save(part_id, Utc::now());
                });
            log!("[CART] moved {} to wishlist", part_id);
        }
    }

    /// Distinct cart lines, for the header badge.
    pub fn cart_count(self) -> usize {
        self.cart.with(Cart::len)
    }

    pub fn wishlist_count(self) -> usize {
        self.wishlist.with(Wishlist::len)
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

/// Transient notifications, dismissed after their own duration.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    timers: Timers,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts {
            items: create_rw_signal(Vec::new()),
            timers: Timers::new("toasts"),
        }
    }

    pub fn show(self, title: impl Into<String>, description: impl Into<String>, duration: Duration) {
        let toast = Toast {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            duration,
        };
        let id = toast.id.clone();
        self.items.update(|items| items.push(toast));
        self.timers.after(duration, move || self.dismiss(&id));
    }

    /// Shows a toast once `delay` has passed. Scheduled on the app root, so
    /// leaving the page does not cancel it.
    pub fn show_after(
        self,
        delay: Duration,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) {
        let (title, description) = (title.into(), description.into());
        self.timers
            .after(delay, move || self.show(title, description, duration));
    }

    pub fn dismiss(self, id: &str) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn items(self) -> Signal<Vec<Toast>> {
        self.items.into()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Toasts::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Dark by default; applied as the `dark` class on `<html>`.
#[derive(Clone, Copy)]
pub struct Theme {
    pub dark: RwSignal<bool>,
}

impl Theme {
    pub fn new() -> Self {
        let dark = create_rw_signal(true);
        create_effect(move |_| {
            let is_dark = dark.get();
            if let Some(root) = document().document_element() {
                if root.class_list().toggle_with_force("dark", is_dark).is_err() {
                    log!("[THEME] could not update the document class");
                }
            }
        });
        Theme { dark }
    }

    pub fn toggle(self) {
        self.dark.update(|dark| *dark = !*dark);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new()
    }
}

pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

/// Installs config, session state, toasts and theme for the subtree.
pub fn provide_app_context(config: AppConfig) {
    provide_context(config);
    provide_context(Store::seeded());
    provide_context(Toasts::new());
    provide_context(Theme::new());
}
