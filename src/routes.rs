//! Paths of every page and helpers that build links with query strings.

use leptos::logging::log;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;
use urlencoding::encode;

pub const HOME: &str = "/";
pub const MARKETPLACE: &str = "/marketplace";
pub const PARTS: &str = "/parts";
pub const CHAT: &str = "/chat";
pub const ORDERS: &str = "/orders";
pub const PROFILE: &str = "/profile";
pub const CATEGORIES: &str = "/categories";
pub const BRANDS: &str = "/brands";
pub const DEALS: &str = "/deals";
pub const SUPPORT: &str = "/support";
pub const CART: &str = "/cart";
pub const CHECKOUT: &str = "/checkout";
pub const WISHLIST: &str = "/wishlist";
pub const ACCOUNT: &str = "/account";
pub const MESSAGES: &str = "/messages";

pub fn part_path(id: &str) -> String {
    format!("/part/{}", encode(id))
}

pub fn parts_search_path(query: &str) -> String {
    format!("{PARTS}?search={}", encode(query.trim()))
}

pub fn parts_category_path(category: &str) -> String {
    format!("{PARTS}?category={}", encode(category))
}

pub fn parts_brand_path(brand: &str) -> String {
    format!("{PARTS}?brand={}", encode(brand))
}

pub fn order_path(number: &str) -> String {
    format!("{ORDERS}?order={}", encode(number))
}

/// Handle on the router's `navigate` that event handlers can copy freely.
/// Create it in a component body under the `<Router>`.
#[derive(Clone, Copy)]
pub struct Navigator(StoredValue<Rc<dyn Fn(&str)>>);

impl Navigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Navigator(store_value(Rc::new(move |path: &str| {
            navigate(path, NavigateOptions::default())
        })))
    }

    pub fn go(self, path: &str) {
        match self.0.try_get_value() {
            Some(navigate) => navigate(path),
            None => log!("[NAV] navigation to {} after unmount ignored", path),
        }
    }

    /// Browser history back, like the "Back to results" button.
    pub fn back(self) {
        let went_back = window().history().and_then(|history| history.back());
        if went_back.is_err() {
            self.go(PARTS);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_are_encoded() {
        assert_eq!(parts_search_path("  brake pads "), "/parts?search=brake%20pads");
        assert_eq!(
            parts_category_path("Engine & Performance"),
            "/parts?category=Engine%20%26%20Performance"
        );
        assert_eq!(parts_brand_path("K&N"), "/parts?brand=K%26N");
        assert_eq!(order_path("ORD-2024-002"), "/orders?order=ORD-2024-002");
        assert_eq!(part_path("honda-oil-filter"), "/part/honda-oil-filter");
    }
}
