//! In-memory sample data every page reads from. Nothing here is persisted;
//! each call builds a fresh copy.

mod brands;
mod categories;
mod chat;
mod deals;
mod orders;
mod parts;
mod profile;
mod support;

pub use brands::brands;
pub use categories::{categories, category_tiles, quick_categories};
pub use chat::{mechanic, opening_messages};
pub use deals::deals;
pub use orders::orders;
pub use parts::{parts, recommendations, reviews_for};
pub use profile::{starter_cart, starter_wishlist, user_profile, vehicles};
pub use support::{faqs, support_categories};

use chrono::{DateTime, NaiveDate, Utc};

pub const RECENT_SEARCHES: [&str; 4] = ["Brake pads", "Oil filter", "Spark plugs", "Air filter"];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let parts = parts();
        let ids: HashSet<_> = parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), parts.len());
    }

    #[test]
    fn every_reference_resolves_to_a_part() {
        let parts = parts();
        let known = |id: &str| parts.iter().any(|p| p.id == id);

        assert!(deals(Utc::now()).iter().all(|d| known(&d.part_id)));
        assert!(recommendations().into_iter().all(known));
        assert!(starter_wishlist(Utc::now()).entries().iter().all(|e| known(&e.part_id)));
        assert!(orders()
            .iter()
            .flat_map(|o| o.lines.iter())
            .all(|line| known(&line.part_id)));
    }

    #[test]
    fn cart_lines_mirror_the_catalog() {
        let parts = parts();
        let cart = starter_cart(&parts);
        for item in cart.items() {
            let part = parts.iter().find(|p| p.id == item.part_id).unwrap();
            assert_eq!(item.price, part.price);
            assert_eq!(item.in_stock, part.in_stock);
            assert!(item.quantity <= item.max_quantity);
        }
    }

    #[test]
    fn catalog_serializes_to_json() {
        let json = serde_json::to_value(parts()).unwrap();
        let first = &json[0];
        assert_eq!(first["id"], "akebono-brake-pads-front");
        assert_eq!(first["price"], 8999);
        assert_eq!(first["listed_on"], "2024-03-12");
    }
}
