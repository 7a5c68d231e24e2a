use super::{date, orders::home_address};
use crate::models::cart::{Cart, CartItem};
use crate::models::money::Money;
use crate::models::part::{Part, PLACEHOLDER_IMAGE};
use crate::models::profile::{UserProfile, Vehicle};
use crate::models::wishlist::{SavedPart, Wishlist};
use chrono::{DateTime, Duration, Utc};

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "John Smith".to_string(),
        email: "john.smith@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        avatar: PLACEHOLDER_IMAGE.to_string(),
        member_since: date(2023, 1, 15),
        total_orders: 12,
        total_saved: Money::from_cents(8950),
        address: home_address(),
    }
}

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "1".to_string(),
            year: 2020,
            make: "Honda".to_string(),
            model: "Accord".to_string(),
            vin: Some("1HGBH41JXMN109186".to_string()),
            nickname: Some("Daily Driver".to_string()),
            is_default: true,
        },
        Vehicle {
            id: "2".to_string(),
            year: 2018,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            vin: None,
            nickname: Some("Weekend Car".to_string()),
            is_default: false,
        },
    ]
}

const STARTER_LINES: [(&str, u32); 3] = [
    ("akebono-brake-pads-front", 1),
    ("honda-oil-filter", 2),
    ("kn-air-filter", 1),
];

/// The cart a new session opens with.
pub fn starter_cart(parts: &[Part]) -> Cart {
    let items = STARTER_LINES
        .iter()
        .filter_map(|(id, quantity)| {
            parts
                .iter()
                .find(|part| part.id == *id)
                .map(|part| CartItem::from_part(part, *quantity))
        })
        .collect();
    Cart::new(items)
}

/// Three parts saved over the last three days, newest first.
pub fn starter_wishlist(now: DateTime<Utc>) -> Wishlist {
    let entries = STARTER_LINES
        .iter()
        .zip(1..)
        .map(|((id, _), days_ago)| SavedPart {
            part_id: id.to_string(),
            saved_at: now - Duration::days(days_ago),
        })
        .collect();
    Wishlist::new(entries)
}
