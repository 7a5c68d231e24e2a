use super::at;
use crate::models::money::Money;
use crate::models::order::{Order, OrderLine, OrderStatus, ShippingAddress};
use crate::models::part::PLACEHOLDER_IMAGE;
use chrono::Duration;

fn line(part_id: &str, name: &str, quantity: u32, cents: i64) -> OrderLine {
    OrderLine {
        part_id: part_id.to_string(),
        name: name.to_string(),
        quantity,
        price: Money::from_cents(cents),
        image: PLACEHOLDER_IMAGE.to_string(),
    }
}

pub(super) fn home_address() -> ShippingAddress {
    ShippingAddress {
        name: "John Smith".to_string(),
        street: "123 Main Street".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip: "94102".to_string(),
    }
}

/// Recent orders, newest status first as the tracker lists them.
pub fn orders() -> Vec<Order> {
    let in_transit = at(2024, 6, 20, 9, 30);
    let delivered = at(2024, 6, 15, 14, 5);
    let processing = at(2024, 6, 22, 18, 45);
    vec![
        Order {
            number: "ORD-2024-001".to_string(),
            status: OrderStatus::InTransit,
            placed_at: in_transit,
            estimated_delivery: in_transit + Duration::days(3),
            tracking_number: "1Z999AA1234567890".to_string(),
            carrier: "UPS".to_string(),
            lines: vec![
                line("akebono-brake-pads-front", "Premium Brake Pad Set - Front Axle", 1, 8999),
                line("honda-oil-filter", "OEM Oil Filter", 2, 1249),
            ],
            shipping_address: home_address(),
        },
        Order {
            number: "ORD-2024-002".to_string(),
            status: OrderStatus::Delivered,
            placed_at: delivered,
            estimated_delivery: delivered + Duration::days(3),
            tracking_number: "9400111899223100456789".to_string(),
            carrier: "USPS".to_string(),
            lines: vec![
                line("monroe-shocks", "Heavy Duty Shock Absorbers", 1, 12999),
                line("mann-cabin-filter", "Cabin Air Filter", 1, 1899),
            ],
            shipping_address: home_address(),
        },
        Order {
            number: "ORD-2024-003".to_string(),
            status: OrderStatus::Processing,
            placed_at: processing,
            estimated_delivery: processing + Duration::days(4),
            tracking_number: "Pending".to_string(),
            carrier: "FedEx".to_string(),
            lines: vec![
                line("ngk-spark-plugs", "Spark Plug Set", 2, 2499),
                line("bosch-brake-fluid", "Brake Fluid", 1, 1299),
            ],
            shipping_address: home_address(),
        },
    ]
}
