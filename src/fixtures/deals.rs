use crate::models::deal::{Deal, DealType};
use crate::models::money::Money;
use crate::models::part::PLACEHOLDER_IMAGE;
use chrono::{DateTime, Duration, Utc};

struct DealRow<'a> {
    id: &'a str,
    part_id: &'a str,
    title: &'a str,
    description: &'a str,
    prices: (i64, i64),
    brand: &'a str,
    category: &'a str,
    rating: f32,
    reviews: u32,
    ends_in: Duration,
    stock_left: Option<u32>,
    deal_type: DealType,
    is_hot: bool,
    is_featured: bool,
}

fn ends_in(days: i64, hours: i64, minutes: i64) -> Duration {
    Duration::days(days) + Duration::hours(hours) + Duration::minutes(minutes)
}

/// The running promotions, with end times relative to `now`.
pub fn deals(now: DateTime<Utc>) -> Vec<Deal> {
    let rows = [
        DealRow {
            id: "1",
            part_id: "akebono-brake-pads-front",
            title: "Premium Brake Pad Set - Front & Rear",
            description: "Complete brake pad set for Honda Accord 2018-2023",
            prices: (18999, 11999),
            brand: "Akebono",
            category: "Brakes",
            rating: 4.8,
            reviews: 342,
            ends_in: ends_in(2, 14, 32),
            stock_left: Some(12),
            deal_type: DealType::Flash,
            is_hot: true,
            is_featured: true,
        },
        DealRow {
            id: "2",
            part_id: "honda-oil-filter",
            title: "Oil Filter 5-Pack Bundle",
            description: "Genuine Honda oil filters - buy 4 get 1 free",
            prices: (6245, 4999),
            brand: "Honda",
            category: "Engine",
            rating: 4.9,
            reviews: 156,
            ends_in: ends_in(5, 8, 15),
            stock_left: None,
            deal_type: DealType::Bulk,
            is_hot: false,
            is_featured: true,
        },
        DealRow {
            id: "3",
            part_id: "philips-led-headlights",
            title: "LED Headlight Conversion Kit",
            description: "High-performance LED headlights with 3-year warranty",
            prices: (29999, 19999),
            brand: "Philips",
            category: "Lighting",
            rating: 4.6,
            reviews: 289,
            ends_in: ends_in(1, 6, 45),
            stock_left: Some(8),
            deal_type: DealType::Flash,
            is_hot: true,
            is_featured: false,
        },
        DealRow {
            id: "4",
            part_id: "michelin-winter-tires",
            title: "Winter Tire Clearance",
            description: "All-season and winter tires up to 50% off",
            prices: (59999, 29999),
            brand: "Michelin",
            category: "Tires",
            rating: 4.7,
            reviews: 198,
            ends_in: ends_in(15, 0, 0),
            stock_left: None,
            deal_type: DealType::Seasonal,
            is_hot: false,
            is_featured: false,
        },
        DealRow {
            id: "5",
            part_id: "kn-air-filter",
            title: "Air Filter Mega Pack",
            description: "High-flow air filters - 3 for the price of 2",
            prices: (13599, 8999),
            brand: "K&N",
            category: "Engine",
            rating: 4.5,
            reviews: 423,
            ends_in: ends_in(3, 12, 20),
            stock_left: None,
            deal_type: DealType::Bulk,
            is_hot: false,
            is_featured: false,
        },
        DealRow {
            id: "6",
            part_id: "monroe-strut-assembly",
            title: "Suspension Strut Assembly",
            description: "Factory overstock - limited quantity clearance",
            prices: (44999, 27999),
            brand: "Monroe",
            category: "Suspension",
            rating: 4.4,
            reviews: 87,
            ends_in: ends_in(7, 18, 30),
            stock_left: Some(5),
            deal_type: DealType::Clearance,
            is_hot: false,
            is_featured: false,
        },
    ];

    rows
        .into_iter()
        .map(|row| Deal {
            id: row.id.to_string(),
            part_id: row.part_id.to_string(),
            title: row.title.to_string(),
            description: row.description.to_string(),
            original_price: Money::from_cents(row.prices.0),
            sale_price: Money::from_cents(row.prices.1),
            image: PLACEHOLDER_IMAGE.to_string(),
            brand: row.brand.to_string(),
            category: row.category.to_string(),
            rating: row.rating,
            reviews: row.reviews,
            ends_at: now + row.ends_in,
            stock_left: row.stock_left,
            deal_type: row.deal_type,
            is_hot: row.is_hot,
            is_featured: row.is_featured,
        })
        .collect()
}
