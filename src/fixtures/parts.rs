use super::date;
use crate::models::money::Money;
use crate::models::part::{Part, Review, PLACEHOLDER_IMAGE};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn specs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn base(id: &str, name: &str, brand: &str, category: &str, part_number: &str, price: Money) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        part_number: part_number.to_string(),
        price,
        original_price: None,
        rating: 4.5,
        review_count: 0,
        images: vec![PLACEHOLDER_IMAGE.to_string()],
        compatibility: Vec::new(),
        in_stock: true,
        stock_count: 20,
        max_order_quantity: 10,
        eta: "2-3 business days".to_string(),
        fit_verified: false,
        featured: false,
        listed_on: date(2024, 1, 1),
        warranty: "12 months".to_string(),
        description: String::new(),
        features: Vec::new(),
        specifications: Vec::new(),
    }
}

/// The whole catalog, in listing order.
pub fn parts() -> Vec<Part> {
    vec![
        Part {
            original_price: Some(Money::from_cents(10999)),
            rating: 4.8,
            review_count: 342,
            images: vec![PLACEHOLDER_IMAGE.to_string(); 3],
            compatibility: strings(&[
                "2018-2023 Honda Accord",
                "2016-2021 Honda Civic",
                "2019-2022 Acura TSX",
            ]),
            stock_count: 24,
            max_order_quantity: 5,
            fit_verified: true,
            featured: true,
            listed_on: date(2024, 3, 12),
            description: "Ceramic-blend front brake pads engineered to OEM specifications. \
                Quiet, low-dust stopping power for daily driving."
                .to_string(),
            features: strings(&[
                "OEM Quality Construction",
                "Low Dust Formula",
                "Quiet Operation",
                "Extended Wear Life",
                "Heat Resistant",
            ]),
            specifications: specs(&[
                ("Material", "Semi-Metallic"),
                ("Position", "Front Axle"),
                ("Quantity", "4 pieces"),
                ("Weight", "2.1 lbs"),
                ("Dimensions", "11.5\" x 4.2\" x 0.7\""),
            ]),
            ..base(
                "akebono-brake-pads-front",
                "Premium Brake Pad Set - Front Axle",
                "Akebono",
                "Brakes",
                "AKE-EUR1451",
                Money::from_cents(8999),
            )
        },
        Part {
            rating: 4.9,
            review_count: 156,
            compatibility: strings(&["2018-2023 Honda Accord", "2016-2021 Honda Civic"]),
            stock_count: 58,
            eta: "1-2 business days".to_string(),
            fit_verified: true,
            listed_on: date(2024, 2, 2),
            warranty: "6 months".to_string(),
            description: "Genuine Honda oil filter with an anti-drainback valve.".to_string(),
            features: strings(&["Genuine OEM part", "Anti-drainback valve"]),
            specifications: specs(&[("Thread", "M20 x 1.5"), ("Height", "3.4\"")]),
            ..base(
                "honda-oil-filter",
                "OEM Oil Filter",
                "Honda",
                "Engine",
                "HON-15400-PLM-A02",
                Money::from_cents(1249),
            )
        },
        Part {
            rating: 4.7,
            review_count: 289,
            compatibility: strings(&[
                "2018-2023 Honda Accord",
                "2018-2022 Toyota Camry",
                "2019-2023 Toyota Corolla",
            ]),
            in_stock: false,
            stock_count: 0,
            max_order_quantity: 3,
            eta: "5-7 business days".to_string(),
            fit_verified: true,
            featured: true,
            listed_on: date(2024, 4, 20),
            warranty: "Million mile limited warranty".to_string(),
            description: "Washable, reusable high-flow air filter.".to_string(),
            features: strings(&["Washable and reusable", "Increased airflow"]),
            specifications: specs(&[("Media", "Cotton gauze"), ("Shape", "Panel")]),
            ..base(
                "kn-air-filter",
                "High Performance Air Filter",
                "K&N",
                "Engine",
                "KN-33-2499",
                Money::from_cents(4599),
            )
        },
        Part {
            original_price: Some(Money::from_cents(19999)),
            rating: 4.9,
            review_count: 203,
            compatibility: strings(&["Ford F-150", "Ford Explorer"]),
            stock_count: 15,
            max_order_quantity: 4,
            eta: "3-5 business days".to_string(),
            featured: true,
            listed_on: date(2024, 5, 28),
            warranty: "3 years".to_string(),
            description: "Plug-and-play LED conversion kit, 6000K cool white.".to_string(),
            features: strings(&["6000K color temperature", "Plug-and-play install"]),
            specifications: specs(&[("Bulb", "H11"), ("Lumens", "8000 per pair")]),
            ..base(
                "philips-led-headlights",
                "LED Headlight Conversion Kit",
                "Philips",
                "Lighting",
                "PHL-H11-LED",
                Money::from_cents(15999),
            )
        },
        Part {
            rating: 4.7,
            review_count: 124,
            compatibility: strings(&["Universal", "Most Vehicles"]),
            stock_count: 120,
            max_order_quantity: 12,
            eta: "1-2 business days".to_string(),
            featured: true,
            listed_on: date(2024, 1, 18),
            warranty: "None".to_string(),
            description: "Full synthetic 5W-30 motor oil, 5 quart jug.".to_string(),
            specifications: specs(&[("Viscosity", "5W-30"), ("Volume", "5 qt")]),
            ..base(
                "mobil-5w30",
                "Synthetic Motor Oil 5W-30",
                "Mobil",
                "Engine",
                "MOB-1-5W30-5Q",
                Money::from_cents(2499),
            )
        },
        Part {
            rating: 4.5,
            review_count: 67,
            compatibility: strings(&["BMW 3 Series", "BMW 5 Series"]),
            stock_count: 6,
            max_order_quantity: 2,
            eta: "3-5 business days".to_string(),
            featured: true,
            listed_on: date(2024, 6, 1),
            description: "Mandrel-bent cold air intake with a dry filter element.".to_string(),
            features: strings(&["Up to 12 hp gain", "Dry synthetic filter"]),
            ..base(
                "cold-air-intake",
                "Performance Cold Air Intake",
                "AEM",
                "Engine",
                "AEM-21-8205",
                Money::from_cents(24999),
            )
        },
        Part {
            original_price: Some(Money::from_cents(15999)),
            rating: 4.8,
            review_count: 91,
            compatibility: strings(&["Chevrolet Silverado", "GMC Sierra"]),
            stock_count: 11,
            max_order_quantity: 4,
            eta: "2-4 business days".to_string(),
            featured: true,
            listed_on: date(2024, 3, 3),
            warranty: "Limited lifetime".to_string(),
            description: "Heavy duty twin-tube shocks for trucks that tow.".to_string(),
            ..base(
                "monroe-shocks",
                "Heavy Duty Shock Absorbers",
                "Monroe",
                "Suspension",
                "MON-911273",
                Money::from_cents(12999),
            )
        },
        Part {
            rating: 4.8,
            review_count: 512,
            compatibility: strings(&["2018-2023 Honda Accord", "2018-2022 Toyota Camry"]),
            stock_count: 80,
            eta: "1-2 business days".to_string(),
            fit_verified: true,
            listed_on: date(2024, 2, 14),
            description: "Iridium spark plugs, set of four.".to_string(),
            specifications: specs(&[("Tip", "Iridium"), ("Quantity", "4")]),
            ..base(
                "ngk-spark-plugs",
                "Spark Plug Set",
                "NGK",
                "Engine",
                "NGK-ILZKR7B11",
                Money::from_cents(2499),
            )
        },
        Part {
            rating: 4.6,
            review_count: 233,
            compatibility: strings(&["Universal"]),
            stock_count: 64,
            eta: "1-2 business days".to_string(),
            listed_on: date(2024, 4, 2),
            warranty: "None".to_string(),
            description: "Castrol EDGE full synthetic engine oil.".to_string(),
            ..base(
                "castrol-engine-oil",
                "Engine Oil",
                "Castrol",
                "Engine",
                "CAS-EDGE-5W30",
                Money::from_cents(3499),
            )
        },
        Part {
            rating: 4.5,
            review_count: 77,
            compatibility: strings(&["2018-2023 Honda Accord"]),
            stock_count: 33,
            fit_verified: true,
            listed_on: date(2024, 5, 9),
            description: "Activated charcoal cabin filter.".to_string(),
            ..base(
                "mann-cabin-filter",
                "Cabin Air Filter",
                "Mann",
                "Filters",
                "MANN-CUK2442",
                Money::from_cents(1899),
            )
        },
        Part {
            rating: 4.7,
            review_count: 140,
            compatibility: strings(&["Universal"]),
            stock_count: 45,
            listed_on: date(2024, 3, 27),
            warranty: "None".to_string(),
            description: "DOT 4 brake fluid, 1 liter.".to_string(),
            ..base(
                "bosch-brake-fluid",
                "Brake Fluid",
                "Bosch",
                "Brakes",
                "BOS-ESI6-1L",
                Money::from_cents(1299),
            )
        },
        Part {
            original_price: Some(Money::from_cents(59999)),
            rating: 4.7,
            review_count: 198,
            compatibility: strings(&["Most SUVs", "Most Sedans"]),
            stock_count: 18,
            max_order_quantity: 4,
            eta: "5-7 business days".to_string(),
            listed_on: date(2024, 6, 10),
            warranty: "6 years".to_string(),
            description: "Set of four X-Ice winter tires.".to_string(),
            ..base(
                "michelin-winter-tires",
                "Winter Tire Set",
                "Michelin",
                "Tires",
                "MIC-XICE-225",
                Money::from_cents(29999),
            )
        },
        Part {
            original_price: Some(Money::from_cents(44999)),
            rating: 4.4,
            review_count: 87,
            compatibility: strings(&["2018-2022 Toyota Camry"]),
            stock_count: 5,
            max_order_quantity: 2,
            listed_on: date(2024, 1, 30),
            warranty: "Limited lifetime".to_string(),
            description: "Complete quick-strut assembly, factory overstock.".to_string(),
            ..base(
                "monroe-strut-assembly",
                "Suspension Strut Assembly",
                "Monroe",
                "Suspension",
                "MON-172580",
                Money::from_cents(27999),
            )
        },
    ]
}

pub fn reviews_for(part_id: &str) -> Vec<Review> {
    let review = |id: &str, author: &str, rating: u8, day: u32, title: &str, content: &str, helpful: u32| Review {
        id: id.to_string(),
        part_id: part_id.to_string(),
        author: author.to_string(),
        rating,
        date: date(2024, 6, day),
        title: title.to_string(),
        content: content.to_string(),
        verified: true,
        helpful,
        images: Vec::new(),
    };
    match part_id {
        "akebono-brake-pads-front" => vec![
            Review {
                images: vec![PLACEHOLDER_IMAGE.to_string()],
                ..review(
                    "1",
                    "Mike Johnson",
                    5,
                    15,
                    "Excellent quality, perfect fit",
                    "These brake pads are fantastic. Installation was straightforward and they fit perfectly on my 2020 Accord. No noise and great stopping power.",
                    23,
                )
            },
            review(
                "2",
                "Sarah Chen",
                4,
                10,
                "Good value for money",
                "Quality parts at a reasonable price. Delivery was fast and packaging was secure. Would recommend.",
                15,
            ),
            review(
                "3",
                "David Wilson",
                5,
                5,
                "Professional grade quality",
                "As a mechanic, I can say these are top-notch. Great stopping power and very little dust compared to OEM.",
                31,
            ),
        ],
        "honda-oil-filter" => vec![review(
            "4",
            "Priya Patel",
            5,
            12,
            "Genuine part",
            "Exactly what the dealer uses, for half the price.",
            8,
        )],
        _ => Vec::new(),
    }
}

/// "You might also like" in the cart.
pub fn recommendations() -> Vec<&'static str> {
    vec![
        "ngk-spark-plugs",
        "castrol-engine-oil",
        "mann-cabin-filter",
        "bosch-brake-fluid",
    ]
}
