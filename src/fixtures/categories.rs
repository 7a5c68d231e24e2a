use crate::models::category::{Category, CategoryTile};

fn category(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    part_count: u32,
    subcategories: [&str; 5],
    featured: bool,
) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        part_count,
        subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        featured,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(
            "engine",
            "Engine & Performance",
            "Engine components, performance parts, and tuning accessories",
            "⚙️",
            2543,
            ["Air Filters", "Oil Filters", "Spark Plugs", "Turbochargers", "Engine Mounts"],
            true,
        ),
        category(
            "brakes",
            "Brakes & Safety",
            "Brake pads, rotors, calipers, and safety equipment",
            "🛑",
            1876,
            ["Brake Pads", "Brake Rotors", "Brake Calipers", "Brake Lines", "ABS Components"],
            true,
        ),
        category(
            "suspension",
            "Suspension & Steering",
            "Shocks, struts, springs, and steering components",
            "🔧",
            1234,
            ["Shocks", "Struts", "Springs", "Control Arms", "Tie Rods"],
            true,
        ),
        category(
            "electrical",
            "Electrical & Lighting",
            "Batteries, alternators, lighting, and electrical systems",
            "⚡",
            987,
            ["Batteries", "Alternators", "Headlights", "Tail Lights", "Wiring"],
            false,
        ),
        category(
            "transmission",
            "Transmission & Drivetrain",
            "Transmission parts, clutches, and drivetrain components",
            "⚙️",
            756,
            ["Transmission Fluid", "Clutch Kits", "CV Joints", "Differentials", "Drive Shafts"],
            false,
        ),
        category(
            "cooling",
            "Cooling & Climate",
            "Radiators, thermostats, AC components, and cooling systems",
            "❄️",
            643,
            ["Radiators", "Thermostats", "AC Compressors", "Cooling Fans", "Heater Cores"],
            false,
        ),
        category(
            "exhaust",
            "Exhaust & Emissions",
            "Exhaust systems, catalytic converters, and emission controls",
            "💨",
            521,
            ["Mufflers", "Catalytic Converters", "Exhaust Pipes", "Headers", "Gaskets"],
            false,
        ),
        category(
            "body",
            "Body & Exterior",
            "Body panels, mirrors, bumpers, and exterior accessories",
            "🚗",
            432,
            ["Bumpers", "Mirrors", "Door Handles", "Trim", "Weather Stripping"],
            false,
        ),
        category(
            "interior",
            "Interior & Comfort",
            "Seats, dashboard, carpets, and interior accessories",
            "🪑",
            389,
            ["Seats", "Dashboard", "Floor Mats", "Seat Covers", "Interior Trim"],
            false,
        ),
        category(
            "wheels",
            "Wheels & Tires",
            "Wheels, tires, tire pressure sensors, and wheel accessories",
            "🛞",
            298,
            ["Wheels", "Tires", "TPMS Sensors", "Lug Nuts", "Wheel Covers"],
            false,
        ),
    ]
}

fn tile(id: &str, name: &str, icon: &str, part_count: u32, description: &str) -> CategoryTile {
    CategoryTile {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        part_count,
        description: description.to_string(),
    }
}

/// The eight tiles of the marketplace category grid.
pub fn category_tiles() -> Vec<CategoryTile> {
    vec![
        tile("engine", "Engine", "🔧", 2450, "Engine components and performance parts"),
        tile("electrical", "Electrical", "⚡", 1830, "Wiring, batteries, and electrical systems"),
        tile("electronics", "Electronics", "🖥", 1200, "ECUs, sensors, and control modules"),
        tile("dashboard", "Dashboard", "⏱", 890, "Gauges, displays, and interior electronics"),
        tile("brakes", "Brakes", "🛑", 1650, "Brake pads, rotors, and brake systems"),
        tile("filters", "Filters", "🌀", 750, "Air, oil, and fuel filters"),
        tile("lighting", "Lighting", "💡", 620, "Headlights, taillights, and LED upgrades"),
        tile("fuel", "Fuel System", "⛽", 480, "Fuel pumps, injectors, and fuel lines"),
    ]
}

/// Shortcuts on the home page.
pub fn quick_categories() -> Vec<CategoryTile> {
    vec![
        tile("engine", "Engine", "⚙️", 2500, ""),
        tile("brakes", "Brakes", "🛑", 1800, ""),
        tile("suspension", "Suspension", "🔧", 1200, ""),
        tile("electrical", "Electrical", "⚡", 980, ""),
    ]
}
