use crate::models::brand::{brand_logo, Brand};

#[allow(clippy::too_many_arguments)]
fn brand(
    id: &str,
    name: &str,
    description: &str,
    rating: f32,
    part_count: u32,
    categories: &[&str],
    (is_oem, is_premium): (bool, bool),
    (founded_year, country): (u16, &str),
) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        logo: brand_logo(name),
        description: description.to_string(),
        rating,
        part_count,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        is_oem,
        is_premium,
        founded_year,
        country_of_origin: country.to_string(),
    }
}

pub fn brands() -> Vec<Brand> {
    vec![
        brand(
            "honda",
            "Honda",
            "Original Equipment Manufacturer for Honda vehicles",
            4.9,
            15420,
            &["Engine", "Transmission", "Brakes", "Electrical"],
            (true, true),
            (1948, "Japan"),
        ),
        brand(
            "toyota",
            "Toyota",
            "Genuine Toyota parts and accessories",
            4.8,
            14230,
            &["Engine", "Suspension", "Body", "Interior"],
            (true, true),
            (1937, "Japan"),
        ),
        brand(
            "bosch",
            "Bosch",
            "Leading automotive technology and parts manufacturer",
            4.7,
            8930,
            &["Electrical", "Engine", "Brakes", "Fuel System"],
            (false, true),
            (1886, "Germany"),
        ),
        brand(
            "akebono",
            "Akebono",
            "Premium brake systems and components",
            4.6,
            2840,
            &["Brakes"],
            (false, true),
            (1929, "Japan"),
        ),
        brand(
            "denso",
            "Denso",
            "Advanced automotive technology and components",
            4.8,
            7650,
            &["Electrical", "Cooling", "Engine", "AC"],
            (true, true),
            (1949, "Japan"),
        ),
        brand(
            "ngk",
            "NGK",
            "Spark plugs and ignition system specialists",
            4.7,
            3200,
            &["Engine", "Electrical"],
            (false, true),
            (1936, "Japan"),
        ),
        brand(
            "kn",
            "K&N",
            "High-performance air filters and intake systems",
            4.5,
            1890,
            &["Engine", "Performance"],
            (false, true),
            (1969, "USA"),
        ),
        brand(
            "bilstein",
            "Bilstein",
            "Premium suspension systems and components",
            4.8,
            2100,
            &["Suspension"],
            (false, true),
            (1873, "Germany"),
        ),
        brand(
            "mann",
            "Mann Filter",
            "Professional filtration solutions",
            4.6,
            4560,
            &["Engine", "Transmission", "Fuel System"],
            (false, false),
            (1941, "Germany"),
        ),
        brand(
            "gates",
            "Gates",
            "Belts, hoses, and fluid power products",
            4.4,
            3780,
            &["Engine", "Cooling", "Transmission"],
            (false, false),
            (1911, "USA"),
        ),
    ]
}
