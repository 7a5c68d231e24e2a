use crate::search::contains_ignore_case;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub rating: f32,
    pub part_count: u32,
    pub categories: Vec<String>,
    pub is_oem: bool,
    pub is_premium: bool,
    pub founded_year: u16,
    pub country_of_origin: String,
}

impl Brand {
    /// The badge shown on the brand logo. OEM wins over premium.
    pub fn badge(&self) -> Option<&'static str> {
        if self.is_oem {
            Some("OEM")
        } else if self.is_premium {
            Some("Premium")
        } else {
            None
        }
    }

    /// Two-letter fallback used when the logo does not load.
    pub fn monogram(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandFilter {
    #[default]
    All,
    Oem,
    Premium,
}

impl BrandFilter {
    pub const ALL: [BrandFilter; 3] = [BrandFilter::All, BrandFilter::Oem, BrandFilter::Premium];

    pub fn label(self) -> &'static str {
        match self {
            BrandFilter::All => "All Brands",
            BrandFilter::Oem => "OEM",
            BrandFilter::Premium => "Premium",
        }
    }

    pub fn admits(self, brand: &Brand) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Oem => brand.is_oem,
            BrandFilter::Premium => brand.is_premium,
        }
    }
}

pub fn filter_brands(brands: &[Brand], query: &str, filter: BrandFilter) -> Vec<Brand> {
    let query = query.trim();
    brands
        .iter()
        .filter(|brand| {
            let matches_search = contains_ignore_case(&brand.name, query)
                || contains_ignore_case(&brand.description, query)
                || brand.categories.iter().any(|c| contains_ignore_case(c, query));
            matches_search && filter.admits(brand)
        })
        .cloned()
        .collect()
}

/// Asset path of a brand's logo. Slugs keep only ASCII letters and digits,
/// so `K&N` and `k&n` both resolve to `kn`.
pub fn brand_logo(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    format!("/assets/brands/{slug}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn logo_slug_drops_punctuation() {
        assert_eq!(brand_logo("K&N"), "/assets/brands/kn.svg");
        assert_eq!(brand_logo("Mann Filter"), "/assets/brands/mannfilter.svg");
    }

    #[test]
    fn filter_narrows_by_kind_and_search() {
        let brands = fixtures::brands();
        let oem = filter_brands(&brands, "", BrandFilter::Oem);
        assert_eq!(
            oem.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            ["Honda", "Toyota", "Denso"]
        );

        let premium = filter_brands(&brands, "", BrandFilter::Premium);
        assert!(premium.iter().all(|b| b.is_premium));
        assert_eq!(premium.len(), 8);

        let by_category = filter_brands(&brands, "suspension", BrandFilter::All);
        assert_eq!(
            by_category.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            ["Toyota", "Bilstein"]
        );
        assert!(filter_brands(&brands, "zzz", BrandFilter::All).is_empty());
    }

    #[test]
    fn badge_prefers_oem() {
        let brands = fixtures::brands();
        let honda = brands.iter().find(|b| b.id == "honda").unwrap();
        let bosch = brands.iter().find(|b| b.id == "bosch").unwrap();
        let gates = brands.iter().find(|b| b.id == "gates").unwrap();
        assert_eq!(honda.badge(), Some("OEM"));
        assert_eq!(bosch.badge(), Some("Premium"));
        assert_eq!(gates.badge(), None);
        assert_eq!(gates.monogram(), "GA");
    }
}
