//! Narrowing and ordering the parts listing.

use crate::error::MarketError;
use crate::models::money::Money;
use crate::models::part::Part;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub const PRICE_CEILING: Money = Money::from_dollars(1000);
pub const PRICE_STEP_DOLLARS: i64 = 10;

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Loose match between a navigation label and a catalog value: either one
/// contains the other, ignoring case. "Engine & Performance" matches
/// "Engine", "Mann Filter" matches "Mann".
pub fn loosely_matches(label: &str, value: &str) -> bool {
    let label = label.trim().to_lowercase();
    let value = value.trim().to_lowercase();
    if label.is_empty() || value.is_empty() {
        return false;
    }
    label.contains(&value) || value.contains(&label)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    Newest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Relevance,
        SortOrder::PriceLowToHigh,
        SortOrder::PriceHighToLow,
        SortOrder::Rating,
        SortOrder::Newest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceLowToHigh => "price-low",
            SortOrder::PriceHighToLow => "price-high",
            SortOrder::Rating => "rating",
            SortOrder::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
            SortOrder::Rating => "Customer Rating",
            SortOrder::Newest => "Newest First",
        }
    }

    fn compare(self, a: &Part, b: &Part) -> Ordering {
        match self {
            // featured parts first, catalog order otherwise (the sort is stable)
            SortOrder::Relevance => b.featured.cmp(&a.featured),
            SortOrder::PriceLowToHigh => a.price.cmp(&b.price),
            SortOrder::PriceHighToLow => b.price.cmp(&a.price),
            SortOrder::Rating => b.rating.total_cmp(&a.rating),
            SortOrder::Newest => b.listed_on.cmp(&a.listed_on),
        }
    }
}

impl FromStr for SortOrder {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim())
            .ok_or_else(|| MarketError::UnknownSortOrder(s.to_string()))
    }
}

/// Everything the parts listing can be narrowed by.
#[derive(Debug, Clone, PartialEq)]
pub struct PartQuery {
    pub search: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub brands: Vec<String>,
    pub min_price: Money,
    pub max_price: Money,
    pub in_stock_only: bool,
    pub fit_verified_only: bool,
    pub sort: SortOrder,
}

impl Default for PartQuery {
    fn default() -> Self {
        PartQuery {
            search: String::new(),
            category: None,
            brand: None,
            brands: Vec::new(),
            min_price: Money::ZERO,
            max_price: PRICE_CEILING,
            in_stock_only: false,
            fit_verified_only: false,
            sort: SortOrder::default(),
        }
    }
}

impl PartQuery {
    /// Builds the initial query from the `search`, `category` and `brand`
    /// query-string values.
    pub fn from_params(search: Option<&str>, category: Option<&str>, brand: Option<&str>) -> Self {
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        PartQuery {
            search: non_empty(search).unwrap_or_default(),
            category: non_empty(category),
            brand: non_empty(brand),
            ..PartQuery::default()
        }
    }

    pub fn set_brand_checked(&mut self, brand: &str, checked: bool) {
        let present = self.brands.iter().any(|b| b == brand);
        if checked && !present {
            self.brands.push(brand.to_string());
        } else if !checked {
            self.brands.retain(|b| b != brand);
        }
    }

    /// Sets the price window from whole-dollar inputs, snapping to the
    /// slider step and keeping `min <= max` within `0..=PRICE_CEILING`.
    pub fn set_price_range(&mut self, min_dollars: i64, max_dollars: i64) {
        let ceiling = PRICE_CEILING.whole_dollars();
        let snap = |dollars: i64| {
            let clamped = dollars.clamp(0, ceiling);
            clamped - clamped % PRICE_STEP_DOLLARS
        };
        let (low, high) = (snap(min_dollars), snap(max_dollars));
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.min_price = Money::from_dollars(low);
        self.max_price = Money::from_dollars(high);
    }

    pub fn matches(&self, part: &Part) -> bool {
        let search = self.search.trim();
        let matches_search = contains_ignore_case(&part.name, search)
            || contains_ignore_case(&part.brand, search)
            || contains_ignore_case(&part.category, search)
            || contains_ignore_case(&part.part_number, search)
            || part.compatibility.iter().any(|c| contains_ignore_case(c, search));

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| loosely_matches(category, &part.category));
        let matches_brand_link = self
            .brand
            .as_deref()
            .map_or(true, |brand| loosely_matches(brand, &part.brand));
        let matches_brands = self.brands.is_empty() || self.brands.iter().any(|b| *b == part.brand);
        let matches_price = part.price >= self.min_price && part.price <= self.max_price;

        matches_search
            && matches_category
            && matches_brand_link
            && matches_brands
            && matches_price
            && (!self.in_stock_only || part.in_stock)
            && (!self.fit_verified_only || part.fit_verified)
    }

    pub fn apply(&self, parts: &[Part]) -> Vec<Part> {
        let mut hits: Vec<Part> = parts.iter().filter(|part| self.matches(part)).cloned().collect();
        hits.sort_by(|a, b| self.sort.compare(a, b));
        hits
    }

    /// Whether anything beyond the defaults narrows the list.
    pub fn is_narrowed(&self) -> bool {
        let defaults = PartQuery {
            sort: self.sort,
            ..PartQuery::default()
        };
        *self != defaults
    }

    /// Resets every filter but keeps the chosen sort order.
    pub fn clear(&mut self) {
        *self = PartQuery {
            sort: self.sort,
            ..PartQuery::default()
        };
    }
}

/// Distinct brands in catalog order, for the brand checkboxes.
pub fn catalog_brands(parts: &[Part]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for part in parts {
        if !brands.contains(&part.brand) {
            brands.push(part.brand.clone());
        }
    }
    brands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids(parts: &[Part]) -> Vec<&str> {
        parts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn search_is_a_case_insensitive_substring() {
        let parts = fixtures::parts();
        let query = PartQuery::from_params(Some("BRAKE"), None, None);
        let hits = query.apply(&parts);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("brake")
            || p.category.to_lowercase().contains("brake")));

        let by_vehicle = PartQuery::from_params(Some("silverado"), None, None).apply(&parts);
        assert_eq!(ids(&by_vehicle), ["monroe-shocks"]);
    }

    #[test]
    fn category_and_brand_links_match_loosely() {
        let parts = fixtures::parts();
        let engine = PartQuery::from_params(None, Some("Engine & Performance"), None).apply(&parts);
        assert!(!engine.is_empty());
        assert!(engine.iter().all(|p| p.category == "Engine"));

        let mann = PartQuery::from_params(None, None, Some("Mann Filter")).apply(&parts);
        assert_eq!(ids(&mann), ["mann-cabin-filter"]);

        let tires = PartQuery::from_params(None, Some("Wheels & Tires"), None).apply(&parts);
        assert_eq!(ids(&tires), ["michelin-winter-tires"]);
    }

    #[test]
    fn checkbox_filters_narrow() {
        let parts = fixtures::parts();
        let mut query = PartQuery::default();
        query.in_stock_only = true;
        assert!(query.apply(&parts).iter().all(|p| p.in_stock));
        assert!(!ids(&query.apply(&parts)).contains(&"kn-air-filter"));

        query.set_brand_checked("Honda", true);
        query.set_brand_checked("Honda", true);
        assert_eq!(query.brands, ["Honda"]);
        assert_eq!(ids(&query.apply(&parts)), ["honda-oil-filter"]);

        query.set_brand_checked("Honda", false);
        query.fit_verified_only = true;
        assert!(query.apply(&parts).iter().all(|p| p.fit_verified && p.in_stock));
        assert!(query.is_narrowed());

        query.clear();
        assert!(!query.is_narrowed());
        assert_eq!(query.apply(&parts).len(), parts.len());
    }

    #[test]
    fn price_range_snaps_and_orders() {
        let mut query = PartQuery::default();
        query.set_price_range(95, 15);
        assert_eq!(query.min_price, Money::from_dollars(10));
        assert_eq!(query.max_price, Money::from_dollars(90));

        query.set_price_range(-5, 5000);
        assert_eq!(query.min_price, Money::ZERO);
        assert_eq!(query.max_price, PRICE_CEILING);

        let parts = fixtures::parts();
        query.set_price_range(0, 20);
        let cheap = query.apply(&parts);
        assert!(cheap.iter().all(|p| p.price <= Money::from_dollars(20)));
        assert!(ids(&cheap).contains(&"honda-oil-filter"));
    }

    #[test]
    fn sort_orders() {
        let parts = fixtures::parts();
        let mut query = PartQuery::default();

        query.sort = SortOrder::PriceLowToHigh;
        let sorted = query.apply(&parts);
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));

        query.sort = SortOrder::PriceHighToLow;
        let sorted = query.apply(&parts);
        assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));

        query.sort = SortOrder::Rating;
        let sorted = query.apply(&parts);
        assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));

        query.sort = SortOrder::Newest;
        let sorted = query.apply(&parts);
        assert!(sorted.windows(2).all(|w| w[0].listed_on >= w[1].listed_on));

        query.sort = SortOrder::Relevance;
        let sorted = query.apply(&parts);
        let first_plain = sorted.iter().position(|p| !p.featured).unwrap();
        assert!(sorted[first_plain..].iter().all(|p| !p.featured));
    }

    #[test]
    fn sort_keys_round_trip_through_query_strings() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
        assert_eq!(
            "cheapest".parse::<SortOrder>(),
            Err(MarketError::UnknownSortOrder("cheapest".into()))
        );
    }

    #[test]
    fn loose_matching_needs_both_sides() {
        assert!(loosely_matches("Electrical & Lighting", "Lighting"));
        assert!(loosely_matches("k&n", "K&N"));
        assert!(!loosely_matches("", "Engine"));
        assert!(!loosely_matches("Brakes", "Engine"));
    }

    #[test]
    fn brand_list_is_distinct() {
        let brands = catalog_brands(&fixtures::parts());
        let mut deduped = brands.clone();
        deduped.dedup();
        assert_eq!(brands, deduped);
        assert_eq!(brands[0], "Akebono");
    }
}
