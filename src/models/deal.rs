use crate::error::MarketError;
use crate::models::money::Money;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stock level that reads as a full bar.
pub const FULL_STOCK: u32 = 20;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealType {
    Flash,
    Clearance,
    Bulk,
    Seasonal,
}

impl DealType {
    pub const ALL: [DealType; 4] = [
        DealType::Flash,
        DealType::Clearance,
        DealType::Bulk,
        DealType::Seasonal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DealType::Flash => "flash",
            DealType::Clearance => "clearance",
            DealType::Bulk => "bulk",
            DealType::Seasonal => "seasonal",
        }
    }

    /// Filter button label.
    pub fn button_label(self) -> &'static str {
        match self {
            DealType::Flash => "Flash Sales",
            DealType::Clearance => "Clearance",
            DealType::Bulk => "Bulk Deals",
            DealType::Seasonal => "Seasonal",
        }
    }

    /// Section heading when the filter is active.
    pub fn heading(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{capitalized} Deals")
    }

    pub fn icon(self) -> &'static str {
        match self {
            DealType::Flash => "⚡",
            DealType::Clearance => "🏷",
            DealType::Bulk => "🛒",
            DealType::Seasonal => "📅",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            DealType::Flash => "deal-badge flash",
            DealType::Clearance => "deal-badge clearance",
            DealType::Bulk => "deal-badge bulk",
            DealType::Seasonal => "deal-badge seasonal",
        }
    }
}

impl FromStr for DealType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DealType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MarketError::UnknownDealType(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: String,
    pub part_id: String,
    pub title: String,
    pub description: String,
    pub original_price: Money,
    pub sale_price: Money,
    pub image: String,
    pub brand: String,
    pub category: String,
    pub rating: f32,
    pub reviews: u32,
    pub ends_at: DateTime<Utc>,
    pub stock_left: Option<u32>,
    pub deal_type: DealType,
    pub is_hot: bool,
    pub is_featured: bool,
}

impl Deal {
    /// Discount off the original price, rounded to a whole percent.
    pub fn discount_percent(&self) -> u32 {
        let original = self.original_price.cents();
        if original <= 0 {
            return 0;
        }
        let off = (original - self.sale_price.cents()).max(0);
        ((off * 100 + original / 2) / original) as u32
    }

    pub fn time_left(&self, now: DateTime<Utc>) -> Duration {
        (self.ends_at - now).max(Duration::zero())
    }

    /// Width of the stock bar in percent; unknown stock reads as full.
    pub fn stock_progress(&self) -> f64 {
        match self.stock_left {
            Some(left) if left > 0 => (f64::from(left) / f64::from(FULL_STOCK) * 100.0).min(100.0),
            _ => 100.0,
        }
    }
}

pub fn filter_deals(deals: &[Deal], filter: Option<DealType>) -> Vec<Deal> {
    deals
        .iter()
        .filter(|deal| filter.map_or(true, |kind| deal.deal_type == kind))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn discounts_match_the_advertised_percentages() {
        let deals = fixtures::deals(Utc::now());
        let discounts: Vec<_> = deals.iter().map(Deal::discount_percent).collect();
        assert_eq!(discounts, [37, 20, 33, 50, 34, 38]);
    }

    #[test]
    fn stock_bar() {
        let deals = fixtures::deals(Utc::now());
        assert_eq!(deals[0].stock_progress(), 60.0);
        assert_eq!(deals[1].stock_progress(), 100.0);
    }

    #[test]
    fn filtering_by_type() {
        let deals = fixtures::deals(Utc::now());
        assert_eq!(filter_deals(&deals, None).len(), 6);
        let flash = filter_deals(&deals, Some(DealType::Flash));
        assert_eq!(flash.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);
        assert_eq!(filter_deals(&deals, Some(DealType::Clearance)).len(), 1);
    }

    #[test]
    fn parses_query_values() {
        assert_eq!("Bulk".parse::<DealType>(), Ok(DealType::Bulk));
        assert_eq!(
            "bogus".parse::<DealType>(),
            Err(MarketError::UnknownDealType("bogus".into()))
        );
        assert_eq!(DealType::Seasonal.heading(), "Seasonal Deals");
    }

    #[test]
    fn expired_deals_have_no_time_left() {
        let now = Utc::now();
        let mut deal = fixtures::deals(now).remove(0);
        deal.ends_at = now - Duration::hours(1);
        assert_eq!(deal.time_left(now), Duration::zero());
    }
}
