use crate::error::{MarketError, MarketResult};
use crate::models::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A catalog entry. Every page that lists parts (featured cards, the parts
/// listing, deals, the cart and the wishlist) refers back to one of these by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub part_number: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub rating: f32,
    pub review_count: u32,
    pub images: Vec<String>,
    pub compatibility: Vec<String>,
    pub in_stock: bool,
    pub stock_count: u32,
    pub max_order_quantity: u32,
    pub eta: String,
    pub fit_verified: bool,
    pub featured: bool,
    pub listed_on: NaiveDate,
    pub warranty: String,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: Vec<(String, String)>,
}

impl Part {
    pub fn image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// How much cheaper the part is than its original price, if it is on sale.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Clamps a requested quantity to what one order may hold.
    pub fn clamp_quantity(&self, quantity: u32) -> u32 {
        quantity.clamp(1, self.max_order_quantity.max(1))
    }

    /// The first `shown` compatibility entries and how many were left out.
    pub fn compatibility_preview(&self, shown: usize) -> (&[String], usize) {
        let cut = shown.min(self.compatibility.len());
        (&self.compatibility[..cut], self.compatibility.len() - cut)
    }
}

pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

pub fn find_part<'a>(parts: &'a [Part], id: &str) -> MarketResult<&'a Part> {
    parts
        .iter()
        .find(|part| part.id == id)
        .ok_or_else(|| MarketError::UnknownPart(id.to_string()))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub part_id: String,
    pub author: String,
    pub rating: u8,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub verified: bool,
    pub helpful: u32,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBucket {
    pub stars: u8,
    pub percentage: u8,
}

/// Share of reviews per star level, five stars first.
pub fn rating_distribution(reviews: &[Review]) -> Vec<RatingBucket> {
    let total = reviews.len() as u32;
    (1..=5u8)
        .rev()
        .map(|stars| {
            let count = reviews.iter().filter(|r| r.rating == stars).count() as u32;
            let percentage = if total == 0 {
                0
            } else {
                ((count * 100 + total / 2) / total) as u8
            };
            RatingBucket { stars, percentage }
        })
        .collect()
}

/// Records "helpful" votes, one per review for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpfulVotes {
    voted: HashSet<String>,
}

impl HelpfulVotes {
    pub fn has_voted(&self, review_id: &str) -> bool {
        self.voted.contains(review_id)
    }

    /// Bumps the review's helpful count unless it was already voted on.
    pub fn vote(&mut self, reviews: &mut [Review], review_id: &str) -> bool {
        let Some(review) = reviews.iter_mut().find(|r| r.id == review_id) else {
            return false;
        };
        if !self.voted.insert(review_id.to_string()) {
            return false;
        }
        review.helpful += 1;
        true
    }
}

pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(sum as f32 / reviews.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn sale_parts_report_savings() {
        let parts = fixtures::parts();
        let pads = find_part(&parts, "akebono-brake-pads-front").unwrap();
        assert!(pads.is_on_sale());
        assert_eq!(pads.savings(), Some(Money::from_cents(2000)));

        let filter = find_part(&parts, "honda-oil-filter").unwrap();
        assert!(!filter.is_on_sale());
        assert_eq!(filter.savings(), None);
    }

    #[test]
    fn unknown_part_is_an_error() {
        let parts = fixtures::parts();
        assert_eq!(
            find_part(&parts, "nope").unwrap_err(),
            MarketError::UnknownPart("nope".into())
        );
    }

    #[test]
    fn compatibility_preview_counts_the_rest() {
        let parts = fixtures::parts();
        let pads = find_part(&parts, "akebono-brake-pads-front").unwrap();
        let (shown, rest) = pads.compatibility_preview(2);
        assert_eq!(shown.len(), 2);
        assert_eq!(rest, pads.compatibility.len() - 2);
    }

    #[test]
    fn distribution_sums_reviews_by_star() {
        let reviews = fixtures::reviews_for("akebono-brake-pads-front");
        let buckets = rating_distribution(&reviews);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0], RatingBucket { stars: 5, percentage: 67 });
        assert_eq!(buckets[1], RatingBucket { stars: 4, percentage: 33 });
        assert!(buckets[2..].iter().all(|b| b.percentage == 0));
        assert_eq!(rating_distribution(&[]).iter().map(|b| b.percentage).sum::<u8>(), 0);
    }

    #[test]
    fn quantity_stays_within_order_limit() {
        let parts = fixtures::parts();
        let pads = find_part(&parts, "akebono-brake-pads-front").unwrap();
        assert_eq!(pads.clamp_quantity(0), 1);
        assert_eq!(pads.clamp_quantity(3), 3);
        assert_eq!(pads.clamp_quantity(9), 5);
    }

    #[test]
    fn helpful_counts_once_per_review() {
        let mut reviews = fixtures::reviews_for("akebono-brake-pads-front");
        let id = reviews[0].id.clone();
        let before = reviews[0].helpful;
        let mut votes = HelpfulVotes::default();

        assert!(votes.vote(&mut reviews, &id));
        assert!(!votes.vote(&mut reviews, &id));
        assert!(!votes.vote(&mut reviews, "missing"));
        assert_eq!(reviews[0].helpful, before + 1);
        assert!(votes.has_voted(&id));
    }
}
