use crate::error::{MarketError, MarketResult};
use crate::models::money::Money;
use crate::models::part::Part;
use serde::{Deserialize, Serialize};

/// Orders above this subtotal ship for free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_dollars(75);
pub const FLAT_SHIPPING: Money = Money::from_cents(999);
pub const TAX_PERCENT: i64 = 8;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoCode {
    pub code: &'static str,
    pub percent_off: i64,
}

pub const PROMO_CODES: &[PromoCode] = &[PromoCode { code: "SAVE10", percent_off: 10 }];

pub fn lookup_promo(code: &str) -> MarketResult<PromoCode> {
    let code = code.trim();
    PROMO_CODES
        .iter()
        .find(|promo| promo.code.eq_ignore_ascii_case(code))
        .copied()
        .ok_or_else(|| MarketError::InvalidPromoCode(code.to_string()))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub part_id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub part_number: String,
    pub image: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub quantity: u32,
    pub in_stock: bool,
    pub max_quantity: u32,
    pub fit_verified: bool,
}

impl CartItem {
    pub fn from_part(part: &Part, quantity: u32) -> Self {
        let max_quantity = part.max_order_quantity.max(1);
        CartItem {
            part_id: part.id.clone(),
            name: part.name.clone(),
            brand: part.brand.clone(),
            category: part.category.clone(),
            part_number: part.part_number.clone(),
            image: part.image().to_string(),
            price: part.price,
            original_price: part.original_price,
            quantity: quantity.clamp(1, max_quantity),
            in_stock: part.in_stock,
            max_quantity,
            fit_verified: part.fit_verified,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    pub fn line_savings(&self) -> Money {
        let original = self.original_price.unwrap_or(self.price);
        (original - self.price) * self.quantity
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }

    pub fn can_increase(&self) -> bool {
        self.quantity < self.max_quantity
    }
}

/// Price breakdown shown in the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Money,
    pub savings: Money,
    pub promo_discount: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl CartSummary {
    /// How much more must be added before shipping becomes free.
    pub fn free_shipping_remaining(&self) -> Option<Money> {
        (!self.shipping.is_zero()).then(|| FREE_SHIPPING_THRESHOLD - self.subtotal)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    #[serde(skip)]
    promo: Option<PromoCode>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Cart { items, promo: None }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn get(&self, part_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.part_id == part_id)
    }

    /// Adds `quantity` units of `part`, merging with an existing line.
    pub fn add(&mut self, part: &Part, quantity: u32) {
        match self.items.iter_mut().find(|item| item.part_id == part.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity).clamp(1, item.max_quantity);
            }
            None => self.items.push(CartItem::from_part(part, quantity)),
        }
    }

    /// Sets a line's quantity, clamped to `1..=max_quantity`. Returns the
    /// quantity actually stored, or `None` for an unknown line.
    pub fn update_quantity(&mut self, part_id: &str, quantity: u32) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.part_id == part_id)?;
        item.quantity = quantity.clamp(1, item.max_quantity);
        Some(item.quantity)
    }

    pub fn increment(&mut self, part_id: &str) -> Option<u32> {
        let current = self.get(part_id)?.quantity;
        self.update_quantity(part_id, current.saturating_add(1))
    }

    pub fn decrement(&mut self, part_id: &str) -> Option<u32> {
        let current = self.get(part_id)?.quantity;
        self.update_quantity(part_id, current.saturating_sub(1))
    }

    pub fn remove(&mut self, part_id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.part_id == part_id)?;
        Some(self.items.remove(index))
    }

    pub fn promo(&self) -> Option<PromoCode> {
        self.promo
    }

    pub fn apply_promo(&mut self, code: &str) -> MarketResult<PromoCode> {
        if let Some(applied) = self.promo {
            return Err(MarketError::PromoAlreadyApplied(applied.code.to_string()));
        }
        let promo = lookup_promo(code)?;
        self.promo = Some(promo);
        Ok(promo)
    }

    pub fn has_out_of_stock(&self) -> bool {
        self.items.iter().any(|item| !item.in_stock)
    }

    /// Checkout stays open while at least one line can ship.
    pub fn can_checkout(&self) -> bool {
        self.items.iter().any(|item| item.in_stock)
    }

    pub fn summary(&self) -> CartSummary {
        let subtotal: Money = self.items.iter().map(CartItem::line_total).sum();
        let savings: Money = self.items.iter().map(CartItem::line_savings).sum();
        let promo_discount = self
            .promo
            .map(|promo| subtotal.percent(promo.percent_off))
            .unwrap_or(Money::ZERO);
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Money::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = (subtotal - promo_discount).percent(TAX_PERCENT);
        CartSummary {
            subtotal,
            savings,
            promo_discount,
            shipping,
            tax,
            total: subtotal - promo_discount + shipping + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn seeded() -> Cart {
        fixtures::starter_cart(&fixtures::parts())
    }

    #[test]
    fn seeded_totals() {
        let cart = seeded();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.unit_count(), 4);

        let summary = cart.summary();
        assert_eq!(summary.subtotal, Money::from_cents(16096));
        assert_eq!(summary.savings, Money::from_cents(2000));
        assert_eq!(summary.promo_discount, Money::ZERO);
        assert_eq!(summary.shipping, Money::ZERO);
        assert_eq!(summary.tax, Money::from_cents(1288));
        assert_eq!(summary.total, Money::from_cents(17384));
        assert_eq!(summary.free_shipping_remaining(), None);
    }

    #[test]
    fn promo_applies_once_case_insensitively() {
        let mut cart = seeded();
        assert_eq!(
            cart.apply_promo("bogus"),
            Err(MarketError::InvalidPromoCode("bogus".into()))
        );
        assert!(cart.promo().is_none());

        let promo = cart.apply_promo(" save10 ").unwrap();
        assert_eq!(promo.code, "SAVE10");
        assert_eq!(
            cart.apply_promo("SAVE10"),
            Err(MarketError::PromoAlreadyApplied("SAVE10".into()))
        );

        let summary = cart.summary();
        assert_eq!(summary.promo_discount, Money::from_cents(1610));
        assert_eq!(summary.tax, Money::from_cents(1159));
        assert_eq!(summary.total, Money::from_cents(15645));
    }

    #[test]
    fn quantity_is_clamped() {
        let mut cart = seeded();
        assert_eq!(cart.decrement("akebono-brake-pads-front"), Some(1));
        assert_eq!(cart.update_quantity("akebono-brake-pads-front", 0), Some(1));
        assert_eq!(cart.update_quantity("akebono-brake-pads-front", 99), Some(5));
        assert_eq!(cart.increment("akebono-brake-pads-front"), Some(5));
        assert_eq!(cart.update_quantity("missing", 2), None);
    }

    #[test]
    fn adding_merges_lines() {
        let parts = fixtures::parts();
        let mut cart = seeded();
        let filter = parts.iter().find(|p| p.id == "honda-oil-filter").unwrap();
        cart.add(filter, 3);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.get("honda-oil-filter").unwrap().quantity, 5);

        let plugs = parts.iter().find(|p| p.id == "ngk-spark-plugs").unwrap();
        cart.add(plugs, 1);
        assert_eq!(cart.len(), 4);
    }

    #[test]
    fn small_orders_pay_shipping() {
        let parts = fixtures::parts();
        let mut cart = Cart::default();
        cart.add(parts.iter().find(|p| p.id == "honda-oil-filter").unwrap(), 2);
        let summary = cart.summary();
        assert_eq!(summary.shipping, FLAT_SHIPPING);
        assert_eq!(summary.free_shipping_remaining(), Some(Money::from_cents(5002)));
    }

    #[test]
    fn checkout_blocked_only_when_nothing_ships() {
        let mut cart = seeded();
        assert!(cart.has_out_of_stock());
        assert!(cart.can_checkout());

        cart.remove("akebono-brake-pads-front");
        cart.remove("honda-oil-filter");
        assert!(!cart.can_checkout());

        cart.remove("kn-air-filter");
        assert!(cart.is_empty());
        assert!(!cart.can_checkout());
    }
}
