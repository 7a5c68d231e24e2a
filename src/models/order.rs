use crate::error::{MarketError, MarketResult};
use crate::models::money::Money;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Processing,
    InTransit,
    Delivered,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Index into [`StepKind::ALL`] of the step this status sits on.
    fn step_index(self) -> usize {
        match self {
            OrderStatus::Processing => 1,
            OrderStatus::InTransit => 2,
            OrderStatus::Delivered => 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Placed,
    Processing,
    Shipped,
    Delivered,
}

impl StepKind {
    pub const ALL: [StepKind; 4] = [
        StepKind::Placed,
        StepKind::Processing,
        StepKind::Shipped,
        StepKind::Delivered,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StepKind::Placed => "Order Placed",
            StepKind::Processing => "Processing",
            StepKind::Shipped => "Shipped",
            StepKind::Delivered => "Delivered",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StepKind::Placed => "Your order has been confirmed and is being prepared",
            StepKind::Processing => "Items are being picked and packed",
            StepKind::Shipped => "Package is on its way to you",
            StepKind::Delivered => "Package has been delivered",
        }
    }

    /// Extra detail shown under the step the order is currently on.
    pub fn current_note(self) -> &'static str {
        match self {
            StepKind::Placed => "We have received your order and will start on it shortly",
            StepKind::Processing => "Our warehouse team is packing your parts and will hand them to the carrier soon",
            StepKind::Shipped => "Your package is currently on the delivery truck and will arrive today between 10 AM - 6 PM",
            StepKind::Delivered => "Your package was left at the front door",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StepKind::Placed => "✔",
            StepKind::Processing => "📦",
            StepKind::Shipped => "🚚",
            StepKind::Delivered => "📍",
        }
    }

    /// Time after placement at which the step is recorded.
    fn offset(self) -> Duration {
        match self {
            StepKind::Placed => Duration::zero(),
            StepKind::Processing => Duration::hours(24),
            StepKind::Shipped => Duration::hours(36),
            StepKind::Delivered => Duration::hours(72),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl StepStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            StepStatus::Completed => "step-completed",
            StepStatus::Current => "step-current",
            StepStatus::Pending => "step-pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStep {
    pub kind: StepKind,
    pub status: StepStatus,
    pub at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub part_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Money,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ShippingAddress {
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    pub number: String,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub tracking_number: String,
    pub carrier: String,
    pub lines: Vec<OrderLine>,
    pub shipping_address: ShippingAddress,
}

impl Order {
    pub fn current_step(&self) -> usize {
        self.status.step_index()
    }

    pub fn steps(&self) -> Vec<OrderStep> {
        let current = self.current_step();
        let delivered = self.status == OrderStatus::Delivered;
        StepKind::ALL
            .iter()
            .enumerate()
            .map(|(index, &kind)| {
                let status = if index < current || (index == current && delivered) {
                    StepStatus::Completed
                } else if index == current {
                    StepStatus::Current
                } else {
                    StepStatus::Pending
                };
                let at = (status != StepStatus::Pending).then(|| self.placed_at + kind.offset());
                OrderStep { kind, status, at }
            })
            .collect()
    }

    /// Share of the delivery journey covered, in percent.
    pub fn progress_percent(&self) -> f64 {
        (self.current_step() + 1) as f64 / StepKind::ALL.len() as f64 * 100.0
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price * line.quantity).sum()
    }
}

pub fn find_order<'a>(orders: &'a [Order], number: &str) -> MarketResult<&'a Order> {
    orders
        .iter()
        .find(|order| order.number.eq_ignore_ascii_case(number.trim()))
        .ok_or_else(|| MarketError::UnknownOrder(number.to_string()))
}

/// The order to show for an optional `?order=` value. Unknown numbers fall
/// back to the first order and report why.
pub fn resolve_order<'a>(
    orders: &'a [Order],
    requested: Option<&str>,
) -> (Option<&'a Order>, Option<MarketError>) {
    match requested.filter(|n| !n.trim().is_empty()).map(|n| find_order(orders, n)) {
        Some(Ok(order)) => (Some(order), None),
        Some(Err(err)) => (orders.first(), Some(err)),
        None => (orders.first(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn in_transit_order_is_on_the_shipped_step() {
        let orders = fixtures::orders();
        let order = find_order(&orders, "ORD-2024-001").unwrap();
        let statuses: Vec<_> = order.steps().iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            [
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Current,
                StepStatus::Pending
            ]
        );
        assert_eq!(order.progress_percent(), 75.0);
        assert!(order.steps()[3].at.is_none());
        assert_eq!(order.total(), Money::from_cents(11497));
    }

    #[test]
    fn delivered_order_completes_every_step() {
        let orders = fixtures::orders();
        let order = find_order(&orders, "ord-2024-002").unwrap();
        assert!(order.steps().iter().all(|s| s.status == StepStatus::Completed));
        assert_eq!(order.progress_percent(), 100.0);
    }

    #[test]
    fn unknown_order_number() {
        let orders = fixtures::orders();
        assert_eq!(
            find_order(&orders, "ORD-1").unwrap_err(),
            MarketError::UnknownOrder("ORD-1".into())
        );
    }

    #[test]
    fn unknown_order_number_falls_back_to_first() {
        let orders = fixtures::orders();
        let (order, err) = resolve_order(&orders, Some("ord-2024-003"));
        assert_eq!(order.map(|o| o.number.as_str()), Some("ORD-2024-003"));
        assert_eq!(err, None);

        let (order, err) = resolve_order(&orders, Some("ORD-9"));
        assert_eq!(order.map(|o| o.number.as_str()), Some("ORD-2024-001"));
        assert_eq!(err, Some(MarketError::UnknownOrder("ORD-9".into())));

        assert_eq!(resolve_order(&orders, None).1, None);
        assert_eq!(resolve_order(&[], Some("x")).0, None);
    }
}
