use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A US dollar amount held as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated. Used by the price range inputs.
    pub const fn whole_dollars(self) -> i64 {
        self.0 / 100
    }

    /// `pct` percent of this amount, rounded half away from zero to the cent.
    pub fn percent(self, pct: i64) -> Money {
        Money(div_round(self.0 * pct, 100))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn max(self, other: Money) -> Money {
        Money(self.0.max(other.0))
    }

    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }
}

fn div_round(numerator: i64, denominator: i64) -> i64 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        -((-numerator + half) / denominator)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;
    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_cents(8999).to_string(), "$89.99");
        assert_eq!(Money::from_cents(1205).to_string(), "$12.05");
        assert_eq!(Money::from_dollars(75).to_string(), "$75.00");
        assert_eq!(Money::from_cents(-2000).to_string(), "-$20.00");
    }

    #[test]
    fn percent_rounds_to_nearest_cent() {
        // 10% of $160.96 is $16.096
        assert_eq!(Money::from_cents(16096).percent(10), Money::from_cents(1610));
        // 8% of $144.86 is $11.5888
        assert_eq!(Money::from_cents(14486).percent(8), Money::from_cents(1159));
        assert_eq!(Money::from_cents(-16096).percent(10), Money::from_cents(-1610));
    }

    #[test]
    fn multiplies_and_sums() {
        let lines = [Money::from_cents(1249) * 2, Money::from_cents(8999) * 1];
        assert_eq!(lines.into_iter().sum::<Money>(), Money::from_cents(11497));
    }
}
