//! Price value object backed by integer cents.
//!
//! Menu prices and order totals are money, so they are stored as whole cents
//! rather than floats. Addition and quantity multiplication are exact, and
//! display formatting always carries two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Non-negative monetary amount in US cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Creates a price from whole cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Zero dollars and zero cents.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Multiplies this unit price by a line quantity.
    pub fn times(&self, quantity: u32) -> Price {
        Price(self.0 * u64::from(quantity))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_two_decimal_places() {
        assert_eq!(format!("{}", Price::from_cents(699)), "$6.99");
        assert_eq!(format!("{}", Price::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Price::from_cents(200)), "$2.00");
        assert_eq!(format!("{}", Price::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Price::zero()), "$0.00");
    }

    #[test]
    fn addition_is_exact() {
        // 6.99 + 1.99 must be exactly 8.98, no float drift.
        let total = Price::from_cents(699) + Price::from_cents(199);
        assert_eq!(total, Price::from_cents(898));
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Price::zero();
        total += Price::from_cents(349);
        total += Price::from_cents(449);
        assert_eq!(total, Price::from_cents(798));
    }

    #[test]
    fn times_scales_by_quantity() {
        assert_eq!(Price::from_cents(249).times(3), Price::from_cents(747));
        assert_eq!(Price::from_cents(249).times(1), Price::from_cents(249));
    }

    #[test]
    fn sum_of_prices_works() {
        let prices = vec![Price::from_cents(100), Price::from_cents(250)];
        let total: Price = prices.into_iter().sum();
        assert_eq!(total, Price::from_cents(350));
    }

    #[test]
    fn serializes_as_raw_cents() {
        assert_eq!(serde_json::to_string(&Price::from_cents(699)).unwrap(), "699");
    }
}
