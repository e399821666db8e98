//! Money amounts using decimal arithmetic.
//!
//! All studio amounts (membership spend, sales, campaign budgets) are in
//! the studio's single currency, US dollars.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A US dollar amount.
///
/// Serialized as a decimal string (`"2400"`, `"89.50"`) so that sample data
/// files never go through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of dollars.
    #[must_use]
    pub fn dollars(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Share of `total` this amount represents, as a whole percentage
    /// rounded half-up. Returns `None` when `total` is zero or the ratio
    /// does not fit in a `Decimal`.
    #[must_use]
    pub fn percent_of(&self, total: Self) -> Option<Decimal> {
        let ratio = self
            .0
            .checked_div(total.0)?
            .checked_mul(Decimal::ONE_HUNDRED)?;
        Some(ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Formats as `$1,200` for whole amounts and `$89.50` otherwise.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self
            .0
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if self.0.is_sign_negative() && !abs.is_zero() { "-" } else { "" };
        let whole = abs.trunc();
        let cents = ((abs - whole) * Decimal::ONE_HUNDRED).normalize();

        let grouped = group_thousands(&whole.normalize().to_string());
        if cents.is_zero() {
            write!(f, "{sign}${grouped}")
        } else {
            write!(f, "{sign}${grouped}.{cents:0>2}")
        }
    }
}

/// Insert `,` separators every three digits from the right.
///
/// Non-digit input is returned unchanged.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_owned();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_dollars() {
        assert_eq!(Price::dollars(89).to_string(), "$89");
        assert_eq!(Price::dollars(1200).to_string(), "$1,200");
        assert_eq!(Price::dollars(28_500).to_string(), "$28,500");
        assert_eq!(Price::ZERO.to_string(), "$0");
    }

    #[test]
    fn test_display_cents() {
        let price = Price::new(Decimal::new(8950, 2));
        assert_eq!(price.to_string(), "$89.50");
    }

    #[test]
    fn test_display_rounds_cents_into_dollars() {
        assert_eq!(Price::new(Decimal::new(1995, 3)).to_string(), "$2");
        assert_eq!(Price::new(Decimal::new(99_999, 3)).to_string(), "$100");
        assert_eq!(Price::new(Decimal::new(999_995, 3)).to_string(), "$1,000");
        assert_eq!(Price::new(Decimal::new(1994, 3)).to_string(), "$1.99");
        assert_eq!(Price::new(Decimal::new(-1995, 3)).to_string(), "-$2");
        assert_eq!(Price::new(Decimal::new(-1, 3)).to_string(), "$0");
    }

    #[test]
    fn test_display_single_digit_cents() {
        assert_eq!(Price::new(Decimal::new(1205, 2)).to_string(), "$12.05");
        assert_eq!(Price::new(Decimal::new(1_200_100, 2)).to_string(), "$12,001");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("15420"), "15,420");
        assert_eq!(group_thousands("1000000"), "1,000,000");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("12.5"), "12.5");
    }

    #[test]
    fn test_percent_of() {
        let spent = Price::dollars(850);
        let budget = Price::dollars(1500);
        assert_eq!(spent.percent_of(budget), Some(Decimal::from(57)));
        assert_eq!(spent.percent_of(Price::ZERO), None);
    }

    #[test]
    fn test_percent_of_overflow_is_none() {
        let huge = Price::new(Decimal::MAX);
        let tiny = Price::new(Decimal::new(1, 7));
        assert_eq!(huge.percent_of(tiny), None);
        assert_eq!(huge.percent_of(Price::new(Decimal::ONE)), None);
    }

    #[test]
    fn test_deserialize_from_string() {
        let price: Price = serde_json::from_str("\"2400\"").unwrap();
        assert_eq!(price, Price::dollars(2400));
    }
}
