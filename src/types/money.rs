//! Product identifiers and monetary amounts

use std::borrow::Cow;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Monetary amount in whole currency units (pesos).
///
/// Fractions produced by percentage discounts are carried exactly; rounding
/// only happens in [`format_amount`].
pub type Amount = Decimal;

/// Unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Cow<'static, str>);

impl ProductId {
    /// Creates a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Creates a product ID from a static string slice (zero-copy).
    #[must_use]
    pub fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats an amount for display, e.g. `₱1,700.00`.
#[must_use]
pub fn format_amount(amount: Amount, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1700), "₱"), "₱1,700.00");
        assert_eq!(format_amount(dec!(1234567.5), "₱"), "₱1,234,567.50");
        assert_eq!(format_amount(dec!(0), "₱"), "₱0.00");
        assert_eq!(format_amount(dec!(999), "₱"), "₱999.00");
    }

    #[test]
    fn test_format_amount_rounds_only_for_display() {
        assert_eq!(format_amount(dec!(33.335), "₱"), "₱33.34");
        assert_eq!(format_amount(dec!(-12.5), "₱"), "-₱12.50");
    }
}
