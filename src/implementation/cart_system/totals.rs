//! Order totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::LineItem;
use crate::{
    errors::{CommerceError, CommerceResult},
    types::Amount,
};

/// Derived order totals.
///
/// Always recomputed from line items and the shipping fee, never stored on
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line totals before discounts.
    pub subtotal:     Amount,
    /// Sum of per-line discounts.
    pub discount:     Amount,
    /// Shipping fee.
    pub shipping_fee: Amount,
    /// `subtotal - discount + shipping_fee`.
    pub grand_total:  Amount,
}

impl OrderTotals {
    /// Calculates totals for a set of line items.
    ///
    /// Discounts are taken per line before summing, so lines with different
    /// percentages are each discounted on their own total. Sums that leave
    /// the [`Amount`] range are reported as [`CommerceError::AmountOverflow`].
    pub fn calculate(items: &[LineItem], shipping_fee: Amount) -> CommerceResult<Self> {
        let mut subtotal = Decimal::ZERO;
        let mut discount = Decimal::ZERO;

        for item in items {
            let line_total =
                item.checked_line_total().ok_or(CommerceError::AmountOverflow("line_total"))?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or(CommerceError::AmountOverflow("subtotal"))?;
            discount = discount
                .checked_add(item.line_discount())
                .ok_or(CommerceError::AmountOverflow("discount"))?;
        }

        let grand_total = (subtotal - discount)
            .checked_add(shipping_fee)
            .ok_or(CommerceError::AmountOverflow("grand_total"))?;

        Ok(Self { subtotal, discount, shipping_fee, grand_total })
    }

    /// Total before shipping.
    #[must_use]
    pub fn merchandise_total(&self) -> Amount {
        self.subtotal - self.discount
    }
}

/// Aggregates line items and a shipping fee into order totals.
pub fn aggregate(items: &[LineItem], shipping_fee: Amount) -> CommerceResult<OrderTotals> {
    OrderTotals::calculate(items, shipping_fee)
}
