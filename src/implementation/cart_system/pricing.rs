//! Checkout pricing: shipping quote plus totals

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{item::LineItem, totals::OrderTotals};
use crate::{
    errors::CommerceResult,
    implementation::shipping::{ShippingFeeCalculator, ShippingQuote, ShippingSettingsProvider},
    types::Address,
};

/// Priced cart for a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    /// Shipping destination and fee.
    pub shipping: ShippingQuote,
    /// Totals including the shipping fee.
    pub totals:   OrderTotals,
}

/// Prices carts against the current shipping settings.
#[derive(Debug, Clone)]
pub struct CheckoutPricing {
    shipping: ShippingFeeCalculator,
}

impl CheckoutPricing {
    /// Creates pricing over a settings provider.
    #[must_use]
    pub fn new(settings: Arc<dyn ShippingSettingsProvider>) -> Self {
        Self::with_calculator(ShippingFeeCalculator::new(settings))
    }

    /// Creates pricing over an existing fee calculator.
    #[must_use]
    pub fn with_calculator(shipping: ShippingFeeCalculator) -> Self {
        Self { shipping }
    }

    /// Fee calculator used for quotes.
    #[must_use]
    pub fn shipping(&self) -> &ShippingFeeCalculator {
        &self.shipping
    }

    /// Prices `items` shipped to `address`. Recomputed on every call.
    pub async fn price(&self, items: &[LineItem], address: &Address) -> CommerceResult<CheckoutQuote> {
        let shipping = self.shipping.quote(address).await;
        let totals = OrderTotals::calculate(items, shipping.fee)?;
        Ok(CheckoutQuote { shipping, totals })
    }
}
