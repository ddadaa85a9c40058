//! Line item type definition

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{CommerceError, CommerceResult},
    types::{Amount, ProductId},
};

/// One product entry in a cart or order.
///
/// Customization cost is charged per unit: a line of three customized chairs
/// pays the customization three times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID.
    pub product_id:          ProductId,
    /// Product name (cached for display).
    pub name:                String,
    /// Price of one unit.
    pub unit_price:          Amount,
    /// Quantity, at least 1.
    pub quantity:            u32,
    /// Line discount in percent, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,
    /// Extra charge per unit for customization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization_cost:  Option<Amount>,
}

impl LineItem {
    /// Creates a validated line item.
    pub fn new(
        product_id: ProductId, name: impl Into<String>, unit_price: Amount, quantity: u32,
    ) -> CommerceResult<Self> {
        let item = Self {
            product_id,
            name: name.into(),
            unit_price,
            quantity,
            discount_percentage: None,
            customization_cost: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Sets the line discount percentage.
    pub fn with_discount(mut self, percentage: Decimal) -> CommerceResult<Self> {
        self.discount_percentage = Some(percentage);
        self.validate()?;
        Ok(self)
    }

    /// Sets the per-unit customization cost.
    pub fn with_customization(mut self, cost: Amount) -> CommerceResult<Self> {
        self.customization_cost = Some(cost);
        self.validate()?;
        Ok(self)
    }

    /// Checks quantity, price, discount and customization bounds.
    pub fn validate(&self) -> CommerceResult<()> {
        if self.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }

        if self.unit_price < Decimal::ZERO {
            return Err(CommerceError::InvalidAmount { field: "unit_price", value: self.unit_price });
        }

        if let Some(percentage) = self.discount_percentage
            && (percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED)
        {
            return Err(CommerceError::InvalidDiscount(percentage));
        }

        if let Some(cost) = self.customization_cost
            && cost < Decimal::ZERO
        {
            return Err(CommerceError::InvalidAmount { field: "customization_cost", value: cost });
        }

        if self.checked_line_total().is_none() {
            return Err(CommerceError::AmountOverflow("line_total"));
        }

        Ok(())
    }

    /// Line total before discount, or `None` when it does not fit an [`Amount`].
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Amount> {
        let quantity = Decimal::from(self.quantity);
        let customization = self.customization_cost.unwrap_or_default().checked_mul(quantity)?;
        self.unit_price.checked_mul(quantity)?.checked_add(customization)
    }

    /// Customization charge for the whole line. Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn customization_adjustment(&self) -> Amount {
        self.customization_cost
            .unwrap_or_default()
            .saturating_mul(Decimal::from(self.quantity))
    }

    /// Line total before discount.
    ///
    /// Saturates at [`Decimal::MAX`]; `validate` rejects lines where that
    /// would happen.
    #[must_use]
    pub fn line_total(&self) -> Amount {
        self.checked_line_total().unwrap_or(Decimal::MAX)
    }

    /// Discount on this line.
    #[must_use]
    pub fn line_discount(&self) -> Amount {
        match self.discount_percentage {
            Some(percentage) => self.line_total() * (percentage / Decimal::ONE_HUNDRED),
            None => Decimal::ZERO,
        }
    }

    /// Line total after discount.
    #[must_use]
    pub fn net_total(&self) -> Amount {
        self.line_total() - self.line_discount()
    }
}
