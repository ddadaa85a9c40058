//! Order acknowledgment document.
//!
//! Plain-text acknowledgment built from a placed order. Amounts come from the
//! order's stored totals so the document always agrees with checkout.

use std::fmt;

use super::super::types::main_order_types::Order;
use crate::types::{format_amount, Amount, ShopConfig};

/// One row of the acknowledgment line table.
#[derive(Debug, Clone, PartialEq)]
pub struct AcknowledgmentLine {
    /// Product name.
    pub name:       String,
    /// Quantity ordered.
    pub quantity:   u32,
    /// Unit price.
    pub unit_price: Amount,
    /// Line total after discount.
    pub net_total:  Amount,
}

/// Order acknowledgment ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAcknowledgment {
    /// Shop name printed in the header.
    pub shop_name:      String,
    /// Currency symbol.
    pub currency:       String,
    /// Order number (display).
    pub order_number:   String,
    /// Placement date, `YYYY-MM-DD`.
    pub order_date:     String,
    /// Customer name.
    pub customer_name:  String,
    /// Customer email.
    pub customer_email: String,
    /// Shipping address on one line.
    pub address:        String,
    /// Payment method label.
    pub payment_method: &'static str,
    /// Line table.
    pub lines:          Vec<AcknowledgmentLine>,
    /// Subtotal.
    pub subtotal:       Amount,
    /// Total discount.
    pub discount:       Amount,
    /// Shipping fee.
    pub shipping_fee:   Amount,
    /// Grand total.
    pub grand_total:    Amount,
    /// Customer note.
    pub note:           Option<String>,
}

impl OrderAcknowledgment {
    /// Builds the acknowledgment for an order.
    #[must_use]
    pub fn from_order(order: &Order, config: &ShopConfig) -> Self {
        Self {
            shop_name:      config.shop_name.clone(),
            currency:       config.currency_symbol.clone(),
            order_number:   order.order_number.clone(),
            order_date:     order.created_at.format("%Y-%m-%d").to_string(),
            customer_name:  order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            address:        order.shipping_address.one_line(),
            payment_method: order.payment_method.display_name(),
            lines:          order
                .line_items
                .iter()
                .map(|line| AcknowledgmentLine {
                    name:       line.name().to_string(),
                    quantity:   line.quantity(),
                    unit_price: line.item.unit_price,
                    net_total:  line.net_total,
                })
                .collect(),
            subtotal:       order.totals.subtotal,
            discount:       order.totals.discount,
            shipping_fee:   order.totals.shipping_fee,
            grand_total:    order.totals.grand_total,
            note:           order.customer_note.clone(),
        }
    }

    fn money(&self, amount: Amount) -> String {
        format_amount(amount, &self.currency)
    }

    /// Renders the document as plain text.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderAcknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.shop_name)?;
        writeln!(f, "ORDER ACKNOWLEDGMENT")?;
        writeln!(f)?;
        writeln!(f, "Order:    {}", self.order_number)?;
        writeln!(f, "Date:     {}", self.order_date)?;
        writeln!(f, "Customer: {} <{}>", self.customer_name, self.customer_email)?;
        writeln!(f, "Ship to:  {}", self.address)?;
        writeln!(f, "Payment:  {}", self.payment_method)?;
        writeln!(f)?;

        for line in &self.lines {
            writeln!(
                f,
                "{} x{} @ {} = {}",
                line.name,
                line.quantity,
                self.money(line.unit_price),
                self.money(line.net_total)
            )?;
        }

        let shipping = if self.shipping_fee.is_zero() {
            "FREE".to_string()
        } else {
            self.money(self.shipping_fee)
        };

        writeln!(f)?;
        writeln!(f, "Subtotal:    {}", self.money(self.subtotal))?;
        if !self.discount.is_zero() {
            writeln!(f, "Discount:    -{}", self.money(self.discount))?;
        }
        writeln!(f, "Shipping:    {}", shipping)?;
        writeln!(f, "Grand total: {}", self.money(self.grand_total))?;

        if let Some(note) = &self.note {
            writeln!(f)?;
            writeln!(f, "Note: {}", note)?;
        }

        Ok(())
    }
}
