//! # Checkout
//!
//! Prices a cart for a destination and turns it into a placed order. Totals
//! are always recomputed from the items and the current shipping settings,
//! never taken from the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::{CommerceError, CommerceResult},
    implementation::{
        cart_system::{CheckoutPricing, CheckoutQuote, LineItem},
        order_management::{NewOrder, Order, OrderCustomerId, OrderService, PaymentMethod},
    },
    types::Address,
};

#[cfg(test)]
mod tests;

/// Cart submitted for placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Signed-in customer.
    pub customer_id:    OrderCustomerId,
    /// Customer email for status notifications.
    pub customer_email: String,
    /// Customer name.
    pub customer_name:  String,
    /// Delivery address.
    pub address:        Address,
    /// Cart lines.
    pub items:          Vec<LineItem>,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Optional note to the shop.
    #[serde(default)]
    pub customer_note:  Option<String>,
}

impl CheckoutRequest {
    /// Checks the cart and contact details.
    pub fn validate(&self) -> CommerceResult<()> {
        if self.items.is_empty() {
            return Err(CommerceError::CartEmpty);
        }

        for item in &self.items {
            item.validate()?;
        }

        if self.customer_email.trim().is_empty() {
            return Err(CommerceError::ValidationError("customer email is required".to_string()));
        }

        if self.address.one_line().is_empty() {
            return Err(CommerceError::ValidationError("shipping address is required".to_string()));
        }

        Ok(())
    }
}

/// Checkout flow over pricing and order placement.
#[derive(Debug)]
pub struct CheckoutService {
    pricing: CheckoutPricing,
    orders:  OrderService,
}

impl CheckoutService {
    /// Creates a checkout service.
    #[must_use]
    pub fn new(pricing: CheckoutPricing, orders: OrderService) -> Self {
        Self { pricing, orders }
    }

    /// Pricing used for quotes.
    #[must_use]
    pub fn pricing(&self) -> &CheckoutPricing {
        &self.pricing
    }

    /// Order service used for placement.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    /// Prices a cart for the review step.
    pub async fn quote(&self, items: &[LineItem], address: &Address) -> CommerceResult<CheckoutQuote> {
        self.pricing.price(items, address).await
    }

    /// Validates, prices and persists an order.
    ///
    /// Persistence failure is fatal for the request and surfaces as
    /// [`CommerceError::OrderCreationFailed`].
    pub async fn place_order(&self, request: CheckoutRequest) -> CommerceResult<Order> {
        if let Err(e) = request.validate() {
            warn!(customer_id = %request.customer_id.0, error = %e, "checkout rejected");
            return Err(e);
        }

        let quote = match self.pricing.price(&request.items, &request.address).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(customer_id = %request.customer_id.0, error = %e, "checkout could not be priced");
                return Err(e);
            },
        };
        debug!(
            municipality = %quote.shipping.municipality,
            shipping_fee = %quote.totals.shipping_fee,
            grand_total = %quote.totals.grand_total,
            "checkout priced"
        );

        let draft = NewOrder {
            customer_id:      request.customer_id,
            customer_email:   request.customer_email.trim().to_string(),
            customer_name:    request.customer_name,
            shipping_address: request.address,
            municipality:     quote.shipping.municipality,
            payment_method:   request.payment_method,
            items:            request.items,
            totals:           quote.totals,
            customer_note:    request
                .customer_note
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty()),
        };

        self.orders.create_order(draft).await
    }
}
