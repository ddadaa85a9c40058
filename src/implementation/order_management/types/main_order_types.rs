//! Main order types for the order management system.
//!
//! This module contains the core Order struct and the draft used to place one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    basic_types::{OrderCustomerId, OrderId, OrderStatus, PaymentMethod},
    order_types::{OrderHistoryEvent, OrderLineItem},
};
use crate::{
    implementation::cart_system::{LineItem, OrderTotals},
    types::{Address, Municipality},
};

/// Placed order. Items and totals never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id:               OrderId,
    /// Order number (display).
    pub order_number:     String,
    /// Customer ID.
    pub customer_id:      OrderCustomerId,
    /// Customer email.
    pub customer_email:   String,
    /// Customer name.
    pub customer_name:    String,
    /// Shipping address.
    pub shipping_address: Address,
    /// Municipality the address resolved to at checkout.
    pub municipality:     Municipality,
    /// Payment method.
    pub payment_method:   PaymentMethod,
    /// Order status.
    pub status:           OrderStatus,
    /// Reason given with the latest status change.
    pub status_reason:    Option<String>,
    /// Line items.
    pub line_items:       Vec<OrderLineItem>,
    /// Order totals.
    pub totals:           OrderTotals,
    /// Customer note at checkout.
    pub customer_note:    Option<String>,
    /// Order history.
    pub history:          Vec<OrderHistoryEvent>,
    /// Creation timestamp.
    pub created_at:       DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at:       DateTime<Utc>,
}

/// Everything needed to create an order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Customer ID.
    pub customer_id:      OrderCustomerId,
    /// Customer email.
    pub customer_email:   String,
    /// Customer name.
    pub customer_name:    String,
    /// Shipping address.
    pub shipping_address: Address,
    /// Resolved municipality.
    pub municipality:     Municipality,
    /// Payment method.
    pub payment_method:   PaymentMethod,
    /// Priced items.
    pub items:            Vec<LineItem>,
    /// Totals computed from `items` and the shipping fee.
    pub totals:           OrderTotals,
    /// Customer note.
    pub customer_note:    Option<String>,
}
