//! # Order Management Types - Order Types
//!
//! Line item snapshots, status changes and order history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::basic_types::OrderStatus;
use crate::{
    implementation::cart_system::LineItem,
    types::{Amount, ProductId},
};

// ============================================================================
// ORDER LINE ITEM
// ============================================================================

/// Line item frozen into an order at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Line item ID.
    pub id:         String,
    /// Priced line as it was at checkout.
    pub item:       LineItem,
    /// Total before discount.
    pub line_total: Amount,
    /// Discount amount.
    pub discount:   Amount,
    /// Line total after discount.
    pub net_total:  Amount,
}

impl OrderLineItem {
    /// Snapshots a line item.
    #[must_use]
    pub fn from_line_item(item: &LineItem, line_id: String) -> Self {
        Self {
            id:         line_id,
            item:       item.clone(),
            line_total: item.line_total(),
            discount:   item.line_discount(),
            net_total:  item.net_total(),
        }
    }

    /// Product ID.
    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.item.product_id
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Quantity ordered.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.item.quantity
    }
}

// ============================================================================
// STATUS CHANGES & HISTORY
// ============================================================================

/// One status write against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// New status.
    pub status:     OrderStatus,
    /// Reason shown to the customer, if any.
    pub reason:     Option<String>,
    /// Administrator or supplier making the change.
    pub changed_by: Option<String>,
    /// Time of the change.
    pub changed_at: DateTime<Utc>,
}

impl StatusChange {
    /// Creates a change stamped with the current time.
    #[must_use]
    pub fn now(status: OrderStatus, reason: Option<String>, changed_by: Option<String>) -> Self {
        let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
        Self { status, reason, changed_by, changed_at: Utc::now() }
    }
}

/// Order history event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryEvent {
    /// Event type.
    pub event_type:      OrderEventType,
    /// Event description.
    pub description:     String,
    /// Previous status (for status changes).
    pub previous_status: Option<OrderStatus>,
    /// New status (for status changes).
    pub new_status:      Option<OrderStatus>,
    /// User who triggered the event.
    pub user:            Option<String>,
    /// Timestamp.
    pub created_at:      DateTime<Utc>,
}

/// Order event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderEventType {
    /// Order created.
    Created,
    /// Status changed.
    StatusChanged,
}
