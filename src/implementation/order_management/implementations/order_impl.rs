//! Order implementation.
//!
//! Business logic implementations for the Order type.

use chrono::{DateTime, Utc};

use super::super::types::{
    basic_types::{OrderId, OrderStatus},
    main_order_types::{NewOrder, Order},
    order_types::{OrderEventType, OrderHistoryEvent, OrderLineItem, StatusChange},
};
use crate::implementation::notifications::{EmailLineSummary, StatusEmail};

impl Order {
    /// Creates a pending order from a checkout draft.
    #[must_use]
    pub fn from_new_order(draft: NewOrder, order_number: String) -> Self {
        let now = Utc::now();

        let line_items: Vec<OrderLineItem> = draft
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| OrderLineItem::from_line_item(item, format!("line-{}", i + 1)))
            .collect();

        let mut order = Self {
            id: OrderId::generate(),
            order_number,
            customer_id: draft.customer_id,
            customer_email: draft.customer_email,
            customer_name: draft.customer_name,
            shipping_address: draft.shipping_address,
            municipality: draft.municipality,
            payment_method: draft.payment_method,
            status: OrderStatus::Pending,
            status_reason: None,
            line_items,
            totals: draft.totals,
            customer_note: draft.customer_note,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        order.add_history_event(OrderEventType::Created, "Order created", None, now);

        order
    }

    /// Adds a history event.
    pub fn add_history_event(
        &mut self, event_type: OrderEventType, description: impl Into<String>,
        user: Option<String>, at: DateTime<Utc>,
    ) {
        self.history.push(OrderHistoryEvent {
            event_type,
            description: description.into(),
            previous_status: None,
            new_status: None,
            user,
            created_at: at,
        });
    }

    /// Applies a status write. Only status, reason and history change.
    pub fn apply_status_change(&mut self, change: &StatusChange) {
        let previous_status = self.status;
        self.status = change.status;
        self.status_reason = change.reason.clone();
        self.updated_at = change.changed_at;

        self.history.push(OrderHistoryEvent {
            event_type:      OrderEventType::StatusChanged,
            description:     format!(
                "Status changed from {} to {}",
                previous_status.display_name(),
                change.status.display_name()
            ),
            previous_status: Some(previous_status),
            new_status:      Some(change.status),
            user:            change.changed_by.clone(),
            created_at:      change.changed_at,
        });
    }

    /// Builds the status email for the order's current status.
    #[must_use]
    pub fn status_email(&self) -> StatusEmail {
        StatusEmail {
            recipient:     self.customer_email.clone(),
            customer_name: self.customer_name.clone(),
            order_id:      self.id.clone(),
            order_number:  self.order_number.clone(),
            status:        self.status,
            message:       self.status.customer_message().into_owned(),
            reason:        self.status_reason.clone(),
            items:         self
                .line_items
                .iter()
                .map(|line| EmailLineSummary {
                    name:      line.name().to_string(),
                    quantity:  line.quantity(),
                    net_total: line.net_total,
                })
                .collect(),
            total:         self.totals.grand_total,
        }
    }

    /// Total number of units ordered.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.line_items.iter().map(OrderLineItem::quantity).sum()
    }
}
