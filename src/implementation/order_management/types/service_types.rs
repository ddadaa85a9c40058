//! Service types for order management.
//!
//! This module contains the OrderService and OrderFilter types that provide
//! the business logic and filtering capabilities for order management.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::basic_types::{OrderCustomerId, OrderStatus, PaymentMethod, TransitionPolicy};
use super::main_order_types::Order;
use crate::{
    implementation::{
        notifications::{NotificationDispatcher, NotificationHandle},
        persistence::OrderRepository,
    },
    types::Amount,
};

/// Order management service.
pub struct OrderService {
    /// Orders table.
    pub(crate) orders:        Arc<dyn OrderRepository>,
    /// Status email dispatch.
    pub(crate) notifier:      NotificationDispatcher,
    /// How status changes are checked.
    pub(crate) policy:        TransitionPolicy,
    /// Order number counter.
    pub(crate) order_counter: Arc<Mutex<u64>>,
}

/// Result of a committed status change.
#[derive(Debug)]
pub struct StatusTransition {
    /// Order after the change.
    pub order:           Order,
    /// Status before the change.
    pub previous_status: OrderStatus,
    /// Pending customer notification; may be awaited or dropped.
    pub notification:    NotificationHandle,
}

/// Order search filter.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Filter by status.
    pub status:         Option<OrderStatus>,
    /// Filter by payment method.
    pub payment_method: Option<PaymentMethod>,
    /// Filter by customer.
    pub customer_id:    Option<OrderCustomerId>,
    /// Minimum grand total.
    pub min_total:      Option<Amount>,
    /// Maximum grand total.
    pub max_total:      Option<Amount>,
    /// Created from timestamp.
    pub created_from:   Option<DateTime<Utc>>,
    /// Created to timestamp.
    pub created_to:     Option<DateTime<Utc>>,
}
