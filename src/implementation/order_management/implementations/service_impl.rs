//! Service implementation.
//!
//! Business logic implementations for the OrderService type.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use super::super::types::{
    basic_types::{OrderCustomerId, OrderId, OrderStatus, TransitionPolicy},
    main_order_types::{NewOrder, Order},
    order_types::StatusChange,
    service_types::{OrderFilter, OrderService, StatusTransition},
};
use crate::{
    errors::{CommerceError, CommerceResult},
    implementation::{
        notifications::{EmailSender, NotificationDispatcher},
        persistence::OrderRepository,
    },
    types::ShopConfig,
};

impl OrderService {
    /// Creates a new order service with the permissive transition policy.
    #[must_use]
    pub fn new(orders: Arc<dyn OrderRepository>, notifier: NotificationDispatcher) -> Self {
        Self {
            orders,
            notifier,
            policy: TransitionPolicy::default(),
            order_counter: Arc::new(Mutex::new(1000)),
        }
    }

    /// Creates a service from shop configuration.
    #[must_use]
    pub fn from_config(
        orders: Arc<dyn OrderRepository>, sender: Arc<dyn EmailSender>, config: &ShopConfig,
    ) -> Self {
        Self::new(
            orders,
            NotificationDispatcher::from_config(sender, config.notifications_enabled),
        )
        .with_policy(config.transition_policy)
    }

    /// Sets the transition policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current transition policy.
    #[must_use]
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Continues order numbering after the highest number already stored.
    ///
    /// The counter lives in memory and starts at `#1000`, so a process
    /// serving an existing orders table should call this once at startup.
    /// Returns the next number that will be issued.
    pub async fn resume_order_numbers(&self) -> CommerceResult<u64> {
        let highest = self
            .orders
            .list(&OrderFilter::default())
            .await?
            .iter()
            .filter_map(|order| order.order_number.trim_start_matches('#').parse::<u64>().ok())
            .max();

        let mut counter = self.order_counter.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(highest) = highest
            && highest >= *counter
        {
            *counter = highest.saturating_add(1);
        }

        info!(next = *counter, "order numbering resumed");
        Ok(*counter)
    }

    /// Generates the next order number. Process-local; see
    /// [`OrderService::resume_order_numbers`].
    fn next_order_number(&self) -> String {
        let mut counter = self.order_counter.lock().unwrap_or_else(|e| e.into_inner());
        let num = *counter;
        *counter += 1;
        format!("#{}", num)
    }

    /// Creates and persists an order.
    ///
    /// A rejected write is reported as [`CommerceError::OrderCreationFailed`]
    /// and no order is considered placed.
    pub async fn create_order(&self, draft: NewOrder) -> CommerceResult<Order> {
        if draft.items.is_empty() {
            return Err(CommerceError::CartEmpty);
        }
        for item in &draft.items {
            item.validate()?;
        }

        let order = Order::from_new_order(draft, self.next_order_number());

        if let Err(e) = self.orders.insert(&order).await {
            warn!(order_number = %order.order_number, error = %e, "order could not be created");
            return Err(CommerceError::OrderCreationFailed(e));
        }

        info!(
            order_id = %order.id,
            order_number = %order.order_number,
            municipality = %order.municipality,
            grand_total = %order.totals.grand_total,
            "order placed"
        );
        Ok(order)
    }

    /// Gets an order by ID.
    pub async fn get_order(&self, id: &OrderId) -> CommerceResult<Order> {
        self.orders
            .find(id)
            .await?
            .ok_or_else(|| CommerceError::OrderNotFound(id.0.clone()))
    }

    /// Gets orders for a customer, newest first.
    pub async fn customer_orders(&self, customer_id: &OrderCustomerId) -> CommerceResult<Vec<Order>> {
        let filter = OrderFilter { customer_id: Some(customer_id.clone()), ..OrderFilter::default() };
        self.search_orders(&filter).await
    }

    /// Searches orders.
    pub async fn search_orders(&self, filter: &OrderFilter) -> CommerceResult<Vec<Order>> {
        Ok(self.orders.list(filter).await?)
    }

    /// Sets the status of an order and notifies its owner.
    ///
    /// The status write commits first; the email is then scheduled in the
    /// background and its outcome does not affect the result. Concurrent
    /// changes to one order are last-write-wins.
    pub async fn transition(
        &self, id: &OrderId, status: OrderStatus, reason: Option<String>, actor: Option<String>,
    ) -> CommerceResult<StatusTransition> {
        let current = self.get_order(id).await?;
        let previous_status = current.status;

        if !previous_status.can_transition_to(status) {
            if !self.policy.allows(previous_status, status) {
                return Err(CommerceError::InvalidTransition {
                    order_id: id.0.clone(),
                    from:     previous_status,
                    to:       status,
                });
            }
            warn!(
                order_id = %id,
                from = %previous_status,
                to = %status,
                "status change outside the fulfilment graph"
            );
        }

        let change = StatusChange::now(status, reason, actor);
        let order = self
            .orders
            .update_status(id, &change)
            .await?
            .ok_or_else(|| CommerceError::OrderNotFound(id.0.clone()))?;

        info!(order_id = %id, from = %previous_status, to = %status, "order status updated");

        let notification = self.notifier.dispatch(order.status_email());
        Ok(StatusTransition { order, previous_status, notification })
    }

    /// Cancels an order with a reason for the customer.
    pub async fn cancel_order(
        &self, id: &OrderId, reason: impl Into<String>, actor: Option<String>,
    ) -> CommerceResult<StatusTransition> {
        self.transition(id, OrderStatus::Cancelled, Some(reason.into()), actor).await
    }
}

impl OrderFilter {
    /// Matches order against filter.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }

        if let Some(payment_method) = self.payment_method
            && order.payment_method != payment_method
        {
            return false;
        }

        if let Some(customer_id) = &self.customer_id
            && &order.customer_id != customer_id
        {
            return false;
        }

        if let Some(min_total) = self.min_total
            && order.totals.grand_total < min_total
        {
            return false;
        }

        if let Some(max_total) = self.max_total
            && order.totals.grand_total > max_total
        {
            return false;
        }

        if let Some(from) = self.created_from
            && order.created_at < from
        {
            return false;
        }

        if let Some(to) = self.created_to
            && order.created_at > to
        {
            return false;
        }

        true
    }
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("notifier", &self.notifier)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
