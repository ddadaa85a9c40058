//! In-memory collaborator implementations

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{OrderRepository, SettingsStore};
use crate::{
    errors::{StoreError, StoreResult},
    implementation::order_management::{Order, OrderFilter, OrderId, StatusChange},
};

/// Record kept by [`InMemorySettingsStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// JSON payload.
    pub value:      Value,
    /// Time of the last write.
    pub updated_at: DateTime<Utc>,
}

/// Key-value settings store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    records: Arc<Mutex<HashMap<String, StoredRecord>>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record under `key`, if any.
    #[must_use]
    pub fn record(&self, key: &str) -> Option<StoredRecord> {
        self.records.lock().ok().and_then(|records| records.get(key).cloned())
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn read(&self, key: &str) -> StoreResult<Option<Value>> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(key).map(|record| record.value.clone()))
    }

    async fn write(&self, key: &str, value: Value, updated_at: DateTime<Utc>) -> StoreResult<()> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(key.to_string(), StoredRecord { value, updated_at });
        Ok(())
    }
}

/// Orders table backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<Mutex<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.lock().map(|orders| orders.len()).unwrap_or(0)
    }

    /// Whether no orders are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: &Order) -> StoreResult<()> {
        let mut orders = self.orders.lock().map_err(|_| StoreError::LockPoisoned)?;

        if orders.contains_key(&order.id) {
            return Err(StoreError::Rejected(format!("duplicate order id {}", order.id)));
        }

        orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn find(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        let orders = self.orders.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(orders.get(id).cloned())
    }

    async fn update_status(&self, id: &OrderId, change: &StatusChange) -> StoreResult<Option<Order>> {
        let mut orders = self.orders.lock().map_err(|_| StoreError::LockPoisoned)?;

        Ok(orders.get_mut(id).map(|order| {
            order.apply_status_change(change);
            order.clone()
        }))
    }

    async fn list(&self, filter: &OrderFilter) -> StoreResult<Vec<Order>> {
        let orders = self.orders.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut matching: Vec<Order> =
            orders.values().filter(|order| filter.matches(order)).cloned().collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching)
    }
}
