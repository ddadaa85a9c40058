//! # Persistence collaborators
//!
//! Boundaries to the hosted store: a key-value settings table and the
//! relational orders table. Reads are eventually consistent and there are no
//! transactions across calls; concurrent writes to one record are
//! last-write-wins.

mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub use memory::{InMemoryOrderRepository, InMemorySettingsStore, StoredRecord};

use crate::{
    errors::StoreResult,
    implementation::order_management::{Order, OrderFilter, OrderId, StatusChange},
};

/// Key-value store holding JSON records.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads the record stored under `key`.
    async fn read(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Replaces the record under `key` wholesale.
    async fn write(&self, key: &str, value: Value, updated_at: DateTime<Utc>) -> StoreResult<()>;
}

/// Orders table.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts a new order with its line snapshot.
    async fn insert(&self, order: &Order) -> StoreResult<()>;

    /// Finds an order by ID.
    async fn find(&self, id: &OrderId) -> StoreResult<Option<Order>>;

    /// Sets the status of one order and returns the updated row.
    ///
    /// Returns `None` when no order has that ID.
    async fn update_status(&self, id: &OrderId, change: &StatusChange) -> StoreResult<Option<Order>>;

    /// Lists orders matching `filter`, newest first.
    async fn list(&self, filter: &OrderFilter) -> StoreResult<Vec<Order>>;
}
