//! Error types for the commerce core

use rust_decimal::Decimal;
use thiserror::Error;

use crate::implementation::order_management::OrderStatus;

/// Commerce-specific errors.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    /// Discount percentage outside 0..=100.
    #[error("Invalid discount percentage: {0}")]
    InvalidDiscount(Decimal),
    /// Negative monetary amount.
    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount {
        /// Field that carried the amount.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },
    /// Price arithmetic exceeded the representable range.
    #[error("Amount overflow in {0}")]
    AmountOverflow(&'static str),
    /// Cart is empty.
    #[error("Cart is empty")]
    CartEmpty,
    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),
    /// Status change rejected by the transition policy.
    #[error("Cannot move order {order_id} from {from} to {to}")]
    InvalidTransition {
        /// Order ID.
        order_id: String,
        /// Current status.
        from:     OrderStatus,
        /// Requested status.
        to:       OrderStatus,
    },
    /// The persistence layer rejected the new order.
    #[error("Order could not be created")]
    OrderCreationFailed(#[source] StoreError),
    /// Shipping settings could not be saved.
    #[error("Shipping settings could not be saved")]
    SettingsUpdateFailed(#[source] StoreError),
    /// Invalid shipping settings.
    #[error("Invalid shipping settings: {0}")]
    InvalidSettings(String),
    /// Invalid configuration value.
    #[error("Invalid configuration for {key}: {reason}")]
    InvalidConfig {
        /// Configuration key.
        key:    String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Persistence error outside order creation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommerceError {
    /// Message safe to show to a shopper or administrator.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::OrderCreationFailed(_) => {
                "We couldn't place your order. Please try again in a moment."
            },
            Self::CartEmpty => "Your cart is empty.",
            Self::InvalidQuantity(_)
            | Self::InvalidDiscount(_)
            | Self::InvalidAmount { .. }
            | Self::AmountOverflow(_) => {
                "Some items in your cart are invalid. Please review your cart."
            },
            Self::OrderNotFound(_) => "We couldn't find that order.",
            Self::InvalidTransition { .. } => "That status change is not allowed for this order.",
            Self::SettingsUpdateFailed(_) | Self::InvalidSettings(_) => {
                "Shipping settings could not be saved."
            },
            _ => "Something went wrong. Please try again.",
        }
    }
}

/// Persistence collaborator errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    /// Backing store refused the write.
    #[error("Write rejected: {0}")]
    Rejected(String),
    /// Stored record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// In-memory store lock was poisoned.
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Email collaborator errors.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The provider refused or failed to deliver the message.
    #[error("Email delivery failed: {0}")]
    Delivery(String),
    /// The provider did not answer in time.
    #[error("Email provider timed out")]
    Timeout,
}

/// Result type for commerce operations.
pub type CommerceResult<T> = Result<T, CommerceError>;

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
