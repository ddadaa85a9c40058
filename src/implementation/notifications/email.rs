//! Status email payload and sender boundary

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    errors::NotificationError,
    implementation::order_management::{OrderId, OrderStatus},
    types::Amount,
};

/// One line of the order summary in a status email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLineSummary {
    /// Product name.
    pub name:      String,
    /// Quantity ordered.
    pub quantity:  u32,
    /// Line total after discount.
    pub net_total: Amount,
}

/// Order status email sent to the order owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEmail {
    /// Customer email address.
    pub recipient:     String,
    /// Customer name.
    pub customer_name: String,
    /// Order ID.
    pub order_id:      OrderId,
    /// Order number (display).
    pub order_number:  String,
    /// New status.
    pub status:        OrderStatus,
    /// Human-readable status message.
    pub message:       String,
    /// Reason given by the administrator.
    pub reason:        Option<String>,
    /// Line summary.
    pub items:         Vec<EmailLineSummary>,
    /// Order grand total.
    pub total:         Amount,
}

impl StatusEmail {
    /// Subject line.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("Order {} update: {}", self.order_number, self.status.display_name())
    }
}

/// Transactional email provider.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Delivers one status email.
    async fn send(&self, email: &StatusEmail) -> Result<(), NotificationError>;
}
