//! # Notifications
//!
//! Best-effort order status emails. A send runs after the status write has
//! committed and its outcome never affects that write.

mod dispatcher;
mod email;

pub use dispatcher::{NotificationDispatcher, NotificationHandle, NotificationOutcome};
pub use email::{EmailLineSummary, EmailSender, StatusEmail};

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        errors::NotificationError,
        implementation::order_management::{OrderId, OrderStatus},
    };

    struct CountingSender {
        calls: AtomicUsize,
        fail:  bool,
    }

    #[async_trait]
    impl EmailSender for CountingSender {
        async fn send(&self, _email: &StatusEmail) -> Result<(), NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail { Err(NotificationError::Timeout) } else { Ok(()) }
        }
    }

    fn email() -> StatusEmail {
        StatusEmail {
            recipient:     "juan@example.com".to_string(),
            customer_name: "Juan Dela Cruz".to_string(),
            order_id:      OrderId::new("ord-1"),
            order_number:  "#1000".to_string(),
            status:        OrderStatus::Shipped,
            message:       OrderStatus::Shipped.customer_message().into_owned(),
            reason:        None,
            items:         vec![EmailLineSummary {
                name:      "Narra Bed Frame".to_string(),
                quantity:  1,
                net_total: dec!(12000),
            }],
            total:         dec!(12500),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_once() {
        let sender = Arc::new(CountingSender { calls: AtomicUsize::new(0), fail: false });
        let dispatcher = NotificationDispatcher::new(sender.clone());

        let handle = dispatcher.dispatch(email());
        assert!(handle.is_scheduled());
        assert_eq!(handle.settled().await, NotificationOutcome::Sent);
        assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_swallows_failure() {
        let sender = Arc::new(CountingSender { calls: AtomicUsize::new(0), fail: true });
        let dispatcher = NotificationDispatcher::new(sender.clone());

        assert_eq!(dispatcher.dispatch(email()).settled().await, NotificationOutcome::Failed);
        assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disabled_dispatcher_skips() {
        let sender = Arc::new(CountingSender { calls: AtomicUsize::new(0), fail: false });
        let dispatcher = NotificationDispatcher::from_config(sender.clone(), false);

        assert!(!dispatcher.is_enabled());
        let handle = dispatcher.dispatch(email());
        assert!(!handle.is_scheduled());
        assert_eq!(handle.settled().await, NotificationOutcome::Skipped);
        assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subject_and_wire_shape() {
        let email = email();
        assert_eq!(email.subject(), "Order #1000 update: Shipped");

        let json = serde_json::to_value(&email).expect("serialize");
        assert_eq!(json["status"], "shipped");
        assert_eq!(json["orderNumber"], "#1000");
        assert_eq!(json["message"], "Your order has been shipped and is on its way!");
    }
}
