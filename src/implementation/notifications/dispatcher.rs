//! Fire-and-forget notification dispatch

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::email::{EmailSender, StatusEmail};

/// How a dispatched notification ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The provider accepted the email.
    Sent,
    /// The provider failed; the failure was logged.
    Failed,
    /// Nothing was sent because notifications are disabled.
    Skipped,
}

/// Handle to a notification running in the background.
///
/// Dropping it does not cancel the send.
#[derive(Debug)]
pub struct NotificationHandle {
    inner: Option<JoinHandle<NotificationOutcome>>,
}

impl NotificationHandle {
    fn skipped() -> Self {
        Self { inner: None }
    }

    /// Whether a send was scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.inner.is_some()
    }

    /// Waits for the send to finish.
    pub async fn settled(self) -> NotificationOutcome {
        match self.inner {
            None => NotificationOutcome::Skipped,
            Some(handle) => handle.await.unwrap_or_else(|e| {
                warn!(error = %e, "notification task did not complete");
                NotificationOutcome::Failed
            }),
        }
    }
}

/// Sends status emails without blocking the caller.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: Option<Arc<dyn EmailSender>>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher over an email provider.
    #[must_use]
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self { sender: Some(sender) }
    }

    /// Creates a dispatcher that sends nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    /// Creates a dispatcher honouring the `notifications_enabled` switch.
    #[must_use]
    pub fn from_config(sender: Arc<dyn EmailSender>, enabled: bool) -> Self {
        if enabled { Self::new(sender) } else { Self::disabled() }
    }

    /// Whether emails are sent.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Schedules one send. Must be called inside a tokio runtime.
    ///
    /// Failures are logged and never reach the caller.
    pub fn dispatch(&self, email: StatusEmail) -> NotificationHandle {
        let Some(sender) = self.sender.clone() else {
            debug!(order_id = %email.order_id, "notifications disabled, skipping status email");
            return NotificationHandle::skipped();
        };

        let handle = tokio::spawn(async move {
            match sender.send(&email).await {
                Ok(()) => {
                    debug!(order_id = %email.order_id, status = %email.status, "status email sent");
                    NotificationOutcome::Sent
                },
                Err(e) => {
                    warn!(
                        order_id = %email.order_id,
                        status = %email.status,
                        error = %e,
                        "status email failed"
                    );
                    NotificationOutcome::Failed
                },
            }
        });

        NotificationHandle { inner: Some(handle) }
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher").field("enabled", &self.is_enabled()).finish()
    }
}
