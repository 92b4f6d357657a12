//! Fans portal events out into persisted notifications.

use std::sync::Arc;

use mockable::Clock;
use tracing::warn;

use super::event::{derive_notifications, PortalEvent};
use super::services::{NotificationService, UserService};
use super::DomainResult;

/// Loads the current users, derives the notification batch for an event,
/// and appends it to the store.
#[derive(Clone)]
pub struct Notifier {
    users: UserService,
    notifications: NotificationService,
    clock: Arc<dyn Clock>,
}

impl Notifier {
    #[must_use]
    pub fn new(
        users: UserService,
        notifications: NotificationService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            notifications,
            clock,
        }
    }

    /// Emit an event, failing if either the user read or the notification
    /// write fails.
    pub async fn emit(&self, event: &PortalEvent) -> DomainResult<()> {
        let users = self.users.list().await?;
        let batch = derive_notifications(event, &users, self.clock.utc());
        self.notifications.append(batch).await
    }

    /// Emit an event after a committed write. Failures are logged and
    /// swallowed so the caller's primary result stands.
    pub async fn emit_after_write(&self, event: &PortalEvent) {
        if let Err(err) = self.emit(event).await {
            warn!(error = %err, "notification emission failed after write");
        }
    }
}
