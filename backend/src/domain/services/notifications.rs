//! Notification records: append-only apart from read-flag flips.

use crate::domain::ids::{NotificationId, UserId};
use crate::domain::notification::Notification;
use crate::domain::ports::CollectionKey;
use crate::domain::records::RecordStore;
use crate::domain::seed;
use crate::domain::DomainResult;

#[derive(Clone)]
pub struct NotificationService {
    records: RecordStore,
}

impl NotificationService {
    #[must_use]
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    pub async fn list(&self) -> DomainResult<Vec<Notification>> {
        self.records
            .load_or_seed(CollectionKey::Notifications, seed::notifications)
            .await
    }

    /// Notifications addressed to one user, preserving stored order.
    pub async fn list_for_user(&self, user_id: &UserId) -> DomainResult<Vec<Notification>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|n| &n.user_id == user_id)
            .collect())
    }

    /// Prepend a batch of freshly derived notifications.
    pub async fn append(&self, batch: Vec<Notification>) -> DomainResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let mut notifications = self.list().await?;
        notifications.splice(0..0, batch);
        self.records
            .save(CollectionKey::Notifications, &notifications)
            .await
    }

    /// Flip one notification to read. Unknown ids are ignored; flipping an
    /// already-read notification changes nothing.
    pub async fn mark_read(&self, id: &NotificationId) -> DomainResult<()> {
        let mut notifications = self.list().await?;
        let Some(slot) = notifications.iter_mut().find(|n| &n.id == id) else {
            return Ok(());
        };
        if slot.is_read {
            return Ok(());
        }
        slot.is_read = true;
        self.records
            .save(CollectionKey::Notifications, &notifications)
            .await
    }

    /// Mark every notification addressed to `user_id` as read.
    pub async fn mark_all_read(&self, user_id: &UserId) -> DomainResult<()> {
        let mut notifications = self.list().await?;
        let mut changed = false;
        for notification in notifications
            .iter_mut()
            .filter(|n| &n.user_id == user_id && !n.is_read)
        {
            notification.is_read = true;
            changed = true;
        }
        if !changed {
            return Ok(());
        }
        self.records
            .save(CollectionKey::Notifications, &notifications)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::service_records;

    fn seed_unread_id() -> NotificationId {
        seed::notifications()
            .into_iter()
            .find(|n| !n.is_read)
            .expect("seed has unread notifications")
            .id
    }

    #[tokio::test]
    async fn list_for_user_filters_by_recipient() {
        let service = NotificationService::new(service_records());
        let admin: UserId = "admin1".to_owned().try_into().expect("valid id");

        let for_admin = service
            .list_for_user(&admin)
            .await
            .expect("list should succeed");

        assert_eq!(for_admin.len(), 2);
        assert!(for_admin.iter().all(|n| n.user_id == admin));
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let service = NotificationService::new(service_records());
        let id = seed_unread_id();

        service.mark_read(&id).await.expect("first flip");
        service.mark_read(&id).await.expect("second flip");

        let stored = service.list().await.expect("list should succeed");
        let flipped = stored.iter().find(|n| n.id == id).expect("still present");
        assert!(flipped.is_read);
    }

    #[tokio::test]
    async fn marking_an_unknown_id_is_a_no_op() {
        let service = NotificationService::new(service_records());
        let before = service.list().await.expect("list should succeed");

        service
            .mark_read(&NotificationId::generate())
            .await
            .expect("unknown id should not error");

        let after = service.list().await.expect("list should succeed");
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn mark_all_read_leaves_other_users_untouched() {
        let service = NotificationService::new(service_records());
        let customer: UserId = "customer1".to_owned().try_into().expect("valid id");
        let admin: UserId = "admin1".to_owned().try_into().expect("valid id");

        service
            .mark_all_read(&customer)
            .await
            .expect("mark all should succeed");

        let for_customer = service
            .list_for_user(&customer)
            .await
            .expect("list should succeed");
        assert!(for_customer.iter().all(|n| n.is_read));
        let for_admin = service
            .list_for_user(&admin)
            .await
            .expect("list should succeed");
        assert!(for_admin.iter().any(|n| !n.is_read));
    }
}
