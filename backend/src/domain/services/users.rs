//! Customer account records and their attached documents.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::error::Error;
use crate::domain::ids::{DocumentId, UserId};
use crate::domain::ports::CollectionKey;
use crate::domain::records::RecordStore;
use crate::domain::seed;
use crate::domain::user::{Document, NewCustomer, NewDocument, User, UserRole};
use crate::domain::DomainResult;

/// Result of attaching one document to every customer account.
#[derive(Debug, Clone)]
pub struct DocumentBroadcast {
    /// The full user collection after the write.
    pub users: Vec<User>,
    /// One (recipient, document id) pair per delivered copy.
    pub copies: Vec<(UserId, DocumentId)>,
    /// Display name shared by every copy.
    pub document_name: String,
}

/// CRUD over the user collection.
#[derive(Clone)]
pub struct UserService {
    records: RecordStore,
    clock: Arc<dyn Clock>,
}

impl UserService {
    #[must_use]
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { records, clock }
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.records
            .load_or_seed(CollectionKey::Users, seed::users)
            .await
    }

    pub async fn find(&self, id: &UserId) -> DomainResult<Option<User>> {
        Ok(self.list().await?.into_iter().find(|user| &user.id == id))
    }

    /// Create a customer account with an empty document wallet.
    pub async fn add_customer(&self, draft: NewCustomer) -> DomainResult<User> {
        let mut users = self.list().await?;
        let user = User {
            id: UserId::generate(),
            role: UserRole::Customer,
            full_name: draft.full_name,
            nic_number: draft.nic_number,
            contact_number: draft.contact_number,
            email: draft.email,
            password: draft.password,
            address: draft.address,
            installed_by: draft.installed_by,
            file_number: draft.file_number,
            system: draft.system,
            documents: Vec::new(),
        };
        users.push(user.clone());
        self.records.save(CollectionKey::Users, &users).await?;
        Ok(user)
    }

    /// Replace the stored record whose id matches `user.id`.
    pub async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.list().await?;
        let slot = users
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or_else(|| Error::not_found(format!("user '{}' not found", user.id)))?;
        *slot = user.clone();
        self.records.save(CollectionKey::Users, &users).await?;
        Ok(user)
    }

    /// Delete a user record. Removing an id that is not present succeeds
    /// without touching the store.
    pub async fn remove(&self, id: &UserId) -> DomainResult<()> {
        let mut users = self.list().await?;
        let before = users.len();
        users.retain(|user| &user.id != id);
        if users.len() == before {
            return Ok(());
        }
        self.records.save(CollectionKey::Users, &users).await
    }

    /// Attach a document to one user's wallet.
    pub async fn add_document(
        &self,
        id: &UserId,
        draft: NewDocument,
    ) -> DomainResult<(User, Document)> {
        let mut users = self.list().await?;
        let slot = users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| Error::not_found(format!("user '{id}' not found")))?;
        let document = Document {
            id: DocumentId::generate(),
            name: draft.name,
            url: draft.url,
            uploaded_at: self.clock.utc(),
        };
        slot.documents.push(document.clone());
        let user = slot.clone();
        self.records.save(CollectionKey::Users, &users).await?;
        Ok((user, document))
    }

    /// Attach a copy of the document to every customer account. Each copy
    /// gets its own id; admins are left untouched.
    pub async fn add_document_to_all_customers(
        &self,
        draft: NewDocument,
    ) -> DomainResult<DocumentBroadcast> {
        let mut users = self.list().await?;
        let uploaded_at = self.clock.utc();
        let mut copies = Vec::new();
        for user in users.iter_mut().filter(|user| user.is_customer()) {
            let document_id = DocumentId::generate();
            user.documents.push(Document {
                id: document_id.clone(),
                name: draft.name.clone(),
                url: draft.url.clone(),
                uploaded_at,
            });
            copies.push((user.id.clone(), document_id));
        }
        self.records.save(CollectionKey::Users, &users).await?;
        Ok(DocumentBroadcast {
            users,
            copies,
            document_name: draft.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockable::MockClock;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::test_support::service_records;

    fn clock() -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        clock
            .expect_utc()
            .returning(|| "2024-06-02T10:00:00Z".parse().expect("valid timestamp"));
        Arc::new(clock)
    }

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            full_name: name.into(),
            nic_number: "555555555V".into(),
            contact_number: "+94 70 000 0000".into(),
            email: "new@example.com".into(),
            password: Some("password".into()),
            address: "Galle, Sri Lanka".into(),
            installed_by: "Archnix Solar Tech".into(),
            file_number: "FN-010".into(),
            system: crate::domain::SolarSystem::none(),
        }
    }

    #[tokio::test]
    async fn add_customer_assigns_role_and_empty_wallet() {
        let service = UserService::new(service_records(), clock());

        let user = service
            .add_customer(new_customer("Nadia Perera"))
            .await
            .expect("add should succeed");

        assert_eq!(user.role, UserRole::Customer);
        assert!(user.documents.is_empty());
        let stored = service.find(&user.id).await.expect("lookup should succeed");
        assert_eq!(stored.as_ref().map(|u| u.full_name.as_str()), Some("Nadia Perera"));
    }

    #[tokio::test]
    async fn update_missing_user_reports_not_found() {
        let service = UserService::new(service_records(), clock());
        let mut user = seed::users().remove(0);
        user.id = UserId::generate();

        let err = service.update(user).await.expect_err("should fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn remove_missing_user_is_a_silent_no_op() {
        let service = UserService::new(service_records(), clock());
        let before = service.list().await.expect("list should succeed");

        service
            .remove(&UserId::generate())
            .await
            .expect("remove should succeed");

        let after = service.list().await.expect("list should succeed");
        assert_eq!(before.len(), after.len());
    }

    #[tokio::test]
    async fn add_document_appends_to_the_named_user_only() {
        let service = UserService::new(service_records(), clock());
        let target = seed::users().remove(0).id;

        let (user, document) = service
            .add_document(
                &target,
                NewDocument {
                    name: "Inspection Report.pdf".into(),
                    url: "data:application/pdf;base64,JVBERi0xLjQK".into(),
                },
            )
            .await
            .expect("attach should succeed");

        assert_eq!(user.id, target);
        assert_eq!(document.name, "Inspection Report.pdf");
        assert!(user.documents.iter().any(|d| d.id == document.id));
    }

    #[tokio::test]
    async fn broadcast_reaches_every_customer_and_no_admin() {
        let service = UserService::new(service_records(), clock());
        let draft = NewDocument {
            name: "Tariff Update.pdf".into(),
            url: "data:application/pdf;base64,JVBERi0xLjQK".into(),
        };

        let broadcast = service
            .add_document_to_all_customers(draft)
            .await
            .expect("broadcast should succeed");

        assert_eq!(broadcast.copies.len(), 2);
        let copies: Vec<&Document> = broadcast
            .users
            .iter()
            .flat_map(|u| &u.documents)
            .filter(|d| d.name == "Tariff Update.pdf")
            .collect();
        assert_eq!(copies.len(), 2);
        assert_ne!(copies[0].id, copies[1].id);
        let admin = broadcast
            .users
            .iter()
            .find(|u| u.is_admin())
            .expect("seed admin");
        assert!(admin.documents.is_empty());
    }
}
