//! Expressions of interest submitted from the public landing page.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::enquiry::{Enquiry, EnquiryStatus, NewEnquiry};
use crate::domain::error::Error;
use crate::domain::ids::EnquiryId;
use crate::domain::ports::CollectionKey;
use crate::domain::records::RecordStore;
use crate::domain::seed;
use crate::domain::DomainResult;

#[derive(Clone)]
pub struct EnquiryService {
    records: RecordStore,
    clock: Arc<dyn Clock>,
}

impl EnquiryService {
    #[must_use]
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { records, clock }
    }

    pub async fn list(&self) -> DomainResult<Vec<Enquiry>> {
        self.records
            .load_or_seed(CollectionKey::Enquiries, seed::enquiries)
            .await
    }

    pub async fn find(&self, id: &EnquiryId) -> DomainResult<Option<Enquiry>> {
        Ok(self.list().await?.into_iter().find(|e| &e.id == id))
    }

    /// Record a fresh enquiry as pending, newest first.
    pub async fn submit(&self, draft: NewEnquiry) -> DomainResult<Enquiry> {
        let enquiry = Enquiry {
            id: EnquiryId::generate(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            submitted_at: self.clock.utc(),
            status: EnquiryStatus::Pending,
        };
        let mut enquiries = self.list().await?;
        enquiries.insert(0, enquiry.clone());
        self.records
            .save(CollectionKey::Enquiries, &enquiries)
            .await?;
        Ok(enquiry)
    }

    /// Move an enquiry to a resolved state.
    pub async fn set_status(
        &self,
        id: &EnquiryId,
        status: EnquiryStatus,
    ) -> DomainResult<Enquiry> {
        let mut enquiries = self.list().await?;
        let slot = enquiries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| Error::not_found(format!("enquiry '{id}' not found")))?;
        slot.status = status;
        let enquiry = slot.clone();
        self.records
            .save(CollectionKey::Enquiries, &enquiries)
            .await?;
        Ok(enquiry)
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

    #[tokio::test]
    async fn submit_prepends_a_pending_enquiry() {
        let service = EnquiryService::new(service_records(), clock());

        let enquiry = service
            .submit(NewEnquiry {
                name: "Dana Fernando".into(),
                email: "dana@example.com".into(),
                phone: "+94 76 000 1111".into(),
            })
            .await
            .expect("submit should succeed");

        assert_eq!(enquiry.status, EnquiryStatus::Pending);
        let stored = service.list().await.expect("list should succeed");
        assert_eq!(stored[0].id, enquiry.id);
        assert_eq!(stored.len(), seed::enquiries().len() + 1);
    }

    #[tokio::test]
    async fn set_status_resolves_an_existing_enquiry() {
        let service = EnquiryService::new(service_records(), clock());
        let target = seed::enquiries().remove(0);

        let updated = service
            .set_status(&target.id, EnquiryStatus::Rejected)
            .await
            .expect("status change should succeed");

        assert_eq!(updated.status, EnquiryStatus::Rejected);
        assert_eq!(updated.name, target.name);
    }

    #[tokio::test]
    async fn set_status_on_missing_enquiry_reports_not_found() {
        let service = EnquiryService::new(service_records(), clock());

        let err = service
            .set_status(&EnquiryId::generate(), EnquiryStatus::Approved)
            .await
            .expect_err("should fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
