//! Tutorial catalogue: a small list managed by wholesale replacement.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ids::TutorialId;
use crate::domain::ports::CollectionKey;
use crate::domain::records::RecordStore;
use crate::domain::seed;
use crate::domain::tutorial::{Tutorial, TutorialDraft};
use crate::domain::DomainResult;

#[derive(Clone)]
pub struct TutorialService {
    records: RecordStore,
    clock: Arc<dyn Clock>,
}

impl TutorialService {
    #[must_use]
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { records, clock }
    }

    pub async fn list(&self) -> DomainResult<Vec<Tutorial>> {
        self.records
            .load_or_seed(CollectionKey::Tutorials, seed::tutorials)
            .await
    }

    /// Replace the whole catalogue. Drafts without an id or timestamp are
    /// treated as new entries and filled in; drafts carrying both are kept
    /// verbatim.
    pub async fn replace_all(&self, drafts: Vec<TutorialDraft>) -> DomainResult<Vec<Tutorial>> {
        let tutorials: Vec<Tutorial> = drafts
            .into_iter()
            .map(|draft| Tutorial {
                id: draft.id.unwrap_or_else(TutorialId::generate),
                title: draft.title,
                youtube_url: draft.youtube_url,
                created_at: draft.created_at.unwrap_or_else(|| self.clock.utc()),
            })
            .collect();
        self.records
            .save(CollectionKey::Tutorials, &tutorials)
            .await?;
        Ok(tutorials)
    }
}
