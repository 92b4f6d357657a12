//! Tutorial records managed by admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::TutorialId;

/// Published video tutorial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: String,
    pub youtube_url: String,
    pub created_at: DateTime<Utc>,
}

/// One entry of a bulk tutorial replacement.
///
/// Tutorials are replaced wholesale rather than upserted per item; entries
/// without an id or timestamp are treated as new and completed by the
/// service.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialDraft {
    pub id: Option<TutorialId>,
    pub title: String,
    pub youtube_url: String,
    pub created_at: Option<DateTime<Utc>>,
}
