//! Tutorial catalogue API handlers.
//!
//! ```text
//! GET /api/v1/tutorials
//! PUT /api/v1/tutorials
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Toast, Tutorial, TutorialDraft, TutorialId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_id, require_non_blank};
use crate::inbound::http::ApiResult;

/// One catalogue entry in a replacement request. Entries without an id are
/// created fresh.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TutorialEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub youtube_url: String,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TutorialEntry {
    fn into_draft(self) -> Result<TutorialDraft, Error> {
        require_non_blank(&self.title, "title")?;
        require_non_blank(&self.youtube_url, "youtubeUrl")?;
        let id = self
            .id
            .map(|raw| parse_id::<TutorialId>(raw, "id"))
            .transpose()?;
        Ok(TutorialDraft {
            id,
            title: self.title,
            youtube_url: self.youtube_url,
            created_at: self.created_at,
        })
    }
}

/// The replaced catalogue plus its confirmation toast.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TutorialsResponse {
    pub tutorials: Vec<Tutorial>,
    pub toast: Toast,
}

/// List the tutorial catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/tutorials",
    responses(
        (status = 200, description = "Tutorials", body = [Tutorial]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["tutorials"],
    operation_id = "listTutorials"
)]
#[get("/tutorials")]
pub async fn list_tutorials(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Tutorial>>> {
    Ok(web::Json(state.portal.tutorials().await?))
}

/// Replace the whole tutorial catalogue.
#[utoipa::path(
    put,
    path = "/api/v1/tutorials",
    request_body = Vec<TutorialEntry>,
    responses(
        (status = 200, description = "Catalogue replaced", body = TutorialsResponse),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["tutorials"],
    operation_id = "replaceTutorials"
)]
#[put("/tutorials")]
pub async fn replace_tutorials(
    state: web::Data<HttpState>,
    payload: web::Json<Vec<TutorialEntry>>,
) -> ApiResult<web::Json<TutorialsResponse>> {
    let drafts = payload
        .into_inner()
        .into_iter()
        .map(TutorialEntry::into_draft)
        .collect::<Result<Vec<_>, _>>()?;
    let actioned = state.portal.replace_tutorials(drafts).await?;
    Ok(web::Json(TutorialsResponse {
        tutorials: actioned.value,
        toast: actioned.toast,
    }))
}
