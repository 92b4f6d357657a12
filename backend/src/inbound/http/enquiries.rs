//! Expression-of-interest API handlers.
//!
//! ```text
//! GET  /api/v1/enquiries
//! POST /api/v1/enquiries
//! POST /api/v1/enquiries/{id}/approve
//! POST /api/v1/enquiries/{id}/reject
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;

use crate::domain::{Enquiry, EnquiryId, Error, NewEnquiry, Toast, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::CustomerRequest;
use crate::inbound::http::validation::{parse_id, require_non_blank};
use crate::inbound::http::ApiResult;

/// Request body for a public enquiry submission.
#[derive(Debug, Clone, serde::Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl EnquiryRequest {
    fn into_draft(self) -> Result<NewEnquiry, Error> {
        require_non_blank(&self.name, "name")?;
        require_non_blank(&self.email, "email")?;
        require_non_blank(&self.phone, "phone")?;
        Ok(NewEnquiry {
            name: self.name,
            email: self.email,
            phone: self.phone,
        })
    }
}

/// A committed enquiry write plus its confirmation toast.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryResponse {
    pub enquiry: Enquiry,
    pub toast: Toast,
}

/// Result of approving an enquiry: the resolved enquiry and the freshly
/// created customer account.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalResponse {
    pub enquiry: Enquiry,
    pub user: User,
    pub toast: Toast,
}

/// List every enquiry, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/enquiries",
    responses(
        (status = 200, description = "Enquiries", body = [Enquiry]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["enquiries"],
    operation_id = "listEnquiries"
)]
#[get("/enquiries")]
pub async fn list_enquiries(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Enquiry>>> {
    Ok(web::Json(state.portal.enquiries().await?))
}

/// Submit a public enquiry.
#[utoipa::path(
    post,
    path = "/api/v1/enquiries",
    request_body = EnquiryRequest,
    responses(
        (status = 201, description = "Enquiry recorded", body = EnquiryResponse),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["enquiries"],
    operation_id = "submitEnquiry"
)]
#[post("/enquiries")]
pub async fn submit_enquiry(
    state: web::Data<HttpState>,
    payload: web::Json<EnquiryRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let actioned = state.portal.submit_enquiry(draft).await?;
    Ok(HttpResponse::Created().json(EnquiryResponse {
        enquiry: actioned.value,
        toast: actioned.toast,
    }))
}

/// Approve an enquiry, creating the customer account from the supplied
/// details.
#[utoipa::path(
    post,
    path = "/api/v1/enquiries/{id}/approve",
    params(("id" = String, Path, description = "Enquiry id")),
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Enquiry approved", body = ApprovalResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown enquiry", body = Error)
    ),
    tags = ["enquiries"],
    operation_id = "approveEnquiry"
)]
#[post("/enquiries/{id}/approve")]
pub async fn approve_enquiry(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    let id: EnquiryId = parse_id(path.into_inner(), "enquiryId")?;
    let account = payload.into_inner().into_validated_draft()?;
    let actioned = state.portal.approve_enquiry(&id, account).await?;
    let (enquiry, user) = actioned.value;
    Ok(HttpResponse::Created().json(ApprovalResponse {
        enquiry,
        user,
        toast: actioned.toast,
    }))
}

/// Reject an enquiry.
#[utoipa::path(
    post,
    path = "/api/v1/enquiries/{id}/reject",
    params(("id" = String, Path, description = "Enquiry id")),
    responses(
        (status = 200, description = "Enquiry rejected", body = EnquiryResponse),
        (status = 404, description = "Unknown enquiry", body = Error)
    ),
    tags = ["enquiries"],
    operation_id = "rejectEnquiry"
)]
#[post("/enquiries/{id}/reject")]
pub async fn reject_enquiry(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EnquiryResponse>> {
    let id: EnquiryId = parse_id(path.into_inner(), "enquiryId")?;
    let actioned = state.portal.reject_enquiry(&id).await?;
    Ok(web::Json(EnquiryResponse {
        enquiry: actioned.value,
        toast: actioned.toast,
    }))
}
