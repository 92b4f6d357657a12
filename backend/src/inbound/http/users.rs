//! Customer account API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! POST   /api/v1/users
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}
//! DELETE /api/v1/users/{id}
//! POST   /api/v1/users/{id}/documents
//! POST   /api/v1/documents/broadcast
//! GET    /api/v1/users/{id}/notifications
//! POST   /api/v1/users/{id}/notifications/read-all
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Document, Error, NewCustomer, NewDocument, Notification, SolarSystem, Toast, User, UserId,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_id, require_non_blank};
use crate::inbound::http::ApiResult;

/// Request body for registering or replacing a customer account.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub full_name: String,
    #[serde(default)]
    pub nic_number: String,
    #[serde(default)]
    pub contact_number: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub installed_by: String,
    #[serde(default)]
    pub file_number: String,
    #[serde(default)]
    pub system: Option<SolarSystem>,
}

impl CustomerRequest {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank(&self.full_name, "fullName")?;
        require_non_blank(&self.email, "email")
    }

    /// Validate and convert in one step, for handlers that accept this
    /// payload from other modules.
    pub(crate) fn into_validated_draft(self) -> Result<NewCustomer, Error> {
        self.validate()?;
        Ok(self.into_draft())
    }

    fn into_draft(self) -> NewCustomer {
        NewCustomer {
            full_name: self.full_name,
            nic_number: self.nic_number,
            contact_number: self.contact_number,
            email: self.email,
            password: self.password,
            address: self.address,
            installed_by: self.installed_by,
            file_number: self.file_number,
            system: self.system.unwrap_or_else(SolarSystem::none),
        }
    }
}

/// Request body for attaching or broadcasting a document.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub name: String,
    pub url: String,
}

impl DocumentRequest {
    fn into_draft(self) -> Result<NewDocument, Error> {
        require_non_blank(&self.name, "name")?;
        require_non_blank(&self.url, "url")?;
        Ok(NewDocument {
            name: self.name,
            url: self.url,
        })
    }
}

/// A committed customer write plus its confirmation toast.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub user: User,
    pub toast: Toast,
}

/// Result of attaching a document to one customer.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub user: User,
    pub document: Document,
    pub toast: Toast,
}

/// Result of broadcasting a document to every customer.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResponse {
    pub users: Vec<User>,
    pub toast: Toast,
}

/// Confirmation for a deletion.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemovedResponse {
    pub toast: Toast,
}

/// List customer accounts.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Customer accounts", body = [User]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listCustomers"
)]
#[get("/users")]
pub async fn list_customers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.portal.customers().await?))
}

/// Register a new customer account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerCustomer"
)]
#[post("/users")]
pub async fn register_customer(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    payload.validate()?;
    let actioned = state.portal.register_customer(payload.into_draft()).await?;
    Ok(HttpResponse::Created().json(CustomerResponse {
        user: actioned.value,
        toast: actioned.toast,
    }))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_id(path.into_inner(), "userId")?;
    Ok(web::Json(state.portal.user(&id).await?))
}

/// Replace a customer record.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = User,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateCustomer"
)]
#[put("/users/{id}")]
pub async fn update_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<User>,
) -> ApiResult<web::Json<CustomerResponse>> {
    let id: UserId = parse_id(path.into_inner(), "userId")?;
    let user = payload.into_inner();
    if user.id != id {
        return Err(Error::invalid_request(
            "body id does not match the path id",
        ));
    }
    let actioned = state.portal.update_customer(user).await?;
    Ok(web::Json(CustomerResponse {
        user: actioned.value,
        toast: actioned.toast,
    }))
}

/// Delete a customer record. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Customer removed", body = RemovedResponse),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "removeCustomer"
)]
#[delete("/users/{id}")]
pub async fn remove_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RemovedResponse>> {
    let id: UserId = parse_id(path.into_inner(), "userId")?;
    let actioned = state.portal.remove_customer(&id).await?;
    Ok(web::Json(RemovedResponse {
        toast: actioned.toast,
    }))
}

/// Attach a document to one customer's profile.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/documents",
    params(("id" = String, Path, description = "User id")),
    request_body = DocumentRequest,
    responses(
        (status = 201, description = "Document attached", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["documents"],
    operation_id = "attachDocument"
)]
#[post("/users/{id}/documents")]
pub async fn attach_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DocumentRequest>,
) -> ApiResult<HttpResponse> {
    let id: UserId = parse_id(path.into_inner(), "userId")?;
    let draft = payload.into_inner().into_draft()?;
    let actioned = state.portal.attach_document(&id, draft).await?;
    let (user, document) = actioned.value;
    Ok(HttpResponse::Created().json(DocumentResponse {
        user,
        document,
        toast: actioned.toast,
    }))
}

/// Send a copy of a document to every customer.
#[utoipa::path(
    post,
    path = "/api/v1/documents/broadcast",
    request_body = DocumentRequest,
    responses(
        (status = 201, description = "Document broadcast", body = BroadcastResponse),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["documents"],
    operation_id = "broadcastDocument"
)]
#[post("/documents/broadcast")]
pub async fn broadcast_document(
    state: web::Data<HttpState>,
    payload: web::Json<DocumentRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let actioned = state.portal.broadcast_document(draft).await?;
    Ok(HttpResponse::Created().json(BroadcastResponse {
        users: actioned.value,
        toast: actioned.toast,
    }))
}

/// Notifications addressed to one user, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/notifications",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Notifications", body = [Notification]),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "listUserNotifications"
)]
#[get("/users/{id}/notifications")]
pub async fn list_user_notifications(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Notification>>> {
    let id: UserId = parse_id(path.into_inner(), "userId")?;
    Ok(web::Json(state.portal.notifications_for(&id).await?))
}

/// Mark every notification for one user as read.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/notifications/read-all",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "Notifications marked read"),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "markAllNotificationsRead"
)]
#[post("/users/{id}/notifications/read-all")]
pub async fn mark_all_notifications_read(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: UserId = parse_id(path.into_inner(), "userId")?;
    state.portal.mark_all_notifications_read(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
