//! Support ticket API handlers.
//!
//! ```text
//! GET  /api/v1/tickets
//! POST /api/v1/tickets
//! GET  /api/v1/tickets/{id}
//! POST /api/v1/tickets/{id}/messages
//! PUT  /api/v1/tickets/{id}/status
//! ```

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, MessageDraft, MessageSender, NewTicket, Ticket, TicketId, Toast, UserId,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_id, parse_ticket_status, require_non_blank};
use crate::inbound::http::ApiResult;

/// Optional filter for ticket listings.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TicketListQuery {
    /// Restrict the listing to one customer's tickets.
    pub customer_id: Option<String>,
}

/// Request body for opening a ticket.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenTicketRequest {
    pub subject: String,
    pub message: String,
    pub customer_id: String,
    pub complaint_type: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

impl OpenTicketRequest {
    fn into_draft(self) -> Result<NewTicket, Error> {
        require_non_blank(&self.subject, "subject")?;
        require_non_blank(&self.message, "message")?;
        require_non_blank(&self.complaint_type, "complaintType")?;
        let customer_id: UserId = parse_id(self.customer_id, "customerId")?;
        Ok(NewTicket {
            subject: self.subject,
            message: self.message,
            customer_id,
            complaint_type: self.complaint_type,
            photo_urls: self.photo_urls,
        })
    }
}

/// Request body for appending a reply.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub text: String,
    pub sender: MessageSender,
}

/// Request body for a status change.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    /// One of `Open`, `In Progress`, `Closed`.
    pub status: String,
}

/// A committed ticket write plus its confirmation toast.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub ticket: Ticket,
    pub toast: Toast,
}

/// List tickets, optionally filtered to one customer.
#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    params(TicketListQuery),
    responses(
        (status = 200, description = "Tickets, newest first", body = [Ticket]),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["tickets"],
    operation_id = "listTickets"
)]
#[get("/tickets")]
pub async fn list_tickets(
    state: web::Data<HttpState>,
    query: web::Query<TicketListQuery>,
) -> ApiResult<web::Json<Vec<Ticket>>> {
    let tickets = match query.into_inner().customer_id {
        Some(raw) => {
            let customer_id: UserId = parse_id(raw, "customerId")?;
            state.portal.tickets_for(&customer_id).await?
        }
        None => state.portal.tickets().await?,
    };
    Ok(web::Json(tickets))
}

/// Open a new support ticket.
#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    request_body = OpenTicketRequest,
    responses(
        (status = 201, description = "Ticket opened", body = TicketResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown customer", body = Error)
    ),
    tags = ["tickets"],
    operation_id = "openTicket"
)]
#[post("/tickets")]
pub async fn open_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<OpenTicketRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let actioned = state.portal.open_ticket(draft).await?;
    Ok(HttpResponse::Created().json(TicketResponse {
        ticket: actioned.value,
        toast: actioned.toast,
    }))
}

/// Fetch one ticket by id.
#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}",
    params(("id" = String, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket", body = Ticket),
        (status = 404, description = "Unknown ticket", body = Error)
    ),
    tags = ["tickets"],
    operation_id = "getTicket"
)]
#[get("/tickets/{id}")]
pub async fn get_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Ticket>> {
    let id: TicketId = parse_id(path.into_inner(), "ticketId")?;
    Ok(web::Json(state.portal.ticket(&id).await?))
}

/// Append a reply to a ticket's thread.
#[utoipa::path(
    post,
    path = "/api/v1/tickets/{id}/messages",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = ReplyRequest,
    responses(
        (status = 201, description = "Reply recorded", body = TicketResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown ticket", body = Error)
    ),
    tags = ["tickets"],
    operation_id = "replyToTicket"
)]
#[post("/tickets/{id}/messages")]
pub async fn reply_to_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ReplyRequest>,
) -> ApiResult<HttpResponse> {
    let id: TicketId = parse_id(path.into_inner(), "ticketId")?;
    let payload = payload.into_inner();
    require_non_blank(&payload.text, "text")?;
    let actioned = state
        .portal
        .reply_to_ticket(
            &id,
            MessageDraft {
                text: payload.text,
                sender: payload.sender,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(TicketResponse {
        ticket: actioned.value,
        toast: actioned.toast,
    }))
}

/// Move a ticket to a new status.
#[utoipa::path(
    put,
    path = "/api/v1/tickets/{id}/status",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = TicketResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown ticket", body = Error)
    ),
    tags = ["tickets"],
    operation_id = "setTicketStatus"
)]
#[put("/tickets/{id}/status")]
pub async fn set_ticket_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<StatusRequest>,
) -> ApiResult<web::Json<TicketResponse>> {
    let id: TicketId = parse_id(path.into_inner(), "ticketId")?;
    let status = parse_ticket_status(&payload.status)?;
    let actioned = state.portal.set_ticket_status(&id, status).await?;
    Ok(web::Json(TicketResponse {
        ticket: actioned.value,
        toast: actioned.toast,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::inbound::http::configure_api;
    use crate::test_support::test_state;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_api)
    }

    #[actix_rt::test]
    async fn opening_a_ticket_returns_created_with_toast() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/tickets")
                .set_json(json!({
                    "subject": "Monitoring app offline",
                    "message": "No data since Monday.",
                    "customerId": "customer1",
                    "complaintType": "General Question",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 201);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body["toast"]["message"],
            "Your ticket has been submitted successfully!"
        );
        assert_eq!(body["ticket"]["status"], "Open");
        assert_eq!(body["ticket"]["customerName"], "John Doe");
        assert_eq!(body["ticket"]["messages"].as_array().map(Vec::len), Some(1));
    }

    #[actix_rt::test]
    async fn listing_tickets_can_filter_by_customer() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/tickets?customerId=customer2")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        let body: Value = actix_test::read_body_json(response).await;
        let tickets = body.as_array().expect("array body");
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0]["customerId"], "customer2");
    }

    #[actix_rt::test]
    async fn status_update_rejects_unknown_labels() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/v1/tickets/ticket1/status")
                .set_json(json!({ "status": "Reopened" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_rt::test]
    async fn closing_a_ticket_notifies_its_customer() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/v1/tickets/ticket1/status")
                .set_json(json!({ "status": "Closed" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["toast"]["message"], "Ticket status updated to Closed.");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/customer1/notifications")
                .to_request(),
        )
        .await;
        let notifications: Value = actix_test::read_body_json(response).await;
        assert!(notifications[0]["message"]
            .as_str()
            .expect("string message")
            .ends_with("was updated to Closed."));
    }

    #[actix_rt::test]
    async fn replying_to_a_missing_ticket_is_404() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/tickets/ticket-does-not-exist/messages")
                .set_json(json!({ "text": "hello", "sender": "admin" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);
    }
}
