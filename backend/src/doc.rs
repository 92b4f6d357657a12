//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: every
//! endpoint from the inbound layer plus the domain and request/response
//! schemas they reference. The generated document backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{
    Document, Enquiry, EnquiryStatus, Error, ErrorCode, MessageSender, Notification,
    NotificationKind, SolarSystem, Ticket, TicketMessage, TicketStatus, Toast, Tutorial, User,
    UserRole, WarrantyItem,
};
use crate::inbound::http::enquiries::{ApprovalResponse, EnquiryRequest, EnquiryResponse};
use crate::inbound::http::tickets::{
    OpenTicketRequest, ReplyRequest, StatusRequest, TicketResponse,
};
use crate::inbound::http::tutorials::{TutorialEntry, TutorialsResponse};
use crate::inbound::http::users::{
    BroadcastResponse, CustomerRequest, CustomerResponse, DocumentRequest, DocumentResponse,
    RemovedResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Solar customer portal API",
        description = "Customer accounts, support tickets, tutorials, \
                       enquiries, and notifications for a solar installer."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_customers,
        crate::inbound::http::users::register_customer,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_customer,
        crate::inbound::http::users::remove_customer,
        crate::inbound::http::users::attach_document,
        crate::inbound::http::users::broadcast_document,
        crate::inbound::http::users::list_user_notifications,
        crate::inbound::http::users::mark_all_notifications_read,
        crate::inbound::http::tickets::list_tickets,
        crate::inbound::http::tickets::open_ticket,
        crate::inbound::http::tickets::get_ticket,
        crate::inbound::http::tickets::reply_to_ticket,
        crate::inbound::http::tickets::set_ticket_status,
        crate::inbound::http::tutorials::list_tutorials,
        crate::inbound::http::tutorials::replace_tutorials,
        crate::inbound::http::enquiries::list_enquiries,
        crate::inbound::http::enquiries::submit_enquiry,
        crate::inbound::http::enquiries::approve_enquiry,
        crate::inbound::http::enquiries::reject_enquiry,
        crate::inbound::http::notifications::mark_notification_read,
        crate::inbound::http::warranty::list_warranty,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        UserRole,
        SolarSystem,
        Document,
        Ticket,
        TicketStatus,
        TicketMessage,
        MessageSender,
        Tutorial,
        Enquiry,
        EnquiryStatus,
        Notification,
        NotificationKind,
        WarrantyItem,
        Toast,
        CustomerRequest,
        CustomerResponse,
        DocumentRequest,
        DocumentResponse,
        BroadcastResponse,
        RemovedResponse,
        OpenTicketRequest,
        ReplyRequest,
        StatusRequest,
        TicketResponse,
        TutorialEntry,
        TutorialsResponse,
        EnquiryRequest,
        EnquiryResponse,
        ApprovalResponse,
    )),
    tags(
        (name = "users", description = "Customer account management"),
        (name = "documents", description = "Customer document delivery"),
        (name = "tickets", description = "Support ticket lifecycle"),
        (name = "tutorials", description = "Tutorial catalogue"),
        (name = "enquiries", description = "Expressions of interest"),
        (name = "notifications", description = "Per-user notifications"),
        (name = "warranty", description = "Warranty cover terms"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_exposes_code_and_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn every_api_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/users",
            "/api/v1/tickets",
            "/api/v1/tutorials",
            "/api/v1/enquiries",
            "/api/v1/warranty",
            "/health/ready",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path '{path}' in OpenAPI document"
            );
        }
    }
}
