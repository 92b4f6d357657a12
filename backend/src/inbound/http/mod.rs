//! HTTP inbound adapter exposing the REST endpoints.

pub mod enquiries;
pub mod error;
pub mod health;
pub mod notifications;
pub mod state;
pub mod tickets;
pub mod tutorials;
pub mod users;
pub mod validation;
pub mod warranty;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api/v1` endpoint on a service config.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(users::list_customers)
            .service(users::register_customer)
            .service(users::get_user)
            .service(users::update_customer)
            .service(users::remove_customer)
            .service(users::attach_document)
            .service(users::broadcast_document)
            .service(users::list_user_notifications)
            .service(users::mark_all_notifications_read)
            .service(tickets::list_tickets)
            .service(tickets::open_ticket)
            .service(tickets::get_ticket)
            .service(tickets::reply_to_ticket)
            .service(tickets::set_ticket_status)
            .service(tutorials::list_tutorials)
            .service(tutorials::replace_tutorials)
            .service(enquiries::list_enquiries)
            .service(enquiries::submit_enquiry)
            .service(enquiries::approve_enquiry)
            .service(enquiries::reject_enquiry)
            .service(notifications::mark_notification_read)
            .service(warranty::list_warranty),
    );
}
