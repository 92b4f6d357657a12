//! Notification read-flag API handlers.
//!
//! Listing and read-all live under `/users/{id}` in
//! [`crate::inbound::http::users`]; this module covers the single-id flip.

use actix_web::{post, web, HttpResponse};

use crate::domain::{Error, NotificationId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;
use crate::inbound::http::ApiResult;

/// Mark one notification as read. Unknown ids succeed without effect.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = String, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Notification marked read"),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "markNotificationRead"
)]
#[post("/notifications/{id}/read")]
pub async fn mark_notification_read(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: NotificationId = parse_id(path.into_inner(), "notificationId")?;
    state.portal.mark_notification_read(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, App};
    use serde_json::Value;

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
    async fn marking_read_flips_the_flag() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/notifications/noti4/read")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 204);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/admin1/notifications")
                .to_request(),
        )
        .await;
        let notifications: Value = actix_test::read_body_json(response).await;
        let flipped = notifications
            .as_array()
            .expect("array body")
            .iter()
            .find(|n| n["id"] == "noti4")
            .expect("noti4 present");
        assert_eq!(flipped["isRead"], true);
    }

    #[actix_rt::test]
    async fn marking_an_unknown_id_still_succeeds() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/notifications/noti-does-not-exist/read")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 204);
    }
}
