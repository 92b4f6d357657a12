//! Warranty catalogue API handler.

use actix_web::{get, web};

use crate::domain::WarrantyItem;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// The warranty cover terms offered on every installation.
#[utoipa::path(
    get,
    path = "/api/v1/warranty",
    responses(
        (status = 200, description = "Cover terms", body = [WarrantyItem])
    ),
    tags = ["warranty"],
    operation_id = "listWarranty"
)]
#[get("/warranty")]
pub async fn list_warranty(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<WarrantyItem>>> {
    Ok(web::Json(state.portal.warranty()))
}
