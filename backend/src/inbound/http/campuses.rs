//! Campus directory handler.
//!
//! ```text
//! GET /api/v1/campuses/
//! ```

use actix_web::{get, web};

use crate::domain::{CampusRecord, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CampusSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List all campuses in code order. No token required.
#[utoipa::path(
    get,
    path = "/api/v1/campuses/",
    responses(
        (status = 200, description = "Campuses", body = [CampusSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["campuses"],
    operation_id = "listCampuses",
    security([])
)]
#[get("/campuses/")]
pub async fn list_campuses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CampusRecord>>> {
    let campuses = state
        .campuses
        .list()
        .await
        .map_err(|err| Error::internal(format!("campus repository error: {err}")))?;
    Ok(web::Json(campuses))
}
