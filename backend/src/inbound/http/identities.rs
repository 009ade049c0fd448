//! Identity provider account listing.

use actix_web::{get, web};

use crate::domain::IdentityRecord;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, IdentityRecordSchema};
use crate::inbound::http::state::HttpState;

/// List every account known to the identity provider.
#[utoipa::path(
    get,
    path = "/allFirebaseUsers",
    responses(
        (status = 200, description = "Provider accounts", body = [IdentityRecordSchema]),
        (status = 500, description = "Provider failure", body = ErrorSchema)
    ),
    tags = ["identities"],
    operation_id = "allFirebaseUsers",
    security([])
)]
#[get("/allFirebaseUsers")]
pub async fn all_firebase_users(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<IdentityRecord>>> {
    Ok(web::Json(state.directory.list_users().await?))
}
