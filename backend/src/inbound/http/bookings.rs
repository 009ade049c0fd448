//! Booking handlers.
//!
//! ```text
//! POST /bookTutor                 store a booking as submitted
//! GET  /allBookings?email=...     bookings the caller made
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;

use crate::domain::{Booking, InsertOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::{BookingSchema, ErrorSchema, InsertOutcomeSchema};
use crate::inbound::http::state::HttpState;

/// Query string for `GET /allBookings`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequesterQuery {
    /// Requester email; must match the caller.
    #[serde(default)]
    pub email: String,
}

/// Store a booking.
#[utoipa::path(
    post,
    path = "/bookTutor",
    request_body = BookingSchema,
    responses(
        (status = 200, description = "Booking stored", body = InsertOutcomeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "bookTutor",
    security([])
)]
#[post("/bookTutor")]
pub async fn book_tutor(
    state: web::Data<HttpState>,
    payload: web::Json<Booking>,
) -> ApiResult<web::Json<InsertOutcome>> {
    Ok(web::Json(state.bookings.create(payload.into_inner()).await?))
}

/// List the caller's bookings.
#[utoipa::path(
    get,
    path = "/allBookings",
    params(RequesterQuery),
    responses(
        (status = 200, description = "Caller's bookings", body = [BookingSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Email is not the caller's", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "allBookings"
)]
#[get("/allBookings")]
pub async fn all_bookings(
    state: web::Data<HttpState>,
    caller: Authenticated,
    query: web::Query<RequesterQuery>,
) -> ApiResult<web::Json<Vec<Booking>>> {
    let bookings = state
        .bookings_query
        .list_by_requester(caller.identity(), &query.email)
        .await?;
    Ok(web::Json(bookings))
}
