//! Review submission handler.
//!
//! ```text
//! PATCH /updateTutor/{bookingId}   {"email": "reviewer@x.com"}
//! ```
//!
//! The route is open: anyone may review any booking, but each reviewer is
//! counted once per booking.

use actix_web::{HttpResponse, patch, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{DocumentId, Error, ReviewOutcome, ReviewerEmail, UpdateOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ReviewRecordedSchema};
use crate::inbound::http::state::HttpState;

/// Message returned when a reviewer has already been counted.
pub const ALREADY_REVIEWED_MESSAGE: &str = "You have already reviewed";

/// Review request body: `{"email": "..."}` or a bare JSON string.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum ReviewRequest {
    Object { email: String },
    Bare(String),
}

impl ReviewRequest {
    fn into_email(self) -> String {
        match self {
            Self::Object { email } | Self::Bare(email) => email,
        }
    }
}

/// Acknowledgements returned for a counted review.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRecorded {
    update_review: UpdateOutcome,
    tutor_update: UpdateOutcome,
}

/// Count a review on a booking and refresh the tutor's listings.
#[utoipa::path(
    patch,
    path = "/updateTutor/{id}",
    params(("id" = String, Path, description = "Booking identifier")),
    request_body = ReviewRequest,
    responses(
        (
            status = 200,
            description = "Review counted; a `ReviewNotice` replaces this body when the reviewer was already counted or the booking is unknown",
            body = ReviewRecordedSchema
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "updateTutor",
    security([])
)]
#[patch("/updateTutor/{id}")]
pub async fn submit_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<HttpResponse> {
    let booking_id = DocumentId::new(path.into_inner());
    let reviewer = ReviewerEmail::new(payload.into_inner().into_email())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let outcome = state.reviews.submit_review(&booking_id, reviewer).await?;
    let response = match outcome {
        ReviewOutcome::Recorded {
            review_update,
            tutor_update,
        } => HttpResponse::Ok().json(ReviewRecorded {
            update_review: review_update,
            tutor_update,
        }),
        ReviewOutcome::AlreadyReviewed => {
            HttpResponse::Ok().json(json!({ "message": ALREADY_REVIEWED_MESSAGE }))
        }
    };
    Ok(response)
}
