//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body or query string could not be parsed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The bearer credential is missing or was rejected, or an owner check
    /// on a listing lookup failed.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested document does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The document store failed; the message carries its reason.
    #[schema(rename = "storage_failure")]
    StorageFailure,
    /// The identity provider failed; the message carries its reason.
    #[schema(rename = "provider_failure")]
    ProviderFailure,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "unauthorized")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Unauthorized access")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::TutorListing`].
///
/// Any further attributes supplied on creation are stored and returned
/// verbatim.
#[derive(ToSchema)]
#[schema(as = crate::domain::TutorListing, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TutorListingSchema {
    /// Storage-assigned identifier; omit on creation.
    #[schema(rename = "_id", example = "65f1c0ffee0000000000beef")]
    id: Option<String>,
    /// Owner email.
    #[schema(example = "tutor@example.com")]
    email: Option<String>,
    /// Language taught.
    #[schema(example = "Spanish")]
    language: Option<String>,
    /// Review count copied from the tutor's bookings.
    review_count: Option<u64>,
    /// Reviewer emails.
    reviewed_user: Option<Vec<String>>,
}

/// OpenAPI schema for [`crate::domain::Booking`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Booking, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingSchema {
    /// Storage-assigned identifier; omit on creation.
    #[schema(rename = "_id", example = "65f1c0ffee0000000000b00c")]
    id: Option<String>,
    /// Email of the user making the booking.
    #[schema(example = "student@example.com")]
    self_booking: Option<String>,
    /// Email of the booked tutor.
    #[schema(example = "tutor@example.com")]
    email: Option<String>,
    /// Number of distinct reviewers counted.
    review_count: Option<u64>,
    /// Reviewer emails.
    reviewed_user: Option<Vec<String>>,
}

/// OpenAPI schema for [`crate::domain::InsertOutcome`].
#[derive(ToSchema)]
#[schema(as = crate::domain::InsertOutcome, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InsertOutcomeSchema {
    acknowledged: bool,
    #[schema(example = "65f1c0ffee0000000000beef")]
    inserted_id: String,
}

/// OpenAPI schema for [`crate::domain::UpdateOutcome`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UpdateOutcome, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdateOutcomeSchema {
    acknowledged: bool,
    matched_count: u64,
    modified_count: u64,
    upserted_id: Option<String>,
    upserted_count: u64,
}

/// OpenAPI schema for [`crate::domain::DeleteOutcome`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DeleteOutcome, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeleteOutcomeSchema {
    acknowledged: bool,
    deleted_count: u64,
}

/// Body returned when a review was counted.
#[derive(ToSchema)]
#[schema(as = ReviewRecorded, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewRecordedSchema {
    /// Acknowledgement of the booking update.
    update_review: UpdateOutcomeSchema,
    /// Acknowledgement of the listing propagation.
    tutor_update: UpdateOutcomeSchema,
}

/// Body returned when nothing was counted.
#[derive(ToSchema)]
#[schema(as = ReviewNotice)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewNoticeSchema {
    #[schema(example = "You have already reviewed")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::LanguageCategory`].
#[derive(ToSchema)]
#[schema(as = crate::domain::LanguageCategory)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LanguageCategorySchema {
    #[schema(example = 1)]
    id: u8,
    #[schema(example = "english")]
    language: String,
    #[schema(example = "English tutors")]
    title: String,
    #[schema(example = "20,583 teachers")]
    teachers: String,
    icon: String,
}

/// OpenAPI schema for [`crate::domain::IdentityRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::IdentityRecord, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct IdentityRecordSchema {
    uid: String,
    email: Option<String>,
    email_verified: bool,
    display_name: Option<String>,
    #[schema(rename = "photoURL")]
    photo_url: Option<String>,
    phone_number: Option<String>,
    disabled: bool,
    /// `creationTime` and `lastSignInTime`, formatted as HTTP dates.
    metadata: serde_json::Value,
    provider_data: Vec<serde_json::Value>,
}
