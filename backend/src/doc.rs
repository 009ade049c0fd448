//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (tutors, bookings,
//!   reviews, categories, identities, health)
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//! - **Security**: Firebase ID token bearer scheme
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::reviews::ReviewRequest;
use crate::inbound::http::schemas::{
    BookingSchema, DeleteOutcomeSchema, ErrorCodeSchema, ErrorSchema, IdentityRecordSchema,
    InsertOutcomeSchema, LanguageCategorySchema, ReviewNoticeSchema, ReviewRecordedSchema,
    TutorListingSchema, UpdateOutcomeSchema,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme.
pub const BEARER_SCHEME: &str = "FirebaseIdToken";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Firebase ID token for the signed-in user."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Tutor booking API",
        description = "Tutor listings, bookings and reviews for the language tutoring marketplace."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("FirebaseIdToken" = [])),
    paths(
        crate::inbound::http::tutors::add_tutor,
        crate::inbound::http::tutors::all_tutors,
        crate::inbound::http::tutors::my_added_tutorials,
        crate::inbound::http::tutors::tutor_details,
        crate::inbound::http::tutors::update_tutorial_data,
        crate::inbound::http::tutors::delete_tutorial,
        crate::inbound::http::tutors::search_tutors,
        crate::inbound::http::bookings::book_tutor,
        crate::inbound::http::bookings::all_bookings,
        crate::inbound::http::reviews::submit_review,
        crate::inbound::http::categories::language_categories,
        crate::inbound::http::identities::all_firebase_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::health::root,
    ),
    components(schemas(
        TutorListingSchema,
        BookingSchema,
        InsertOutcomeSchema,
        UpdateOutcomeSchema,
        DeleteOutcomeSchema,
        ReviewRequest,
        ReviewRecordedSchema,
        ReviewNoticeSchema,
        LanguageCategorySchema,
        IdentityRecordSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "tutors", description = "Tutor listings"),
        (name = "bookings", description = "Lesson bookings"),
        (name = "reviews", description = "Review counting on bookings"),
        (name = "catalogue", description = "Static browse data"),
        (name = "identities", description = "Identity provider accounts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
