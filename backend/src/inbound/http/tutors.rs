//! Tutor listing handlers.
//!
//! ```text
//! POST   /addTutor                      create a listing owned by the caller
//! GET    /allTutors                     every listing
//! GET    /myAddedTutorials?email=...    the caller's listings
//! GET    /tutorDetails/{id}             one listing
//! PUT    /updateTutorialData/{id}       overwrite supplied fields
//! DELETE /deleteTutorial/{id}           remove a listing
//! GET    /searchTutors?language=...     case-insensitive language search
//! ```

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::{
    DeleteOutcome, DocumentId, FieldPatch, InsertOutcome, TutorListing, UpdateOutcome,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::{
    DeleteOutcomeSchema, ErrorSchema, InsertOutcomeSchema, TutorListingSchema,
    UpdateOutcomeSchema,
};
use crate::inbound::http::state::HttpState;

/// Query string for `GET /myAddedTutorials`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    /// Owner email; must match the caller.
    #[serde(default)]
    pub email: String,
}

/// Query string for `GET /searchTutors`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    /// Language fragment; blank or absent lists every tutor.
    #[serde(default)]
    pub language: Option<String>,
}

/// Publish a tutor listing owned by the caller.
#[utoipa::path(
    post,
    path = "/addTutor",
    request_body = TutorListingSchema,
    responses(
        (status = 200, description = "Listing stored", body = InsertOutcomeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Listing email is not the caller's", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "addTutor"
)]
#[post("/addTutor")]
pub async fn add_tutor(
    state: web::Data<HttpState>,
    caller: Authenticated,
    payload: web::Json<TutorListing>,
) -> ApiResult<web::Json<InsertOutcome>> {
    let outcome = state
        .tutors
        .create(caller.identity(), payload.into_inner())
        .await?;
    Ok(web::Json(outcome))
}

/// List every tutor listing.
#[utoipa::path(
    get,
    path = "/allTutors",
    responses(
        (status = 200, description = "Listings", body = [TutorListingSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "allTutors"
)]
#[get("/allTutors")]
pub async fn all_tutors(
    state: web::Data<HttpState>,
    _caller: Authenticated,
) -> ApiResult<web::Json<Vec<TutorListing>>> {
    Ok(web::Json(state.tutors_query.list_all().await?))
}

/// List the caller's own listings.
#[utoipa::path(
    get,
    path = "/myAddedTutorials",
    params(OwnerQuery),
    responses(
        (status = 200, description = "Caller's listings", body = [TutorListingSchema]),
        (status = 401, description = "Missing credential or email is not the caller's", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "myAddedTutorials"
)]
#[get("/myAddedTutorials")]
pub async fn my_added_tutorials(
    state: web::Data<HttpState>,
    caller: Authenticated,
    query: web::Query<OwnerQuery>,
) -> ApiResult<web::Json<Vec<TutorListing>>> {
    let listings = state
        .tutors_query
        .list_by_owner(caller.identity(), &query.email)
        .await?;
    Ok(web::Json(listings))
}

/// Fetch one listing.
#[utoipa::path(
    get,
    path = "/tutorDetails/{id}",
    params(("id" = String, Path, description = "Listing identifier")),
    responses(
        (status = 200, description = "Listing", body = TutorListingSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Tutor not found", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "tutorDetails"
)]
#[get("/tutorDetails/{id}")]
pub async fn tutor_details(
    state: web::Data<HttpState>,
    _caller: Authenticated,
    path: web::Path<String>,
) -> ApiResult<web::Json<TutorListing>> {
    let id = DocumentId::new(path.into_inner());
    Ok(web::Json(state.tutors_query.get_by_id(&id).await?))
}

/// Overwrite the supplied fields on a listing.
#[utoipa::path(
    put,
    path = "/updateTutorialData/{id}",
    params(("id" = String, Path, description = "Listing identifier")),
    request_body(content = Object, description = "Fields to overwrite; `_id` is ignored"),
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateOutcomeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "updateTutorialData",
    security([])
)]
#[put("/updateTutorialData/{id}")]
pub async fn update_tutorial_data(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<FieldPatch>,
) -> ApiResult<web::Json<UpdateOutcome>> {
    let id = DocumentId::new(path.into_inner());
    Ok(web::Json(state.tutors.replace(&id, payload.into_inner()).await?))
}

/// Remove a listing.
#[utoipa::path(
    delete,
    path = "/deleteTutorial/{id}",
    params(("id" = String, Path, description = "Listing identifier")),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteOutcomeSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "deleteTutorial",
    security([])
)]
#[delete("/deleteTutorial/{id}")]
pub async fn delete_tutorial(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteOutcome>> {
    let id = DocumentId::new(path.into_inner());
    Ok(web::Json(state.tutors.delete(&id).await?))
}

/// Search listings by language.
#[utoipa::path(
    get,
    path = "/searchTutors",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Matching listings", body = [TutorListingSchema]),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["tutors"],
    operation_id = "searchTutors",
    security([])
)]
#[get("/searchTutors")]
pub async fn search_tutors(
    state: web::Data<HttpState>,
    query: web::Query<LanguageQuery>,
) -> ApiResult<web::Json<Vec<TutorListing>>> {
    let fragment = query.language.as_deref().unwrap_or_default();
    Ok(web::Json(state.tutors_query.search(fragment).await?))
}

#[cfg(test)]
#[path = "tutors_tests.rs"]
mod tests;
