//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod auth;
pub mod bookings;
pub mod categories;
pub mod error;
pub mod health;
pub mod identities;
pub mod reviews;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tutors;

pub use error::ApiResult;

/// Register every API route plus the body and query extractor settings.
///
/// Health probes are registered separately because they depend on
/// [`health::HealthState`] rather than [`state::HttpState`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .service(categories::language_categories)
        .service(identities::all_firebase_users)
        .service(tutors::add_tutor)
        .service(tutors::all_tutors)
        .service(tutors::my_added_tutorials)
        .service(tutors::tutor_details)
        .service(tutors::update_tutorial_data)
        .service(tutors::delete_tutorial)
        .service(tutors::search_tutors)
        .service(reviews::submit_review)
        .service(bookings::book_tutor)
        .service(bookings::all_bookings);
}
