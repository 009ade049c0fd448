//! Shared application builder for HTTP integration tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::{AUTHORIZATION, HeaderName};
use actix_web::{App, web};
use backend::Trace;
use backend::domain::ports::{
    BookingRepository, FixtureIdentityDirectory, FixtureIdentityVerifier, TutorRepository,
};
use backend::inbound::http::configure;
use backend::inbound::http::error::route_not_found;
use backend::inbound::http::state::{HttpIdentityPorts, HttpState};
use backend::outbound::memory::{InMemoryBookingRepository, InMemoryTutorRepository};

/// Repositories shared between the app and test assertions.
#[derive(Clone, Default)]
pub struct Stores {
    pub tutors: Arc<InMemoryTutorRepository>,
    pub bookings: Arc<InMemoryBookingRepository>,
}

/// Full API over `stores`, with tracing and the not-found fallback.
pub fn app(
    stores: &Stores,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let tutors: Arc<dyn TutorRepository> = stores.tutors.clone();
    let bookings: Arc<dyn BookingRepository> = stores.bookings.clone();
    let state = HttpState::from_repositories(
        tutors,
        bookings,
        HttpIdentityPorts {
            verifier: Arc::new(FixtureIdentityVerifier),
            directory: Arc::new(FixtureIdentityDirectory),
        },
    );
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(route_not_found))
}

/// `Authorization` header resolving to `email`.
pub fn bearer_for(email: &str) -> (HeaderName, String) {
    (
        AUTHORIZATION,
        format!("Bearer {}", FixtureIdentityVerifier::token_for(email)),
    )
}
