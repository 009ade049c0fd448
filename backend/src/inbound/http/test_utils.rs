//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, web};

use crate::domain::ports::{FixtureIdentityDirectory, FixtureIdentityVerifier};
use crate::outbound::memory::{InMemoryBookingRepository, InMemoryTutorRepository};

use super::configure;
use super::error::route_not_found;
use super::state::{HttpIdentityPorts, HttpState};

/// Handler state over empty in-memory repositories and the fixture verifier.
pub fn memory_state() -> HttpState {
    HttpState::from_repositories(
        Arc::new(InMemoryTutorRepository::default()),
        Arc::new(InMemoryBookingRepository::default()),
        HttpIdentityPorts {
            verifier: Arc::new(FixtureIdentityVerifier),
            directory: Arc::new(FixtureIdentityDirectory),
        },
    )
}

/// `Authorization` header the fixture verifier resolves to `email`.
pub fn bearer_for(email: &str) -> (actix_web::http::header::HeaderName, String) {
    (
        AUTHORIZATION,
        format!("Bearer {}", FixtureIdentityVerifier::token_for(email)),
    )
}

/// Application with every API route registered over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
        .default_service(web::to(route_not_found))
}
