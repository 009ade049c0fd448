//! Builders for HTTP state from the configured backends.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use backend::domain::ports::{
    BookingRepository, FixtureIdentityDirectory, FixtureIdentityVerifier, TutorRepository,
};
use backend::inbound::http::state::{HttpIdentityPorts, HttpState};
use backend::outbound::memory::{InMemoryBookingRepository, InMemoryTutorRepository};
use backend::outbound::persistence::{MongoBookingRepository, MongoTutorRepository};

use super::ServerConfig;

fn build_repositories(
    config: &ServerConfig,
) -> (Arc<dyn TutorRepository>, Arc<dyn BookingRepository>) {
    match &config.store {
        Some(store) => (
            Arc::new(MongoTutorRepository::new(store.tutors())),
            Arc::new(MongoBookingRepository::new(store.bookings())),
        ),
        None => {
            warn!("no document store configured; using in-memory repositories");
            (
                Arc::new(InMemoryTutorRepository::default()),
                Arc::new(InMemoryBookingRepository::default()),
            )
        }
    }
}

fn build_identity(config: &ServerConfig) -> HttpIdentityPorts {
    config.identity.clone().unwrap_or_else(|| {
        warn!("no identity provider configured; accepting fixture tokens");
        HttpIdentityPorts {
            verifier: Arc::new(FixtureIdentityVerifier),
            directory: Arc::new(FixtureIdentityDirectory),
        }
    })
}

/// Wire handler state over the configured or fallback backends.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (tutors, bookings) = build_repositories(config);
    web::Data::new(HttpState::from_repositories(
        tutors,
        bookings,
        build_identity(config),
    ))
}
