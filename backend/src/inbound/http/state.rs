//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingRepository, BookingsCommand, BookingsQuery, IdentityDirectory, IdentityVerifier,
    ReviewCommand, TutorListingsCommand, TutorListingsQuery, TutorRepository,
};
use crate::domain::{BookingService, ReviewAggregationService, TutorListingService};

/// Parameter object bundling the use-case ports for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub tutors: Arc<dyn TutorListingsCommand>,
    pub tutors_query: Arc<dyn TutorListingsQuery>,
    pub bookings: Arc<dyn BookingsCommand>,
    pub bookings_query: Arc<dyn BookingsQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
}

/// Identity-provider ports used by the bearer guard and the directory route.
#[derive(Clone)]
pub struct HttpIdentityPorts {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub directory: Arc<dyn IdentityDirectory>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tutors: Arc<dyn TutorListingsCommand>,
    pub tutors_query: Arc<dyn TutorListingsQuery>,
    pub bookings: Arc<dyn BookingsCommand>,
    pub bookings_query: Arc<dyn BookingsQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub directory: Arc<dyn IdentityDirectory>,
}

impl HttpState {
    /// Construct state from use-case and identity port bundles.
    pub fn new(ports: HttpStatePorts, identity: HttpIdentityPorts) -> Self {
        let HttpStatePorts {
            tutors,
            tutors_query,
            bookings,
            bookings_query,
            reviews,
        } = ports;
        let HttpIdentityPorts {
            verifier,
            directory,
        } = identity;
        Self {
            tutors,
            tutors_query,
            bookings,
            bookings_query,
            reviews,
            identity: verifier,
            directory,
        }
    }

    /// Wire the domain services over the given repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureIdentityDirectory, FixtureIdentityVerifier};
    /// use backend::inbound::http::state::{HttpIdentityPorts, HttpState};
    /// use backend::outbound::memory::{InMemoryBookingRepository, InMemoryTutorRepository};
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(InMemoryTutorRepository::default()),
    ///     Arc::new(InMemoryBookingRepository::default()),
    ///     HttpIdentityPorts {
    ///         verifier: Arc::new(FixtureIdentityVerifier),
    ///         directory: Arc::new(FixtureIdentityDirectory),
    ///     },
    /// );
    /// let _reviews = state.reviews.clone();
    /// ```
    pub fn from_repositories(
        tutor_repo: Arc<dyn TutorRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        identity: HttpIdentityPorts,
    ) -> Self {
        let tutors = Arc::new(TutorListingService::new(Arc::clone(&tutor_repo)));
        let bookings = Arc::new(BookingService::new(Arc::clone(&booking_repo)));
        let reviews = Arc::new(ReviewAggregationService::new(booking_repo, tutor_repo));
        let ports = HttpStatePorts {
            tutors: tutors.clone(),
            tutors_query: tutors,
            bookings: bookings.clone(),
            bookings_query: bookings,
            reviews,
        };
        Self::new(ports, identity)
    }
}
