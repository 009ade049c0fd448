//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_repository;
mod bookings;
mod identity_directory;
mod identity_verifier;
mod reviews;
mod tutor_listings;
mod tutor_repository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
pub use bookings::{BookingsCommand, BookingsQuery};
#[cfg(test)]
pub use bookings::{MockBookingsCommand, MockBookingsQuery};
#[cfg(test)]
pub use identity_directory::MockIdentityDirectory;
pub use identity_directory::{
    FixtureIdentityDirectory, IdentityDirectory, IdentityDirectoryError,
};
#[cfg(test)]
pub use identity_verifier::MockIdentityVerifier;
pub use identity_verifier::{
    FIXTURE_TOKEN_PREFIX, FixtureIdentityVerifier, IdentityVerifier, IdentityVerifierError,
};
#[cfg(test)]
pub use reviews::MockReviewCommand;
pub use reviews::ReviewCommand;
#[cfg(test)]
pub use tutor_listings::{MockTutorListingsCommand, MockTutorListingsQuery};
pub use tutor_listings::{TutorListingsCommand, TutorListingsQuery};
#[cfg(test)]
pub use tutor_repository::MockTutorRepository;
pub use tutor_repository::{TutorRepository, TutorRepositoryError};
