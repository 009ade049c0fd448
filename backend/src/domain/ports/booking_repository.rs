//! Port abstraction for booking persistence.
use async_trait::async_trait;

use crate::domain::{Booking, DocumentId, InsertOutcome, ReviewerEmail, UpdateOutcome};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by booking repository adapters.
    pub enum BookingRepositoryError as StorageFailure {
        /// Repository connection could not be established.
        Connection { message: String } => "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "booking repository query failed: {message}",
    }
}

/// Storage for the `bookings` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Store a new booking and report the assigned identifier.
    async fn insert(&self, booking: &Booking) -> Result<InsertOutcome, BookingRepositoryError>;

    /// Bookings whose `selfBooking` equals `email` exactly.
    async fn find_by_requester(&self, email: &str) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Booking with the given identifier.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Count `reviewer` on the booking unless already counted.
    ///
    /// Must be a single conditional write: match the booking only while
    /// `reviewer` is absent from `reviewedUser`, then increment `reviewCount`
    /// by one and append the reviewer together. Concurrent submissions by the
    /// same reviewer therefore modify the booking at most once.
    async fn record_review(
        &self,
        id: &DocumentId,
        reviewer: &ReviewerEmail,
    ) -> Result<UpdateOutcome, BookingRepositoryError>;
}
