//! Driving ports for booking use-cases.

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, Booking, Error, InsertOutcome};

/// Mutating use-cases for bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsCommand: Send + Sync {
    /// Store a booking exactly as submitted.
    async fn create(&self, booking: Booking) -> Result<InsertOutcome, Error>;
}

/// Read-only use-cases for bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsQuery: Send + Sync {
    /// Bookings the caller made.
    ///
    /// Fails with [`crate::domain::ErrorCode::Forbidden`] when `requester` is
    /// not the caller's email.
    async fn list_by_requester(
        &self,
        caller: &AuthenticatedIdentity,
        requester: &str,
    ) -> Result<Vec<Booking>, Error>;
}
