//! Booking domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BookingRepository, BookingsCommand, BookingsQuery};
use crate::domain::{AuthenticatedIdentity, Booking, Error, InsertOutcome};

/// Booking service implementing the driving ports.
pub struct BookingService<R: ?Sized> {
    bookings: Arc<R>,
}

impl<R: ?Sized> BookingService<R> {
    /// Create a service over the given repository.
    pub fn new(bookings: Arc<R>) -> Self {
        Self { bookings }
    }
}

impl<R: ?Sized> Clone for BookingService<R> {
    fn clone(&self) -> Self {
        Self {
            bookings: Arc::clone(&self.bookings),
        }
    }
}

#[async_trait]
impl<R> BookingsCommand for BookingService<R>
where
    R: BookingRepository + ?Sized,
{
    async fn create(&self, booking: Booking) -> Result<InsertOutcome, Error> {
        Ok(self.bookings.insert(&booking).await?)
    }
}

#[async_trait]
impl<R> BookingsQuery for BookingService<R>
where
    R: BookingRepository + ?Sized,
{
    async fn list_by_requester(
        &self,
        caller: &AuthenticatedIdentity,
        requester: &str,
    ) -> Result<Vec<Booking>, Error> {
        if !caller.owns(Some(requester)) {
            debug!(caller = caller.email(), requester, "rejected booking lookup for another user");
            return Err(Error::forbidden("Forbidden access"));
        }
        Ok(self.bookings.find_by_requester(requester).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{BookingRepositoryError, MockBookingRepository};
    use crate::domain::DocumentId;
    use mockall::predicate::eq;
    use rstest::rstest;

    fn make_service(repo: MockBookingRepository) -> BookingService<MockBookingRepository> {
        BookingService::new(Arc::new(repo))
    }

    fn caller() -> AuthenticatedIdentity {
        AuthenticatedIdentity::new("uid-a", Some("a@x.com")).expect("caller identity")
    }

    #[tokio::test]
    async fn create_inserts_booking_unchanged() {
        let mut repo = MockBookingRepository::new();
        repo.expect_insert()
            .withf(|booking| {
                booking.is_requested_by("a@x.com") && booking.email.as_deref() == Some("t@x.com")
            })
            .times(1)
            .return_once(|_| Ok(InsertOutcome::new(DocumentId::new("65f1c0ffee0000000000b00c"))));

        let booking = Booking {
            self_booking: Some("a@x.com".to_owned()),
            email: Some("t@x.com".to_owned()),
            ..Booking::default()
        };
        let outcome = make_service(repo).create(booking).await.expect("booking stored");
        assert!(outcome.acknowledged);
    }

    #[tokio::test]
    async fn list_by_requester_returns_own_bookings() {
        let mut repo = MockBookingRepository::new();
        repo.expect_find_by_requester()
            .with(eq("a@x.com"))
            .times(1)
            .return_once(|_| Ok(vec![Booking::default()]));

        let bookings = make_service(repo)
            .list_by_requester(&caller(), "a@x.com")
            .await
            .expect("own bookings");
        assert_eq!(bookings.len(), 1);
    }

    #[rstest]
    #[case("b@x.com")]
    #[case("A@X.COM")]
    #[case("")]
    #[tokio::test]
    async fn list_by_requester_forbids_other_users(#[case] requester: &str) {
        let mut repo = MockBookingRepository::new();
        repo.expect_find_by_requester().never();

        let err = make_service(repo)
            .list_by_requester(&caller(), requester)
            .await
            .expect_err("foreign bookings hidden");
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.message(), "Forbidden access");
    }

    #[tokio::test]
    async fn storage_connection_errors_map_to_storage_failure() {
        let mut repo = MockBookingRepository::new();
        repo.expect_insert()
            .return_once(|_| Err(BookingRepositoryError::connection("no primary")));

        let err = make_service(repo)
            .create(Booking::default())
            .await
            .expect_err("storage failure");
        assert_eq!(err.code(), ErrorCode::StorageFailure);
    }
}
