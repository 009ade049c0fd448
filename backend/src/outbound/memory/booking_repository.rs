//! In-memory `BookingRepository`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, DocumentId, InsertOutcome, ReviewerEmail, UpdateOutcome};

use super::next_id;

/// Bookings held in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<InsertOutcome, BookingRepositoryError> {
        let id = next_id();
        let mut stored = booking.clone();
        stored.id = Some(id.clone());
        self.bookings.write().await.push(stored);
        Ok(InsertOutcome::new(id))
    }

    async fn find_by_requester(&self, email: &str) -> Result<Vec<Booking>, BookingRepositoryError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|booking| booking.is_requested_by(email))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Booking>, BookingRepositoryError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .find(|booking| booking.id.as_ref() == Some(id))
            .cloned())
    }

    async fn record_review(
        &self,
        id: &DocumentId,
        reviewer: &ReviewerEmail,
    ) -> Result<UpdateOutcome, BookingRepositoryError> {
        let mut bookings = self.bookings.write().await;
        let Some(booking) = bookings.iter_mut().find(|booking| {
            booking.id.as_ref() == Some(id) && !booking.has_reviewer(reviewer.as_str())
        }) else {
            return Ok(UpdateOutcome::unmatched());
        };
        booking.review_count = Some(booking.review_count.unwrap_or_default() + 1);
        booking.reviewed_user.push(reviewer.as_str().to_owned());
        Ok(UpdateOutcome::new(1, 1))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    async fn seeded() -> (InMemoryBookingRepository, DocumentId) {
        let repo = InMemoryBookingRepository::default();
        let outcome = repo
            .insert(&Booking {
                self_booking: Some("a@x.com".to_owned()),
                email: Some("t@x.com".to_owned()),
                ..Booking::default()
            })
            .await
            .expect("insert");
        (repo, outcome.inserted_id)
    }

    #[tokio::test]
    async fn reviewer_is_counted_once() {
        let (repo, id) = seeded().await;
        let reviewer = ReviewerEmail::new("r@x.com").expect("reviewer");

        assert_eq!(
            repo.record_review(&id, &reviewer).await.expect("first"),
            UpdateOutcome::new(1, 1)
        );
        assert_eq!(
            repo.record_review(&id, &reviewer).await.expect("second"),
            UpdateOutcome::unmatched()
        );

        let booking = repo.find_by_id(&id).await.expect("lookup").expect("booking");
        assert_eq!(booking.review_count, Some(1));
        assert_eq!(booking.reviewed_user, vec!["r@x.com".to_owned()]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_reviews_count_once() {
        let (repo, id) = seeded().await;
        let repo = Arc::new(repo);
        let reviewer = ReviewerEmail::new("r@x.com").expect("reviewer");

        let attempts: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                let id = id.clone();
                let reviewer = reviewer.clone();
                tokio::spawn(async move { repo.record_review(&id, &reviewer).await })
            })
            .collect();
        let mut modified = 0;
        for attempt in attempts {
            modified += attempt
                .await
                .expect("task joins")
                .expect("update")
                .modified_count;
        }
        assert_eq!(modified, 1);

        let booking = repo.find_by_id(&id).await.expect("lookup").expect("booking");
        assert_eq!(booking.review_count, Some(1));
    }

    #[tokio::test]
    async fn unknown_booking_is_unmatched() {
        let (repo, _) = seeded().await;
        let reviewer = ReviewerEmail::new("r@x.com").expect("reviewer");
        let outcome = repo
            .record_review(&DocumentId::new("missing"), &reviewer)
            .await
            .expect("update");
        assert_eq!(outcome, UpdateOutcome::unmatched());
    }
}
