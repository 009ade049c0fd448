//! Review aggregation service.
//!
//! A review is counted on the booking with one conditional write, then the
//! booking's count is copied onto every listing owned by the booked tutor.
//! The two collections are updated independently; concurrent reviews for the
//! same tutor may leave listings briefly behind the newest booking count.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{BookingRepository, ReviewCommand, TutorRepository};
use crate::domain::{DocumentId, Error, ReviewOutcome, ReviewerEmail, UpdateOutcome};

/// Review service implementing [`ReviewCommand`].
pub struct ReviewAggregationService<B: ?Sized, T: ?Sized> {
    bookings: Arc<B>,
    tutors: Arc<T>,
}

impl<B: ?Sized, T: ?Sized> ReviewAggregationService<B, T> {
    /// Create a service over the booking and tutor repositories.
    pub fn new(bookings: Arc<B>, tutors: Arc<T>) -> Self {
        Self { bookings, tutors }
    }
}

impl<B: ?Sized, T: ?Sized> Clone for ReviewAggregationService<B, T> {
    fn clone(&self) -> Self {
        Self {
            bookings: Arc::clone(&self.bookings),
            tutors: Arc::clone(&self.tutors),
        }
    }
}

impl<B, T> ReviewAggregationService<B, T>
where
    B: BookingRepository + ?Sized,
    T: TutorRepository + ?Sized,
{
    async fn propagate(&self, booking_id: &DocumentId) -> Result<UpdateOutcome, Error> {
        let Some(booking) = self.bookings.find_by_id(booking_id).await? else {
            warn!(booking_id = %booking_id, "reviewed booking vanished before propagation");
            return Ok(UpdateOutcome::unmatched());
        };
        let Some(tutor_email) = booking.email.as_deref() else {
            warn!(booking_id = %booking_id, "reviewed booking names no tutor");
            return Ok(UpdateOutcome::unmatched());
        };
        let review_count = booking.review_count.unwrap_or_default();
        Ok(self
            .tutors
            .set_review_count(tutor_email, review_count)
            .await?)
    }
}

#[async_trait]
impl<B, T> ReviewCommand for ReviewAggregationService<B, T>
where
    B: BookingRepository + ?Sized,
    T: TutorRepository + ?Sized,
{
    async fn submit_review(
        &self,
        booking_id: &DocumentId,
        reviewer: ReviewerEmail,
    ) -> Result<ReviewOutcome, Error> {
        let review_update = self.bookings.record_review(booking_id, &reviewer).await?;
        if !review_update.modified_any() {
            debug!(booking_id = %booking_id, reviewer = %reviewer, "review already counted");
            return Ok(ReviewOutcome::AlreadyReviewed);
        }
        let tutor_update = self.propagate(booking_id).await?;
        Ok(ReviewOutcome::Recorded {
            review_update,
            tutor_update,
        })
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
