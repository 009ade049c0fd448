//! Driving port for review submission.

use async_trait::async_trait;

use crate::domain::{DocumentId, Error, ReviewOutcome, ReviewerEmail};

/// Record a review against a booking and refresh the tutor's listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Count `reviewer` on the booking once, then copy the booking's count
    /// onto every listing owned by its tutor.
    ///
    /// A reviewer already counted, or an unknown booking, yields
    /// [`ReviewOutcome::AlreadyReviewed`] rather than an error.
    async fn submit_review(
        &self,
        booking_id: &DocumentId,
        reviewer: ReviewerEmail,
    ) -> Result<ReviewOutcome, Error>;
}
