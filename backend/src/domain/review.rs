//! Review submissions and their aggregation outcome.

use std::fmt;

use super::UpdateOutcome;

/// Validation failures for [`ReviewerEmail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewerValidationError {
    /// Blank reviewer email.
    Empty,
}

impl fmt::Display for ReviewerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "reviewer email must not be empty"),
        }
    }
}

impl std::error::Error for ReviewerValidationError {}

/// Email identifying the user submitting a review.
///
/// Stored verbatim in `reviewedUser`; duplicate detection compares the exact
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerEmail(String);

impl ReviewerEmail {
    /// Validate a raw reviewer email.
    pub fn new(raw: impl Into<String>) -> Result<Self, ReviewerValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ReviewerValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the email.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ReviewerEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ReviewerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of submitting a review against a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The booking counted the reviewer and the count was copied onto the
    /// tutor's listings.
    Recorded {
        /// Acknowledgement of the conditional booking update.
        review_update: UpdateOutcome,
        /// Acknowledgement of the listing propagation.
        tutor_update: UpdateOutcome,
    },
    /// Nothing eligible: the reviewer was already counted or the booking does
    /// not exist.
    AlreadyReviewed,
}
