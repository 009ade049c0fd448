//! Booking documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DocumentId;

/// A user's reservation with a tutor, also the anchor for reviews.
///
/// `email` references the tutor by value: every [`super::TutorListing`]
/// sharing that email receives this booking's review count when a review is
/// recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Email of the user who made the booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_booking: Option<String>,
    /// Email of the booked tutor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,
    /// Reviewers already counted, in submission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewed_user: Vec<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Booking {
    /// Whether `email` made this booking.
    #[must_use]
    pub fn is_requested_by(&self, email: &str) -> bool {
        self.self_booking.as_deref() == Some(email)
    }

    /// Whether `reviewer` has already been counted.
    #[must_use]
    pub fn has_reviewer(&self, reviewer: &str) -> bool {
        self.reviewed_user.iter().any(|existing| existing == reviewer)
    }
}
