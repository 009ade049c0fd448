//! Port abstraction for tutor listing persistence.
use async_trait::async_trait;

use crate::domain::{
    DeleteOutcome, DocumentId, FieldPatch, InsertOutcome, TutorListing, UpdateOutcome,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by tutor repository adapters.
    pub enum TutorRepositoryError as StorageFailure {
        /// Repository connection could not be established.
        Connection { message: String } => "tutor repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "tutor repository query failed: {message}",
    }
}

/// Storage for the `tutors` collection.
///
/// Identifiers the adapter cannot resolve match nothing: lookups return
/// `None` and writes report zero counts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorRepository: Send + Sync {
    /// Store a new listing and report the assigned identifier.
    async fn insert(&self, listing: &TutorListing) -> Result<InsertOutcome, TutorRepositoryError>;

    /// Every listing in storage order.
    async fn find_all(&self) -> Result<Vec<TutorListing>, TutorRepositoryError>;

    /// Listings whose `email` equals `email` exactly.
    async fn find_by_email(&self, email: &str) -> Result<Vec<TutorListing>, TutorRepositoryError>;

    /// Listing with the given identifier.
    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<TutorListing>, TutorRepositoryError>;

    /// Listings whose language contains `fragment`, ignoring case.
    ///
    /// `fragment` is literal text; adapters must not interpret it as a
    /// pattern.
    async fn find_by_language(
        &self,
        fragment: &str,
    ) -> Result<Vec<TutorListing>, TutorRepositoryError>;

    /// Overwrite the patch's fields on one listing.
    async fn set_fields(
        &self,
        id: &DocumentId,
        patch: &FieldPatch,
    ) -> Result<UpdateOutcome, TutorRepositoryError>;

    /// Remove one listing.
    async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, TutorRepositoryError>;

    /// Set `reviewCount` on every listing owned by `email`.
    async fn set_review_count(
        &self,
        email: &str,
        review_count: u64,
    ) -> Result<UpdateOutcome, TutorRepositoryError>;
}
