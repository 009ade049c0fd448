//! Driving ports for tutor listing use-cases.
//!
//! Inbound adapters call these after the bearer guard has run; ownership
//! checks happen behind the port so every adapter enforces them the same
//! way.

use async_trait::async_trait;

use crate::domain::{
    AuthenticatedIdentity, DeleteOutcome, DocumentId, Error, FieldPatch, InsertOutcome,
    TutorListing, UpdateOutcome,
};

/// Mutating use-cases for tutor listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorListingsCommand: Send + Sync {
    /// Publish a listing owned by the caller.
    ///
    /// Fails with [`crate::domain::ErrorCode::Forbidden`] when the listing's
    /// email is not the caller's.
    async fn create(
        &self,
        caller: &AuthenticatedIdentity,
        listing: TutorListing,
    ) -> Result<InsertOutcome, Error>;

    /// Overwrite the patch's fields on the listing with `id`.
    async fn replace(&self, id: &DocumentId, patch: FieldPatch) -> Result<UpdateOutcome, Error>;

    /// Remove the listing with `id`.
    async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, Error>;
}

/// Read-only use-cases for tutor listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorListingsQuery: Send + Sync {
    /// Every listing.
    async fn list_all(&self) -> Result<Vec<TutorListing>, Error>;

    /// The caller's own listings.
    ///
    /// Fails with [`crate::domain::ErrorCode::Unauthorized`] when `owner` is
    /// not the caller's email.
    async fn list_by_owner(
        &self,
        caller: &AuthenticatedIdentity,
        owner: &str,
    ) -> Result<Vec<TutorListing>, Error>;

    /// One listing, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_by_id(&self, id: &DocumentId) -> Result<TutorListing, Error>;

    /// Listings whose language contains `language`, ignoring case.
    ///
    /// A blank fragment returns every listing.
    async fn search(&self, language: &str) -> Result<Vec<TutorListing>, Error>;
}
