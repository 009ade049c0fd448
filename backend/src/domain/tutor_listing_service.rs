//! Tutor listing domain service.
//!
//! Implements both tutor driving ports over a single [`TutorRepository`].
//! Ownership checks live here rather than in the HTTP layer so every inbound
//! adapter enforces them identically.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{TutorListingsCommand, TutorListingsQuery, TutorRepository};
use crate::domain::{
    AuthenticatedIdentity, DeleteOutcome, DocumentId, Error, FieldPatch, InsertOutcome,
    TutorListing, UpdateOutcome,
};

pub(crate) const NOT_LISTING_OWNER_MESSAGE: &str = "You are not authorized to perform this action";
pub(crate) const TUTOR_NOT_FOUND_MESSAGE: &str = "Tutor not found";

/// Tutor listing service implementing the driving ports.
pub struct TutorListingService<R: ?Sized> {
    tutors: Arc<R>,
}

impl<R: ?Sized> TutorListingService<R> {
    /// Create a service over the given repository.
    pub fn new(tutors: Arc<R>) -> Self {
        Self { tutors }
    }
}

impl<R: ?Sized> Clone for TutorListingService<R> {
    fn clone(&self) -> Self {
        Self {
            tutors: Arc::clone(&self.tutors),
        }
    }
}

#[async_trait]
impl<R> TutorListingsCommand for TutorListingService<R>
where
    R: TutorRepository + ?Sized,
{
    async fn create(
        &self,
        caller: &AuthenticatedIdentity,
        listing: TutorListing,
    ) -> Result<InsertOutcome, Error> {
        if !caller.owns(listing.email.as_deref()) {
            debug!(
                caller = caller.email(),
                listing_email = listing.email.as_deref(),
                "rejected listing for another owner"
            );
            return Err(Error::forbidden(NOT_LISTING_OWNER_MESSAGE));
        }
        Ok(self.tutors.insert(&listing).await?)
    }

    async fn replace(&self, id: &DocumentId, patch: FieldPatch) -> Result<UpdateOutcome, Error> {
        TutorListing::check_patch(&patch).map_err(|err| {
            debug!(%id, error = %err, "rejected listing patch");
            Error::invalid_request(format!("invalid listing fields: {err}"))
        })?;
        Ok(self.tutors.set_fields(id, &patch).await?)
    }

    async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, Error> {
        Ok(self.tutors.delete(id).await?)
    }
}

#[async_trait]
impl<R> TutorListingsQuery for TutorListingService<R>
where
    R: TutorRepository + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<TutorListing>, Error> {
        Ok(self.tutors.find_all().await?)
    }

    async fn list_by_owner(
        &self,
        caller: &AuthenticatedIdentity,
        owner: &str,
    ) -> Result<Vec<TutorListing>, Error> {
        if !caller.owns(Some(owner)) {
            debug!(caller = caller.email(), owner, "rejected listing lookup for another owner");
            return Err(Error::unauthorized("Unauthorized access"));
        }
        Ok(self.tutors.find_by_email(owner).await?)
    }

    async fn get_by_id(&self, id: &DocumentId) -> Result<TutorListing, Error> {
        self.tutors
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(TUTOR_NOT_FOUND_MESSAGE))
    }

    async fn search(&self, language: &str) -> Result<Vec<TutorListing>, Error> {
        if language.trim().is_empty() {
            return Ok(self.tutors.find_all().await?);
        }
        Ok(self.tutors.find_by_language(language).await?)
    }
}

#[cfg(test)]
#[path = "tutor_listing_service_tests.rs"]
mod tests;
