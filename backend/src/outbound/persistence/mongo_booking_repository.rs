//! MongoDB-backed `BookingRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::error::Error as MongoError;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, DocumentId, InsertOutcome, ReviewerEmail, UpdateOutcome};

use super::documents::{
    Failure, classify, from_document, id_filter, insert_outcome, to_document, update_outcome,
};

/// Bookings stored in the `bookings.bookings` collection.
#[derive(Clone)]
pub struct MongoBookingRepository {
    collection: Collection<Document>,
}

impl MongoBookingRepository {
    /// Wrap a collection handle.
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

fn map_driver_error(error: MongoError) -> BookingRepositoryError {
    match classify(&error) {
        Failure::Connection(message) => BookingRepositoryError::connection(message),
        Failure::Query(message) => BookingRepositoryError::query(message),
    }
}

/// Conditional filter and update counting `reviewer` once.
fn review_write(filter: Document, reviewer: &ReviewerEmail) -> (Document, Document) {
    let mut filter = filter;
    filter.insert("reviewedUser", doc! { "$ne": reviewer.as_str() });
    let update = doc! {
        "$inc": { "reviewCount": 1_i64 },
        "$push": { "reviewedUser": reviewer.as_str() },
    };
    (filter, update)
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<InsertOutcome, BookingRepositoryError> {
        let document = to_document(booking).map_err(BookingRepositoryError::query)?;
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_driver_error)?;
        Ok(insert_outcome(&result))
    }

    async fn find_by_requester(&self, email: &str) -> Result<Vec<Booking>, BookingRepositoryError> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! { "selfBooking": email })
            .await
            .map_err(map_driver_error)?
            .try_collect()
            .await
            .map_err(map_driver_error)?;
        documents
            .into_iter()
            .map(|document| from_document(document).map_err(BookingRepositoryError::query))
            .collect()
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Booking>, BookingRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        let found = self
            .collection
            .find_one(filter)
            .await
            .map_err(map_driver_error)?;
        found
            .map(|document| from_document(document).map_err(BookingRepositoryError::query))
            .transpose()
    }

    async fn record_review(
        &self,
        id: &DocumentId,
        reviewer: &ReviewerEmail,
    ) -> Result<UpdateOutcome, BookingRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(UpdateOutcome::unmatched());
        };
        let (filter, update) = review_write(filter, reviewer);
        let result = self
            .collection
            .update_one(filter, update)
            .await
            .map_err(map_driver_error)?;
        Ok(update_outcome(&result))
    }
}
