//! MongoDB-backed `TutorRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::error::Error as MongoError;
use tracing::debug;

use crate::domain::ports::{TutorRepository, TutorRepositoryError};
use crate::domain::{
    DeleteOutcome, DocumentId, FieldPatch, InsertOutcome, TutorListing, UpdateOutcome,
};

use super::documents::{
    Failure, classify, delete_outcome, fields_to_document, from_document, id_filter,
    insert_outcome, to_document, update_outcome,
};

/// Tutor listings stored in the `tutors.tutors` collection.
#[derive(Clone)]
pub struct MongoTutorRepository {
    collection: Collection<Document>,
}

impl MongoTutorRepository {
    /// Wrap a collection handle.
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    async fn find_matching(
        &self,
        filter: Document,
    ) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        let documents: Vec<Document> = self
            .collection
            .find(filter)
            .await
            .map_err(map_driver_error)?
            .try_collect()
            .await
            .map_err(map_driver_error)?;
        documents
            .into_iter()
            .map(|document| from_document(document).map_err(TutorRepositoryError::query))
            .collect()
    }
}

fn map_driver_error(error: MongoError) -> TutorRepositoryError {
    match classify(&error) {
        Failure::Connection(message) => TutorRepositoryError::connection(message),
        Failure::Query(message) => TutorRepositoryError::query(message),
    }
}

fn stored_count(review_count: u64) -> Result<i64, TutorRepositoryError> {
    i64::try_from(review_count)
        .map_err(|_| TutorRepositoryError::query(format!("review count {review_count} out of range")))
}

#[async_trait]
impl TutorRepository for MongoTutorRepository {
    async fn insert(&self, listing: &TutorListing) -> Result<InsertOutcome, TutorRepositoryError> {
        let document = to_document(listing).map_err(TutorRepositoryError::query)?;
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_driver_error)?;
        Ok(insert_outcome(&result))
    }

    async fn find_all(&self) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        self.find_matching(doc! {}).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        self.find_matching(doc! { "email": email }).await
    }

    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<TutorListing>, TutorRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        let found = self
            .collection
            .find_one(filter)
            .await
            .map_err(map_driver_error)?;
        found
            .map(|document| from_document(document).map_err(TutorRepositoryError::query))
            .transpose()
    }

    async fn find_by_language(
        &self,
        fragment: &str,
    ) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        let pattern = regex::escape(fragment);
        self.find_matching(doc! { "language": { "$regex": pattern, "$options": "i" } })
            .await
    }

    async fn set_fields(
        &self,
        id: &DocumentId,
        patch: &FieldPatch,
    ) -> Result<UpdateOutcome, TutorRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(UpdateOutcome::unmatched());
        };
        if patch.is_empty() {
            // `$set` rejects an empty document; report the match without writing.
            debug!(%id, "empty listing patch");
            let matched = self
                .collection
                .count_documents(filter)
                .await
                .map_err(map_driver_error)?;
            return Ok(UpdateOutcome::new(matched, 0));
        }
        let fields = fields_to_document(patch.fields()).map_err(TutorRepositoryError::query)?;
        let result = self
            .collection
            .update_one(filter, doc! { "$set": fields })
            .await
            .map_err(map_driver_error)?;
        Ok(update_outcome(&result))
    }

    async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, TutorRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(DeleteOutcome::new(0));
        };
        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(map_driver_error)?;
        Ok(delete_outcome(&result))
    }

    async fn set_review_count(
        &self,
        email: &str,
        review_count: u64,
    ) -> Result<UpdateOutcome, TutorRepositoryError> {
        let count = stored_count(review_count)?;
        let result = self
            .collection
            .update_many(
                doc! { "email": email },
                doc! { "$set": { "reviewCount": count } },
            )
            .await
            .map_err(map_driver_error)?;
        Ok(update_outcome(&result))
    }
}
