//! In-memory `TutorRepository`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{TutorRepository, TutorRepositoryError};
use crate::domain::{
    DeleteOutcome, DocumentId, FieldPatch, InsertOutcome, TutorListing, UpdateOutcome,
};

use super::{apply_patch, next_id};

/// Tutor listings held in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTutorRepository {
    listings: RwLock<Vec<TutorListing>>,
}

impl InMemoryTutorRepository {
    /// Repository pre-populated with `listings`; listings without an id get
    /// one.
    pub fn with_listings(listings: impl IntoIterator<Item = TutorListing>) -> Self {
        let listings = listings
            .into_iter()
            .map(|mut listing| {
                listing.id.get_or_insert_with(next_id);
                listing
            })
            .collect();
        Self {
            listings: RwLock::new(listings),
        }
    }
}

fn is_listing(listing: &TutorListing, id: &DocumentId) -> bool {
    listing.id.as_ref() == Some(id)
}

#[async_trait]
impl TutorRepository for InMemoryTutorRepository {
    async fn insert(&self, listing: &TutorListing) -> Result<InsertOutcome, TutorRepositoryError> {
        let id = next_id();
        let mut stored = listing.clone();
        stored.id = Some(id.clone());
        self.listings.write().await.push(stored);
        Ok(InsertOutcome::new(id))
    }

    async fn find_all(&self) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        Ok(self.listings.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        let listings = self.listings.read().await;
        Ok(listings
            .iter()
            .filter(|listing| listing.is_owned_by(email))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<TutorListing>, TutorRepositoryError> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|listing| is_listing(listing, id)).cloned())
    }

    async fn find_by_language(
        &self,
        fragment: &str,
    ) -> Result<Vec<TutorListing>, TutorRepositoryError> {
        let listings = self.listings.read().await;
        Ok(listings
            .iter()
            .filter(|listing| listing.language_contains(fragment))
            .cloned()
            .collect())
    }

    async fn set_fields(
        &self,
        id: &DocumentId,
        patch: &FieldPatch,
    ) -> Result<UpdateOutcome, TutorRepositoryError> {
        let mut listings = self.listings.write().await;
        let Some(listing) = listings.iter_mut().find(|listing| is_listing(listing, id)) else {
            return Ok(UpdateOutcome::unmatched());
        };
        let modified = apply_patch(listing, patch)
            .map_err(|err| TutorRepositoryError::query(err.to_string()))?;
        Ok(UpdateOutcome::new(1, u64::from(modified)))
    }

    async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, TutorRepositoryError> {
        let mut listings = self.listings.write().await;
        let Some(position) = listings.iter().position(|listing| is_listing(listing, id)) else {
            return Ok(DeleteOutcome::new(0));
        };
        listings.remove(position);
        Ok(DeleteOutcome::new(1))
    }

    async fn set_review_count(
        &self,
        email: &str,
        review_count: u64,
    ) -> Result<UpdateOutcome, TutorRepositoryError> {
        let mut listings = self.listings.write().await;
        let mut matched = 0;
        let mut modified = 0;
        for listing in listings.iter_mut().filter(|listing| listing.is_owned_by(email)) {
            matched += 1;
            if listing.review_count != Some(review_count) {
                listing.review_count = Some(review_count);
                modified += 1;
            }
        }
        Ok(UpdateOutcome::new(matched, modified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn listing(email: &str, language: &str) -> TutorListing {
        TutorListing {
            email: Some(email.to_owned()),
            language: Some(language.to_owned()),
            ..TutorListing::default()
        }
    }

    #[fixture]
    fn repo() -> InMemoryTutorRepository {
        InMemoryTutorRepository::with_listings([
            listing("t@x.com", "Spanish"),
            listing("t@x.com", "Portuguese"),
            listing("u@x.com", "Chinese"),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn review_count_is_copied_to_every_owned_listing(repo: InMemoryTutorRepository) {
        let outcome = repo.set_review_count("t@x.com", 3).await.expect("update");
        assert_eq!(outcome, UpdateOutcome::new(2, 2));

        let owned = repo.find_by_email("t@x.com").await.expect("listings");
        assert!(owned.iter().all(|listing| listing.review_count == Some(3)));
        let other = repo.find_by_email("u@x.com").await.expect("listings");
        assert_eq!(other[0].review_count, None);

        let repeat = repo.set_review_count("t@x.com", 3).await.expect("update");
        assert_eq!(repeat, UpdateOutcome::new(2, 0));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_exactly_one_listing(repo: InMemoryTutorRepository) {
        let all = repo.find_all().await.expect("listings");
        let id = all[0].id.clone().expect("seeded id");

        assert_eq!(repo.delete(&id).await.expect("delete"), DeleteOutcome::new(1));
        assert_eq!(repo.delete(&id).await.expect("delete"), DeleteOutcome::new(0));
        assert!(repo.find_by_id(&id).await.expect("lookup").is_none());
        assert_eq!(repo.find_all().await.expect("listings").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn language_search_ignores_case(repo: InMemoryTutorRepository) {
        let found = repo.find_by_language("PORT").await.expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].language.as_deref(), Some("Portuguese"));
    }
}
