//! Repository adapters over the in-memory document store
//!
//! These adapters implement the domain storage ports against
//! [`MemoryStore`]. Listing/review bookkeeping is kept as two separate
//! documents with a reference list, so writes that touch both are two
//! distinct store operations.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use super::store::MemoryStore;
use crate::domain::{
    DomainError, DomainResult,
    entities::{Campground, CampgroundAttrs, Review},
    ports::{CampgroundDetail, CampgroundRepository, ReconcileSummary, ReviewRepository},
    value_objects::{CampgroundId, ReviewId},
};

/// Listing storage over a shared [`MemoryStore`] handle.
pub struct MemoryCampgroundRepository {
    store: MemoryStore,
}

impl MemoryCampgroundRepository {
    /// Create the adapter over an existing store handle
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CampgroundRepository for MemoryCampgroundRepository {
    async fn list_all(&self) -> DomainResult<Vec<Campground>> {
        let mut campgrounds = self.store.all_campgrounds();
        campgrounds.sort_by_key(|c| (c.created_at(), c.id().as_uuid()));
        Ok(campgrounds)
    }

    async fn create(&self, attrs: CampgroundAttrs) -> DomainResult<Campground> {
        let campground = Campground::new(attrs);
        self.store.put_campground(campground.clone());
        Ok(campground)
    }

    async fn find(&self, id: CampgroundId) -> DomainResult<Option<Campground>> {
        Ok(self.store.campground(id))
    }

    async fn find_with_reviews(&self, id: CampgroundId) -> DomainResult<Option<CampgroundDetail>> {
        let Some(campground) = self.store.campground(id) else {
            return Ok(None);
        };
        // Stored reference order is presentation order. References that no
        // longer resolve are skipped rather than failing the lookup.
        let reviews = campground
            .reviews()
            .iter()
            .filter_map(|review_id| self.store.review(*review_id))
            .collect();
        Ok(Some(CampgroundDetail { campground, reviews }))
    }

    async fn update(
        &self,
        id: CampgroundId,
        attrs: CampgroundAttrs,
    ) -> DomainResult<Option<Campground>> {
        let Some(mut campground) = self.store.campground(id) else {
            return Ok(None);
        };
        campground.apply(attrs);
        self.store.put_campground(campground.clone());
        Ok(Some(campground))
    }

    async fn delete(&self, id: CampgroundId) -> DomainResult<bool> {
        // Review documents stay behind; only the listing and its reference
        // list go away.
        Ok(self.store.remove_campground(id).is_some())
    }
}

/// Review storage over a shared [`MemoryStore`] handle.
pub struct MemoryReviewRepository {
    store: MemoryStore,
}

impl MemoryReviewRepository {
    /// Create the adapter over an existing store handle
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, campground_id: CampgroundId, review: Review) -> DomainResult<Review> {
        let Some(mut campground) = self.store.campground(campground_id) else {
            return Err(DomainError::CampgroundNotFound(campground_id.as_str()));
        };

        // Two separate writes: the review document lands first, then the
        // parent picks up the reference. An interruption in between leaves
        // an unreferenced review for `reconcile` to report.
        self.store.put_review(review.clone());
        campground.attach_review(review.id());
        self.store.put_campground(campground);
        Ok(review)
    }

    async fn find(&self, id: ReviewId) -> DomainResult<Option<Review>> {
        Ok(self.store.review(id))
    }

    async fn delete(&self, campground_id: CampgroundId, review_id: ReviewId) -> DomainResult<()> {
        // Detach first, then drop the record. Either side may already be
        // gone; the other is still cleaned up.
        if let Some(mut campground) = self.store.campground(campground_id)
            && campground.detach_review(review_id)
        {
            self.store.put_campground(campground);
        }
        self.store.remove_review(review_id);
        Ok(())
    }

    async fn reconcile(&self) -> DomainResult<ReconcileSummary> {
        let mut summary = ReconcileSummary::default();
        let mut referenced = HashSet::new();

        for mut campground in self.store.all_campgrounds() {
            let mut dangling = Vec::new();
            for id in campground.reviews() {
                if self.store.review(*id).is_some() {
                    referenced.insert(*id);
                } else {
                    dangling.push(*id);
                }
            }
            if dangling.is_empty() {
                continue;
            }

            for id in &dangling {
                campground.detach_review(*id);
            }
            debug!(
                campground = %campground.id(),
                dropped = dangling.len(),
                "dropped dangling review references"
            );
            self.store.put_campground(campground);
            summary.dangling_refs_removed += dangling.len();
            summary.campgrounds_repaired += 1;
        }

        // Unreferenced review documents are reported but never deleted here.
        summary.unreferenced_reviews = self
            .store
            .review_ids()
            .into_iter()
            .filter(|id| !referenced.contains(id))
            .count();

        Ok(summary)
    }
}
