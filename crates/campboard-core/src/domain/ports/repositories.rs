//! Repository ports for data persistence
//!
//! These ports define the domain's requirements for data storage,
//! allowing infrastructure adapters to implement various storage backends.
//! Adapters receive their store handle at construction; nothing above
//! this seam touches a collection directly.

use async_trait::async_trait;

use crate::domain::{
    DomainResult,
    entities::{Campground, CampgroundAttrs, Review},
    value_objects::{CampgroundId, ReviewId},
};

/// Read model for the detail page: a listing with its referenced reviews
/// resolved in reference-list order.
///
/// References that no longer resolve are skipped rather than surfaced,
/// so a dangling entry never breaks a page render.
#[derive(Debug, Clone, PartialEq)]
pub struct CampgroundDetail {
    /// The listing record
    pub campground: Campground,
    /// Resolved review records in reference-list order
    pub reviews: Vec<Review>,
}

/// Summary of one reconciliation sweep over the reference lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Dangling references dropped from listings
    pub dangling_refs_removed: usize,
    /// Listings whose reference list changed
    pub campgrounds_repaired: usize,
    /// Review records no listing references; counted, never deleted
    pub unreferenced_reviews: usize,
}

impl ReconcileSummary {
    /// Whether the sweep repaired anything
    #[must_use]
    pub fn changed(&self) -> bool {
        self.dangling_refs_removed > 0
    }
}

/// Storage port for campground listings
#[async_trait]
pub trait CampgroundRepository: Send + Sync {
    /// All listings, oldest first
    async fn list_all(&self) -> DomainResult<Vec<Campground>>;

    /// Persist a new listing built from validated attributes
    async fn create(&self, attrs: CampgroundAttrs) -> DomainResult<Campground>;

    /// Find a listing by id
    async fn find(&self, id: CampgroundId) -> DomainResult<Option<Campground>>;

    /// Find a listing with its reviews eagerly resolved
    async fn find_with_reviews(&self, id: CampgroundId)
    -> DomainResult<Option<CampgroundDetail>>;

    /// Replace the editable fields of a listing.
    ///
    /// Returns the updated listing, or `None` when the id matches
    /// nothing; a miss is not an error.
    async fn update(
        &self,
        id: CampgroundId,
        attrs: CampgroundAttrs,
    ) -> DomainResult<Option<Campground>>;

    /// Remove a listing, reporting whether a record was actually removed.
    ///
    /// Idempotent; a miss is not an error. Referenced review records are
    /// left in place, there is no cascade.
    async fn delete(&self, id: CampgroundId) -> DomainResult<bool>;
}

/// Storage port for reviews.
///
/// Review writes touch the parent listing's reference list as well as
/// the review collection, so implementations hold both.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a review, then append its reference to the parent listing.
    ///
    /// Two writes in sequence with no transaction around them; the
    /// reconcile sweep exists to pick up the pieces of that window.
    ///
    /// Fails with `CampgroundNotFound` when the parent is absent.
    async fn create(&self, campground_id: CampgroundId, review: Review) -> DomainResult<Review>;

    /// Find a review record by id
    async fn find(&self, id: ReviewId) -> DomainResult<Option<Review>>;

    /// Detach the reference from the parent, then delete the record.
    ///
    /// Both steps are best-effort: an absent parent, reference or record
    /// is a no-op, never an error.
    async fn delete(&self, campground_id: CampgroundId, review_id: ReviewId) -> DomainResult<()>;

    /// Drop reference-list entries whose review record no longer exists.
    ///
    /// Idempotent repair pass for the two-write crash window and for
    /// lost-update races on the reference list. Unreferenced review
    /// records are counted but kept: deleting a listing intentionally
    /// orphans its reviews, and records carry no back-pointer to tell
    /// those apart from interrupted creates.
    async fn reconcile(&self) -> DomainResult<ReconcileSummary>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_summary_default_is_unchanged() {
        let summary = ReconcileSummary::default();
        assert!(!summary.changed());
    }

    #[test]
    fn test_reconcile_summary_changed() {
        let summary = ReconcileSummary {
            dangling_refs_removed: 2,
            campgrounds_repaired: 1,
            unreferenced_reviews: 0,
        };
        assert!(summary.changed());
    }

    #[test]
    fn test_unreferenced_reviews_alone_do_not_count_as_change() {
        let summary = ReconcileSummary {
            dangling_refs_removed: 0,
            campgrounds_repaired: 0,
            unreferenced_reviews: 3,
        };
        assert!(!summary.changed());
    }
}
