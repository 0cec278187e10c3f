//! Nested review use cases

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::{
    application::{ApplicationError, ApplicationResult, payloads::ReviewPayload},
    domain::{
        DomainError,
        entities::Review,
        ports::{ReconcileSummary, ReviewRepository},
        services::ValidationService,
        value_objects::{CampgroundId, ReviewId, Schema},
    },
};

/// Orchestrates review workflows under their parent listing.
#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    validator: ValidationService,
}

impl ReviewService {
    /// Create the service over an injected storage port
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self {
            reviews,
            validator: ValidationService::new(),
        }
    }

    /// Validate a review payload and attach it to the parent listing.
    ///
    /// Unlike listing lookups, the parent must exist here; a malformed or
    /// unknown parent id surfaces as a not-found error.
    pub async fn create(&self, campground_id: &str, body: &JsonValue) -> ApplicationResult<Review> {
        self.validator
            .validate(body, Schema::review())
            .map_err(DomainError::Validation)?;
        let review = ReviewPayload::decode(body)?.into_review()?;

        let parsed = CampgroundId::from_string(campground_id)
            .map_err(|_| ApplicationError::NotFound(format!("campground {campground_id}")))?;

        let review = self.reviews.create(parsed, review).await?;
        info!(id = %review.id(), campground = %parsed, "review created");
        Ok(review)
    }

    /// Detach a review from its listing and drop the record.
    ///
    /// Both steps tolerate missing targets, so a stale delete stays silent
    /// apart from the warning.
    pub async fn delete(&self, campground_id: &str, review_id: &str) -> ApplicationResult<()> {
        let (Ok(campground), Ok(review)) = (
            CampgroundId::from_string(campground_id),
            ReviewId::from_string(review_id),
        ) else {
            warn!(campground_id, review_id, "delete targeted a malformed review path");
            return Ok(());
        };

        self.reviews.delete(campground, review).await?;
        info!(id = %review, campground = %campground, "review deleted");
        Ok(())
    }

    /// Repair listing/review bookkeeping left behind by interrupted writes
    pub async fn reconcile(&self) -> ApplicationResult<ReconcileSummary> {
        let summary = self.reviews.reconcile().await?;
        if summary.changed() {
            info!(
                dangling = summary.dangling_refs_removed,
                repaired = summary.campgrounds_repaired,
                "reconcile repaired review references"
            );
        }
        Ok(summary)
    }
}
