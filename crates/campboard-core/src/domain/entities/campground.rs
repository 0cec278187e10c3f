//! Campground listing entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CampgroundId, Price, ReviewId};

/// Validated editable attributes of a listing.
///
/// What a creation or update form carries once it has passed validation.
/// Identity, the review reference list and timestamps belong to the
/// entity and are never form-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampgroundAttrs {
    /// Listing title
    pub title: String,
    /// Price per night
    pub price: Price,
    /// Image URL
    pub image: String,
    /// Free-text description
    pub description: String,
    /// Free-text location
    pub location: String,
}

/// Campground listing aggregate.
///
/// Holds the ordered list of review references; review records themselves
/// live in their own collection and are resolved on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campground {
    id: CampgroundId,
    title: String,
    price: Price,
    image: String,
    description: String,
    location: String,
    reviews: Vec<ReviewId>,
    created_at: DateTime<Utc>,
}

impl Campground {
    /// Create a new listing with a fresh identifier and no reviews
    pub fn new(attrs: CampgroundAttrs) -> Self {
        Self {
            id: CampgroundId::new(),
            title: attrs.title,
            price: attrs.price,
            image: attrs.image,
            description: attrs.description,
            location: attrs.location,
            reviews: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Get campground ID
    pub fn id(&self) -> CampgroundId {
        self.id
    }

    /// Get listing title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get price per night
    pub fn price(&self) -> Price {
        self.price
    }

    /// Get image URL
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Get description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Review references in append order
    pub fn reviews(&self) -> &[ReviewId] {
        &self.reviews
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the editable fields, leaving identity, references and
    /// timestamps untouched
    pub fn apply(&mut self, attrs: CampgroundAttrs) {
        self.title = attrs.title;
        self.price = attrs.price;
        self.image = attrs.image;
        self.description = attrs.description;
        self.location = attrs.location;
    }

    /// Append a review reference; append order is display order
    pub fn attach_review(&mut self, review_id: ReviewId) {
        self.reviews.push(review_id);
    }

    /// Drop a review reference wherever it appears.
    ///
    /// Returns whether anything was removed. Absent references are a
    /// no-op, matching the detach-then-delete removal sequence.
    pub fn detach_review(&mut self, review_id: ReviewId) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|id| *id != review_id);
        self.reviews.len() < before
    }

    /// Check whether a review is referenced by this listing
    pub fn references_review(&self, review_id: ReviewId) -> bool {
        self.reviews.contains(&review_id)
    }
}
