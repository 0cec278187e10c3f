//! Shared in-memory document store
//!
//! Uses `DashMap` for lock-free concurrent access. Cloning a handle shares
//! the underlying maps, so every adapter constructed from the same store
//! sees the same documents.

use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::{
    entities::{Campground, Review},
    value_objects::{CampgroundId, ReviewId},
};

/// Handle to the listing and review collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    campgrounds: Arc<DashMap<CampgroundId, Campground>>,
    reviews: Arc<DashMap<ReviewId, Review>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a listing by id
    pub fn campground(&self, id: CampgroundId) -> Option<Campground> {
        self.campgrounds.get(&id).map(|entry| entry.value().clone())
    }

    /// Insert or replace a listing
    pub fn put_campground(&self, campground: Campground) {
        self.campgrounds.insert(campground.id(), campground);
    }

    /// Remove a listing, returning the stored document if it existed
    pub fn remove_campground(&self, id: CampgroundId) -> Option<Campground> {
        self.campgrounds.remove(&id).map(|(_id, campground)| campground)
    }

    /// Snapshot of every stored listing, in no particular order
    pub fn all_campgrounds(&self) -> Vec<Campground> {
        self.campgrounds
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Fetch a review by id
    pub fn review(&self, id: ReviewId) -> Option<Review> {
        self.reviews.get(&id).map(|entry| entry.value().clone())
    }

    /// Insert or replace a review
    pub fn put_review(&self, review: Review) {
        self.reviews.insert(review.id(), review);
    }

    /// Remove a review, returning the stored document if it existed
    pub fn remove_review(&self, id: ReviewId) -> Option<Review> {
        self.reviews.remove(&id).map(|(_id, review)| review)
    }

    /// Ids of every stored review
    pub fn review_ids(&self) -> Vec<ReviewId> {
        self.reviews.iter().map(|entry| *entry.key()).collect()
    }

    /// Number of stored listings
    pub fn campground_count(&self) -> usize {
        self.campgrounds.len()
    }

    /// Number of stored reviews
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Drop every document from both collections
    pub fn clear(&self) {
        self.campgrounds.clear();
        self.reviews.clear();
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            campgrounds: Arc::clone(&self.campgrounds),
            reviews: Arc::clone(&self.reviews),
        }
    }
}
