//! Review entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Rating, ReviewId};

/// Visitor review attached to one campground listing.
///
/// Reviews carry no back-pointer to their campground; the association
/// lives in the campground's reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    body: String,
    rating: Rating,
    created_at: DateTime<Utc>,
}

impl Review {
    /// Create a new review with a fresh identifier
    pub fn new(body: impl Into<String>, rating: Rating) -> Self {
        Self {
            id: ReviewId::new(),
            body: body.into(),
            rating,
            created_at: Utc::now(),
        }
    }

    /// Get review ID
    pub fn id(&self) -> ReviewId {
        self.id
    }

    /// Get review text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get star rating
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
