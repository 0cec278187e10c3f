//! Domain layer - Pure business logic
//!
//! Contains entities, value objects, domain services and ports. No
//! dependencies on infrastructure concerns.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export core domain types
pub use entities::{Campground, CampgroundAttrs, Review};
pub use ports::{CampgroundDetail, CampgroundRepository, ReconcileSummary, ReviewRepository};
pub use services::ValidationService;
pub use value_objects::{CampgroundId, Price, Rating, ReviewId, Schema, ValidationReport};

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Payload failed schema validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationReport),

    /// Rating outside the 1..=5 whole-star scale
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    /// Negative or non-finite price
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Operation needed a campground that does not exist
    #[error("Campground not found: {0}")]
    CampgroundNotFound(String),
}
