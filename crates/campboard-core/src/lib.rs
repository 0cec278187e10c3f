//! # Campboard Core
//!
//! Domain, application, and infrastructure layers for the campboard
//! server: campground listings with nested reviews, schema-validated
//! writes, and server-rendered pages over an in-memory document store.

#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod application;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    DomainError, DomainResult,
    entities::{Campground, CampgroundAttrs, Review},
    ports::{CampgroundDetail, CampgroundRepository, ReconcileSummary, ReviewRepository},
    services::ValidationService,
    value_objects::{CampgroundId, Price, Rating, ReviewId, Schema, ValidationReport, Violation},
};

// Application layer exports
pub use application::{ApplicationError, ApplicationResult, CampgroundService, ReviewService};

// Infrastructure exports
pub use infrastructure::{
    adapters::{MemoryCampgroundRepository, MemoryReviewRepository, MemoryStore},
    http::{AppState, HttpError, create_router},
    views::{HtmlPages, ViewRenderer},
};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        AppState, ApplicationError, ApplicationResult, Campground, CampgroundAttrs, CampgroundId,
        CampgroundRepository, CampgroundService, DomainError, DomainResult, HtmlPages,
        MemoryCampgroundRepository, MemoryReviewRepository, MemoryStore, Price, Rating, Review,
        ReviewId, ReviewRepository, ReviewService, ValidationService, ViewRenderer, create_router,
    };
}
