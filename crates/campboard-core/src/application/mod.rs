//! Application layer - Use cases and orchestration
//!
//! Thin services that validate payloads, decide how identifier and
//! lookup misses surface, and delegate persistence to the domain ports.

pub mod payloads;
pub mod services;

pub use payloads::{CampgroundPayload, ReviewPayload};
pub use services::{CampgroundService, ReviewService};

/// Application Result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    /// Domain rule or validation failure
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    /// Validated payload failed to decode into typed fields
    #[error("Payload decode error: {0}")]
    Payload(#[from] serde_json::Error),

    /// The addressed resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}
