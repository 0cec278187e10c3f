//! Domain Value Objects
//!
//! Immutable objects that represent concepts in the domain
//! with no conceptual identity, only defined by their attributes.

mod id;
mod price;
mod rating;
mod schema;

pub use id::{CampgroundId, CampgroundMarker, Id, IdMarker, ReviewId, ReviewMarker};
pub use price::Price;
pub use rating::Rating;
pub use schema::{FieldKind, FieldRule, Schema, ValidationReport, Violation};
