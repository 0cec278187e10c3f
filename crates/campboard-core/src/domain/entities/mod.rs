//! Domain Entities
//!
//! Domain objects with identity. The two record kinds are stored in
//! separate collections and associated by id reference, never embedding.

mod campground;
mod review;

pub use campground::{Campground, CampgroundAttrs};
pub use review::Review;
