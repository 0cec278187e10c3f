//! Application services orchestrating domain workflows

pub mod campgrounds;
pub mod reviews;

pub use campgrounds::CampgroundService;
pub use reviews::ReviewService;
