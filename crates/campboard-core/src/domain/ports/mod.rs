//! Domain Ports
//!
//! Interfaces the domain requires from the outside world. Infrastructure
//! adapters implement them; application services depend only on the traits.

mod repositories;

pub use repositories::{
    CampgroundDetail, CampgroundRepository, ReconcileSummary, ReviewRepository,
};
