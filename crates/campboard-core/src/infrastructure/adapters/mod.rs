//! Infrastructure adapters implementing domain ports

pub mod repository_adapters;
pub mod store;

pub use repository_adapters::{MemoryCampgroundRepository, MemoryReviewRepository};
pub use store::MemoryStore;
