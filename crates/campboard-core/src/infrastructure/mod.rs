//! Infrastructure layer - external concerns and adapters
//!
//! The in-memory storage adapters, the HTTP transport, and the page
//! renderer live here, each behind a domain or rendering port.

pub mod adapters;
pub mod http;
pub mod views;

pub use adapters::*;
pub use http::*;
pub use views::*;
