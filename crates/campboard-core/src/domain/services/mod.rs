//! Domain Services
//!
//! Business logic that doesn't naturally fit into a value object or entity.

mod validation;

pub use validation::ValidationService;
