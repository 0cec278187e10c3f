//! HTTP transport for the campground pages

pub mod axum_adapter;
pub mod flash;
pub mod form;
pub mod middleware;

pub use axum_adapter::{AppState, HttpError, create_router};
pub use flash::{FlashMessage, FlashRedirect, IncomingFlash};
pub use form::NestedForm;
