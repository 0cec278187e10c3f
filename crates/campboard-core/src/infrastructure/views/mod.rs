//! Server-side HTML rendering
//!
//! Pages are rendered from a template name plus a JSON context, the same
//! shape the handlers would hand to an external template engine. The
//! built-in renderer produces minimal HTML with all interpolated values
//! escaped.

pub mod pages;

pub use pages::HtmlPages;

use serde_json::Value as JsonValue;

/// Rendering seam between the HTTP layer and the page implementations.
pub trait ViewRenderer: Send + Sync {
    /// Render the named template with a JSON context
    fn render(&self, template: &str, context: &JsonValue) -> String;
}
