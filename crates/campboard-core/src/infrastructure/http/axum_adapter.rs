//! Axum HTTP adapter for the campground pages

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path as AxumPath, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::json;
use tracing::error;

use crate::{
    application::{ApplicationError, CampgroundService, ReviewService},
    domain::{
        DomainError,
        ports::{CampgroundRepository, ReviewRepository},
    },
    infrastructure::{
        http::{
            flash::{FlashRedirect, IncomingFlash, clear_flash_header},
            form::NestedForm,
            middleware::method_override,
        },
        views::{HtmlPages, ViewRenderer},
    },
};

/// Shared state behind every route.
#[derive(Clone)]
pub struct AppState {
    campgrounds: CampgroundService,
    reviews: ReviewService,
    views: Arc<dyn ViewRenderer>,
}

impl AppState {
    /// Wire the application services over injected storage and rendering ports
    pub fn new(
        campgrounds: Arc<dyn CampgroundRepository>,
        reviews: Arc<dyn ReviewRepository>,
        views: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            campgrounds: CampgroundService::new(campgrounds),
            reviews: ReviewService::new(reviews),
            views,
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/campgrounds", get(index).post(create_campground))
        .route("/campgrounds/new", get(new_campground))
        .route(
            "/campgrounds/{id}",
            get(show_campground)
                .put(update_campground)
                .delete(delete_campground),
        )
        .route("/campgrounds/{id}/edit", get(edit_campground))
        .route("/campgrounds/{id}/reviews", post(create_review))
        .route(
            "/campgrounds/{id}/reviews/{review_id}",
            delete(delete_review),
        )
        .fallback(fallback_not_found)
        .layer(middleware::from_fn(method_override))
        .with_state(state)
}

/// Rendered page, expiring the flash cookie when one was consumed
fn page(html: String, consumed_flash: bool) -> Response {
    let mut response = Html(html).into_response();
    if consumed_flash {
        let (name, value) = clear_flash_header();
        response.headers_mut().append(name, value);
    }
    response
}

/// Landing page
async fn home(State(state): State<AppState>, IncomingFlash(flash): IncomingFlash) -> Response {
    let html = state.views.render("home", &json!({ "flash": &flash }));
    page(html, flash.is_some())
}

/// List every campground
async fn index(
    State(state): State<AppState>,
    IncomingFlash(flash): IncomingFlash,
) -> Result<Response, HttpError> {
    let campgrounds = state.campgrounds.list().await?;
    let html = state.views.render(
        "campgrounds/index",
        &json!({ "campgrounds": campgrounds, "flash": &flash }),
    );
    Ok(page(html, flash.is_some()))
}

/// Blank creation form
async fn new_campground(
    State(state): State<AppState>,
    IncomingFlash(flash): IncomingFlash,
) -> Response {
    let html = state
        .views
        .render("campgrounds/new", &json!({ "flash": &flash }));
    page(html, flash.is_some())
}

/// Create a campground and land on its detail page
async fn create_campground(
    State(state): State<AppState>,
    NestedForm(body): NestedForm,
) -> Result<FlashRedirect, HttpError> {
    let campground = state.campgrounds.create(&body).await?;
    Ok(FlashRedirect::success(
        format!("/campgrounds/{}", campground.id()),
        "Successfully made a new campground!",
    ))
}

/// Detail page with eagerly loaded reviews
async fn show_campground(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    IncomingFlash(flash): IncomingFlash,
) -> Result<Response, HttpError> {
    let Some(detail) = state.campgrounds.get_detail(&id).await? else {
        return Ok(
            FlashRedirect::error("/campgrounds", "Cannot find that campground!").into_response(),
        );
    };
    let html = state.views.render(
        "campgrounds/show",
        &json!({
            "campground": detail.campground,
            "reviews": detail.reviews,
            "flash": &flash,
        }),
    );
    Ok(page(html, flash.is_some()))
}

/// Pre-filled edit form
async fn edit_campground(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    IncomingFlash(flash): IncomingFlash,
) -> Result<Response, HttpError> {
    let Some(campground) = state.campgrounds.get(&id).await? else {
        return Ok(
            FlashRedirect::error("/campgrounds", "Cannot find that campground!").into_response(),
        );
    };
    let html = state.views.render(
        "campgrounds/edit",
        &json!({ "campground": campground, "flash": &flash }),
    );
    Ok(page(html, flash.is_some()))
}

/// Replace a campground's editable fields.
///
/// A missing id still takes the success redirect; the service logs the
/// miss.
async fn update_campground(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    NestedForm(body): NestedForm,
) -> Result<FlashRedirect, HttpError> {
    state.campgrounds.update(&id, &body).await?;
    Ok(FlashRedirect::success(
        format!("/campgrounds/{id}"),
        "Successfully updated campground!",
    ))
}

/// Delete a campground.
///
/// Same silent-miss behavior as update.
async fn delete_campground(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<FlashRedirect, HttpError> {
    state.campgrounds.delete(&id).await?;
    Ok(FlashRedirect::success(
        "/campgrounds",
        "Successfully deleted campground!",
    ))
}

/// Attach a review to a campground
async fn create_review(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    NestedForm(body): NestedForm,
) -> Result<FlashRedirect, HttpError> {
    state.reviews.create(&id, &body).await?;
    Ok(FlashRedirect::success(
        format!("/campgrounds/{id}"),
        "Successfully made a new review!",
    ))
}

/// Detach and delete a review
async fn delete_review(
    State(state): State<AppState>,
    AxumPath((id, review_id)): AxumPath<(String, String)>,
) -> Result<FlashRedirect, HttpError> {
    state.reviews.delete(&id, &review_id).await?;
    Ok(FlashRedirect::success(
        format!("/campgrounds/{id}"),
        "Successfully deleted review!",
    ))
}

/// Unknown paths funnel into the terminal 404 rendering
async fn fallback_not_found() -> HttpError {
    HttpError::NotFound("Page Not Found".to_string())
}

/// Terminal error type for the HTTP surface.
///
/// Every handler failure converges here; `into_response` is the single
/// place an error becomes a page.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Failure escalated from the application layer
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Request targeted something that does not exist
    #[error("{0}")]
    NotFound(String),
}

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Application(ApplicationError::Domain(DomainError::Validation(report))) => {
                (StatusCode::BAD_REQUEST, report.joined())
            }
            Self::Application(ApplicationError::Domain(DomainError::CampgroundNotFound(id))) => {
                (StatusCode::NOT_FOUND, format!("Campground not found: {id}"))
            }
            Self::Application(ApplicationError::NotFound(what)) => {
                (StatusCode::NOT_FOUND, format!("Not found: {what}"))
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            // Internal failures never leak their message to the page
            Self::Application(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Oh No, Something went wrong!".to_string(),
            ),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let html = HtmlPages::new().render(
            "error",
            &json!({ "status": status.as_u16(), "message": message }),
        );
        (status, Html(html)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ValidationReport, Violation};

    fn validation_error(violations: &[(&str, &str)]) -> HttpError {
        let mut report = ValidationReport::new();
        for (field, message) in violations {
            report.push(Violation::new(*field, *message));
        }
        HttpError::Application(ApplicationError::Domain(DomainError::Validation(report)))
    }

    #[test]
    fn test_validation_maps_to_400_with_joined_messages() {
        let err = validation_error(&[
            ("title", "title must not be empty"),
            ("price", "price must be at least 0"),
        ]);
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "title must not be empty,price must be at least 0");
    }

    #[test]
    fn test_not_found_variants_map_to_404() {
        let domain = HttpError::Application(ApplicationError::Domain(
            DomainError::CampgroundNotFound("abc".to_string()),
        ));
        assert_eq!(domain.status_and_message().0, StatusCode::NOT_FOUND);

        let application =
            HttpError::Application(ApplicationError::NotFound("campground abc".to_string()));
        assert_eq!(application.status_and_message().0, StatusCode::NOT_FOUND);

        let fallback = HttpError::NotFound("Page Not Found".to_string());
        let (status, message) = fallback.status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Page Not Found");
    }

    #[test]
    fn test_internal_errors_stay_generic() {
        let decode_failure = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = HttpError::Application(ApplicationError::Payload(decode_failure));

        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Oh No, Something went wrong!");
    }

    #[tokio::test]
    async fn test_error_response_renders_the_error_page() {
        let response = HttpError::NotFound("Page Not Found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h1>Page Not Found</h1>"));
        assert!(html.contains("HTTP 404"));
    }

    #[tokio::test]
    async fn test_fallback_is_a_404_page() {
        let response = fallback_not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
