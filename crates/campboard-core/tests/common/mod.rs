//! Common test utilities
//!
//! Builds the router over the real in-memory adapters and provides
//! request builders and response readers shared across test files

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use campboard_core::{
    AppState, Campground, CampgroundAttrs, CampgroundId, CampgroundRepository, HtmlPages,
    MemoryCampgroundRepository, MemoryReviewRepository, MemoryStore, Price, Rating, Review,
    ReviewRepository, create_router,
};
use url::form_urlencoded;

/// Fresh router over an empty store, returned alongside the store handle
/// so tests can seed and inspect documents directly
pub fn create_test_app() -> (MemoryStore, Router) {
    let store = MemoryStore::new();
    let app = create_app_over(&store);
    (store, app)
}

/// Router sharing an existing store handle
pub fn create_app_over(store: &MemoryStore) -> Router {
    let campgrounds: Arc<dyn CampgroundRepository> =
        Arc::new(MemoryCampgroundRepository::new(store.clone()));
    let reviews: Arc<dyn ReviewRepository> = Arc::new(MemoryReviewRepository::new(store.clone()));
    let state = AppState::new(campgrounds, reviews, Arc::new(HtmlPages::new()));
    create_router(state)
}

/// Builder for seeding test campgrounds with custom fields
pub struct CampgroundBuilder {
    title: String,
    price: f64,
    location: String,
}

impl CampgroundBuilder {
    pub fn new() -> Self {
        Self {
            title: "Maple Ridge".to_string(),
            price: 25.0,
            location: "Bend, Oregon".to_string(),
        }
    }

    pub fn title(mut self, value: &str) -> Self {
        self.title = value.to_string();
        self
    }

    pub fn price(mut self, value: f64) -> Self {
        self.price = value;
        self
    }

    pub fn location(mut self, value: &str) -> Self {
        self.location = value.to_string();
        self
    }

    pub fn build(self) -> Campground {
        Campground::new(CampgroundAttrs {
            title: self.title,
            price: Price::new(self.price).expect("test price must be in range"),
            image: "https://example.com/camp.jpg".to_string(),
            description: "Pines and a cold creek".to_string(),
            location: self.location,
        })
    }
}

/// Seed a campground straight into the store, returning the stored record
pub fn seed_campground(store: &MemoryStore, title: &str) -> Campground {
    let campground = CampgroundBuilder::new().title(title).build();
    store.put_campground(campground.clone());
    campground
}

/// Seed a review and attach its reference to an existing campground
pub fn seed_review(
    store: &MemoryStore,
    campground_id: CampgroundId,
    body: &str,
    rating: u8,
) -> Review {
    let review = Review::new(body, Rating::new(rating).expect("test rating must be in range"));
    store.put_review(review.clone());
    let mut campground = store
        .campground(campground_id)
        .expect("seed target campground must exist");
    campground.attach_review(review.id());
    store.put_campground(campground);
    review
}

// ===== Request builders =====

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

/// GET replaying a cookie captured from an earlier response
pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

/// Url-encoded POST, the shape a browser form submits
pub fn form_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Complete campground form body with bracket-nested field names
pub fn campground_form(title: &str, price: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("campground[title]", title)
        .append_pair("campground[price]", price)
        .append_pair("campground[image]", "https://example.com/camp.jpg")
        .append_pair("campground[description]", "Pines and a cold creek")
        .append_pair("campground[location]", "Bend, Oregon")
        .finish()
}

/// Complete review form body
pub fn review_form(rating: &str, body: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("review[rating]", rating)
        .append_pair("review[body]", body)
        .finish()
}

/// Prefix a form body with the method override field browsers need for
/// PUT and DELETE
pub fn with_method(method: &str, form: &str) -> String {
    format!("_method={method}&{form}")
}

// ===== Response readers =====

/// Full response body as text
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Location header of a redirect response
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response carries no Location header")
        .to_str()
        .unwrap()
}

/// Flash cookie pair set by a redirect, ready to replay as a Cookie header
pub fn flash_cookie(response: &Response) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets no cookie")
        .to_str()
        .unwrap();
    raw.split(';').next().unwrap().to_string()
}

/// Whether the response expires the flash cookie
pub fn clears_flash(response: &Response) -> bool {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .any(|value| {
            value
                .to_str()
                .is_ok_and(|v| v.starts_with("campboard.flash=;") && v.contains("Max-Age=0"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campground_builder() {
        let campground = CampgroundBuilder::new()
            .title("Cedar Hollow")
            .price(40.0)
            .location("Moab, Utah")
            .build();

        assert_eq!(campground.title(), "Cedar Hollow");
        assert_eq!(campground.price().value(), 40.0);
        assert_eq!(campground.location(), "Moab, Utah");
    }

    #[test]
    fn test_seed_review_attaches_reference() {
        let store = MemoryStore::new();
        let campground = seed_campground(&store, "Maple Ridge");
        let review = seed_review(&store, campground.id(), "Quiet and clean", 4);

        assert_eq!(store.review_count(), 1);
        let stored = store.campground(campground.id()).unwrap();
        assert_eq!(stored.reviews(), &[review.id()]);
    }

    #[test]
    fn test_form_bodies_use_bracket_keys() {
        let form = campground_form("Maple Ridge", "25");
        assert!(form.contains("campground%5Btitle%5D=Maple+Ridge"));

        let overridden = with_method("PUT", &form);
        assert!(overridden.starts_with("_method=PUT&"));
    }
}
