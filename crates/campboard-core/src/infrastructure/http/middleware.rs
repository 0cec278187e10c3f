//! HTTP middleware for the campground routes

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use url::form_urlencoded;

/// Largest form body the override middleware will buffer
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Method override for browser forms.
///
/// Browsers only submit GET and POST, so edit and delete forms carry a
/// `_method` field. A POST whose query string or url-encoded body sets
/// `_method` to `PUT` or `DELETE` is rewritten to that method before
/// routing; every other request passes through untouched.
pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    // Query string first: form actions like `...?_method=PUT` work
    // without touching the body.
    if let Some(method) = request
        .uri()
        .query()
        .and_then(|query| override_method(query.as_bytes()))
    {
        let (mut parts, body) = request.into_parts();
        parts.method = method;
        return next.run(Request::from_parts(parts, body)).await;
    }

    if !is_urlencoded_form(&request) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    if let Some(method) = override_method(&bytes) {
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_urlencoded_form(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|content_type| {
            content_type
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

fn override_method(bytes: &[u8]) -> Option<Method> {
    form_urlencoded::parse(bytes).find_map(|(key, value)| {
        if key != "_method" {
            return None;
        }
        match value.as_ref() {
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    })
}
