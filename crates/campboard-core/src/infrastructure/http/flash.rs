//! One-shot flash messages carried across redirects
//!
//! A mutation sets the message on its redirect response; the next page
//! render drains it and clears the cookie. The message never lives in
//! ambient request state, only in the `campboard.flash` cookie between
//! the two responses.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, HeaderValue, header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use url::form_urlencoded;

/// Cookie holding the pending flash message
pub const FLASH_COOKIE: &str = "campboard.flash";

/// Category of a flash message, controls the banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message that rides exactly one redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

impl FlashMessage {
    /// Success message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// Error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Cookie-safe encoding of the message
    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("kind", self.kind.as_str())
            .append_pair("message", &self.message)
            .finish()
    }

    /// Parse a cookie value produced by [`FlashMessage::encode`]
    fn decode(value: &str) -> Option<Self> {
        let mut kind = None;
        let mut message = None;
        for (name, value) in form_urlencoded::parse(value.as_bytes()) {
            match name.as_ref() {
                "kind" => {
                    kind = match value.as_ref() {
                        "success" => Some(FlashKind::Success),
                        "error" => Some(FlashKind::Error),
                        _ => return None,
                    }
                }
                "message" => message = Some(value.into_owned()),
                _ => {}
            }
        }
        Some(Self {
            kind: kind?,
            message: message?,
        })
    }
}

/// Redirect response that sets the flash cookie for the next render.
#[derive(Debug, Clone)]
pub struct FlashRedirect {
    location: String,
    flash: FlashMessage,
}

impl FlashRedirect {
    /// Redirect carrying a success message
    pub fn success(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            flash: FlashMessage::success(message),
        }
    }

    /// Redirect carrying an error message
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            flash: FlashMessage::error(message),
        }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(&self.location).into_response();
        let cookie = format!("{FLASH_COOKIE}={}; Path=/; HttpOnly", self.flash.encode());
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        response
    }
}

/// Extractor draining the flash cookie on a page render.
///
/// The handler is responsible for also sending [`clear_flash_header`] when
/// a message was present, so the cookie does not survive the render.
#[derive(Debug, Clone)]
pub struct IncomingFlash(pub Option<FlashMessage>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(flash_from_headers(&parts.headers)))
    }
}

fn flash_from_headers(headers: &HeaderMap) -> Option<FlashMessage> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == FLASH_COOKIE)
            .then(|| FlashMessage::decode(value))
            .flatten()
    })
}

/// `Set-Cookie` header that expires a consumed flash
pub fn clear_flash_header() -> (HeaderName, HeaderValue) {
    (
        header::SET_COOKIE,
        HeaderValue::from_static("campboard.flash=; Path=/; Max-Age=0"),
    )
}
