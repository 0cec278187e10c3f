//! Nested form decoding
//!
//! Browser forms submit bracket keys (`campground[title]=...`) as flat
//! url-encoded pairs. [`NestedForm`] folds them into a nested JSON value,
//! one level deep, which is the shape the validator and payload decoders
//! work on. All leaf values stay strings; numeric coercion happens later.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::{Map, Value as JsonValue};
use url::form_urlencoded;

/// Url-encoded request body decoded into nested JSON.
#[derive(Debug, Clone)]
pub struct NestedForm(pub JsonValue);

impl<S> FromRequest<S> for NestedForm
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;
        Ok(Self(decode_nested(&bytes)))
    }
}

/// Fold flat url-encoded pairs into a one-level-deep JSON object
pub fn decode_nested(bytes: &[u8]) -> JsonValue {
    let mut root = Map::new();
    for (key, value) in form_urlencoded::parse(bytes) {
        match split_bracket_key(&key) {
            Some((outer, inner)) => {
                let entry = root
                    .entry(outer.to_string())
                    .or_insert_with(|| JsonValue::Object(Map::new()));
                if let JsonValue::Object(nested) = entry {
                    nested.insert(inner.to_string(), JsonValue::String(value.into_owned()));
                }
            }
            None => {
                root.insert(key.into_owned(), JsonValue::String(value.into_owned()));
            }
        }
    }
    JsonValue::Object(root)
}

fn split_bracket_key(key: &str) -> Option<(&str, &str)> {
    let (outer, rest) = key.split_once('[')?;
    let inner = rest.strip_suffix(']')?;
    (!outer.is_empty() && !inner.is_empty()).then_some((outer, inner))
}
