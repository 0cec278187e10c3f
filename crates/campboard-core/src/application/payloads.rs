//! Typed form payloads
//!
//! Decoded form bodies come in namespaced under the entity key with every
//! value as a string. These structs deserialize that shape leniently and
//! convert into validated domain attributes afterwards.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::domain::{
    DomainResult,
    entities::{CampgroundAttrs, Review},
    value_objects::{Price, Rating},
};

/// Campground form fields as submitted.
///
/// Deserialize only after schema validation has passed; the lenient
/// numeric field then cannot fail.
#[derive(Debug, Clone, Deserialize)]
pub struct CampgroundPayload {
    /// Listing title
    pub title: String,
    /// Price per night, string-coerced
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Image URL
    pub image: String,
    /// Free-text description
    pub description: String,
    /// Free-text location
    pub location: String,
}

impl CampgroundPayload {
    /// Decode the namespaced object out of a form body
    ///
    /// # Errors
    ///
    /// Returns a decode error when the body does not carry the expected
    /// shape; unreachable for bodies that passed schema validation.
    pub fn decode(body: &JsonValue) -> Result<Self, serde_json::Error> {
        Self::deserialize(&body["campground"])
    }

    /// Convert into validated domain attributes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` when the price is out of range.
    pub fn into_attrs(self) -> DomainResult<CampgroundAttrs> {
        Ok(CampgroundAttrs {
            title: self.title,
            price: Price::new(self.price)?,
            image: self.image,
            description: self.description,
            location: self.location,
        })
    }
}

/// Review form fields as submitted
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewPayload {
    /// Review text
    pub body: String,
    /// Star rating, string-coerced
    #[serde(deserialize_with = "lenient_f64")]
    pub rating: f64,
}

impl ReviewPayload {
    /// Decode the namespaced object out of a form body
    ///
    /// # Errors
    ///
    /// Returns a decode error when the body does not carry the expected
    /// shape; unreachable for bodies that passed schema validation.
    pub fn decode(body: &JsonValue) -> Result<Self, serde_json::Error> {
        Self::deserialize(&body["review"])
    }

    /// Convert into a fresh review entity
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` when the rating is fractional
    /// or out of range.
    pub fn into_review(self) -> DomainResult<Review> {
        let rating = Rating::from_f64(self.rating)?;
        Ok(Review::new(self.body, rating))
    }
}

/// Accept both a JSON number and the string a form posts
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
