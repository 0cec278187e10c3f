//! Nightly price value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Price per night for a campground listing.
///
/// Non-negative finite number. Fractional prices are allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a price, rejecting negative and non-finite values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` when below zero or not finite.
    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPrice(format!(
                "must be at least 0, got {value}"
            )))
        }
    }

    /// Get the numeric price value
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_zero_and_positive() {
        assert!(Price::new(0.0).is_ok());
        assert_eq!(Price::new(24.5).unwrap().value(), 24.5);
    }

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::new(-5.0).is_err());
        assert!(Price::new(-0.01).is_err());
    }

    #[test]
    fn test_price_rejects_non_finite() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_price_display_keeps_raw_number() {
        assert_eq!(Price::new(25.0).unwrap().to_string(), "25");
        assert_eq!(Price::new(19.5).unwrap().to_string(), "19.5");
    }
}
