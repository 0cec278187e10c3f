//! Review rating value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Star rating attached to a review.
///
/// Whole number from 1 to 5 inclusive. Construction validates the bounds,
/// so a held `Rating` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating
    pub const MIN: u8 = 1;
    /// Highest accepted rating
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1..=5.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` when out of bounds.
    pub fn new(value: u8) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidRating(format!(
                "must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Create a rating from the raw numeric a form submits.
    ///
    /// Fractional and non-finite values are rejected; the rating scale is
    /// whole stars only.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` for fractional, non-finite or
    /// out-of-bounds values.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        let in_bounds =
            value.is_finite() && value >= f64::from(Self::MIN) && value <= f64::from(Self::MAX);
        if !in_bounds || value.fract() != 0.0 {
            return Err(DomainError::InvalidRating(format!(
                "must be a whole number between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(value as u8))
    }

    /// Get the numeric rating value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
