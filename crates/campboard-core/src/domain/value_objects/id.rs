//! Generic UUID-based Identifier Value Object
//!
//! Type-safe identifier using phantom types for compile-time differentiation.
//! Uses sealed trait pattern to prevent external marker implementations.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Sealed trait module preventing external implementations
mod private {
    pub trait Sealed {}
}

/// Marker trait for type-safe ID differentiation.
///
/// This trait is sealed - external crates cannot implement it.
/// Only marker types defined in this module are valid.
pub trait IdMarker: private::Sealed + Send + Sync + 'static {}

/// Marker type for campground identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CampgroundMarker;

/// Marker type for review identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewMarker;

impl private::Sealed for CampgroundMarker {}
impl private::Sealed for ReviewMarker {}

impl IdMarker for CampgroundMarker {}
impl IdMarker for ReviewMarker {}

/// Generic UUID-based identifier with phantom type safety.
///
/// Provides compile-time differentiation between record kinds while
/// sharing a single implementation:
///
/// ```compile_fail
/// # use campboard_core::domain::value_objects::{CampgroundId, ReviewId};
/// let campground_id: CampgroundId = CampgroundId::new();
/// let review_id: ReviewId = campground_id;  // Compile error!
/// ```
///
/// `PhantomData<T>` is zero-sized, so `Id<T>` has the same memory layout
/// as a plain `Uuid`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T: IdMarker> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// Create new random identifier
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create identifier from existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Create identifier from string representation.
    ///
    /// Path segments arrive as arbitrary strings; callers fold the error
    /// into their not-found path rather than surfacing a parse failure.
    ///
    /// # Errors
    ///
    /// Returns `uuid::Error` if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }

    /// Get underlying UUID value
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.value
    }

    /// Get string representation
    #[must_use]
    pub fn as_str(&self) -> String {
        self.value.to_string()
    }
}

impl<T: IdMarker> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(std::any::type_name::<Self>())
            .field(&self.value)
            .finish()
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T: IdMarker> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T: IdMarker> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

// Serialized as the canonical hyphenated string so reference lists embed
// cleanly in view contexts and stored documents.
impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.value)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Type alias for campground identifier
pub type CampgroundId = Id<CampgroundMarker>;

/// Type alias for review identifier
pub type ReviewId = Id<ReviewMarker>;
