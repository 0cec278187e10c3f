//! Schema value object for form payload validation
//!
//! Declarative field constraints for the two record kinds. A schema is a
//! domain value object with no identity, defined purely by its rules; the
//! actual walk over a payload lives in the validation service.

use std::fmt;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

/// Constraint kind for a single form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free text field
    Text {
        /// Whether the empty string passes validation
        allow_empty: bool,
    },

    /// Whole-number field with optional inclusive bounds.
    ///
    /// Form values arrive as strings; the validator coerces before
    /// checking bounds and rejects fractional values.
    Integer {
        /// Minimum value (inclusive)
        minimum: Option<i64>,
        /// Maximum value (inclusive)
        maximum: Option<i64>,
    },

    /// Numeric field with optional inclusive bounds.
    ///
    /// Form values arrive as strings; the validator coerces before
    /// checking bounds.
    Number {
        /// Minimum value (inclusive)
        minimum: Option<f64>,
        /// Maximum value (inclusive)
        maximum: Option<f64>,
    },
}

/// Named field constraint inside a schema
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

impl FieldRule {
    /// Required non-empty text field
    #[must_use]
    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text { allow_empty: false },
            required: true,
        }
    }

    /// Required whole-number field with inclusive bounds
    #[must_use]
    pub fn integer(name: &'static str, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        Self {
            name,
            kind: FieldKind::Integer { minimum, maximum },
            required: true,
        }
    }

    /// Required numeric field with inclusive bounds
    #[must_use]
    pub fn number(name: &'static str, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self {
            name,
            kind: FieldKind::Number { minimum, maximum },
            required: true,
        }
    }

    /// Mark the field optional (absent values pass, present ones are checked)
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Field name as it appears in the form payload
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Constraint kind
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the field must be present
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Declarative constraints for one record kind.
///
/// Payloads are namespaced under the entity name (`campground[title]`
/// style form keys decode to an object under `"campground"`), so the
/// schema carries that name alongside its field rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    entity: &'static str,
    fields: SmallVec<[FieldRule; 8]>,
}

static CAMPGROUND: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "campground",
        [
            FieldRule::text("title"),
            FieldRule::number("price", Some(0.0), None),
            FieldRule::text("image"),
            FieldRule::text("description"),
            FieldRule::text("location"),
        ],
    )
});

static REVIEW: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "review",
        [
            FieldRule::text("body"),
            FieldRule::integer("rating", Some(1), Some(5)),
        ],
    )
});

impl Schema {
    /// Create a schema from an ordered rule list
    pub fn new(entity: &'static str, fields: impl IntoIterator<Item = FieldRule>) -> Self {
        Self {
            entity,
            fields: fields.into_iter().collect(),
        }
    }

    /// Constraints for campground creation and update payloads
    #[must_use]
    pub fn campground() -> &'static Schema {
        &CAMPGROUND
    }

    /// Constraints for review creation payloads
    #[must_use]
    pub fn review() -> &'static Schema {
        &REVIEW
    }

    /// Entity name the payload must be namespaced under
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Field rules in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }
}

/// Single field constraint violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: String,
    message: String,
}

impl Violation {
    /// Create a violation; `message` is the complete human-readable sentence
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field the violation applies to
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every violation collected from one validation run.
///
/// Validation never stops at the first failure; the rendered rejection
/// carries all messages joined with a comma.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.joined())]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the run passed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations collected
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Collected violations in rule declaration order
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// All messages joined into one comma-separated string
    #[must_use]
    pub fn joined(&self) -> String {
        self.violations
            .iter()
            .map(Violation::message)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Convert into a result, erroring when any violation was recorded
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was collected.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
