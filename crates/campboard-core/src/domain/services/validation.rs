//! Form payload validation domain service
//!
//! Walks a decoded form body against a declarative schema. This is a
//! domain service because the walk spans the schema and the payload and
//! fits neither value object alone.

use serde_json::Value as JsonValue;

use crate::domain::value_objects::{FieldKind, FieldRule, Schema, ValidationReport, Violation};

/// Form payload validation service.
///
/// Every rule is checked and every violation collected; validation never
/// stops at the first failure, so one rejected submission reports all of
/// its problems at once.
///
/// # Examples
/// ```
/// # use campboard_core::domain::services::ValidationService;
/// # use campboard_core::domain::value_objects::Schema;
/// let validator = ValidationService::new();
/// let body = serde_json::json!({
///     "review": { "body": "Lovely site", "rating": "5" }
/// });
///
/// assert!(validator.validate(&body, Schema::review()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationService;

impl ValidationService {
    /// Create a new validation service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate a decoded form body against a schema.
    ///
    /// The body is the whole decoded form; the schema's entity name
    /// selects the namespaced object inside it (`campground[title]` form
    /// keys decode to an object under `"campground"`). Fields not named
    /// by any rule are ignored.
    ///
    /// # Errors
    ///
    /// Returns the full `ValidationReport` when any rule fails.
    pub fn validate(&self, body: &JsonValue, schema: &Schema) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();

        let Some(payload) = body.get(schema.entity()).filter(|v| v.is_object()) else {
            report.push(Violation::new(
                schema.entity(),
                format!("{} payload is required", schema.entity()),
            ));
            return report.into_result();
        };

        for rule in schema.fields() {
            Self::check_field(payload, rule, &mut report);
        }

        report.into_result()
    }

    fn check_field(payload: &JsonValue, rule: &FieldRule, report: &mut ValidationReport) {
        let name = rule.name();

        let value = payload.get(name).filter(|v| !v.is_null());
        let Some(value) = value else {
            if rule.is_required() {
                report.push(Violation::new(name, format!("{name} is required")));
            }
            return;
        };

        match *rule.kind() {
            FieldKind::Text { allow_empty } => Self::check_text(value, name, allow_empty, report),
            FieldKind::Integer { minimum, maximum } => {
                Self::check_integer(value, name, minimum, maximum, report);
            }
            FieldKind::Number { minimum, maximum } => {
                Self::check_number(value, name, minimum, maximum, report);
            }
        }
    }

    fn check_text(value: &JsonValue, name: &str, allow_empty: bool, report: &mut ValidationReport) {
        let Some(text) = value.as_str() else {
            report.push(Violation::new(name, format!("{name} must be text")));
            return;
        };

        if !allow_empty && text.is_empty() {
            report.push(Violation::new(name, format!("{name} must not be empty")));
        }
    }

    fn check_integer(
        value: &JsonValue,
        name: &str,
        minimum: Option<i64>,
        maximum: Option<i64>,
        report: &mut ValidationReport,
    ) {
        let Some(number) = Self::coerce_number(value) else {
            report.push(Violation::new(name, format!("{name} must be a number")));
            return;
        };

        if number.fract() != 0.0 {
            report.push(Violation::new(
                name,
                format!("{name} must be a whole number"),
            ));
            return;
        }

        if let Some(min) = minimum
            && number < min as f64
        {
            report.push(Violation::new(
                name,
                format!("{name} must be at least {min}"),
            ));
        }
        if let Some(max) = maximum
            && number > max as f64
        {
            report.push(Violation::new(name, format!("{name} must be at most {max}")));
        }
    }

    fn check_number(
        value: &JsonValue,
        name: &str,
        minimum: Option<f64>,
        maximum: Option<f64>,
        report: &mut ValidationReport,
    ) {
        let Some(number) = Self::coerce_number(value) else {
            report.push(Violation::new(name, format!("{name} must be a number")));
            return;
        };

        if let Some(min) = minimum
            && number < min
        {
            report.push(Violation::new(
                name,
                format!("{name} must be at least {min}"),
            ));
        }
        if let Some(max) = maximum
            && number > max
        {
            report.push(Violation::new(name, format!("{name} must be at most {max}")));
        }
    }

    /// Form values arrive as strings; numbers also appear directly when a
    /// payload is built programmatically.
    fn coerce_number(value: &JsonValue) -> Option<f64> {
        match value {
            JsonValue::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn campground_body() -> JsonValue {
        json!({
            "campground": {
                "title": "Maple Ridge",
                "price": "25",
                "image": "https://example.com/camp.jpg",
                "description": "Pines and a cold creek",
                "location": "Bend, Oregon"
            }
        })
    }

    #[test]
    fn test_valid_campground_passes() {
        let validator = ValidationService::new();
        assert!(
            validator
                .validate(&campground_body(), Schema::campground())
                .is_ok()
        );
    }

    #[test]
    fn test_missing_namespace_is_a_violation() {
        let validator = ValidationService::new();
        let report = validator
            .validate(&json!({}), Schema::campground())
            .unwrap_err();

        assert_eq!(report.joined(), "campground payload is required");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let validator = ValidationService::new();
        let body = json!({ "campground": {} });

        let report = validator.validate(&body, Schema::campground()).unwrap_err();

        assert_eq!(report.len(), 5);
        let fields: Vec<_> = report.violations().iter().map(|v| v.field()).collect();
        assert_eq!(
            fields,
            vec!["title", "price", "image", "description", "location"]
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let validator = ValidationService::new();
        let mut body = campground_body();
        body["campground"]["price"] = json!("-5");

        let report = validator.validate(&body, Schema::campground()).unwrap_err();

        assert_eq!(report.joined(), "price must be at least 0");
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let validator = ValidationService::new();
        let mut body = campground_body();
        body["campground"]["price"] = json!("cheap");

        let report = validator.validate(&body, Schema::campground()).unwrap_err();

        assert_eq!(report.joined(), "price must be a number");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let validator = ValidationService::new();
        let mut body = campground_body();
        body["campground"]["title"] = json!("");

        let report = validator.validate(&body, Schema::campground()).unwrap_err();

        assert_eq!(report.joined(), "title must not be empty");
    }

    #[test]
    fn test_rating_bounds() {
        let validator = ValidationService::new();

        for (value, ok) in [("0", false), ("1", true), ("5", true), ("6", false)] {
            let body = json!({ "review": { "body": "Fine", "rating": value } });
            assert_eq!(
                validator.validate(&body, Schema::review()).is_ok(),
                ok,
                "rating {value}"
            );
        }
    }

    #[test]
    fn test_fractional_rating_is_rejected() {
        let validator = ValidationService::new();
        let body = json!({ "review": { "body": "Fine", "rating": "4.5" } });

        let report = validator.validate(&body, Schema::review()).unwrap_err();

        assert_eq!(report.joined(), "rating must be a whole number");
    }

    #[test]
    fn test_multiple_review_violations_join_with_comma() {
        let validator = ValidationService::new();
        let body = json!({ "review": { "body": "", "rating": "9" } });

        let report = validator.validate(&body, Schema::review()).unwrap_err();

        assert_eq!(
            report.joined(),
            "body must not be empty,rating must be at most 5"
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let validator = ValidationService::new();
        let mut body = campground_body();
        body["campground"]["owner"] = json!("not-a-field");

        assert!(validator.validate(&body, Schema::campground()).is_ok());
    }

    #[test]
    fn test_programmatic_numbers_also_pass() {
        let validator = ValidationService::new();
        let mut body = campground_body();
        body["campground"]["price"] = json!(25.5);

        assert!(validator.validate(&body, Schema::campground()).is_ok());
    }
}
