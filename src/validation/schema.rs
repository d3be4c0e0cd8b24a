/// Step schemas and validation reports
///
/// A schema is an ordered list of field specs; validating it walks the fields
/// in declaration order and collects the first failing rule of each.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rules::FieldRule;

/// One named input and the rules it must satisfy, in evaluation order.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    rules: Vec<FieldRule>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule. Rules are evaluated in the order they were added.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check a value; the first failing rule's message wins.
    pub fn check(&self, value: &str) -> Option<&str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// Validation rule set over one step's field subset.
#[derive(Debug, Clone, Default)]
pub struct StepSchema {
    fields: Vec<FieldSpec>,
}

impl StepSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field spec. Declaration order drives error ordering.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldSpec::name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Validate this schema's fields against a values mapping. A missing
    /// value is treated as the empty string. Only this schema's fields are
    /// ever inspected.
    pub fn validate(&self, values: &HashMap<String, String>) -> ValidationReport {
        let mut errors = Vec::new();

        for spec in &self.fields {
            let value = values.get(spec.name()).map(String::as_str).unwrap_or("");
            if let Some(message) = spec.check(value) {
                errors.push(FieldError {
                    field: spec.name().to_string(),
                    message: message.to_string(),
                });
            }
        }

        ValidationReport { errors }
    }
}

/// A validation failure message attached to one named input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Outcome of validating one step. Errors appear in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Build a report from pre-collected errors, preserving their order.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for one field, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> StepSchema {
        StepSchema::new()
            .field(FieldSpec::new("firstName").rule(FieldRule::min_len(2, "first too short")))
            .field(FieldSpec::new("lastName").rule(FieldRule::min_len(2, "last too short")))
            .field(FieldSpec::new("email").rule(FieldRule::email("bad email")))
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_values_produce_empty_report() {
        let report = schema().validate(&values(&[
            ("firstName", "Al"),
            ("lastName", "Li"),
            ("email", "a@b.com"),
        ]));
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_errors_in_declaration_order() {
        let report = schema().validate(&values(&[
            ("firstName", "A"),
            ("lastName", "L"),
            ("email", "nope"),
        ]));
        assert!(!report.is_valid());

        let fields: Vec<&str> = report.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["firstName", "lastName", "email"]);
    }

    #[test]
    fn test_exactly_failing_fields_reported() {
        let report = schema().validate(&values(&[
            ("firstName", "Al"),
            ("lastName", "L"),
            ("email", "a@b.com"),
        ]));
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.message_for("lastName"), Some("last too short"));
        assert_eq!(report.message_for("firstName"), None);
    }

    #[test]
    fn test_missing_value_treated_as_empty() {
        let report = schema().validate(&values(&[("firstName", "Al")]));
        assert_eq!(report.message_for("lastName"), Some("last too short"));
        assert_eq!(report.message_for("email"), Some("bad email"));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let schema = StepSchema::new().field(
            FieldSpec::new("phone")
                .rule(FieldRule::min_len(10, "too short"))
                .rule(FieldRule::min_len(100, "never reached first")),
        );

        let report = schema.validate(&values(&[("phone", "123")]));
        assert_eq!(report.message_for("phone"), Some("too short"));
    }

    #[test]
    fn test_foreign_fields_ignored() {
        let report = schema().validate(&values(&[
            ("firstName", "Al"),
            ("lastName", "Li"),
            ("email", "a@b.com"),
            ("cardNumber", ""),
        ]));
        assert!(report.is_valid());
    }
}
