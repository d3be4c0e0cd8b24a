/// Field validation engine
///
/// Provides per-field rules, per-step schemas, and ordered validation
/// reports. A schema only ever inspects its own fields, so validating one
/// step never depends on values owned by another step.

pub mod rules;
pub mod schema;

// Re-export commonly used types
pub use rules::FieldRule;
pub use schema::{FieldError, FieldSpec, StepSchema, ValidationReport};
