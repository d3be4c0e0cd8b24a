/// Wizard state management
///
/// The explicit, serializable form state: current step, completed steps,
/// accumulated values, field errors, and the submitted flag. Mutated only by
/// the flow's named operations.
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::steps::StepRegistry;
use crate::validation::ValidationReport;

/// Wizard state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Index of the active step
    current_step_index: usize,

    /// Steps that have passed validation at least once this session
    completed_steps: HashSet<usize>,

    /// Current value of every field, across all steps
    values: HashMap<String, String>,

    /// Error message per invalid field of a validated step
    field_errors: HashMap<String, String>,

    /// Whether the final step's submit has gone through
    submitted: bool,
}

impl WizardState {
    /// Fresh state for a registry: step 0, nothing completed, every
    /// registered field seeded with the empty string, no errors.
    pub fn initial(registry: &StepRegistry) -> Self {
        let values = registry
            .all_fields()
            .into_iter()
            .map(|field| (field.to_string(), String::new()))
            .collect();

        Self {
            current_step_index: 0,
            completed_steps: HashSet::new(),
            values,
            field_errors: HashMap::new(),
            submitted: false,
        }
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn completed_steps(&self) -> &HashSet<usize> {
        &self.completed_steps
    }

    pub fn is_step_completed(&self, index: usize) -> bool {
        self.completed_steps.contains(&index)
    }

    /// Number of completed steps
    pub fn completed_count(&self) -> usize {
        self.completed_steps.len()
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current_step_index = index;
    }

    /// Store a field value and drop any stale error for that field.
    pub(crate) fn set_value(&mut self, field: &str, value: String) {
        self.values.insert(field.to_string(), value);
        self.field_errors.remove(field);
    }

    pub(crate) fn mark_step_completed(&mut self, index: usize) {
        self.completed_steps.insert(index);
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Replace the errors of one step's fields with a fresh report. Fields
    /// outside `fields` are untouched.
    pub(crate) fn replace_errors(&mut self, fields: &[String], report: &ValidationReport) {
        for field in fields {
            self.field_errors.remove(field);
        }
        for error in report.errors() {
            self.field_errors
                .insert(error.field.clone(), error.message.clone());
        }
    }
}
