/// Wizard flow management
///
/// Owns the state and applies the step-gated transitions: a step must pass
/// its own validation before the index moves past it, and the final step's
/// advance submits instead of navigating.
use super::state::WizardState;
use super::steps::{StepDefinition, StepRegistry};
use crate::error::WizardError;
use crate::validation::ValidationReport;

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Now on the given step index
    Moved(usize),

    /// Final step validated; the form is submitted
    Submitted,

    /// Validation failed; the index is unchanged and errors were recorded
    Blocked(ValidationReport),

    /// The request did not apply (gating rejected it, or the wizard is
    /// frozen after submission); state is unchanged
    Ignored,
}

/// Wizard flow manager
#[derive(Debug, Clone)]
pub struct WizardFlow {
    registry: StepRegistry,
    state: WizardState,
}

impl WizardFlow {
    /// Create a new flow over a registry, starting at step 0.
    pub fn new(registry: StepRegistry) -> Self {
        let state = WizardState::initial(&registry);
        Self { registry, state }
    }

    /// The built-in checkout flow (personal info → address → payment).
    pub fn checkout() -> Self {
        Self::new(StepRegistry::checkout())
    }

    /// Create a flow from previously captured state.
    pub fn from_state(registry: StepRegistry, state: WizardState) -> Self {
        Self { registry, state }
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step_index(&self) -> usize {
        self.state.current_step_index()
    }

    /// Definition of the active step.
    pub fn current_step(&self) -> &StepDefinition {
        // The index never leaves [0, step_count) and the registry is
        // non-empty, so the lookup cannot miss.
        self.registry
            .step_at(self.state.current_step_index())
            .expect("current step index in range")
    }

    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    /// Completion progress (0.0-1.0)
    pub fn progress(&self) -> f32 {
        if self.state.is_submitted() {
            return 1.0;
        }

        let total = self.registry.step_count() as f32;
        (self.state.completed_count() as f32 / total).min(1.0)
    }

    /// Update one field's value and drop any stale error for it. Never
    /// navigates. No-op once the wizard is submitted.
    pub fn set_field_value(&mut self, field: &str, value: impl Into<String>) {
        if self.state.is_submitted() {
            tracing::debug!(field, "ignoring field update after submission");
            return;
        }
        if !self.registry.has_field(field) {
            // Accepted per the contract; stray keys are inert because
            // validation only reads registered fields.
            tracing::debug!(field, "value set for unregistered field");
        }
        self.state.set_value(field, value.into());
    }

    /// Validate one step's fields against the current values.
    ///
    /// On success the step joins the completed set; on failure the step's
    /// field errors are replaced with the report's messages. Either way only
    /// that step's fields are touched. After submission the report is still
    /// computed but state stays frozen.
    pub fn validate_step(&mut self, index: usize) -> Result<ValidationReport, WizardError> {
        if index >= self.registry.step_count() {
            return Err(WizardError::StepOutOfRange {
                index,
                count: self.registry.step_count(),
            });
        }
        Ok(self.run_validation(index))
    }

    /// Validate the active step and move forward on success.
    ///
    /// On the final step a successful validation submits instead of
    /// navigating. On failure the index stays put and the errors are
    /// recorded.
    pub fn advance(&mut self) -> Navigation {
        if self.state.is_submitted() {
            return Navigation::Ignored;
        }

        let current = self.state.current_step_index();
        let report = self.run_validation(current);
        if !report.is_valid() {
            return Navigation::Blocked(report);
        }

        if current == self.registry.last_index() {
            self.state.mark_submitted();
            tracing::debug!("final step validated, wizard submitted");
            Navigation::Submitted
        } else {
            self.state.set_current(current + 1);
            tracing::debug!(from = current, to = current + 1, "advanced");
            Navigation::Moved(current + 1)
        }
    }

    /// Move one step back without validating. Errors of the step being left
    /// are retained; editing a field clears its own error.
    pub fn retreat(&mut self) -> Navigation {
        if self.state.is_submitted() {
            return Navigation::Ignored;
        }

        let current = self.state.current_step_index();
        if current == 0 {
            return Navigation::Ignored;
        }

        self.state.set_current(current - 1);
        tracing::debug!(from = current, to = current - 1, "retreated");
        Navigation::Moved(current - 1)
    }

    /// Jump to a step, subject to gating.
    ///
    /// Backward jumps (`index <= current`) and jumps to completed steps move
    /// directly without validation. A jump to the immediate next step behaves
    /// exactly like [`advance`](Self::advance) — in particular, a failed
    /// forward jump never moves the index. Anything else is a no-op.
    pub fn jump_to(&mut self, index: usize) -> Navigation {
        if self.state.is_submitted() {
            return Navigation::Ignored;
        }
        if index >= self.registry.step_count() {
            return Navigation::Ignored;
        }

        let current = self.state.current_step_index();
        if index <= current || self.state.is_step_completed(index) {
            self.state.set_current(index);
            tracing::debug!(from = current, to = index, "jumped");
            return Navigation::Moved(index);
        }

        if index == current + 1 {
            return self.advance();
        }

        Navigation::Ignored
    }

    /// Restore the initial state unconditionally.
    pub fn reset(&mut self) {
        self.state = WizardState::initial(&self.registry);
        tracing::debug!("wizard reset");
    }

    /// Check if retreat would move
    pub fn can_retreat(&self) -> bool {
        !self.state.is_submitted() && self.state.current_step_index() > 0
    }

    /// Check if advance could apply (the wizard is not frozen)
    pub fn can_advance(&self) -> bool {
        !self.state.is_submitted()
    }

    /// Index range check is the caller's job; mutation skipped when frozen.
    fn run_validation(&mut self, index: usize) -> ValidationReport {
        let step = self.registry.step_at(index).expect("index checked by caller");
        let report = step.schema().validate(self.state.values());

        if self.state.is_submitted() {
            return report;
        }

        let fields: Vec<String> = step.field_names().map(str::to_string).collect();
        self.state.replace_errors(&fields, &report);
        if report.is_valid() {
            self.state.mark_step_completed(index);
            tracing::debug!(step = index, "step validated");
        } else {
            tracing::debug!(
                step = index,
                errors = report.errors().len(),
                "step validation failed"
            );
        }

        report
    }
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self::checkout()
    }
}
