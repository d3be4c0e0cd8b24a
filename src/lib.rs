//! Step-gated multi-step form engine.
//!
//! A checkout-style wizard (personal info → address → payment) built around
//! three pieces:
//!
//! - [`wizard::StepRegistry`] — the ordered step catalogue, each step owning
//!   a disjoint field subset and its validation schema
//! - [`wizard::WizardFlow`] — the controller applying the step-gated
//!   transitions over an explicit, serializable [`wizard::WizardState`]
//! - [`theme`] — the light/dark/auto preference persisted to a single JSON
//!   document
//!
//! Validation failures are never fatal: they surface as per-field messages
//! in the state, and forward navigation simply stays blocked until the
//! active step's fields pass.

pub mod error;
pub mod theme;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use error::{AppResult, RegistryError, ThemeError, WizardError};
pub use theme::{ResolvedTheme, Theme, ThemePreference, ThemeStore};
pub use validation::{FieldError, FieldRule, FieldSpec, StepSchema, ValidationReport};
pub use wizard::{Navigation, StepDefinition, StepRegistry, WizardFlow, WizardState};
