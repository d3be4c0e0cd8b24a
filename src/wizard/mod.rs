/// Multi-step form wizard
///
/// Step-gated form engine: each step owns a disjoint field subset with its
/// own validation schema, and the index only moves past a step once that
/// step has validated.
///
/// ## Architecture
///
/// ```text
/// WizardFlow
///   ├── StepRegistry (ordered step definitions + schemas)
///   ├── WizardState (index, completed set, values, errors, submitted)
///   └── Operations (set_field_value, validate_step, advance,
///                   retreat, jump_to, reset)
/// ```
///
/// ## Usage
///
/// ```rust
/// use checkout_wizard::wizard::{Navigation, WizardFlow};
///
/// let mut flow = WizardFlow::checkout();
///
/// flow.set_field_value("firstName", "Al");
/// flow.set_field_value("lastName", "Li");
/// flow.set_field_value("email", "a@b.com");
/// flow.set_field_value("phone", "1234567890");
///
/// match flow.advance() {
///     Navigation::Moved(index) => assert_eq!(index, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
///
/// The presentation layer reads [`WizardState`] to render inputs, error
/// text, and the step indicator, and calls the flow operations in response
/// to user events. Validation failures never escape as errors; they surface
/// as data in the state's field-error map.

pub mod flow;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use flow::{Navigation, WizardFlow};
pub use state::WizardState;
pub use steps::{StepDefinition, StepRegistry};
