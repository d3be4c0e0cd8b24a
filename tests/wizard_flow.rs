// Integration tests for the checkout wizard
// These tests exercise the public API end to end: field entry, per-step
// validation, gated navigation, submission, and reset.

use checkout_wizard::{Navigation, WizardFlow};
use tracing_subscriber::EnvFilter;

// Opt into transition logs with RUST_LOG=checkout_wizard=debug
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn personal(flow: &mut WizardFlow) {
    flow.set_field_value("firstName", "Al");
    flow.set_field_value("lastName", "Li");
    flow.set_field_value("email", "a@b.com");
    flow.set_field_value("phone", "1234567890");
}

fn address(flow: &mut WizardFlow) {
    flow.set_field_value("street", "10 Downing Street");
    flow.set_field_value("city", "London");
    flow.set_field_value("state", "LN");
    flow.set_field_value("zipCode", "SW1A 2AA");
}

fn payment(flow: &mut WizardFlow) {
    flow.set_field_value("cardNumber", "4111111111111111");
    flow.set_field_value("expiryDate", "04/27");
    flow.set_field_value("cvv", "123");
    flow.set_field_value("cardholderName", "Al Li");
}

#[test]
fn valid_personal_step_advances() {
    init_logging();

    // Fill step 0 with valid values and advance
    let mut flow = WizardFlow::checkout();
    personal(&mut flow);

    assert_eq!(flow.advance(), Navigation::Moved(1));
    assert_eq!(flow.current_step_index(), 1);
    assert_eq!(
        flow.state().completed_steps().iter().copied().collect::<Vec<_>>(),
        vec![0]
    );
    assert!(flow.state().field_errors().is_empty());
}

#[test]
fn short_first_name_blocks_advance() {
    let mut flow = WizardFlow::checkout();
    flow.set_field_value("firstName", "A");
    flow.set_field_value("lastName", "Li");
    flow.set_field_value("email", "a@b.com");
    flow.set_field_value("phone", "1234567890");

    let result = flow.advance();
    assert!(matches!(result, Navigation::Blocked(_)));
    assert_eq!(flow.current_step_index(), 0);
    assert_eq!(
        flow.state().error_for("firstName"),
        Some("First name must be at least 2 characters")
    );
    assert!(flow.state().completed_steps().is_empty());
}

#[test]
fn completing_all_steps_submits() {
    init_logging();

    let mut flow = WizardFlow::checkout();
    personal(&mut flow);
    assert_eq!(flow.advance(), Navigation::Moved(1));
    address(&mut flow);
    assert_eq!(flow.advance(), Navigation::Moved(2));
    payment(&mut flow);

    assert_eq!(flow.advance(), Navigation::Submitted);
    assert!(flow.is_submitted());
    assert_eq!(flow.state().completed_count(), 3);
}

#[test]
fn jump_back_to_earlier_step_is_allowed() {
    let mut flow = WizardFlow::checkout();
    personal(&mut flow);
    flow.advance();
    address(&mut flow);
    flow.advance();

    assert_eq!(flow.jump_to(0), Navigation::Moved(0));
    assert_eq!(flow.current_step_index(), 0);
}

#[test]
fn jump_past_frontier_is_a_noop() {
    let mut flow = WizardFlow::checkout();
    let before = flow.state().clone();

    assert_eq!(flow.jump_to(2), Navigation::Ignored);
    assert_eq!(flow.state(), &before);
}

#[test]
fn validation_reports_exactly_the_failing_fields() {
    let mut flow = WizardFlow::checkout();
    flow.set_field_value("firstName", "Al");
    flow.set_field_value("lastName", "L");
    flow.set_field_value("email", "not-an-email");
    flow.set_field_value("phone", "1234567890");

    let report = flow.validate_step(0).unwrap();
    let failing: Vec<&str> = report.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(failing, vec!["lastName", "email"]);
}

#[test]
fn completed_steps_only_grow_until_reset() {
    let mut flow = WizardFlow::checkout();
    personal(&mut flow);
    flow.advance();
    assert!(flow.state().is_step_completed(0));

    // Go back, break a field, fail validation: membership survives
    flow.retreat();
    flow.set_field_value("firstName", "A");
    let report = flow.validate_step(0).unwrap();
    assert!(!report.is_valid());
    assert!(flow.state().is_step_completed(0));

    flow.reset();
    assert!(!flow.state().is_step_completed(0));
}

#[test]
fn failed_advance_never_moves_the_index() {
    let mut flow = WizardFlow::checkout();
    personal(&mut flow);
    flow.advance();

    // Address step is empty, so any number of advances stays put
    for _ in 0..3 {
        assert!(matches!(flow.advance(), Navigation::Blocked(_)));
        assert_eq!(flow.current_step_index(), 1);
    }
}

#[test]
fn reset_erases_any_mutation_history() {
    let mut flow = WizardFlow::checkout();
    let initial = flow.state().clone();

    personal(&mut flow);
    flow.advance();
    address(&mut flow);
    flow.advance();
    payment(&mut flow);
    flow.advance();
    assert!(flow.is_submitted());

    flow.reset();
    assert_eq!(flow.state(), &initial);
    assert!(!flow.is_submitted());

    // The flow is usable again after reset
    personal(&mut flow);
    assert_eq!(flow.advance(), Navigation::Moved(1));
}

#[test]
fn values_accumulate_across_navigation() {
    let mut flow = WizardFlow::checkout();
    personal(&mut flow);
    flow.advance();
    address(&mut flow);
    flow.retreat();

    // Step-0 values and step-1 values both retained
    assert_eq!(flow.state().value("email"), Some("a@b.com"));
    assert_eq!(flow.state().value("city"), Some("London"));
}

#[test]
fn submission_freezes_everything_but_reset() {
    let mut flow = WizardFlow::checkout();
    personal(&mut flow);
    flow.advance();
    address(&mut flow);
    flow.advance();
    payment(&mut flow);
    flow.advance();

    let frozen = flow.state().clone();
    flow.set_field_value("email", "evil@late.edit");
    assert_eq!(flow.advance(), Navigation::Ignored);
    assert_eq!(flow.retreat(), Navigation::Ignored);
    assert_eq!(flow.jump_to(1), Navigation::Ignored);
    assert_eq!(flow.state(), &frozen);
}
