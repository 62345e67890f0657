//! End-to-end validation of a payment lifecycle.

use flowgate::builder::TransitionBuilder;
use flowgate::core::{GuardOutcome, StateDefinition, TransitionContext, WorkflowDefinition};
use flowgate::{create_workflow, WorkflowEngine, WorkflowError};

#[derive(Clone, Debug)]
struct PaymentContext {
    amount: u64,
    paid_amount: Option<u64>,
    is_duplicate: bool,
}

impl PaymentContext {
    fn new(amount: u64) -> Self {
        Self {
            amount,
            paid_amount: None,
            is_duplicate: false,
        }
    }
}

fn payment_engine() -> WorkflowEngine<PaymentContext> {
    let definition = WorkflowDefinition::<PaymentContext>::builder("PaymentWorkflow")
        .initial("CREATED")
        .states(["CREATED", "PROCESSING"])
        .state(StateDefinition::new("SUCCESS").terminal())
        .state(StateDefinition::new("REJECTED").terminal())
        .state(StateDefinition::new("REFUNDED").terminal())
        .transition(
            TransitionBuilder::new()
                .from("CREATED")
                .to("PROCESSING")
                .label("Start Processing"),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from("PROCESSING")
                .to("SUCCESS")
                .label("Payment Approved")
                .when(|t: &TransitionContext<'_, PaymentContext>| {
                    GuardOutcome::ensure(!t.context.is_duplicate, "Duplicate payment detected")
                })
                .when(|t: &TransitionContext<'_, PaymentContext>| {
                    let short = t
                        .context
                        .paid_amount
                        .is_some_and(|paid| paid < t.context.amount);
                    GuardOutcome::ensure(!short, "Insufficient payment amount")
                }),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from("PROCESSING")
                .to("REJECTED")
                .label("Payment Declined"),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from("SUCCESS")
                .to("REFUNDED")
                .label("Refund Payment"),
        )
        .unwrap()
        .build()
        .unwrap();

    create_workflow(definition)
}

#[test]
fn starts_in_created() {
    assert_eq!(payment_engine().initial_state(), "CREATED");
}

#[test]
fn unguarded_move_is_allowed() {
    let engine = payment_engine();
    let result = engine.validate("CREATED", "PROCESSING", &PaymentContext::new(100));
    assert!(result.allowed);
    assert!(result.reason.is_none());
    assert!(result.errors.is_empty());
}

#[test]
fn insufficient_payment_is_rejected() {
    let engine = payment_engine();
    let context = PaymentContext {
        paid_amount: Some(50),
        ..PaymentContext::new(100)
    };

    let result = engine.validate("PROCESSING", "SUCCESS", &context);
    assert!(!result.allowed);
    assert_eq!(result.reason.as_deref(), Some("Guards failed"));
    assert_eq!(result.errors, vec!["Insufficient payment amount"]);
}

#[test]
fn duplicate_payment_is_rejected() {
    let engine = payment_engine();
    let context = PaymentContext {
        paid_amount: Some(100),
        is_duplicate: true,
        ..PaymentContext::new(100)
    };

    let result = engine.validate("PROCESSING", "SUCCESS", &context);
    assert_eq!(result.errors, vec!["Duplicate payment detected"]);
}

#[test]
fn every_failing_guard_is_reported() {
    let engine = payment_engine();
    let context = PaymentContext {
        paid_amount: Some(10),
        is_duplicate: true,
        ..PaymentContext::new(100)
    };

    let result = engine.validate("PROCESSING", "SUCCESS", &context);
    assert_eq!(
        result.errors,
        vec!["Duplicate payment detected", "Insufficient payment amount"]
    );
}

#[test]
fn full_payment_succeeds() {
    let engine = payment_engine();
    let context = PaymentContext {
        paid_amount: Some(100),
        ..PaymentContext::new(100)
    };
    assert!(engine.validate("PROCESSING", "SUCCESS", &context).allowed);
    assert!(engine
        .assert_transition("PROCESSING", "SUCCESS", &context)
        .is_ok());
}

#[test]
fn skipping_processing_is_not_defined() {
    let engine = payment_engine();
    let result = engine.validate("CREATED", "SUCCESS", &PaymentContext::new(100));
    assert!(!result.allowed);
    assert!(result
        .reason
        .as_deref()
        .is_some_and(|reason| reason.contains("No transition defined")));
    assert_eq!(result.errors, vec!["Transition not defined"]);
}

#[test]
fn unknown_target_state_is_reported() {
    let engine = payment_engine();
    let result = engine.validate("CREATED", "UNKNOWN", &PaymentContext::new(1));
    assert_eq!(
        result.reason.as_deref(),
        Some("Target state 'UNKNOWN' does not exist")
    );
}

#[test]
fn allowed_transitions_reflect_guards() {
    let engine = payment_engine();
    let duplicate = PaymentContext {
        is_duplicate: true,
        ..PaymentContext::new(100)
    };

    assert_eq!(
        engine.allowed_transitions("PROCESSING", &duplicate).unwrap(),
        vec!["REJECTED"]
    );
    assert_eq!(
        engine
            .allowed_transitions("PROCESSING", &PaymentContext::new(100))
            .unwrap(),
        vec!["SUCCESS", "REJECTED"]
    );
}

#[test]
fn terminal_state_still_allows_declared_refund() {
    let engine = payment_engine();
    assert!(engine
        .definition()
        .state("SUCCESS")
        .is_some_and(|state| state.is_terminal));
    assert_eq!(
        engine
            .allowed_transitions("SUCCESS", &PaymentContext::new(1))
            .unwrap(),
        vec!["REFUNDED"]
    );
    assert!(engine
        .allowed_transitions("REFUNDED", &PaymentContext::new(1))
        .unwrap()
        .is_empty());
}

#[test]
fn assert_transition_names_both_states() {
    let engine = payment_engine();
    let err = engine
        .assert_transition("REJECTED", "SUCCESS", &PaymentContext::new(1))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("'REJECTED'"));
    assert!(message.contains("'SUCCESS'"));
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
}

#[test]
fn try_transition_reports_guard_failures() {
    let engine = payment_engine();
    let context = PaymentContext {
        is_duplicate: true,
        ..PaymentContext::new(100)
    };

    let err = engine
        .try_transition("PROCESSING", "SUCCESS", &context)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Guard failed for transition 'PROCESSING' -> 'SUCCESS': Duplicate payment detected"
    );
}

#[test]
fn allowed_transitions_from_unknown_state_fails() {
    let engine = payment_engine();
    let err = engine
        .allowed_transitions("ARCHIVED", &PaymentContext::new(1))
        .unwrap_err();
    assert_eq!(err.to_string(), "State 'ARCHIVED' not defined in workflow");
}
