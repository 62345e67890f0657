//! Order Workflow
//!
//! A three-state order lifecycle built with the fluent builder.
//!
//! Key concepts:
//! - Guarded and unguarded transitions from the same state
//! - Soft validation versus fail-fast assertion
//! - Listing the moves available to an order
//!
//! Run with: RUST_LOG=flowgate=debug cargo run --example order_workflow

use flowgate::builder::TransitionBuilder;
use flowgate::core::{GuardOutcome, StateDefinition, TransitionContext, WorkflowDefinition};
use flowgate::create_workflow;
use tracing_subscriber::EnvFilter;

struct Order {
    amount: f64,
}

fn positive_amount(t: &TransitionContext<'_, Order>) -> GuardOutcome {
    GuardOutcome::ensure(t.context.amount > 0.0, "Amount must be positive")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Simple Order Workflow ===\n");

    let definition = WorkflowDefinition::<Order>::builder("SimpleOrderWorkflow")
        .initial("PENDING")
        .state(StateDefinition::new("PENDING").describe("Awaiting payment"))
        .state(StateDefinition::new("PAID").terminal())
        .state(StateDefinition::new("CANCELLED").terminal())
        .transition(
            TransitionBuilder::new()
                .from("PENDING")
                .to("PAID")
                .when(positive_amount)
                .label("Pay Order"),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from("PENDING")
                .to("CANCELLED")
                .label("Cancel Order"),
        )
        .unwrap()
        .build()
        .unwrap();

    let engine = create_workflow(definition);
    println!("Initial state: {}\n", engine.initial_state());

    for amount in [100.0, 0.0] {
        let order = Order { amount };
        println!("Order with amount {:.2}:", order.amount);

        let result = engine.validate("PENDING", "PAID", &order);
        println!("  PENDING -> PAID allowed: {}", result.allowed);
        if let Some(reason) = &result.reason {
            println!("  Reason: {}", reason);
        }
        for error in &result.errors {
            println!("  Error: {}", error);
        }

        let allowed = engine.allowed_transitions("PENDING", &order).unwrap();
        let names: Vec<&str> = allowed.iter().map(|state| state.as_str()).collect();
        println!("  Available from PENDING: [{}]\n", names.join(", "));
    }

    println!("Asserting PAID -> PENDING:");
    match engine.assert_transition("PAID", "PENDING", &Order { amount: 10.0 }) {
        Ok(()) => println!("  Allowed"),
        Err(e) => println!("  Error: {}", e),
    }

    println!("\nKey Takeaways:");
    println!("- Guards are pure functions of the transition and its context");
    println!("- validate() reports, assert_transition() fails fast");
    println!("- Terminal states are descriptive and never block declared moves");
}
