//! Payment Workflow
//!
//! A payment lifecycle loaded from JSON, with guards resolved by name.
//!
//! Key concepts:
//! - Declarative workflow configuration
//! - Named guards registered in code
//! - Definition auditing before use
//! - Accumulated guard failures
//!
//! Run with: RUST_LOG=flowgate=trace cargo run --example payment_workflow

use flowgate::config::{load_definition, GuardRegistry};
use flowgate::core::{GuardOutcome, TransitionContext};
use flowgate::engine::WorkflowEngine;
use tracing_subscriber::EnvFilter;

const PAYMENT_WORKFLOW: &str = r#"{
    "name": "PaymentWorkflow",
    "initialState": "CREATED",
    "states": [
        { "name": "CREATED" },
        { "name": "PROCESSING" },
        { "name": "SUCCESS", "isTerminal": true },
        { "name": "REJECTED", "isTerminal": true },
        { "name": "REFUNDED", "isTerminal": true }
    ],
    "transitions": [
        { "from": "CREATED", "to": "PROCESSING", "label": "Start Processing" },
        {
            "from": "PROCESSING",
            "to": "SUCCESS",
            "guards": ["notDuplicate", "fullyPaid"],
            "label": "Payment Approved"
        },
        { "from": "PROCESSING", "to": "REJECTED", "label": "Payment Declined" },
        { "from": "SUCCESS", "to": "REFUNDED", "label": "Refund Payment" }
    ]
}"#;

struct Payment {
    amount: u64,
    paid_amount: u64,
    is_duplicate: bool,
}

fn registry() -> GuardRegistry<Payment> {
    GuardRegistry::new()
        .with("notDuplicate", |t: &TransitionContext<'_, Payment>| {
            GuardOutcome::ensure(!t.context.is_duplicate, "Duplicate payment detected")
        })
        .with("fullyPaid", |t: &TransitionContext<'_, Payment>| {
            GuardOutcome::ensure(
                t.context.paid_amount >= t.context.amount,
                "Insufficient payment amount",
            )
        })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Payment Workflow ===\n");

    let definition = match load_definition(PAYMENT_WORKFLOW, &registry()) {
        Ok(definition) => definition,
        Err(e) => {
            println!("Failed to load workflow: {}", e);
            return;
        }
    };

    let engine = match WorkflowEngine::try_new(definition) {
        Ok(engine) => engine,
        Err(e) => {
            println!("Rejected definition: {}", e);
            return;
        }
    };

    let terminal: Vec<&str> = engine
        .definition()
        .terminal_states()
        .into_iter()
        .map(|state| state.as_str())
        .collect();
    println!("Loaded '{}'", engine.definition().name);
    println!("Terminal states: {}\n", terminal.join(", "));

    let attempts = [
        (
            "full payment",
            Payment {
                amount: 100,
                paid_amount: 100,
                is_duplicate: false,
            },
        ),
        (
            "partial payment",
            Payment {
                amount: 100,
                paid_amount: 40,
                is_duplicate: false,
            },
        ),
        (
            "duplicate partial payment",
            Payment {
                amount: 100,
                paid_amount: 40,
                is_duplicate: true,
            },
        ),
    ];

    for (label, payment) in &attempts {
        println!("Attempt: {}", label);
        match engine.try_transition("PROCESSING", "SUCCESS", payment) {
            Ok(()) => println!("  PROCESSING -> SUCCESS accepted"),
            Err(e) => println!("  {}", e),
        }
        println!();
    }

    println!("Refund after success:");
    let refund = engine.validate("SUCCESS", "REFUNDED", &attempts[0].1);
    println!("  allowed: {}\n", refund.allowed);

    println!("Key Takeaways:");
    println!("- Workflows can live in configuration, guards stay in code");
    println!("- try_new() audits the definition before any validation");
    println!("- Every failing guard of a rule is reported, not just the first");
}
