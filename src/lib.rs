//! Flowgate: a declarative workflow validation engine
//!
//! Flowgate answers two questions about a statically declared workflow:
//! "may this entity move from state A to state B right now?" and "where can
//! it move from state A?". It is stateless: callers keep track of the
//! current state and pass it in on every call.
//!
//! # Core Concepts
//!
//! - **Definition**: Immutable states and transition rules
//! - **Guards**: Pure predicates over the proposed move and a caller context
//! - **Rules**: Several rules may share a `(from, to)` pair; ANY rule whose
//!   guards ALL pass allows the move
//! - **Engine**: Soft validation (`validate`) or fail-fast assertion
//!   (`assert_transition`) per call site
//!
//! # Example
//!
//! ```rust
//! use flowgate::builder::TransitionBuilder;
//! use flowgate::core::{GuardOutcome, StateDefinition, TransitionContext, WorkflowDefinition};
//! use flowgate::create_workflow;
//!
//! struct Order {
//!     amount: u64,
//! }
//!
//! let definition = WorkflowDefinition::<Order>::builder("SimpleOrderWorkflow")
//!     .initial("PENDING")
//!     .states(["PENDING", "PAID"])
//!     .state(StateDefinition::new("CANCELLED").terminal())
//!     .transition(
//!         TransitionBuilder::new()
//!             .from("PENDING")
//!             .to("PAID")
//!             .label("Pay Order")
//!             .when(|t: &TransitionContext<'_, Order>| {
//!                 GuardOutcome::ensure(t.context.amount > 0, "Amount must be positive")
//!             }),
//!     )
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::new()
//!             .from("PENDING")
//!             .to("CANCELLED")
//!             .label("Cancel Order"),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let engine = create_workflow(definition);
//!
//! assert!(engine.validate("PENDING", "PAID", &Order { amount: 50 }).allowed);
//!
//! let refused = engine.validate("PENDING", "PAID", &Order { amount: 0 });
//! assert_eq!(refused.reason.as_deref(), Some("Guards failed"));
//! assert_eq!(refused.errors, vec!["Amount must be positive"]);
//!
//! let options = engine.allowed_transitions("PENDING", &Order { amount: 0 }).unwrap();
//! assert_eq!(options, vec!["CANCELLED"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod integrity;
pub mod validator;

// Re-export commonly used types
pub use builder::{BuildError, DefinitionBuilder, TransitionBuilder};
pub use config::{ConfigError, GuardRegistry, WorkflowConfig};
pub use crate::core::{
    Guard, GuardOutcome, Sources, StateDefinition, StateId, TransitionContext, TransitionRule,
    ValidationResult, WorkflowDefinition,
};
pub use engine::{WorkflowEngine, WorkflowError};
pub use integrity::DefinitionIssue;
pub use validator::{TransitionValidator, Verdict};

use std::sync::Arc;

/// Wrap a definition in an engine without auditing it.
pub fn create_workflow<C>(
    definition: impl Into<Arc<WorkflowDefinition<C>>>,
) -> WorkflowEngine<C> {
    WorkflowEngine::new(definition)
}
