//! Core workflow model.
//!
//! Pure data describing a workflow:
//! - States keyed by [`StateId`]
//! - Guarded [`TransitionRule`]s, possibly several per `(from, to)` pair
//! - The [`ValidationResult`] answered for a proposed move
//!
//! Nothing in this module performs I/O or holds mutable state.

mod definition;
mod guard;
mod result;
mod rule;
mod state;

pub use definition::WorkflowDefinition;
pub use guard::{Guard, GuardOutcome, TransitionContext, GUARD_FALLBACK_MESSAGE};
pub use result::ValidationResult;
pub use rule::{Sources, TransitionRule};
pub use state::{StateDefinition, StateId};
