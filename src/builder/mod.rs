//! Builder API for ergonomic workflow construction.
//!
//! This module provides fluent builders for definitions and transition rules,
//! plus shorthand constructors for the two most common rule shapes.

pub mod definition;
pub mod error;
pub mod transition;

pub use definition::DefinitionBuilder;
pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::{Guard, GuardOutcome, Sources, StateId, TransitionContext, TransitionRule};

/// Create an unguarded rule: the move is always allowed once matched.
///
/// # Example
///
/// ```
/// use flowgate::builder::simple_transition;
///
/// let rule = simple_transition::<()>("PENDING", "CANCELLED");
/// assert!(rule.is_unguarded());
/// ```
pub fn simple_transition<C>(
    from: impl Into<StateId>,
    to: impl Into<StateId>,
) -> TransitionRule<C> {
    TransitionRule::new(Sources::One(from.into()), to)
}

/// Create a rule with a single guard.
///
/// # Example
///
/// ```
/// use flowgate::builder::guarded_transition;
/// use flowgate::core::TransitionContext;
///
/// let rule = guarded_transition("PENDING", "PAID", |t: &TransitionContext<'_, u64>| {
///     *t.context > 0
/// });
/// assert_eq!(rule.guards.len(), 1);
/// ```
pub fn guarded_transition<C, F, R>(
    from: impl Into<StateId>,
    to: impl Into<StateId>,
    guard: F,
) -> TransitionRule<C>
where
    F: Fn(&TransitionContext<'_, C>) -> R + Send + Sync + 'static,
    R: Into<GuardOutcome>,
{
    TransitionRule::new(Sources::One(from.into()), to).with_guard(Guard::new(guard))
}
