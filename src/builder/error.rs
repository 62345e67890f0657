//! Build errors for definition and transition builders.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building definitions and transition rules.
///
/// Builders only check that the required pieces are present. Whether rules
/// reference declared states is left to validation time or to an audit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{0}' declared more than once")]
    DuplicateState(StateId),

    #[error("Transition source state not specified. Call .from(state) or .from_any(states)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition source set is empty")]
    EmptySourceSet,
}
