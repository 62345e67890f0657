//! Structural problems found by a definition audit.

use crate::core::StateId;
use thiserror::Error;

/// A single structural problem in a workflow definition.
///
/// `rule` is the zero-based index of the offending transition rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionIssue {
    #[error("initial state '{0}' is not declared")]
    UnknownInitialState(StateId),

    #[error("state keyed '{key}' is named '{name}'")]
    NameMismatch { key: StateId, name: StateId },

    #[error("transition #{rule} has an empty source set")]
    EmptySources { rule: usize },

    #[error("transition #{rule} leaves undeclared state '{state}'")]
    UnknownSource { rule: usize, state: StateId },

    #[error("transition #{rule} targets undeclared state '{state}'")]
    UnknownTarget { rule: usize, state: StateId },
}
