//! Configuration loading errors.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when turning configuration into a definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON or has the wrong shape
    #[error("Failed to parse workflow configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rule names a guard that is not registered
    #[error("Transition #{rule} references unknown guard '{guard}'")]
    UnknownGuard { guard: String, rule: usize },

    /// The same state appears twice in the `states` list
    #[error("State '{0}' declared more than once")]
    DuplicateState(StateId),
}
