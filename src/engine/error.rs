//! Workflow error taxonomy.

use crate::core::StateId;
use crate::integrity::DefinitionIssue;
use thiserror::Error;

/// Errors raised by the fail-fast entry points of the engine.
///
/// Plain validation never produces these: a refused move is reported as a
/// `ValidationResult` with `allowed: false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("State '{0}' not defined in workflow")]
    StateNotFound(StateId),

    #[error("Invalid transition from '{from}' to '{to}': {reason}")]
    InvalidTransition {
        from: StateId,
        to: StateId,
        reason: String,
    },

    #[error("Guard failed for transition '{from}' -> '{to}': {}", .reasons.join(", "))]
    GuardFailed {
        from: StateId,
        to: StateId,
        reasons: Vec<String>,
    },

    #[error("Workflow '{name}' definition is invalid: {}", join_issues(.issues))]
    InvalidDefinition {
        name: String,
        issues: Vec<DefinitionIssue>,
    },
}

fn join_issues(issues: &[DefinitionIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_not_found_names_the_state() {
        let err = WorkflowError::StateNotFound("GHOST".into());
        assert_eq!(err.to_string(), "State 'GHOST' not defined in workflow");
    }

    #[test]
    fn invalid_transition_includes_both_states() {
        let err = WorkflowError::InvalidTransition {
            from: "PENDING".into(),
            to: "PAID".into(),
            reason: "Guards failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition from 'PENDING' to 'PAID': Guards failed"
        );
    }

    #[test]
    fn guard_failed_joins_reasons() {
        let err = WorkflowError::GuardFailed {
            from: "PROCESSING".into(),
            to: "SUCCESS".into(),
            reasons: vec!["Duplicate payment detected".into(), "Insufficient".into()],
        };
        assert_eq!(
            err.to_string(),
            "Guard failed for transition 'PROCESSING' -> 'SUCCESS': \
             Duplicate payment detected, Insufficient"
        );
    }

    #[test]
    fn invalid_definition_lists_issues() {
        let err = WorkflowError::InvalidDefinition {
            name: "Order".to_string(),
            issues: vec![
                DefinitionIssue::UnknownInitialState("START".into()),
                DefinitionIssue::UnknownTarget {
                    rule: 0,
                    state: "DONE".into(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Workflow 'Order' definition is invalid: initial state 'START' is not declared; \
             transition #0 targets undeclared state 'DONE'"
        );
    }
}
