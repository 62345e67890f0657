//! Typed outcome of a single transition check.

use crate::core::{StateId, ValidationResult};

/// Recorded when every matched rule was rejected without any messages.
pub const GUARDS_FALLBACK_MESSAGE: &str = "Transition guards failed";

/// Why a transition was or was not allowed.
///
/// Converts into the plain [`ValidationResult`] shape handed back to callers;
/// kept separate so code can branch on the kind of rejection without
/// matching on message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A matched rule had all of its guards pass (or no guards at all).
    Allowed,
    /// `from` is not declared in the definition.
    UnknownSource(StateId),
    /// `to` is not declared in the definition.
    UnknownTarget(StateId),
    /// No rule covers the `(from, to)` pair.
    Undefined { from: StateId, to: StateId },
    /// Rules matched but each had at least one failing guard.
    GuardsRejected(Vec<String>),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl From<Verdict> for ValidationResult {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Allowed => ValidationResult::allow(),
            Verdict::UnknownSource(state) => ValidationResult::reject(
                format!("Source state '{state}' does not exist"),
                vec![format!("State '{state}' not found")],
            ),
            Verdict::UnknownTarget(state) => ValidationResult::reject(
                format!("Target state '{state}' does not exist"),
                vec![format!("State '{state}' not found")],
            ),
            Verdict::Undefined { from, to } => ValidationResult::reject(
                format!("No transition defined from '{from}' to '{to}'"),
                vec!["Transition not defined".to_string()],
            ),
            Verdict::GuardsRejected(messages) => {
                let errors = if messages.is_empty() {
                    vec![GUARDS_FALLBACK_MESSAGE.to_string()]
                } else {
                    messages
                };
                ValidationResult::reject("Guards failed", errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_maps_to_bare_result() {
        assert_eq!(
            ValidationResult::from(Verdict::Allowed),
            ValidationResult::allow()
        );
    }

    #[test]
    fn unknown_states_name_the_side() {
        let source = ValidationResult::from(Verdict::UnknownSource("NOPE".into()));
        assert_eq!(
            source.reason.as_deref(),
            Some("Source state 'NOPE' does not exist")
        );
        assert_eq!(source.errors, vec!["State 'NOPE' not found"]);

        let target = ValidationResult::from(Verdict::UnknownTarget("NOPE".into()));
        assert_eq!(
            target.reason.as_deref(),
            Some("Target state 'NOPE' does not exist")
        );
        assert_eq!(target.errors, vec!["State 'NOPE' not found"]);
    }

    #[test]
    fn undefined_names_both_states() {
        let result = ValidationResult::from(Verdict::Undefined {
            from: "A".into(),
            to: "B".into(),
        });
        assert!(!result.allowed);
        assert_eq!(
            result.reason.as_deref(),
            Some("No transition defined from 'A' to 'B'")
        );
        assert_eq!(result.errors, vec!["Transition not defined"]);
    }

    #[test]
    fn guard_rejection_keeps_messages_in_order() {
        let result = ValidationResult::from(Verdict::GuardsRejected(vec![
            "first".to_string(),
            "second".to_string(),
        ]));
        assert_eq!(result.reason.as_deref(), Some("Guards failed"));
        assert_eq!(result.errors, vec!["first", "second"]);
    }

    #[test]
    fn guard_rejection_without_messages_uses_fallback() {
        let result = ValidationResult::from(Verdict::GuardsRejected(Vec::new()));
        assert_eq!(result.errors, vec![GUARDS_FALLBACK_MESSAGE]);
    }
}
