//! Structural audit of workflow definitions.
//!
//! Definitions are validated lazily by default: a rule pointing at an
//! undeclared state only shows up when someone tries to use it. The audit
//! here is the opt-in eager check. It uses Stillwater's `Validation` to
//! report EVERY problem in one pass rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use flowgate::core::{StateDefinition, TransitionRule, WorkflowDefinition};
//! use flowgate::integrity::DefinitionIssue;
//! use std::collections::HashMap;
//! use stillwater::validation::Validation;
//!
//! let mut states = HashMap::new();
//! states.insert("DRAFT".into(), StateDefinition::new("DRAFT"));
//!
//! let definition: WorkflowDefinition<()> = WorkflowDefinition {
//!     name: "Document".to_string(),
//!     initial_state: "START".into(),
//!     states,
//!     transitions: vec![TransitionRule::new("DRAFT", "PUBLISHED")],
//! };
//!
//! match definition.audit() {
//!     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
//!     Validation::Success(_) => panic!("expected issues"),
//! }
//! ```

mod issues;

pub use issues::DefinitionIssue;

use crate::core::WorkflowDefinition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionIssue>>;

impl<C> WorkflowDefinition<C> {
    /// Check the definition's internal references, accumulating ALL issues.
    ///
    /// Issues are reported in a stable order: initial state, states (sorted
    /// by key), then rules in declaration order.
    pub fn audit(&self) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
        let mut checks: Vec<Check> = Vec::new();

        if !self.contains_state(self.initial_state.as_str()) {
            checks.push(Validation::fail(DefinitionIssue::UnknownInitialState(
                self.initial_state.clone(),
            )));
        }

        let mut keys: Vec<_> = self.states.iter().collect();
        keys.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (key, state) in keys {
            if key != &state.name {
                checks.push(Validation::fail(DefinitionIssue::NameMismatch {
                    key: key.clone(),
                    name: state.name.clone(),
                }));
            }
        }

        for (rule, transition) in self.transitions.iter().enumerate() {
            if transition.from.is_empty() {
                checks.push(Validation::fail(DefinitionIssue::EmptySources { rule }));
            }
            for source in transition.from.iter() {
                if !self.contains_state(source.as_str()) {
                    checks.push(Validation::fail(DefinitionIssue::UnknownSource {
                        rule,
                        state: source.clone(),
                    }));
                }
            }
            if !self.contains_state(transition.to.as_str()) {
                checks.push(Validation::fail(DefinitionIssue::UnknownTarget {
                    rule,
                    state: transition.to.clone(),
                }));
            }
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
