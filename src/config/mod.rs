//! Workflow definitions loaded from configuration.
//!
//! Definitions usually come from static configuration. The JSON shape
//! mirrors [`WorkflowDefinition`], except that guards are referenced by name
//! and resolved against a [`GuardRegistry`]:
//!
//! ```json
//! {
//!   "name": "SimpleOrderWorkflow",
//!   "initialState": "PENDING",
//!   "states": [
//!     { "name": "PENDING" },
//!     { "name": "PAID" },
//!     { "name": "CANCELLED", "isTerminal": true }
//!   ],
//!   "transitions": [
//!     { "from": "PENDING", "to": "PAID", "guards": ["positiveAmount"], "label": "Pay Order" },
//!     { "from": ["PENDING", "PAID"], "to": "CANCELLED" }
//!   ]
//! }
//! ```

mod error;
mod registry;

pub use error::ConfigError;
pub use registry::GuardRegistry;

use crate::core::{Sources, StateDefinition, StateId, TransitionRule, WorkflowDefinition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable description of a workflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfig {
    pub name: String,
    pub initial_state: StateId,
    pub states: Vec<StateDefinition>,
    #[serde(default)]
    pub transitions: Vec<TransitionConfig>,
}

/// Serializable transition rule with guards referenced by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub from: Sources,
    pub to: StateId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guards: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl WorkflowConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Resolve guard names and produce a definition.
    ///
    /// State references are not checked here; run
    /// [`WorkflowDefinition::audit`] for that.
    pub fn into_definition<C>(
        self,
        registry: &GuardRegistry<C>,
    ) -> Result<WorkflowDefinition<C>, ConfigError> {
        let mut states: HashMap<StateId, StateDefinition> =
            HashMap::with_capacity(self.states.len());
        for state in self.states {
            if states.contains_key(state.name.as_str()) {
                return Err(ConfigError::DuplicateState(state.name));
            }
            states.insert(state.name.clone(), state);
        }

        let transitions = self
            .transitions
            .into_iter()
            .enumerate()
            .map(|(rule, transition)| transition.resolve(rule, registry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkflowDefinition {
            name: self.name,
            initial_state: self.initial_state,
            states,
            transitions,
        })
    }
}

impl TransitionConfig {
    fn resolve<C>(
        self,
        rule: usize,
        registry: &GuardRegistry<C>,
    ) -> Result<TransitionRule<C>, ConfigError> {
        let guards = self
            .guards
            .into_iter()
            .map(|name| match registry.get(&name) {
                Some(guard) => Ok(guard.clone()),
                None => Err(ConfigError::UnknownGuard { guard: name, rule }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TransitionRule {
            from: self.from,
            to: self.to,
            guards,
            label: self.label,
        })
    }
}

/// Parse JSON configuration and resolve it into a definition in one step.
pub fn load_definition<C>(
    text: &str,
    registry: &GuardRegistry<C>,
) -> Result<WorkflowDefinition<C>, ConfigError> {
    WorkflowConfig::from_json(text)?.into_definition(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuardOutcome, TransitionContext};
    use crate::engine::WorkflowEngine;

    struct Order {
        amount: i64,
    }

    const ORDER_WORKFLOW: &str = r#"{
        "name": "SimpleOrderWorkflow",
        "initialState": "PENDING",
        "states": [
            { "name": "PENDING" },
            { "name": "PAID", "description": "Payment captured" },
            { "name": "CANCELLED", "isTerminal": true }
        ],
        "transitions": [
            { "from": "PENDING", "to": "PAID", "guards": ["positiveAmount"], "label": "Pay Order" },
            { "from": ["PENDING", "PAID"], "to": "CANCELLED", "label": "Cancel Order" }
        ]
    }"#;

    fn registry() -> GuardRegistry<Order> {
        GuardRegistry::new().with("positiveAmount", |t: &TransitionContext<'_, Order>| {
            GuardOutcome::ensure(t.context.amount > 0, "Amount must be positive")
        })
    }

    #[test]
    fn parses_camel_case_configuration() {
        let config = WorkflowConfig::from_json(ORDER_WORKFLOW).unwrap();
        assert_eq!(config.name, "SimpleOrderWorkflow");
        assert_eq!(config.initial_state, "PENDING");
        assert_eq!(config.states.len(), 3);
        assert!(config.states[2].is_terminal);
        assert_eq!(config.transitions[0].guards, vec!["positiveAmount"]);
        assert_eq!(
            config.transitions[1].from,
            Sources::Many(vec!["PENDING".into(), "PAID".into()])
        );
    }

    #[test]
    fn loaded_definition_validates_like_a_built_one() {
        let definition = load_definition(ORDER_WORKFLOW, &registry()).unwrap();
        let engine = WorkflowEngine::new(definition);

        assert!(engine.validate("PENDING", "PAID", &Order { amount: 50 }).allowed);
        let rejected = engine.validate("PENDING", "PAID", &Order { amount: 0 });
        assert_eq!(rejected.errors, vec!["Amount must be positive"]);
        assert_eq!(
            engine
                .allowed_transitions("PAID", &Order { amount: 0 })
                .unwrap(),
            vec!["CANCELLED"]
        );
        assert_eq!(
            engine.definition().transitions[0].label.as_deref(),
            Some("Pay Order")
        );
    }

    #[test]
    fn unknown_guard_is_reported_with_rule_index() {
        let text = r#"{
            "name": "W",
            "initialState": "A",
            "states": [{ "name": "A" }, { "name": "B" }],
            "transitions": [
                { "from": "A", "to": "B" },
                { "from": "B", "to": "A", "guards": ["missing"] }
            ]
        }"#;

        let err = load_definition(text, &registry()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownGuard { ref guard, rule: 1 } if guard == "missing"
        ));
    }

    #[test]
    fn duplicate_states_are_rejected() {
        let text = r#"{
            "name": "W",
            "initialState": "A",
            "states": [{ "name": "A" }, { "name": "A" }]
        }"#;

        let err = load_definition(text, &registry()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateState(ref s) if s == "A"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WorkflowConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse workflow configuration"));
    }

    #[test]
    fn missing_transitions_default_to_empty() {
        let config = WorkflowConfig::from_value(serde_json::json!({
            "name": "W",
            "initialState": "A",
            "states": [{ "name": "A" }],
        }))
        .unwrap();
        assert!(config.transitions.is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = WorkflowConfig::from_json(ORDER_WORKFLOW).unwrap();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(WorkflowConfig::from_json(&text).unwrap(), config);
    }
}
