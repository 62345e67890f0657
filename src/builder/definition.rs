//! Builder for constructing workflow definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{StateDefinition, StateId, TransitionRule, WorkflowDefinition};
use std::collections::HashMap;

/// Builder for constructing workflow definitions with a fluent API.
pub struct DefinitionBuilder<C> {
    name: String,
    initial: Option<StateId>,
    states: HashMap<StateId, StateDefinition>,
    duplicate: Option<StateId>,
    transitions: Vec<TransitionRule<C>>,
}

impl<C> DefinitionBuilder<C> {
    /// Create a new builder for a workflow called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: None,
            states: HashMap::new(),
            duplicate: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring the same name twice fails the build.
    pub fn state(mut self, state: impl Into<StateDefinition>) -> Self {
        let state = state.into();
        if self.states.contains_key(state.name.as_str()) {
            self.duplicate.get_or_insert_with(|| state.name.clone());
        }
        self.states.insert(state.name.clone(), state);
        self
    }

    /// Declare several states at once.
    pub fn states<I, S>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateDefinition>,
    {
        states.into_iter().fold(self, |builder, state| builder.state(state))
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.transitions.push(rule);
        Ok(self)
    }

    /// Add a pre-built transition rule.
    pub fn add_transition(mut self, rule: TransitionRule<C>) -> Self {
        self.transitions.push(rule);
        self
    }

    /// Add multiple transition rules at once, keeping their order.
    pub fn transitions(mut self, rules: Vec<TransitionRule<C>>) -> Self {
        self.transitions.extend(rules);
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing or a state was
    /// declared twice.
    pub fn build(self) -> Result<WorkflowDefinition<C>, BuildError> {
        let initial_state = self.initial.ok_or(BuildError::MissingInitialState)?;

        if let Some(state) = self.duplicate {
            return Err(BuildError::DuplicateState(state));
        }

        Ok(WorkflowDefinition {
            name: self.name,
            initial_state,
            states: self.states,
            transitions: self.transitions,
        })
    }
}
