//! Immutable workflow definitions.

use super::rule::TransitionRule;
use super::state::{StateDefinition, StateId};
use crate::builder::DefinitionBuilder;
use std::collections::HashMap;
use std::fmt;

/// Static description of a workflow: its states and transition rules.
///
/// Fields are public so a definition can be written out literally. Nothing
/// is checked at construction: unknown states referenced by rules only show
/// up as rejections at validation time. Use [`WorkflowDefinition::audit`]
/// for an eager structural check.
///
/// # Example
///
/// ```rust
/// use flowgate::core::{StateDefinition, TransitionRule, WorkflowDefinition};
/// use std::collections::HashMap;
///
/// let mut states = HashMap::new();
/// states.insert("OPEN".into(), StateDefinition::new("OPEN"));
/// states.insert("CLOSED".into(), StateDefinition::new("CLOSED").terminal());
///
/// let definition: WorkflowDefinition<()> = WorkflowDefinition {
///     name: "Ticket".to_string(),
///     initial_state: "OPEN".into(),
///     states,
///     transitions: vec![TransitionRule::new("OPEN", "CLOSED")],
/// };
///
/// assert!(definition.contains_state("CLOSED"));
/// assert_eq!(definition.rules_between("OPEN", "CLOSED").count(), 1);
/// ```
pub struct WorkflowDefinition<C> {
    pub name: String,
    pub initial_state: StateId,
    pub states: HashMap<StateId, StateDefinition>,
    pub transitions: Vec<TransitionRule<C>>,
}

impl<C> WorkflowDefinition<C> {
    /// Start a fluent builder for a definition called `name`.
    pub fn builder(name: impl Into<String>) -> DefinitionBuilder<C> {
        DefinitionBuilder::new(name)
    }

    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Rules leaving `from`, in declaration order.
    pub fn rules_from<'a>(
        &'a self,
        from: &'a str,
    ) -> impl Iterator<Item = &'a TransitionRule<C>> {
        self.transitions
            .iter()
            .filter(move |rule| rule.applies_from(from))
    }

    /// Rules for the `(from, to)` pair, in declaration order.
    pub fn rules_between<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
    ) -> impl Iterator<Item = &'a TransitionRule<C>> {
        self.rules_from(from).filter(move |rule| rule.targets(to))
    }

    /// Identifiers of states flagged terminal, sorted.
    pub fn terminal_states(&self) -> Vec<&StateId> {
        let mut terminal: Vec<&StateId> = self
            .states
            .iter()
            .filter(|(_, state)| state.is_terminal)
            .map(|(id, _)| id)
            .collect();
        terminal.sort();
        terminal
    }
}

impl<C> Clone for WorkflowDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            initial_state: self.initial_state.clone(),
            states: self.states.clone(),
            transitions: self.transitions.clone(),
        }
    }
}

impl<C> fmt::Debug for WorkflowDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowDefinition")
            .field("name", &self.name)
            .field("initial_state", &self.initial_state)
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .finish()
    }
}
