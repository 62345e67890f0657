//! Declared transition rules.

use super::guard::Guard;
use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source side of a rule: one state, or a set of states sharing the same
/// destination and guards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sources {
    One(StateId),
    Many(Vec<StateId>),
}

impl Sources {
    pub fn matches(&self, state: &str) -> bool {
        match self {
            Self::One(id) => id == state,
            Self::Many(ids) => ids.iter().any(|id| id == state),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateId> {
        let ids: &[StateId] = match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        };
        ids.iter()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(ids) if ids.is_empty())
    }
}

impl From<&str> for Sources {
    fn from(id: &str) -> Self {
        Self::One(id.into())
    }
}

impl From<StateId> for Sources {
    fn from(id: StateId) -> Self {
        Self::One(id)
    }
}

impl From<Vec<StateId>> for Sources {
    fn from(ids: Vec<StateId>) -> Self {
        Self::Many(ids)
    }
}

/// An allowed move from one or more source states to a destination.
///
/// Guards form a conjunction: all of them must pass for this rule to allow
/// the move. Several rules may share the same `(from, to)` pair; each one is
/// an independently sufficient alternative.
pub struct TransitionRule<C> {
    pub from: Sources,
    pub to: StateId,
    pub guards: Vec<Guard<C>>,
    pub label: Option<String>,
}

impl<C> TransitionRule<C> {
    /// Unguarded rule.
    pub fn new(from: impl Into<Sources>, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            guards: Vec::new(),
            label: None,
        }
    }

    pub fn with_guard(mut self, guard: Guard<C>) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn applies_from(&self, state: &str) -> bool {
        self.from.matches(state)
    }

    pub fn targets(&self, state: &str) -> bool {
        self.to == state
    }

    pub fn is_unguarded(&self) -> bool {
        self.guards.is_empty()
    }
}

impl<C> Clone for TransitionRule<C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guards: self.guards.clone(),
            label: self.label.clone(),
        }
    }
}

impl<C> fmt::Debug for TransitionRule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRule")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guards", &self.guards.len())
            .field("label", &self.label)
            .finish()
    }
}
