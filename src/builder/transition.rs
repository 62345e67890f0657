//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Guard, GuardOutcome, Sources, StateId, TransitionContext, TransitionRule};

/// Builder for constructing transition rules with a fluent API.
///
/// Guards added with [`when`](Self::when), [`require`](Self::require) or
/// [`guard`](Self::guard) are evaluated in the order they were added.
pub struct TransitionBuilder<C> {
    from: Option<Sources>,
    to: Option<StateId>,
    guards: Vec<Guard<C>>,
    label: Option<String>,
}

impl<C> TransitionBuilder<C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guards: Vec::new(),
            label: None,
        }
    }

    /// Set a single source state.
    pub fn from(mut self, state: impl Into<StateId>) -> Self {
        self.from = Some(Sources::One(state.into()));
        self
    }

    /// Set several source states sharing this destination and guards.
    pub fn from_any<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.from = Some(Sources::Many(states.into_iter().map(Into::into).collect()));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateId>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a prebuilt guard.
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a guard using a closure returning `bool`, `GuardOutcome` or
    /// `ValidationResult`.
    pub fn when<F, R>(mut self, predicate: F) -> Self
    where
        F: Fn(&TransitionContext<'_, C>) -> R + Send + Sync + 'static,
        R: Into<GuardOutcome>,
    {
        self.guards.push(Guard::new(predicate));
        self
    }

    /// Add a boolean guard that rejects with `message`.
    pub fn require<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&TransitionContext<'_, C>) -> bool + Send + Sync + 'static,
    {
        self.guards.push(Guard::require(predicate, message));
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the transition rule.
    pub fn build(self) -> Result<TransitionRule<C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        if from.is_empty() {
            return Err(BuildError::EmptySourceSet);
        }

        Ok(TransitionRule {
            from,
            to,
            guards: self.guards,
            label: self.label,
        })
    }
}

impl<C> Default for TransitionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
