//! Public entry point for workflow validation.
//!
//! The engine is a stateless façade over a [`TransitionValidator`]: it never
//! tracks which state an entity is in. Callers supply the current state as
//! `from` on every call and choose per call site between soft validation
//! ([`WorkflowEngine::validate`]) and fail-fast assertion
//! ([`WorkflowEngine::assert_transition`]).

pub mod error;

pub use error::WorkflowError;

use crate::core::{StateId, ValidationResult, WorkflowDefinition};
use crate::validator::TransitionValidator;
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Validation engine bound to one workflow definition.
///
/// # Example
///
/// ```rust
/// use flowgate::builder::TransitionBuilder;
/// use flowgate::core::{StateDefinition, TransitionContext, WorkflowDefinition};
/// use flowgate::engine::{WorkflowEngine, WorkflowError};
///
/// struct Payment {
///     duplicate: bool,
/// }
///
/// let definition = WorkflowDefinition::<Payment>::builder("Payment")
///     .initial("PROCESSING")
///     .state("PROCESSING")
///     .state(StateDefinition::new("SUCCESS").terminal())
///     .transition(
///         TransitionBuilder::new()
///             .from("PROCESSING")
///             .to("SUCCESS")
///             .require(
///                 |t: &TransitionContext<'_, Payment>| !t.context.duplicate,
///                 "Duplicate payment detected",
///             ),
///     )
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let engine = WorkflowEngine::new(definition);
/// assert_eq!(engine.initial_state(), "PROCESSING");
///
/// let err = engine
///     .assert_transition("PROCESSING", "SUCCESS", &Payment { duplicate: true })
///     .unwrap_err();
/// assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
/// ```
pub struct WorkflowEngine<C> {
    definition: Arc<WorkflowDefinition<C>>,
    validator: TransitionValidator<C>,
}

impl<C> WorkflowEngine<C> {
    /// Wrap a definition without checking it.
    ///
    /// Malformed definitions surface lazily as "does not exist" rejections.
    pub fn new(definition: impl Into<Arc<WorkflowDefinition<C>>>) -> Self {
        let definition = definition.into();
        let validator = TransitionValidator::new(Arc::clone(&definition));
        Self {
            definition,
            validator,
        }
    }

    /// Wrap a definition after auditing it.
    ///
    /// Fails with [`WorkflowError::InvalidDefinition`] listing every
    /// structural problem found, not just the first.
    pub fn try_new(
        definition: impl Into<Arc<WorkflowDefinition<C>>>,
    ) -> Result<Self, WorkflowError> {
        let definition = definition.into();
        match definition.audit() {
            Validation::Success(_) => Ok(Self::new(definition)),
            Validation::Failure(issues) => Err(WorkflowError::InvalidDefinition {
                name: definition.name.clone(),
                issues: issues.iter().cloned().collect(),
            }),
        }
    }

    /// The declared initial state, returned verbatim.
    pub fn initial_state(&self) -> &StateId {
        &self.definition.initial_state
    }

    pub fn validate(&self, from: &str, to: &str, context: &C) -> ValidationResult {
        self.validator.validate_transition(from, to, context)
    }

    /// Validate and fail with [`WorkflowError::InvalidTransition`] when the
    /// move is refused.
    pub fn assert_transition(
        &self,
        from: &str,
        to: &str,
        context: &C,
    ) -> Result<(), WorkflowError> {
        let result = self.validate(from, to, context);
        if result.allowed {
            return Ok(());
        }
        Err(WorkflowError::InvalidTransition {
            from: from.into(),
            to: to.into(),
            reason: result.failure_message(),
        })
    }

    /// Like [`assert_transition`](Self::assert_transition), but reports
    /// guard rejections as [`WorkflowError::GuardFailed`] and unknown states
    /// as [`WorkflowError::StateNotFound`].
    pub fn try_transition(&self, from: &str, to: &str, context: &C) -> Result<(), WorkflowError> {
        self.validator.try_transition(from, to, context)
    }

    pub fn allowed_transitions(
        &self,
        from: &str,
        context: &C,
    ) -> Result<Vec<StateId>, WorkflowError> {
        self.validator.allowed_transitions(from, context)
    }

    pub fn definition(&self) -> &WorkflowDefinition<C> {
        &self.definition
    }

    pub fn validator(&self) -> &TransitionValidator<C> {
        &self.validator
    }
}

impl<C> Clone for WorkflowEngine<C> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            validator: self.validator.clone(),
        }
    }
}

impl<C> fmt::Debug for WorkflowEngine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowEngine")
            .field("workflow", &self.definition.name)
            .field("initial_state", &self.definition.initial_state)
            .finish_non_exhaustive()
    }
}
