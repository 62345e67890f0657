//! Transition validation over a workflow definition.
//!
//! Matching is disjunctive: a move is allowed when ANY rule declared for the
//! `(from, to)` pair has ALL of its guards pass. Rules are tried in
//! declaration order and the first one that passes wins. Guard rejections
//! from every rule tried are accumulated, so a refusal explains every
//! alternative that was considered.

mod verdict;

pub use verdict::{Verdict, GUARDS_FALLBACK_MESSAGE};

use crate::core::{
    StateId, TransitionContext, TransitionRule, ValidationResult, WorkflowDefinition,
};
use crate::engine::WorkflowError;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

/// Answers whether moves are allowed under one workflow definition.
///
/// Holds only a shared reference to the definition, so it is cheap to clone
/// and safe to use from many threads at once.
///
/// # Example
///
/// ```rust
/// use flowgate::builder::TransitionBuilder;
/// use flowgate::core::{GuardOutcome, TransitionContext, WorkflowDefinition};
/// use flowgate::validator::TransitionValidator;
///
/// struct Order {
///     amount: u64,
/// }
///
/// let definition = WorkflowDefinition::<Order>::builder("Order")
///     .initial("PENDING")
///     .states(["PENDING", "PAID", "CANCELLED"])
///     .transition(
///         TransitionBuilder::new()
///             .from("PENDING")
///             .to("PAID")
///             .when(|t: &TransitionContext<'_, Order>| {
///                 GuardOutcome::ensure(t.context.amount > 0, "Amount must be positive")
///             }),
///     )
///     .unwrap()
///     .transition(TransitionBuilder::new().from("PENDING").to("CANCELLED"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let validator = TransitionValidator::new(definition);
///
/// let free = Order { amount: 0 };
/// let result = validator.validate_transition("PENDING", "PAID", &free);
/// assert!(!result.allowed);
/// assert_eq!(result.errors, vec!["Amount must be positive"]);
///
/// let allowed = validator.allowed_transitions("PENDING", &free).unwrap();
/// assert_eq!(allowed, vec!["CANCELLED"]);
/// ```
pub struct TransitionValidator<C> {
    definition: Arc<WorkflowDefinition<C>>,
}

impl<C> TransitionValidator<C> {
    pub fn new(definition: impl Into<Arc<WorkflowDefinition<C>>>) -> Self {
        Self {
            definition: definition.into(),
        }
    }

    pub fn definition(&self) -> &WorkflowDefinition<C> {
        &self.definition
    }

    /// Check a proposed move and report the outcome as a plain result.
    ///
    /// Never fails: unknown states, missing rules and guard rejections all
    /// come back as `allowed: false`.
    pub fn validate_transition(&self, from: &str, to: &str, context: &C) -> ValidationResult {
        self.evaluate(from, to, context).into()
    }

    /// Check a proposed move and report the typed outcome.
    ///
    /// Unknown states are reported before any rule matching happens.
    pub fn evaluate(&self, from: &str, to: &str, context: &C) -> Verdict {
        let definition = self.definition.as_ref();
        let workflow = definition.name.as_str();

        if !definition.contains_state(from) {
            debug!(workflow, from, to, "source state is not declared");
            return Verdict::UnknownSource(from.into());
        }
        if !definition.contains_state(to) {
            debug!(workflow, from, to, "target state is not declared");
            return Verdict::UnknownTarget(to.into());
        }

        let attempt = TransitionContext { from, to, context };
        let mut matched = 0usize;
        let mut messages = Vec::new();

        for (index, rule) in definition.rules_between(from, to).enumerate() {
            matched += 1;

            if rule.is_unguarded() {
                trace!(workflow, from, to, rule = index, "unguarded rule allows transition");
                return Verdict::Allowed;
            }

            match check_rule(rule, &attempt) {
                Validation::Success(_) => {
                    trace!(workflow, from, to, rule = index, "all guards passed");
                    return Verdict::Allowed;
                }
                Validation::Failure(errors) => {
                    trace!(
                        workflow,
                        from,
                        to,
                        rule = index,
                        failures = errors.len(),
                        "rule rejected by guards"
                    );
                    messages.extend(errors.iter().cloned());
                }
            }
        }

        if matched == 0 {
            debug!(workflow, from, to, "no transition rule matches");
            return Verdict::Undefined {
                from: from.into(),
                to: to.into(),
            };
        }

        debug!(
            workflow,
            from,
            to,
            rules = matched,
            "every matching rule was rejected by its guards"
        );
        Verdict::GuardsRejected(messages)
    }

    /// Fail-fast variant of [`validate_transition`](Self::validate_transition).
    ///
    /// Maps each kind of refusal onto the error taxonomy: unknown states to
    /// [`WorkflowError::StateNotFound`], missing rules to
    /// [`WorkflowError::InvalidTransition`] and guard rejections to
    /// [`WorkflowError::GuardFailed`].
    pub fn try_transition(&self, from: &str, to: &str, context: &C) -> Result<(), WorkflowError> {
        match self.evaluate(from, to, context) {
            Verdict::Allowed => Ok(()),
            Verdict::UnknownSource(state) | Verdict::UnknownTarget(state) => {
                Err(WorkflowError::StateNotFound(state))
            }
            undefined @ Verdict::Undefined { .. } => Err(WorkflowError::InvalidTransition {
                from: from.into(),
                to: to.into(),
                reason: ValidationResult::from(undefined).failure_message(),
            }),
            rejected @ Verdict::GuardsRejected(_) => Err(WorkflowError::GuardFailed {
                from: from.into(),
                to: to.into(),
                reasons: ValidationResult::from(rejected).errors,
            }),
        }
    }

    /// Destinations currently reachable from `from`, in declaration order.
    ///
    /// Each destination is probed once with a full validation, so it appears
    /// at most once even when several rules lead to it.
    pub fn allowed_transitions(
        &self,
        from: &str,
        context: &C,
    ) -> Result<Vec<StateId>, WorkflowError> {
        if !self.definition.contains_state(from) {
            return Err(WorkflowError::StateNotFound(from.into()));
        }

        let mut probed: HashSet<&str> = HashSet::new();
        let mut allowed = Vec::new();

        for rule in self.definition.rules_from(from) {
            let destination = rule.to.as_str();
            if !probed.insert(destination) {
                continue;
            }
            if self.evaluate(from, destination, context).is_allowed() {
                allowed.push(rule.to.clone());
            }
        }

        Ok(allowed)
    }
}

/// Evaluate every guard of one rule, accumulating all rejection messages.
fn check_rule<C>(
    rule: &TransitionRule<C>,
    attempt: &TransitionContext<'_, C>,
) -> Validation<(), NonEmptyVec<String>> {
    let checks: Vec<Validation<(), NonEmptyVec<String>>> = rule
        .guards
        .iter()
        .flat_map(|guard| guard.check(attempt).into_messages())
        .map(|message| Validation::fail(message))
        .collect();

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

impl<C> Clone for TransitionValidator<C> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
        }
    }
}

impl<C> fmt::Debug for TransitionValidator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionValidator")
            .field("workflow", &self.definition.name)
            .finish_non_exhaustive()
    }
}
