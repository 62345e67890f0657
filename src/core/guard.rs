//! Guard predicates for controlling transitions.
//!
//! A guard inspects a proposed move together with the caller's context and
//! either lets it pass or rejects it with optional diagnostics. Guards must
//! be pure: the validator may call them any number of times, from any thread.

use super::result::ValidationResult;
use std::fmt;
use std::sync::Arc;

/// Message recorded for a rejection that carries no diagnostics of its own.
pub const GUARD_FALLBACK_MESSAGE: &str = "Guard condition failed";

/// The proposed move handed to every guard.
///
/// `context` is the caller's value, passed through untouched.
#[derive(Debug)]
pub struct TransitionContext<'a, C> {
    pub from: &'a str,
    pub to: &'a str,
    pub context: &'a C,
}

impl<C> Clone for TransitionContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for TransitionContext<'_, C> {}

/// Verdict of a single guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Pass,
    Reject {
        reason: Option<String>,
        errors: Vec<String>,
    },
}

impl GuardOutcome {
    /// Rejection carrying a single human readable reason.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: Some(reason.into()),
            errors: Vec::new(),
        }
    }

    /// Rejection carrying an ordered list of distinct failure messages.
    pub fn reject_with(errors: Vec<String>) -> Self {
        Self::Reject {
            reason: None,
            errors,
        }
    }

    /// Pass when `condition` holds, otherwise reject with `reason`.
    pub fn ensure(condition: bool, reason: impl Into<String>) -> Self {
        if condition {
            Self::Pass
        } else {
            Self::reject(reason)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Messages this outcome contributes to a rejected validation.
    ///
    /// `errors` win when non-empty, then `reason`, then the generic fallback.
    /// A passing outcome contributes nothing.
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Pass => Vec::new(),
            Self::Reject { errors, .. } if !errors.is_empty() => errors,
            Self::Reject {
                reason: Some(reason),
                ..
            } => vec![reason],
            Self::Reject { .. } => vec![GUARD_FALLBACK_MESSAGE.to_string()],
        }
    }
}

impl From<bool> for GuardOutcome {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Reject {
                reason: None,
                errors: Vec::new(),
            }
        }
    }
}

impl From<ValidationResult> for GuardOutcome {
    fn from(result: ValidationResult) -> Self {
        if result.allowed {
            Self::Pass
        } else {
            Self::Reject {
                reason: result.reason,
                errors: result.errors,
            }
        }
    }
}

type GuardFn<C> = dyn Fn(&TransitionContext<'_, C>) -> GuardOutcome + Send + Sync;

/// Pure predicate attached to a transition rule.
///
/// The closure may return `bool`, a [`GuardOutcome`], or a
/// [`ValidationResult`].
///
/// # Example
///
/// ```rust
/// use flowgate::core::{Guard, GuardOutcome, TransitionContext};
///
/// struct Order {
///     amount: u64,
/// }
///
/// let positive = Guard::new(|t: &TransitionContext<'_, Order>| {
///     GuardOutcome::ensure(t.context.amount > 0, "Amount must be positive")
/// });
///
/// let order = Order { amount: 0 };
/// let outcome = positive.check(&TransitionContext {
///     from: "PENDING",
///     to: "PAID",
///     context: &order,
/// });
/// assert_eq!(outcome, GuardOutcome::reject("Amount must be positive"));
/// ```
pub struct Guard<C> {
    predicate: Arc<GuardFn<C>>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure function.
    pub fn new<F, R>(predicate: F) -> Self
    where
        F: Fn(&TransitionContext<'_, C>) -> R + Send + Sync + 'static,
        R: Into<GuardOutcome>,
    {
        Guard {
            predicate: Arc::new(move |t: &TransitionContext<'_, C>| predicate(t).into()),
        }
    }

    /// Create a guard from a boolean predicate that rejects with `message`.
    pub fn require<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&TransitionContext<'_, C>) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Guard {
            predicate: Arc::new(move |t: &TransitionContext<'_, C>| {
                GuardOutcome::ensure(predicate(t), message.clone())
            }),
        }
    }

    /// Evaluate the guard against a proposed move.
    pub fn check(&self, transition: &TransitionContext<'_, C>) -> GuardOutcome {
        (self.predicate)(transition)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
