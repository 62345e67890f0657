//! Named guards that configuration can refer to.

use crate::core::{Guard, GuardOutcome, TransitionContext};
use std::collections::HashMap;
use std::fmt;

/// Lookup table from guard name to guard.
///
/// Configuration files cannot carry code, so rules refer to guards by name
/// and the application registers the implementations here.
pub struct GuardRegistry<C> {
    guards: HashMap<String, Guard<C>>,
}

impl<C> GuardRegistry<C> {
    pub fn new() -> Self {
        Self {
            guards: HashMap::new(),
        }
    }

    /// Register a prebuilt guard, replacing any guard with the same name.
    pub fn register(mut self, name: impl Into<String>, guard: Guard<C>) -> Self {
        self.guards.insert(name.into(), guard);
        self
    }

    /// Register a guard from a closure.
    pub fn with<F, R>(self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&TransitionContext<'_, C>) -> R + Send + Sync + 'static,
        R: Into<GuardOutcome>,
    {
        self.register(name, Guard::new(predicate))
    }

    pub fn get(&self, name: &str) -> Option<&Guard<C>> {
        self.guards.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.guards.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl<C> Default for GuardRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for GuardRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.guards.keys().collect();
        names.sort();
        f.debug_struct("GuardRegistry")
            .field("guards", &names)
            .finish()
    }
}
