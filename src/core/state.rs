//! State identifiers and state definitions.
//!
//! States are plain data: an identifier plus descriptive metadata. Nothing
//! here carries behavior, and the validator never reads anything beyond the
//! identifier.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Opaque label that uniquely keys a state within one workflow.
///
/// # Example
///
/// ```rust
/// use flowgate::core::StateId;
///
/// let pending = StateId::from("PENDING");
/// assert_eq!(pending.as_str(), "PENDING");
/// assert_eq!(pending, "PENDING");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<StateId, _>` be queried with a plain `&str`.
impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Description of a single workflow state.
///
/// `is_terminal` is descriptive only. A terminal state still accepts
/// outgoing transitions if the definition declares any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDefinition {
    pub name: StateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_terminal: bool,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, serde_json::Value>,
}

impl StateDefinition {
    /// Create a non-terminal state with no description or metadata.
    pub fn new(name: impl Into<StateId>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_terminal: false,
            meta: HashMap::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the state as terminal.
    pub fn terminal(mut self) -> Self {
        self.is_terminal = true;
        self
    }

    /// Attach an opaque metadata entry.
    pub fn with_meta(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for StateDefinition {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<StateId> for StateDefinition {
    fn from(name: StateId) -> Self {
        Self::new(name)
    }
}
