//! Outcome of a single transition validation.

use serde::{Deserialize, Serialize};

/// Answer to "may this transition happen now?".
///
/// `reason` and `errors` are only populated on rejection. An allowed result
/// carries neither.
///
/// # Example
///
/// ```rust
/// use flowgate::core::ValidationResult;
///
/// let ok = ValidationResult::allow();
/// assert!(ok.allowed);
/// assert!(ok.reason.is_none());
/// assert!(ok.errors.is_empty());
///
/// let denied = ValidationResult::reject("Guards failed", vec!["Amount must be positive".into()]);
/// assert!(!denied.allowed);
/// assert_eq!(denied.failure_message(), "Guards failed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            errors: Vec::new(),
        }
    }

    pub fn reject(reason: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            errors,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Human readable explanation of a rejection.
    ///
    /// Uses `reason` when present, otherwise the `errors` joined with `", "`,
    /// otherwise `"Not allowed"`.
    pub fn failure_message(&self) -> String {
        match &self.reason {
            Some(reason) if !reason.is_empty() => reason.clone(),
            _ if !self.errors.is_empty() => self.errors.join(", "),
            _ => "Not allowed".to_string(),
        }
    }
}
