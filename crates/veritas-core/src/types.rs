//! Core public types shared across the crate.

use serde::{Deserialize, Serialize};

/// Outcome of the most recent check performed by a
/// [`ValidationState`](crate::ValidationState).
///
/// A freshly constructed manager reports `Unset`. Every predicate call
/// overwrites the slot with `Ok` or `Error`; no history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// No check has been performed yet.
    #[default]
    Unset,
    /// The last check passed.
    Ok,
    /// The last check failed.
    Error,
}

impl ValidationStatus {
    /// True if the last check passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationStatus::Ok)
    }

    /// True if the last check failed.
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationStatus::Error)
    }

    /// True if no check has run since construction or the last reset.
    pub fn is_unset(&self) -> bool {
        matches!(self, ValidationStatus::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert!(ValidationStatus::default().is_unset());
        assert!(!ValidationStatus::default().is_ok());
        assert!(!ValidationStatus::default().is_error());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&ValidationStatus::Error).unwrap();
        assert_eq!(json, "\"error\"");
        let back: ValidationStatus = serde_json::from_str(&json).unwrap();
        assert!(back.is_error());
    }
}
