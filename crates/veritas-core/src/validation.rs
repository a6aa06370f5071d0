//! Validation state tracking.
//!
//! A [`ValidationState`] wraps a family of boolean predicates around a single
//! mutable status slot: every check overwrites the slot with the outcome of
//! that check, so the slot always answers "did the last validation pass?".
//! Failing a validation is an ordinary result, never an error or a panic.

use serde_json::Value;

use crate::arrays;
use crate::numeric;
use crate::patterns;
use crate::strings;
use crate::types::ValidationStatus;

/// Tracks the outcome of the most recent validation check.
///
/// Construct as many instances as needed; each owns its status exclusively.
/// There is no shared global state. A `ValidationState` is `Send`, but
/// callers sharing one instance across threads must serialize access
/// themselves (for example behind a `Mutex`), or one caller will observe
/// another's result.
///
/// # Example
///
/// ```
/// use veritas_core::{ValidationState, ValidationStatus};
///
/// let mut validation = ValidationState::new();
/// assert_eq!(validation.status(), ValidationStatus::Unset);
///
/// assert!(validation.is_true(1 + 1 == 2));
/// assert!(validation.ok());
///
/// assert!(!validation.is_filled_in("   ", &[]));
/// assert_eq!(validation.status(), ValidationStatus::Error);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationState {
    status: ValidationStatus,
    last_message: Option<String>,
}

impl ValidationState {
    /// Create a manager with the status slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of the most recent check, or `Unset` before the first one.
    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    /// Fast check: true iff the last validation passed.
    pub fn ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Message describing the most recent failed check.
    ///
    /// `None` when the last check passed or no check has run yet.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Reinitialize the status slot to `Unset` and clear any message.
    pub fn reset(&mut self) {
        self.status = ValidationStatus::Unset;
        self.last_message = None;
    }

    /// Validation fails unless `value` is true.
    pub fn is_true(&mut self, value: bool) -> bool {
        self.update(value, "value is not true")
    }

    /// Validation fails unless `value` and every supplied constraint are true.
    ///
    /// Absent constraints are vacuously satisfied, so
    /// `is_true_with(v, None, None)` behaves exactly like `is_true(v)`.
    pub fn is_true_with(
        &mut self,
        value: bool,
        constraint_a: Option<bool>,
        constraint_b: Option<bool>,
    ) -> bool {
        let passed = value && constraint_a.unwrap_or(true) && constraint_b.unwrap_or(true);
        self.update(passed, "value does not satisfy all constraints")
    }

    /// Validation fails if the text is empty.
    ///
    /// Emptiness follows [`strings::is_empty`]: whitespace-only input is
    /// empty, and `empty_values` lists extra tokens (such as `"NULL"`) that
    /// count as empty.
    pub fn is_filled_in(&mut self, value: &str, empty_values: &[&str]) -> bool {
        self.update(!strings::is_empty(value, empty_values), "value is required")
    }

    /// Validation fails unless the string represents a finite number.
    pub fn is_numeric(&mut self, value: &str) -> bool {
        self.update(numeric::is_numeric(value), "value is not a number")
    }

    /// Validation fails unless the string is numeric and within
    /// `[min, max]`, both bounds included.
    pub fn is_numeric_between(&mut self, value: &str, min: f64, max: f64) -> bool {
        let passed = numeric::to_number(value)
            .map(|n| n >= min && n <= max)
            .unwrap_or(false);
        self.update(passed, "value is not between min and max")
    }

    /// Validation fails unless the string is a well-formed absolute URL.
    pub fn is_url(&mut self, value: &str) -> bool {
        self.update(patterns::is_url(value), "value is not an URL")
    }

    /// Validation fails unless the string is a well-formed email address.
    pub fn is_email(&mut self, value: &str) -> bool {
        self.update(patterns::is_email(value), "value is not an email")
    }

    /// Validation fails unless the two dynamic values are structurally equal.
    ///
    /// Delegates to [`arrays::is_equal_value`], so nested arrays and objects
    /// compare recursively by value.
    pub fn is_equal_to(&mut self, a: &Value, b: &Value) -> bool {
        self.update(arrays::is_equal_value(a, b), "values are not equal")
    }

    /// Overwrite the status slot with the outcome of a check.
    fn update(&mut self, passed: bool, failure_message: &str) -> bool {
        if passed {
            self.status = ValidationStatus::Ok;
            self.last_message = None;
        } else {
            self.status = ValidationStatus::Error;
            self.last_message = Some(failure_message.to_string());
        }

        tracing::debug!(passed, status = ?self.status, "validation check recorded");

        passed
    }
}
