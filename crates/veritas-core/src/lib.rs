//! # veritas-core
//!
//! Small validation and value-equality utility library.
//!
//! This crate answers two everyday questions:
//! - Are these two sequences (or dynamic values) equal, by value?
//! - Did my last validation check pass?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: equality and predicates are pure functions of their
//!    inputs
//! 2. **No panics on bad input**: a failed validation is a boolean result and
//!    a status flag, never an error
//! 3. **No global state**: every [`ValidationState`] owns its status slot;
//!    isolation comes from constructing separate instances
//!
//! ## Example
//!
//! ```
//! use veritas_core::{arrays, ValidationState, ValidationStatus};
//!
//! assert!(arrays::is_equal(&[1, 2, 3], &[1, 2, 3]));
//!
//! let mut validation = ValidationState::new();
//! assert!(validation.is_filled_in("some input", &[]));
//! assert_eq!(validation.status(), ValidationStatus::Ok);
//! ```

pub mod arrays;
pub mod numeric;
pub mod patterns;
pub mod strings;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use numeric::NumericError;
pub use types::ValidationStatus;
pub use validation::ValidationState;
