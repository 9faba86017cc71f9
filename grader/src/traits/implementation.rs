//! Implementation Trait
//!
//! This module defines the [`Implementation`] trait, the single-method capability that both the
//! trusted reference solution and the candidate under evaluation satisfy. The grading engine
//! receives both as trait objects, so it never needs to know whether an implementation is native
//! Rust, a loaded plugin or a bridge to an external process.
//!
//! # Example
//!
//! ```rust
//! use grader::error::ImplementationFault;
//! use grader::traits::implementation::Implementation;
//!
//! struct AlwaysZero;
//!
//! impl Implementation for AlwaysZero {
//!     fn evaluate(&self, _string_value: &str, _key_char: char) -> Result<i64, ImplementationFault> {
//!         Ok(0)
//!     }
//! }
//!
//! assert_eq!(AlwaysZero.evaluate("Hello", 'l'), Ok(0));
//! ```

use crate::error::ImplementationFault;

/// Counts occurrences of `key_char` in `string_value`.
pub trait Implementation {
    /// Evaluate the exercise for one argument pair.
    ///
    /// # Errors
    ///
    /// Returns an [`ImplementationFault`] if the implementation could not produce a value
    /// (crash, timeout or invalid output in an external harness). Panics are treated the
    /// same way when this implementation is graded as a candidate.
    fn evaluate(&self, string_value: &str, key_char: char) -> Result<i64, ImplementationFault>;

    /// Label used in logs.
    fn name(&self) -> &str {
        "anonymous"
    }
}
