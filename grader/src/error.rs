//! Grader Error Types
//!
//! This module defines [`GraderError`], the fatal errors of a grading run, and
//! [`ImplementationFault`], the non-fatal fault an implementation may raise while
//! evaluating one test case.
//!
//! A candidate fault never becomes a [`GraderError`]: the grading engine records it on
//! the single affected result. Only setup defects (a faulting reference implementation,
//! unreadable or malformed test suites) abort a run.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//!
//! fn require_cases(count: usize) -> Result<(), GraderError> {
//!     if count == 0 {
//!         return Err(GraderError::InputMismatch("no test cases supplied".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::any::Any;

/// Represents all fatal error types that can occur in the grader.
#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    /// The trusted reference implementation faulted. This is a harness configuration
    /// defect, not a grading outcome.
    #[error("Reference implementation failed on test case {case_id}: {message}")]
    ReferenceFault { case_id: i64, message: String },
    /// Inputs do not match in structure (empty suites, duplicate ids, ...).
    #[error("Input mismatch: {0}")]
    InputMismatch(String),
    /// JSON is malformed or does not match the expected schema.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// I/O error (file not found, unreadable, too large, ...).
    #[error("I/O error: {0}")]
    IoError(String),
}

/// A runtime fault raised by an implementation while evaluating one input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ImplementationFault {
    pub message: String,
}

impl ImplementationFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Converts a panic payload captured by `catch_unwind` into a fault.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            format!("panicked: {s}")
        } else if let Some(s) = payload.downcast_ref::<String>() {
            format!("panicked: {s}")
        } else {
            "panicked with a non-string payload".to_string()
        };
        Self { message }
    }
}
