//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to implement pluggable feedback strategies for the grader.
//!
//! Each feedback strategy produces a list of feedback entries based on the per-case grading results.
//!

use crate::error::GraderError;
use crate::types::TestResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub test_case_id: i64,
    pub message: String,
}

/// A trait for pluggable feedback strategies in the grader.
///
/// # Arguments
/// - `results`: The ordered [`TestResult`]s of a grading run.
///
/// # Returns
/// - `Ok(Vec<FeedbackEntry>)`: An ordered list of feedback entries for the submission.
/// - `Err(GraderError)`: If feedback generation fails.
pub trait Feedback {
    fn assemble_feedback(&self, results: &[TestResult]) -> Result<Vec<FeedbackEntry>, GraderError>;
}
