//! # AutoFeedback Strategy
//!
//! This module provides the `AutoFeedback` strategy for the grader.
//! It implements the [`Feedback`] trait to generate one template-based entry per test case.
//!
//! ## Overview
//!
//! - `PASS` cases get a one-line confirmation.
//! - `FAIL` cases report the reference and candidate outputs and, unless the case is hidden,
//!   the arguments the implementations were called with.
//! - `ERROR` cases report the fault message.

use crate::error::GraderError;
use crate::report::GradingReport;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{Outcome, TestResult};

/// Automatic feedback strategy: generates template-based feedback for each test case.
#[derive(Debug, Default)]
pub struct AutoFeedback;

impl AutoFeedback {
    /// One-line summary of a whole run, e.g. `2/3 test cases passed`.
    pub fn summarize(report: &GradingReport) -> String {
        format!("{}/{} test cases passed", report.passed, report.total)
    }

    fn message_for(result: &TestResult) -> String {
        let id = result.test_case_id();
        match result.outcome() {
            Outcome::Pass => format!("Test case {id}: PASS"),
            Outcome::Fail => {
                let got = result
                    .candidate_output()
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                let mut message = format!(
                    "Test case {id}: FAIL (expected {}, got {got})",
                    result.reference_output()
                );
                if !result.is_hidden() {
                    let input = result.parsed_input();
                    message.push_str(&format!(
                        " for {:?} with key {:?}",
                        input.string_value, input.key_char
                    ));
                }
                message
            }
            Outcome::Error => format!(
                "Test case {id}: ERROR ({})",
                result.error().unwrap_or("unknown fault")
            ),
        }
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(&self, results: &[TestResult]) -> Result<Vec<FeedbackEntry>, GraderError> {
        Ok(results
            .iter()
            .map(|result| FeedbackEntry {
                test_case_id: result.test_case_id(),
                message: Self::message_for(result),
            })
            .collect())
    }
}
