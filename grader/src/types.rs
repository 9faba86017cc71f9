//! # Types Module
//!
//! This module defines the core data structures that flow through the grader:
//! [`TestCase`] in, [`ParsedInput`] in the middle and [`TestResult`] out.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_weight() -> f64 {
    1.0
}

/// An identified (raw input, expected output) pair with a human-readable description.
///
/// Test cases are supplied externally and never mutated by the grader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    /// One raw input line, e.g. `Hello l` or `"" o`.
    #[serde(alias = "input")]
    pub raw_input: String,
    /// Declared answer. Informational: grading compares against the reference.
    pub expected_output: String,
    /// Hidden cases never echo their input in feedback.
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl TestCase {
    pub fn new(
        id: i64,
        description: impl Into<String>,
        raw_input: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            raw_input: raw_input.into(),
            expected_output: expected_output.into(),
            is_hidden: false,
            weight: default_weight(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }
}

/// How the parser arrived at a [`ParsedInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseConfidence {
    /// A string part and a character part separated by a space.
    WellFormed,
    /// A lone character: it becomes the key and the string is empty.
    SingleCharacter,
    /// No usable separator: the whole line is the string and the key is a space.
    BestEffort,
}

/// The (string, key character) argument pair recovered from one raw input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedInput {
    pub string_value: String,
    pub key_char: char,
    pub confidence: ParseConfidence,
}

impl ParsedInput {
    /// True when one of the degenerate fallback rules produced this pair.
    pub fn is_fallback(&self) -> bool {
        self.confidence != ParseConfidence::WellFormed
    }
}

/// Outcome of grading a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// The result of running one test case against both implementations.
///
/// Built once by the grading engine and read-only afterwards. An `Error` outcome
/// always carries a fault message and never a candidate output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    test_case_id: i64,
    description: String,
    parsed_input: ParsedInput,
    reference_output: i64,
    candidate_output: Option<i64>,
    outcome: Outcome,
    error: Option<String>,
    weight: f64,
    is_hidden: bool,
    expected_matches: Option<bool>,
    /// Wall-clock time of the candidate call, in milliseconds.
    execution_time_ms: f64,
}

impl TestResult {
    /// A result where the candidate returned a value; the outcome follows from
    /// exact integer equality with the reference.
    pub(crate) fn evaluated(
        test_case: &TestCase,
        parsed_input: ParsedInput,
        reference_output: i64,
        candidate_output: i64,
        expected_matches: Option<bool>,
    ) -> Self {
        let outcome = if candidate_output == reference_output {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        Self {
            test_case_id: test_case.id,
            description: test_case.description.clone(),
            parsed_input,
            reference_output,
            candidate_output: Some(candidate_output),
            outcome,
            error: None,
            weight: test_case.weight,
            is_hidden: test_case.is_hidden,
            expected_matches,
            execution_time_ms: 0.0,
        }
    }

    /// A result where the candidate faulted.
    pub(crate) fn errored(
        test_case: &TestCase,
        parsed_input: ParsedInput,
        reference_output: i64,
        fault: String,
        expected_matches: Option<bool>,
    ) -> Self {
        Self {
            test_case_id: test_case.id,
            description: test_case.description.clone(),
            parsed_input,
            reference_output,
            candidate_output: None,
            outcome: Outcome::Error,
            error: Some(fault),
            weight: test_case.weight,
            is_hidden: test_case.is_hidden,
            expected_matches,
            execution_time_ms: 0.0,
        }
    }

    pub fn test_case_id(&self) -> i64 {
        self.test_case_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parsed_input(&self) -> &ParsedInput {
        &self.parsed_input
    }

    pub fn reference_output(&self) -> i64 {
        self.reference_output
    }

    pub fn candidate_output(&self) -> Option<i64> {
        self.candidate_output
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Whether the reference agreed with the declared expected output, when checked.
    pub fn expected_matches(&self) -> Option<bool> {
        self.expected_matches
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    pub fn is_pass(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    /// Records how long the candidate call took.
    pub(crate) fn with_execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time_ms = elapsed.as_micros() as f64 / 1000.0;
        self
    }
}
