//! # Grading Engine
//!
//! Runs one [`TestCase`] against the reference and candidate implementations and produces
//! its [`TestResult`].
//!
//! ## Steps
//! 1. Parse the raw input with [`input_parser::parse`].
//! 2. Call the reference with the parsed pair. The reference is trusted: an `Err` becomes a
//!    fatal [`GraderError::ReferenceFault`] and a panic is not caught.
//! 3. Call the candidate with the identical pair inside a fault boundary. Returned faults and
//!    panics both become an `ERROR` outcome for this case only.
//! 4. Otherwise compare the two outputs by exact equality (`PASS`/`FAIL`).
//!
//! Optionally the reference output is also checked against the case's declared
//! `expected_output`; a disagreement is logged and recorded, never fatal.
//!
//! The candidate call is timed and the duration stored on the result.
//!
//! A caught candidate panic still runs the process panic hook, which by default prints
//! the panic message to stderr. The hook is process-global and is left untouched.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tracing::{debug, warn};
use util::grading_config::GradingConfig;

use crate::error::{GraderError, ImplementationFault};
use crate::parsers::input_parser;
use crate::traits::implementation::Implementation;
use crate::types::{TestCase, TestResult};
use crate::utilities::line_normalization::parse_expected_count;

/// Stateless per-case grader. Construct once per run and reuse for every case.
#[derive(Debug, Clone, Copy)]
pub struct GradingEngine {
    check_expected_outputs: bool,
}

impl Default for GradingEngine {
    fn default() -> Self {
        Self {
            check_expected_outputs: true,
        }
    }
}

impl GradingEngine {
    pub fn new(config: &GradingConfig) -> Self {
        Self {
            check_expected_outputs: config.execution.check_expected_outputs,
        }
    }

    /// Grades one test case.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::ReferenceFault`] if the reference implementation faults.
    /// Candidate faults never produce an error.
    pub fn run_test_case(
        &self,
        test_case: &TestCase,
        reference: &dyn Implementation,
        candidate: &dyn Implementation,
    ) -> Result<TestResult, GraderError> {
        let parsed = input_parser::parse(&test_case.raw_input);
        if parsed.is_fallback() {
            debug!(
                case_id = test_case.id,
                confidence = ?parsed.confidence,
                "Raw input {:?} resolved through a fallback rule",
                test_case.raw_input
            );
        }

        let reference_output = reference
            .evaluate(&parsed.string_value, parsed.key_char)
            .map_err(|fault| GraderError::ReferenceFault {
                case_id: test_case.id,
                message: fault.message,
            })?;

        let expected_matches = self.check_expected(test_case, reference_output);

        let started = Instant::now();
        let candidate_result = panic::catch_unwind(AssertUnwindSafe(|| {
            candidate.evaluate(&parsed.string_value, parsed.key_char)
        }))
        .unwrap_or_else(|payload| Err(ImplementationFault::from_panic(payload)));
        let elapsed = started.elapsed();

        let result = match candidate_result {
            Ok(candidate_output) => TestResult::evaluated(
                test_case,
                parsed,
                reference_output,
                candidate_output,
                expected_matches,
            ),
            Err(fault) => {
                warn!(
                    case_id = test_case.id,
                    candidate = candidate.name(),
                    "Candidate faulted: {}",
                    fault
                );
                TestResult::errored(
                    test_case,
                    parsed,
                    reference_output,
                    fault.message,
                    expected_matches,
                )
            }
        }
        .with_execution_time(elapsed);

        debug!(
            case_id = test_case.id,
            outcome = ?result.outcome(),
            reference = reference_output,
            candidate = ?result.candidate_output(),
            "Graded test case"
        );
        Ok(result)
    }

    fn check_expected(&self, test_case: &TestCase, reference_output: i64) -> Option<bool> {
        if !self.check_expected_outputs {
            return None;
        }
        let Some(expected) = parse_expected_count(&test_case.expected_output) else {
            warn!(
                case_id = test_case.id,
                "Expected output {:?} is not an integer; skipping check",
                test_case.expected_output
            );
            return None;
        };
        let matches = expected == reference_output;
        if !matches {
            warn!(
                case_id = test_case.id,
                expected,
                reference = reference_output,
                "Reference output disagrees with the declared expected output"
            );
        }
        Some(matches)
    }
}

/// Grades one test case with the default engine settings.
pub fn run_test_case(
    test_case: &TestCase,
    reference: &dyn Implementation,
    candidate: &dyn Implementation,
) -> Result<TestResult, GraderError> {
    GradingEngine::default().run_test_case(test_case, reference, candidate)
}
