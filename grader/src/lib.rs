//! # Grader Library
//!
//! This crate grades a candidate implementation of the character-count exercise
//! ("how many times does a character occur in a string") against a trusted reference.
//!
//! ## Key Concepts
//! - **Parser**: Recovers the `(string, key character)` pair from each raw input line.
//! - **Grading Engine**: Runs both implementations on the same pair, isolates candidate faults,
//!   and classifies each case as `PASS`, `FAIL` or `ERROR`.
//! - **Scorer**: Aggregates the ordered per-case results into a [`GradingReport`].
//! - **GradingJob**: Wraps a whole run with feedback, configured points and a response envelope.
//!
//! ```
//! use grader::grade;
//! use grader::implementations::reference::ReferenceCounter;
//! use grader::report::GradingStatus;
//! use grader::types::TestCase;
//!
//! let cases = vec![
//!     TestCase::new(1, "Count 'l' in 'Hello'", "Hello l", "2"),
//!     TestCase::new(2, "Count 'o' in a repeated word", "HelloHelloHello o", "3"),
//!     TestCase::new(3, "Empty string", "\"\" o", "0"),
//! ];
//! let report = grade(&cases, &ReferenceCounter, &ReferenceCounter).unwrap();
//! assert_eq!(report.score_percent, 100);
//! assert_eq!(report.status, GradingStatus::AllPassed);
//! ```

pub mod engine;
pub mod error;
pub mod feedback;
pub mod implementations;
pub mod parsers;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::engine::GradingEngine;
use crate::error::GraderError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::report::{GradingReport, SubmissionReportResponse, generate_submission_report};
use crate::traits::feedback::Feedback;
use crate::traits::implementation::Implementation;
use crate::types::TestCase;
use crate::utilities::suite_loader::validate_suite;

use chrono::Utc;
use tracing::info;
use util::grading_config::{FeedbackScheme, GradingConfig};

/// Grades every test case in order and aggregates the results.
///
/// Each case is graded independently; a candidate fault only affects its own case.
///
/// # Errors
///
/// Returns [`GraderError::InputMismatch`] for duplicate ids or negative or non-finite
/// weights, before any implementation is called.
/// Returns [`GraderError::ReferenceFault`] as soon as the reference implementation faults.
/// No partial report is produced in that case.
pub fn grade(
    test_cases: &[TestCase],
    reference: &dyn Implementation,
    candidate: &dyn Implementation,
) -> Result<GradingReport, GraderError> {
    grade_with(&GradingEngine::default(), test_cases, reference, candidate)
}

fn grade_with(
    engine: &GradingEngine,
    test_cases: &[TestCase],
    reference: &dyn Implementation,
    candidate: &dyn Implementation,
) -> Result<GradingReport, GraderError> {
    validate_suite(test_cases)?;
    let results = test_cases
        .iter()
        .map(|case| engine.run_test_case(case, reference, candidate))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(scorer::aggregate(&results))
}

/// A grading run for a single candidate submission.
///
/// # Fields
/// - `test_cases`: The ordered suite to grade.
/// - `reference`: The trusted implementation whose outputs are the ground truth.
/// - `candidate`: The implementation under test.
/// - `feedback`: Strategy that turns results into per-case messages.
/// - `config`: Points, feedback scheme and engine options.
pub struct GradingJob<'a> {
    test_cases: Vec<TestCase>,
    reference: Box<dyn Implementation + 'a>,
    candidate: Box<dyn Implementation + 'a>,
    feedback: Box<dyn Feedback + 'a>,
    config: GradingConfig,
}

impl<'a> GradingJob<'a> {
    /// Create a new grading job with [`AutoFeedback`].
    pub fn new<R, C>(
        test_cases: Vec<TestCase>,
        reference: R,
        candidate: C,
        config: GradingConfig,
    ) -> Self
    where
        R: Implementation + 'a,
        C: Implementation + 'a,
    {
        Self {
            test_cases,
            reference: Box::new(reference),
            candidate: Box::new(candidate),
            feedback: Box::new(AutoFeedback),
            config,
        }
    }

    /// Set a custom feedback strategy for this job.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the job and build the response envelope.
    ///
    /// # Steps
    /// 1. Rejects an empty suite, duplicate ids and unusable weights.
    /// 2. Grades every case with an engine built from the job's config.
    /// 3. Assembles feedback unless the feedback scheme is `none`.
    /// 4. Scales the weighted score onto the configured points.
    ///
    /// # Errors
    /// * [`GraderError::InputMismatch`] if the suite has no test cases, repeats an id or
    ///   carries a negative or non-finite weight.
    /// * [`GraderError::ReferenceFault`] if the reference faults on any case.
    /// * Any error returned by the feedback strategy.
    pub fn run(self) -> Result<SubmissionReportResponse, GraderError> {
        if self.test_cases.is_empty() {
            return Err(GraderError::InputMismatch(
                "Test suite contains no test cases".to_string(),
            ));
        }

        info!(
            cases = self.test_cases.len(),
            reference = self.reference.name(),
            candidate = self.candidate.name(),
            "Starting grading run"
        );

        let engine = GradingEngine::new(&self.config);
        let report = grade_with(
            &engine,
            &self.test_cases,
            self.reference.as_ref(),
            self.candidate.as_ref(),
        )?;

        let feedback = match self.config.marking.feedback_scheme {
            FeedbackScheme::Auto => self.feedback.assemble_feedback(&report.results)?,
            FeedbackScheme::None => Vec::new(),
        };
        let summary = AutoFeedback::summarize(&report);

        info!(
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            score = report.score_percent,
            "Grading run finished"
        );

        let submission = generate_submission_report(
            Utc::now().to_rfc3339(),
            report,
            self.config.marking.points,
            summary,
            feedback,
        );
        Ok(submission.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImplementationFault;
    use crate::implementations::function::FnImplementation;
    use crate::implementations::reference::ReferenceCounter;
    use crate::report::GradingStatus;
    use crate::traits::feedback::FeedbackEntry;
    use crate::types::{Outcome, TestResult};

    fn canonical_cases() -> Vec<TestCase> {
        vec![
            TestCase::new(1, "Count 'l' in 'Hello'", "Hello l", "2"),
            TestCase::new(2, "Count 'o' in a repeated word", "HelloHelloHello o", "3"),
            TestCase::new(3, "Empty string", "\"\" o", "0"),
        ]
    }

    struct FixedFeedback;

    impl Feedback for FixedFeedback {
        fn assemble_feedback(
            &self,
            results: &[TestResult],
        ) -> Result<Vec<FeedbackEntry>, GraderError> {
            Ok(results
                .iter()
                .map(|r| FeedbackEntry {
                    test_case_id: r.test_case_id(),
                    message: "fixed".to_string(),
                })
                .collect())
        }
    }

    #[test]
    fn test_grade_reference_against_itself() {
        let report = grade(&canonical_cases(), &ReferenceCounter, &ReferenceCounter).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 3);
        assert_eq!(report.score_percent, 100);
        assert_eq!(report.status, GradingStatus::AllPassed);
    }

    #[test]
    fn test_grade_stops_on_reference_fault() {
        let reference = FnImplementation::new("half-broken", |s: &str, c: char| {
            if s.is_empty() {
                Err(ImplementationFault::new("empty input"))
            } else {
                Ok(s.chars().filter(|&x| x == c).count() as i64)
            }
        });
        match grade(&canonical_cases(), &reference, &ReferenceCounter) {
            Err(GraderError::ReferenceFault { case_id, .. }) => assert_eq!(case_id, 3),
            other => panic!("Expected ReferenceFault, got: {:?}", other),
        }
    }

    #[test]
    fn test_job_happy_path() {
        let response = GradingJob::new(
            canonical_cases(),
            ReferenceCounter,
            ReferenceCounter,
            GradingConfig::default_config(),
        )
        .run()
        .unwrap();

        assert!(response.success);
        assert_eq!(response.data.mark.earned, 100.0);
        assert_eq!(response.data.mark.total, 100.0);
        assert_eq!(response.data.summary, "3/3 test cases passed");
        assert_eq!(response.data.feedback.len(), 3);
        assert_eq!(response.data.feedback[0].message, "Test case 1: PASS");
        assert!(!response.data.created_at.is_empty());
    }

    #[test]
    fn test_job_scales_weighted_score_onto_points() {
        let mut cases = canonical_cases();
        cases[0].weight = 2.0;
        let candidate = FnImplementation::new("no-empty", |s: &str, c: char| {
            if s.is_empty() {
                Err(ImplementationFault::new("null pointer"))
            } else {
                Ok(s.chars().filter(|&x| x == c).count() as i64)
            }
        });
        let mut config = GradingConfig::default_config();
        config.marking.points = 20.0;

        let response = GradingJob::new(cases, ReferenceCounter, candidate, config)
            .run()
            .unwrap();
        let report = &response.data.report;
        assert_eq!(report.passed, 2);
        assert_eq!(report.errored, 1);
        assert_eq!(report.weighted_score_percent, 75.0);
        assert_eq!(response.data.mark.earned, 15.0);
        assert_eq!(report.results[2].outcome(), Outcome::Error);
        assert_eq!(
            response.data.feedback[2].message,
            "Test case 3: ERROR (null pointer)"
        );
    }

    #[test]
    fn test_job_rejects_empty_suite() {
        let result = GradingJob::new(
            vec![],
            ReferenceCounter,
            ReferenceCounter,
            GradingConfig::default_config(),
        )
        .run();
        assert!(matches!(result, Err(GraderError::InputMismatch(_))));
    }

    #[test]
    fn test_job_rejects_negative_weight() {
        let cases = vec![
            TestCase::new(1, "", "Hello l", "2").with_weight(2.0),
            TestCase::new(2, "", "HelloHelloHello o", "3").with_weight(-1.0),
        ];
        let wrong = FnImplementation::new("wrong-on-repeats", |s: &str, c: char| {
            Ok(s.chars().filter(|&x| x == c).count().min(2) as i64)
        });
        match GradingJob::new(cases, ReferenceCounter, wrong, GradingConfig::default_config()).run()
        {
            Err(GraderError::InputMismatch(msg)) => {
                assert_eq!(msg, "Test case 2 has an invalid weight -1");
            }
            other => panic!("Expected InputMismatch, got: {:?}", other.map(|r| r.data.mark)),
        }
    }

    #[test]
    fn test_job_rejects_nan_weight() {
        let cases = vec![TestCase::new(1, "", "Hello l", "2").with_weight(f64::NAN)];
        let result = GradingJob::new(
            cases,
            ReferenceCounter,
            ReferenceCounter,
            GradingConfig::default_config(),
        )
        .run();
        assert!(matches!(result, Err(GraderError::InputMismatch(_))));
    }

    #[test]
    fn test_grade_validates_before_running_implementations() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let counting = FnImplementation::new("counting", |_s: &str, _c: char| {
            calls.set(calls.get() + 1);
            Ok(0)
        });
        let cases = vec![
            TestCase::new(1, "", "a a", "1"),
            TestCase::new(1, "", "b b", "1"),
        ];
        assert!(matches!(
            grade(&cases, &counting, &counting),
            Err(GraderError::InputMismatch(_))
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_job_without_feedback() {
        let mut config = GradingConfig::default_config();
        config.marking.feedback_scheme = FeedbackScheme::None;
        let response = GradingJob::new(canonical_cases(), ReferenceCounter, ReferenceCounter, config)
            .run()
            .unwrap();
        assert!(response.data.feedback.is_empty());
        assert_eq!(response.data.summary, "3/3 test cases passed");
    }

    #[test]
    fn test_job_custom_feedback() {
        let response = GradingJob::new(
            canonical_cases(),
            ReferenceCounter,
            ReferenceCounter,
            GradingConfig::default_config(),
        )
        .with_feedback(FixedFeedback)
        .run()
        .unwrap();
        assert!(response.data.feedback.iter().all(|f| f.message == "fixed"));
    }
}
