//! # Grading Report Module
//!
//! This module defines the data structures returned from a grading run.
//!
//! ## Overview
//!
//! - [`GradingReport`]: The aggregate of one run: counts, score, status and the ordered per-case results.
//! - [`SubmissionReport`]: A [`GradingReport`] plus the scaled mark, feedback and a timestamp.
//! - [`SubmissionReportResponse`]: A response envelope wrapping a [`SubmissionReport`] with success and message fields.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Grading complete.",
//!   "data": {
//!     "created_at": "2025-01-01T00:00:00+00:00",
//!     "mark": { "earned": 100.0, "total": 100.0 },
//!     "summary": "3/3 test cases passed",
//!     "feedback": [ { "test_case_id": 1, "message": "Test case 1: PASS" }, ... ],
//!     "report": {
//!       "total": 3, "passed": 3, "failed": 0, "errored": 0,
//!       "score_percent": 100, "weighted_score_percent": 100.0,
//!       "status": "ALL_PASSED",
//!       "results": [ ... ]
//!     }
//!   }
//! }
//! ```

use crate::scorer::round2;
use crate::traits::feedback::FeedbackEntry;
use crate::types::TestResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradingStatus {
    AllPassed,
    SomeFailed,
}

/// Summary of one grading run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    /// `round(passed / total * 100)`, or `0` for an empty run.
    pub score_percent: u32,
    /// Passed weight over total weight, as a percentage with two decimals.
    pub weighted_score_percent: f64,
    pub status: GradingStatus,
    pub results: Vec<TestResult>,
}

impl GradingReport {
    /// Marks earned when the exercise is worth `points`, based on the weighted score.
    pub fn points_earned(&self, points: f64) -> f64 {
        round2(self.weighted_score_percent / 100.0 * points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub earned: f64,
    pub total: f64,
}

/// The full outcome of grading one submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    pub created_at: String,
    pub mark: Score,
    pub summary: String,
    pub feedback: Vec<FeedbackEntry>,
    pub report: GradingReport,
}

/// Build a new submission report, scaling the weighted score onto `points`.
pub fn generate_submission_report(
    created_at: String,
    report: GradingReport,
    points: f64,
    summary: String,
    feedback: Vec<FeedbackEntry>,
) -> SubmissionReport {
    SubmissionReport {
        created_at,
        mark: Score {
            earned: report.points_earned(points),
            total: round2(points),
        },
        summary,
        feedback,
        report,
    }
}

/// The response envelope for grading results.
#[derive(Debug, Serialize)]
pub struct SubmissionReportResponse {
    pub success: bool,
    pub message: String,
    pub data: SubmissionReport,
}

impl From<SubmissionReport> for SubmissionReportResponse {
    fn from(report: SubmissionReport) -> Self {
        SubmissionReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}
