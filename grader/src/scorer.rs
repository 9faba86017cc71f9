//! # Scorer Module
//!
//! This module turns the ordered per-case results of a grading run into a [`GradingReport`].
//! Aggregation is a pure function: the same result sequence always yields the same report.

use crate::report::{GradingReport, GradingStatus};
use crate::types::{Outcome, TestResult};

/// Round a float to two decimal places.
#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Percentage of passed cases, rounded to the nearest integer.
///
/// Returns `0` when `total` is `0`.
///
/// # Example
///
/// ```
/// use grader::scorer::compute_score_percent;
///
/// assert_eq!(compute_score_percent(3, 3), 100);
/// assert_eq!(compute_score_percent(2, 3), 67);
/// assert_eq!(compute_score_percent(0, 0), 0);
/// ```
pub fn compute_score_percent(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (passed as f64 / total as f64 * 100.0).round() as u32
}

/// Sum of passed weights over the sum of all weights, as a percentage with two decimals.
///
/// Returns `0.0` when the weights sum to zero or to a non-finite value.
pub fn compute_weighted_percent(results: &[TestResult]) -> f64 {
    let total_weight: f64 = results.iter().map(|r| r.weight()).sum();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        return 0.0;
    }
    let passed_weight: f64 = results
        .iter()
        .filter(|r| r.is_pass())
        .map(|r| r.weight())
        .sum();
    round2(passed_weight / total_weight * 100.0)
}

/// Aggregates an ordered sequence of results into a report.
///
/// Errored and failed cases both count as not passed. An empty sequence yields a report with
/// `total = 0`, `score_percent = 0` and, since `passed = total`, `ALL_PASSED`.
pub fn aggregate(results: &[TestResult]) -> GradingReport {
    let total = results.len();
    let mut passed = 0;
    let mut failed = 0;
    let mut errored = 0;

    for result in results {
        match result.outcome() {
            Outcome::Pass => passed += 1,
            Outcome::Fail => failed += 1,
            Outcome::Error => errored += 1,
        }
    }

    let status = if passed == total {
        GradingStatus::AllPassed
    } else {
        GradingStatus::SomeFailed
    };

    GradingReport {
        total,
        passed,
        failed,
        errored,
        score_percent: compute_score_percent(passed, total),
        weighted_score_percent: compute_weighted_percent(results),
        status,
        results: results.to_vec(),
    }
}
