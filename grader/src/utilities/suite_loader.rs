//!
//! Test Suite Loader
//!
//! This module loads the test cases for a grading run from a JSON file on disk.
//!
//! # Functionality
//!
//! - Checks the existence, type and size of the suite file.
//! - Parses a JSON array of [`TestCase`] records.
//! - Rejects duplicate ids and unusable weights.
//!
//! # Error Handling
//!
//! Returns [`GraderError`] variants with short, general messages; the specific cause
//! (path, byte counts, serde message) is logged instead.

use crate::error::GraderError;
use crate::types::TestCase;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Default maximum size for a suite file.
pub const MAX_SUITE_SIZE: u64 = 2 * 1024 * 1024; // 2MB

/// Checks that a file exists, is a file, and does not exceed `max_size` bytes.
///
/// # Errors
///
/// Returns [`GraderError::IoError`] if the file is missing, not a file, unreadable, or too large.
fn check_file(path: &Path, max_size: u64) -> Result<(), GraderError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(GraderError::IoError("File not found".to_string()));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(GraderError::IoError("Invalid file type".to_string()));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        GraderError::IoError("File unreadable".to_string())
    })?;

    if metadata.len() > max_size {
        error!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            max_size
        );
        return Err(GraderError::IoError("File too large".to_string()));
    }

    Ok(())
}

/// Validates ids and weights of an already parsed suite.
pub(crate) fn validate_suite(cases: &[TestCase]) -> Result<(), GraderError> {
    let mut seen = HashSet::with_capacity(cases.len());
    for case in cases {
        if !seen.insert(case.id) {
            return Err(GraderError::InputMismatch(format!(
                "Duplicate test case id {}",
                case.id
            )));
        }
        if !case.weight.is_finite() || case.weight < 0.0 {
            return Err(GraderError::InputMismatch(format!(
                "Test case {} has an invalid weight {}",
                case.id, case.weight
            )));
        }
    }
    Ok(())
}

/// Loads and validates a JSON test suite.
///
/// # Errors
///
/// Returns [`GraderError::IoError`] for missing, unreadable or oversized files,
/// [`GraderError::InvalidJson`] for malformed content, and [`GraderError::InputMismatch`]
/// for duplicate ids or invalid weights.
pub fn load_test_suite(path: &Path, max_size: u64) -> Result<Vec<TestCase>, GraderError> {
    check_file(path, max_size)?;

    let bytes = fs::read(path).map_err(|e| {
        error!("Failed to read suite file {}: {}", path.display(), e);
        GraderError::IoError("Failed to read test suite".to_string())
    })?;

    let cases: Vec<TestCase> = serde_json::from_slice(&bytes).map_err(|e| {
        error!("Invalid JSON in suite file {}: {}", path.display(), e);
        GraderError::InvalidJson("Failed to parse test suite".to_string())
    })?;

    validate_suite(&cases)?;

    debug!("Loaded {} test cases from {}", cases.len(), path.display());
    Ok(cases)
}

#[cfg(test)]
mod tests {
    //! Unit tests for the suite loader, using the fixtures under `src/test_files/suite_loader`.
    use super::*;
    use std::path::PathBuf;

    fn fixture(case: &str) -> PathBuf {
        PathBuf::from(format!("src/test_files/suite_loader/{}/suite.json", case))
    }

    /// Happy path: the three canonical cases with defaults filled in.
    #[test]
    fn test_happy_path_case1() {
        let cases = load_test_suite(&fixture("case1"), MAX_SUITE_SIZE).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].raw_input, "Hello l");
        assert_eq!(cases[1].expected_output, "3");
        assert_eq!(cases[2].raw_input, "\"\" o");
        assert!(cases[2].is_hidden);
        assert_eq!(cases[0].weight, 1.0);
        assert_eq!(cases[1].weight, 2.0);
    }

    #[test]
    fn test_duplicate_ids_case2() {
        match load_test_suite(&fixture("case2"), MAX_SUITE_SIZE) {
            Err(GraderError::InputMismatch(msg)) => {
                assert_eq!(msg, "Duplicate test case id 1");
            }
            other => panic!("Expected InputMismatch for duplicate ids, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_case3() {
        match load_test_suite(&fixture("case3"), MAX_SUITE_SIZE) {
            Err(GraderError::InvalidJson(msg)) => {
                assert_eq!(msg, "Failed to parse test suite");
            }
            other => panic!("Expected InvalidJson, got: {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_case4() {
        match load_test_suite(&fixture("case4"), MAX_SUITE_SIZE) {
            Err(GraderError::InputMismatch(msg)) => {
                assert!(msg.contains("invalid weight"), "got: {msg}");
            }
            other => panic!("Expected InputMismatch for weight, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match load_test_suite(&fixture("does_not_exist"), MAX_SUITE_SIZE) {
            Err(GraderError::IoError(msg)) => assert_eq!(msg, "File not found"),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = PathBuf::from("src/test_files/suite_loader");
        match load_test_suite(&dir, MAX_SUITE_SIZE) {
            Err(GraderError::IoError(msg)) => assert_eq!(msg, "Invalid file type"),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn test_file_too_large() {
        match load_test_suite(&fixture("case1"), 16) {
            Err(GraderError::IoError(msg)) => assert_eq!(msg, "File too large"),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_is_accepted() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        fs::write(tmp.path(), "[]").unwrap();
        let cases = load_test_suite(tmp.path(), MAX_SUITE_SIZE).unwrap();
        assert!(cases.is_empty());
    }
}
