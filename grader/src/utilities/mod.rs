//! # Utilities
//!
//! Helpers shared across the grader.
//!
//! - [`line_normalization`]: Normalises declared expected outputs before they are compared.
//! - [`suite_loader`]: Loads and validates a JSON test suite from disk.

pub mod line_normalization;
pub mod suite_loader;
