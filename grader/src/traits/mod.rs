//!
//! Traits Module
//!
//! This module contains the seams of the grader where behaviour is injected.
//!
//! - [`implementation`]: The capability every graded implementation (reference or candidate) provides.
//! - [`feedback`]: Pluggable strategies that turn per-case results into feedback entries.

pub mod feedback;
pub mod implementation;
