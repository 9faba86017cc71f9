//! # Feedback Strategies Module
//!
//! Each strategy implements the [`Feedback`](crate::traits::feedback::Feedback) trait and produces a list of
//! [`FeedbackEntry`](crate::traits::feedback::FeedbackEntry)s from the per-case results.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: Template-based feedback stating each case's outcome.

pub mod auto_feedback;
