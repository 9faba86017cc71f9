//! # Parsers
//!
//! - [`input_parser`]: turns one raw test-case input line into the argument pair passed
//!   to both implementations. Every caller goes through this single parser.

pub mod input_parser;
