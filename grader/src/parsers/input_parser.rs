//! # Input Parser
//!
//! Recovers the `(string, key character)` argument pair from a single raw input line.
//!
//! ## Grammar
//!
//! The line is trimmed and split at its **last** space. Everything after that space is the
//! character part (only its first character is used); everything before it is the string
//! part, so string values may themselves contain spaces.
//!
//! The string part is then resolved:
//! - `"..."` (length >= 2, quoted at both ends) has its outer quotes stripped.
//! - The 4-character sentinel `\"\"`, either as the quoted content or on its own, means the
//!   empty string. This is a fixed comparison, not a general escape grammar.
//! - Anything else is used verbatim.
//!
//! ## Fallbacks
//!
//! Parsing never fails. Lines without a usable separator resolve to one of two degenerate
//! forms, recorded in [`ParsedInput::confidence`]:
//! - a single character becomes the key with an empty string ([`ParseConfidence::SingleCharacter`]);
//! - anything else becomes the string with a space as key ([`ParseConfidence::BestEffort`]).
//!
//! ```
//! use grader::parsers::input_parser::parse;
//!
//! let parsed = parse("Hello l");
//! assert_eq!(parsed.string_value, "Hello");
//! assert_eq!(parsed.key_char, 'l');
//! assert!(!parsed.is_fallback());
//! ```

use crate::types::{ParseConfidence, ParsedInput};

/// Escaped empty pair: backslash, quote, backslash, quote.
pub const ESCAPED_EMPTY_SENTINEL: &str = r#"\"\""#;

const SEPARATOR: char = ' ';
const QUOTE: char = '"';

/// Parses one raw input line into its argument pair.
pub fn parse(raw_input: &str) -> ParsedInput {
    let trimmed = raw_input.trim();

    let split_at = trimmed
        .rfind(SEPARATOR)
        .filter(|&idx| idx + SEPARATOR.len_utf8() < trimmed.len());

    let Some(idx) = split_at else {
        return degenerate(trimmed);
    };

    let char_part = &trimmed[idx + SEPARATOR.len_utf8()..];
    let string_part = &trimmed[..idx];

    // `split_at` guarantees a non-empty character part.
    let key_char = char_part.chars().next().unwrap_or(SEPARATOR);

    ParsedInput {
        string_value: resolve_string_part(string_part),
        key_char,
        confidence: ParseConfidence::WellFormed,
    }
}

fn degenerate(trimmed: &str) -> ParsedInput {
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => ParsedInput {
            string_value: String::new(),
            key_char: only,
            confidence: ParseConfidence::SingleCharacter,
        },
        _ => ParsedInput {
            string_value: trimmed.to_string(),
            key_char: SEPARATOR,
            confidence: ParseConfidence::BestEffort,
        },
    }
}

fn resolve_string_part(string_part: &str) -> String {
    let quoted = string_part.len() >= 2
        && string_part.starts_with(QUOTE)
        && string_part.ends_with(QUOTE);

    if quoted {
        let inner = &string_part[QUOTE.len_utf8()..string_part.len() - QUOTE.len_utf8()];
        if inner == ESCAPED_EMPTY_SENTINEL {
            return String::new();
        }
        return inner.to_string();
    }

    if string_part == ESCAPED_EMPTY_SENTINEL {
        return String::new();
    }

    string_part.to_string()
}
