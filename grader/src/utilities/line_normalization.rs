/// Trims surrounding whitespace and folds CRLF line endings to LF.
pub fn normalize_output(output: &str) -> String {
    output.trim().replace("\r\n", "\n")
}

/// Reads a declared expected output as a count. `None` when it is not a single integer.
pub fn parse_expected_count(expected_output: &str) -> Option<i64> {
    normalize_output(expected_output).parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_folds_line_endings() {
        assert_eq!(normalize_output("  2\r\n"), "2");
        assert_eq!(normalize_output("a\r\nb\n"), "a\nb");
    }

    #[test]
    fn parses_integers_only() {
        assert_eq!(parse_expected_count("2"), Some(2));
        assert_eq!(parse_expected_count(" 3\r\n"), Some(3));
        assert_eq!(parse_expected_count("-1"), Some(-1));
        assert_eq!(parse_expected_count(""), None);
        assert_eq!(parse_expected_count("two"), None);
        assert_eq!(parse_expected_count("2 3"), None);
    }
}
