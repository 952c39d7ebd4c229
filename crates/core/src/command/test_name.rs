/// Escape a test's display name for use in `--testNamePattern`
///
/// Every regular-expression metacharacter is escaped, so the pattern matches
/// the literal name only.
pub fn format_test_name(raw: &str) -> String {
    regex::escape(raw)
}
