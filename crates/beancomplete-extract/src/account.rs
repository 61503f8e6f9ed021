//! Account name pattern matching.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern for a beancount account name: two or more colon-separated
/// segments, each an uppercase letter followed by one or more letters,
/// digits, or hyphens.
fn account_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:[A-Z][A-Za-z0-9-]+)(?::[A-Z][A-Za-z0-9-]+)+")
            .expect("account pattern is a valid regex")
    })
}

/// Find the first account name in a line.
///
/// Returns the matched text, which may be a substring of a larger
/// token when the line contains malformed input. Lowercase-led
/// segments never start a match.
pub fn find_account(line: &str) -> Option<&str> {
    account_pattern().find(line).map(|m| m.as_str())
}
