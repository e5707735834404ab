//! Release-mode stripping of comments and blank lines.
//!
//! This is a textual pass, not a shader parser. Comment-like sequences inside
//! string literals are stripped too.

use std::sync::OnceLock;

use regex::Regex;

fn line_comment_regex() -> &'static Regex {
    static LINE_COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    LINE_COMMENT_REGEX.get_or_init(|| Regex::new(r"//.*").expect("Invalid line comment regex"))
}

/// Each `/*` closes at the nearest `*/`, so code between two comments survives.
fn block_comment_regex() -> &'static Regex {
    static BLOCK_COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    BLOCK_COMMENT_REGEX
        .get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid block comment regex"))
}

/// Removes `//` comments, then `/* */` comments, then blank lines.
/// Every remaining line is trimmed and the lines are joined with `\n`.
pub fn strip_comments(source: &str) -> String {
    let without_line_comments = line_comment_regex().replace_all(source, "");
    let without_block_comments = block_comment_regex().replace_all(&without_line_comments, "");

    without_block_comments
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
