//! Command line tokenizer
//!
//! Splits a raw input line into argument tokens. Whitespace separates tokens,
//! and a double-quoted span is a single token with the quotes stripped.
//! Inside quotes `\"` and `\\` unescape to `"` and `\`; any other backslash is
//! kept as is.
//!
//! A quote without a closing partner does not open a span. The run it starts
//! is read as an ordinary unquoted token, quote character included.
//!
//! # Examples
//!
//! ```
//! use notekeeper::domain::tokenize;
//!
//! assert_eq!(tokenize(r#"add "A B" C D"#), vec!["add", "A B", "C", "D"]);
//! assert!(tokenize("   ").is_empty());
//! ```

use regex::Regex;
use std::sync::OnceLock;

fn argument_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#""((?:\\.|[^"])*)"|(\S+)"#).unwrap())
}

/// Split a line into tokens, honoring double-quoted spans.
pub fn tokenize(line: &str) -> Vec<String> {
    argument_regex()
        .captures_iter(line)
        .filter_map(|captures| {
            if let Some(quoted) = captures.get(1) {
                Some(unescape(quoted.as_str()))
            } else {
                captures.get(2).map(|bare| bare.as_str().to_string())
            }
        })
        .collect()
}

/// Resolve `\"` and `\\` in a single left-to-right pass
fn unescape(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    output.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        output.push(c);
    }

    output
}
