//! ANSI text processing utilities.
//!
//! This module provides functions for working with ANSI-formatted text:
//! stripping escapes, measuring visible width, and padding.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex pattern for the escape sequences wikidown emits.
/// Matches:
/// - CSI sequences: \x1b[...letter
/// - OSC sequences ended by BEL or ST: \x1b]...\x07, \x1b]...\x1b\
/// - Simple escapes: \x1b)
pub const ANSIESCAPE: &str = r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][^\x07\x1b]*(?:\x07|\x1b\\)|\))";

static ANSIESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ANSIESCAPE).unwrap());

/// Remove all ANSI escape sequences from text.
///
/// # Example
///
/// ```
/// use wikidown_ansi::utils::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[0m text"), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ANSIESCAPE_RE.replace_all(text, "").to_string()
}

/// Calculate the visible display width of text in terminal columns.
///
/// # Example
///
/// ```
/// use wikidown_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}

/// Pad `text` with spaces on the right up to `width` visible columns.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_to(text: &str, width: usize) -> String {
    let len = visible_length(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_strips_sgr() {
        assert_eq!(visible("\x1b[38;2;1;2;3mcolored\x1b[0m"), "colored");
    }

    #[test]
    fn test_visible_strips_hyperlink() {
        let link = "\x1b]8;;https://example.com\x1b\\label\x1b]8;;\x1b\\";
        assert_eq!(visible(link), "label");
    }

    #[test]
    fn test_visible_strips_clipboard() {
        assert_eq!(visible("\x1b]52;c;dGVzdA==\x07after"), "after");
    }

    #[test]
    fn test_visible_length_plain() {
        assert_eq!(visible_length("hello"), 5);
        assert_eq!(visible_length(""), 0);
    }

    #[test]
    fn test_pad_to() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcdef", 4), "abcdef");
        assert_eq!(visible_length(&pad_to("\x1b[1mab\x1b[22m", 5)), 5);
    }
}
