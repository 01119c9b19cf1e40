//! Terminal output sanitization utilities.
//!
//! Page content comes from an editable wiki, so everything user-authored is
//! stripped of control characters before it reaches the terminal, and link
//! targets are only turned into OSC 8 hyperlinks when their scheme is safe.

/// Sanitize a string for safe terminal output.
///
/// Removes control characters except tab.
///
/// # Example
/// ```
/// use wikidown_ansi::sanitize::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("Hello\x1b[31mWorld"), "Hello[31mWorld");
/// ```
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\t')
        .collect()
}

/// Check if a URL is safe for OSC 8 hyperlinks.
///
/// A safe URL starts with `http://`, `https://`, or `mailto:` and contains
/// no control characters.
///
/// # Example
/// ```
/// use wikidown_ansi::sanitize::is_safe_url;
///
/// assert!(is_safe_url("https://discord.gg/manager"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    let safe_scheme = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:");

    safe_scheme && !url.chars().any(|c| c.is_control())
}
