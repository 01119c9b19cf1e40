//! Wikidown Syntax
//!
//! Syntax highlighting for fenced code blocks using syntect.
//!
//! # Example
//!
//! ```
//! use wikidown_syntax::Highlighter;
//!
//! let highlighter = Highlighter::new();
//! let lines = highlighter.highlight_block("key: 1\nother: 2", "yaml");
//! assert_eq!(lines.len(), 2);
//! ```

mod languages;

pub use languages::{language_alias, LANGUAGE_ALIASES};

use log::{debug, warn};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::as_24_bit_terminal_escaped;

/// Reset ANSI escape code
const RESET: &str = "\x1b[0m";

/// Theme used when none is configured or the configured one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Syntax highlighter for code blocks.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    /// When set, token backgrounds are dropped so the block background shows.
    background_override: Option<(u8, u8, u8)>,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme_name", &self.theme_name)
            .field("background_override", &self.background_override)
            .finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a new highlighter with the default theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Create a highlighter with a specific theme.
    ///
    /// Unknown theme names fall back to [`DEFAULT_THEME`].
    pub fn with_theme(theme_name: &str) -> Self {
        let mut highlighter = Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: DEFAULT_THEME.to_string(),
            background_override: None,
        };
        highlighter.set_theme(theme_name);
        highlighter
    }

    /// Switch theme. Returns false, keeping the current theme, if the name
    /// is unknown.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.has_theme(theme_name) {
            self.theme_name = theme_name.to_string();
            true
        } else {
            warn!("unknown syntax theme '{}', keeping '{}'", theme_name, self.theme_name);
            false
        }
    }

    /// Get the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
    }

    /// Override the background colour of highlighted output.
    pub fn set_background(&mut self, color: Option<(u8, u8, u8)>) {
        self.background_override = color;
    }

    /// Get the background override color.
    pub fn background(&self) -> Option<(u8, u8, u8)> {
        self.background_override
    }

    /// Find the syntax for a language tag.
    pub fn syntax_for_language(&self, language: &str) -> Option<&SyntaxReference> {
        let canonical = language_alias(language);

        self.syntax_set
            .find_syntax_by_name(canonical)
            .or_else(|| self.syntax_set.find_syntax_by_token(canonical))
            .or_else(|| self.syntax_set.find_syntax_by_extension(canonical))
            .or_else(|| self.syntax_set.find_syntax_by_token(language.trim()))
    }

    /// Start highlighting a block. `None` means the theme set is empty and
    /// lines should be printed as-is.
    pub fn new_highlight_state(&self, language: &str) -> Option<HighlightState<'_>> {
        let syntax = match self.syntax_for_language(language) {
            Some(syntax) => syntax,
            None => {
                debug!("no syntax for '{}', using plain text", language);
                self.syntax_set.find_syntax_plain_text()
            }
        };
        let theme = self.theme()?;
        Some(HighlightState {
            highlighter: HighlightLines::new(syntax, theme),
        })
    }

    /// Highlight one line, carrying multi-line tokens through `state`.
    ///
    /// Returns the line with ANSI escapes and no trailing newline.
    pub fn highlight_line_with_state(&self, line: &str, state: &mut HighlightState) -> String {
        match state.highlighter.highlight_line(line, &self.syntax_set) {
            Ok(ranges) => {
                if self.background_override.is_some() {
                    self.styles_to_ansi(&ranges)
                } else {
                    let escaped = as_24_bit_terminal_escaped(&ranges, false);
                    format!("{}{}", escaped, RESET)
                }
            }
            Err(e) => {
                debug!("highlight failed: {}", e);
                line.to_string()
            }
        }
    }

    /// Foreground and font style only; backgrounds are left to the caller.
    fn styles_to_ansi(&self, ranges: &[(Style, &str)]) -> String {
        let mut output = String::new();

        for (style, text) in ranges {
            if text.is_empty() {
                continue;
            }

            let fg = style.foreground;
            let mut codes = vec![format!("38;2;{};{};{}", fg.r, fg.g, fg.b)];
            if style.font_style.contains(FontStyle::BOLD) {
                codes.push("1".to_string());
            }
            if style.font_style.contains(FontStyle::ITALIC) {
                codes.push("3".to_string());
            }
            if style.font_style.contains(FontStyle::UNDERLINE) {
                codes.push("4".to_string());
            }

            output.push_str(&format!("\x1b[{}m", codes.join(";")));
            output.push_str(text);
            // Drop bold/italic/underline before the next token without
            // touching the background.
            output.push_str("\x1b[22;23;24m");
        }

        output
    }

    /// Highlight a whole code block, one output string per source line.
    pub fn highlight_block(&self, code: &str, language: &str) -> Vec<String> {
        let Some(mut state) = self.new_highlight_state(language) else {
            return code.split('\n').map(str::to_string).collect();
        };
        code.split('\n')
            .map(|line| self.highlight_line_with_state(line, &mut state))
            .collect()
    }

    /// List available theme names.
    pub fn themes(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a theme exists.
    pub fn has_theme(&self, name: &str) -> bool {
        self.theme_set.themes.contains_key(name)
    }

    /// Check if a language tag resolves to a syntax.
    pub fn has_language(&self, name: &str) -> bool {
        self.syntax_for_language(name).is_some()
    }
}

/// Parse state carried across the lines of one code block.
pub struct HighlightState<'a> {
    highlighter: HighlightLines<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_highlighter() {
        let h = Highlighter::new();
        assert_eq!(h.theme_name(), DEFAULT_THEME);
    }

    #[test]
    fn test_with_theme() {
        let h = Highlighter::with_theme("Solarized (dark)");
        assert_eq!(h.theme_name(), "Solarized (dark)");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut h = Highlighter::with_theme("no-such-theme");
        assert_eq!(h.theme_name(), DEFAULT_THEME);
        assert!(!h.set_theme("still-missing"));
        assert!(h.set_theme("InspiredGitHub"));
        assert_eq!(h.theme_name(), "InspiredGitHub");
    }

    #[test]
    fn test_wiki_languages_resolve() {
        let h = Highlighter::new();
        for tag in ["yaml", "yml", "java", "shell", "json", "xml", "sql"] {
            assert!(h.has_language(tag), "{} should resolve", tag);
        }
    }

    #[test]
    fn test_highlight_block_keeps_line_count() {
        let h = Highlighter::new();
        let lines = h.highlight_block("database:\n  type: sqlite\n  port: 3306", "yaml");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\x1b["));
        assert!(lines[1].contains("sqlite"));
    }

    #[test]
    fn test_plain_text_fallback() {
        let h = Highlighter::new();
        let lines = h.highlight_block("just some text", "unknown-lang-xyz");
        assert!(lines[0].contains("just some text"));
    }

    #[test]
    fn test_multiline_token() {
        let h = Highlighter::new();
        let lines = h.highlight_block("/* open\n still comment */\nint x = 1;", "java");
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_background_override_has_no_background_codes() {
        let mut h = Highlighter::new();
        h.set_background(Some((30, 27, 46)));
        let lines = h.highlight_block("let x = 1;", "rust");
        assert!(lines[0].contains("38;2;"));
        assert!(!lines[0].contains("48;2;"));
        assert!(!lines[0].contains(RESET));
    }

    #[test]
    fn test_themes() {
        let h = Highlighter::new();
        assert!(h.themes().contains(&DEFAULT_THEME));
    }
}
