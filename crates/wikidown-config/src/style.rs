//! Style configuration.
//!
//! This module contains the `StyleConfig` struct: layout settings and the
//! palette used for headings, highlights, code blocks, and borders.

use serde::{Deserialize, Serialize};
use wikidown_ansi::color::hex2rgb;

/// Style configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Left margin in characters.
    /// Default: 2
    #[serde(default = "default_margin")]
    pub margin: usize,

    /// Terminal width override (0 = auto-detect).
    /// Default: 0
    #[serde(default)]
    pub width: usize,

    /// Accent colour: highlight spans, links, dropdown titles.
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Body text colour.
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Secondary text: link targets, copy controls.
    #[serde(default = "default_muted")]
    pub muted: String,

    /// Background of code blocks and inline code.
    #[serde(default = "default_code_bg")]
    pub code_bg: String,

    /// Dropdown and heading rule colour.
    #[serde(default = "default_border")]
    pub border: String,

    /// Syntax highlighting theme name.
    #[serde(default = "default_syntax")]
    pub syntax: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            width: 0,
            primary: default_primary(),
            foreground: default_foreground(),
            muted: default_muted(),
            code_bg: default_code_bg(),
            border: default_border(),
            syntax: default_syntax(),
        }
    }
}

impl StyleConfig {
    /// Merge another StyleConfig into this one.
    pub fn merge(&mut self, other: &StyleConfig) {
        self.margin = other.margin;
        self.width = other.width;
        self.primary = other.primary.clone();
        self.foreground = other.foreground.clone();
        self.muted = other.muted.clone();
        self.code_bg = other.code_bg.clone();
        self.border = other.border.clone();
        self.syntax = other.syntax.clone();
    }

    /// Palette entries that are not valid `#rrggbb` colours, by key name.
    pub fn invalid_colors(&self) -> Vec<&'static str> {
        [
            ("Primary", &self.primary),
            ("Foreground", &self.foreground),
            ("Muted", &self.muted),
            ("CodeBg", &self.code_bg),
            ("Border", &self.border),
        ]
        .into_iter()
        .filter(|(_, value)| hex2rgb(value).is_none())
        .map(|(key, _)| key)
        .collect()
    }
}

fn default_margin() -> usize {
    2
}

fn default_primary() -> String {
    "#a855f7".to_string()
}

fn default_foreground() -> String {
    "#e5e7eb".to_string()
}

fn default_muted() -> String {
    "#9ca3af".to_string()
}

fn default_code_bg() -> String {
    "#1e1b2e".to_string()
}

fn default_border() -> String {
    "#3f3a56".to_string()
}

fn default_syntax() -> String {
    "base16-ocean.dark".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_valid() {
        assert!(StyleConfig::default().invalid_colors().is_empty());
    }

    #[test]
    fn test_invalid_colors_reported() {
        let style: StyleConfig = toml::from_str(
            r##"
            Primary = "purple"
            CodeBg = "#12"
            "##,
        )
        .unwrap();
        assert_eq!(style.invalid_colors(), vec!["Primary", "CodeBg"]);
    }

    #[test]
    fn test_merge() {
        let mut base = StyleConfig::default();
        let other = StyleConfig {
            margin: 4,
            syntax: "InspiredGitHub".to_string(),
            ..StyleConfig::default()
        };
        base.merge(&other);
        assert_eq!(base.margin, 4);
        assert_eq!(base.syntax, "InspiredGitHub");
    }
}
