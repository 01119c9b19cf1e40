//! Computed style values.
//!
//! `ComputedStyle` holds the ANSI escapes derived from the hex palette in
//! `StyleConfig`, ready to be concatenated into output.

use crate::style::StyleConfig;
use wikidown_ansi::color::{bg_hex, fg_hex};

/// Pre-computed ANSI escape strings.
///
/// An invalid palette entry computes to an empty string, which renders in
/// the terminal's default colour.
#[derive(Debug, Clone, Default)]
pub struct ComputedStyle {
    /// Foreground escape for the accent colour.
    pub primary_fg: String,

    /// Background escape for the accent colour (highlight spans).
    pub primary_bg: String,

    /// Foreground escape for body text.
    pub text_fg: String,

    /// Foreground escape for muted text.
    pub muted_fg: String,

    /// Background escape for code.
    pub code_bg: String,

    /// Foreground escape for rules and dropdown borders.
    pub border_fg: String,

    /// Margin spaces string (e.g., "  " for margin=2).
    pub margin_spaces: String,
}

impl ComputedStyle {
    /// Compute escapes from a style configuration.
    pub fn from_config(style: &StyleConfig) -> Self {
        Self {
            primary_fg: fg_hex(&style.primary),
            primary_bg: bg_hex(&style.primary),
            text_fg: fg_hex(&style.foreground),
            muted_fg: fg_hex(&style.muted),
            code_bg: bg_hex(&style.code_bg),
            border_fg: fg_hex(&style.border),
            margin_spaces: " ".repeat(style.margin),
        }
    }

    /// A style with no colours at all, keeping only the margin.
    pub fn plain(margin: usize) -> Self {
        Self {
            margin_spaces: " ".repeat(margin),
            ..Self::default()
        }
    }
}
