//! Hex colour parsing.
//!
//! Palette entries in the configuration are `#rrggbb` strings; these helpers
//! turn them into 24-bit escape sequences.

use crate::codes;

/// Parse a hex color string to RGB components.
///
/// # Example
///
/// ```
/// use wikidown_ansi::color::hex2rgb;
/// assert_eq!(hex2rgb("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(hex2rgb("nope"), None);
/// ```
pub fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Foreground escape for a hex colour, empty if the colour is invalid.
pub fn fg_hex(hex: &str) -> String {
    hex2rgb(hex)
        .map(|(r, g, b)| codes::fg_color(r, g, b))
        .unwrap_or_default()
}

/// Background escape for a hex colour, empty if the colour is invalid.
pub fn bg_hex(hex: &str) -> String {
    hex2rgb(hex)
        .map(|(r, g, b)| codes::bg_color(r, g, b))
        .unwrap_or_default()
}
