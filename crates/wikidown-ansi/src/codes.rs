//! ANSI escape code constants.
//!
//! Raw escape sequences for colours, attributes, hyperlinks and the
//! OSC 52 clipboard.

/// Escape sequence prefix for 24-bit foreground color.
pub const FG: &str = "\x1b[38;2;";

/// Escape sequence prefix for 24-bit background color.
pub const BG: &str = "\x1b[48;2;";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Reset foreground color to default.
pub const FGRESET: &str = "\x1b[39m";

/// Bold on.
pub const BOLD_ON: &str = "\x1b[1m";

/// Bold off (normal intensity).
pub const BOLD_OFF: &str = "\x1b[22m";

/// Underline on.
pub const UNDERLINE_ON: &str = "\x1b[4m";

/// Underline off.
pub const UNDERLINE_OFF: &str = "\x1b[24m";

/// OSC 8 hyperlink start, followed by the target and [`LINK_TARGET_END`].
pub const LINK_START: &str = "\x1b]8;;";

/// OSC 8 hyperlink end.
pub const LINK_END: &str = "\x1b]8;;\x1b\\";

/// String terminator closing an OSC 8 target.
pub const LINK_TARGET_END: &str = "\x1b\\";

/// OSC 52 clipboard write prefix (`c` selects the clipboard).
pub const CLIPBOARD_START: &str = "\x1b]52;c;";

/// BEL terminator for OSC 52.
pub const CLIPBOARD_END: &str = "\x07";

/// Create a foreground color escape sequence.
///
/// # Example
///
/// ```
/// use wikidown_ansi::codes::fg_color;
/// assert_eq!(fg_color(255, 0, 0), "\x1b[38;2;255;0;0m");
/// ```
pub fn fg_color(r: u8, g: u8, b: u8) -> String {
    format!("{}{}m", FG, rgb_string(r, g, b))
}

/// Create a background color escape sequence.
///
/// # Example
///
/// ```
/// use wikidown_ansi::codes::bg_color;
/// assert_eq!(bg_color(0, 0, 255), "\x1b[48;2;0;0;255m");
/// ```
pub fn bg_color(r: u8, g: u8, b: u8) -> String {
    format!("{}{}m", BG, rgb_string(r, g, b))
}

fn rgb_string(r: u8, g: u8, b: u8) -> String {
    format!("{};{};{}", r, g, b)
}
