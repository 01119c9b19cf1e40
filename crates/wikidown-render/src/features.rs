//! Terminal features: clipboard integration and terminal size.
//!
//! - **Clipboard (OSC 52)**: copied fragments go to the system clipboard
//!   through the terminal, so it also works over SSH and inside tmux.
//! - **Terminal size**: width detection for wrapping.

use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use wikidown_ansi::codes::{CLIPBOARD_END, CLIPBOARD_START};
use wikidown_config::Config;

/// Maximum size for OSC 52 clipboard (50KB - terminal limit).
pub const MAX_CLIPBOARD_SIZE: usize = 50_000;

/// Fallback width when the terminal size cannot be read.
const FALLBACK_WIDTH: u16 = 80;

/// Send `text` to the terminal clipboard with OSC 52.
///
/// Payloads over [`MAX_CLIPBOARD_SIZE`] bytes are skipped silently. Returns
/// whether a sequence was written.
///
/// # Example
/// ```
/// use wikidown_render::features::copy_to_clipboard;
///
/// let mut out = Vec::new();
/// assert!(copy_to_clipboard("ls", &mut out).unwrap());
/// assert_eq!(out, b"\x1b]52;c;bHM=\x07");
/// ```
pub fn copy_to_clipboard<W: Write>(text: &str, writer: &mut W) -> io::Result<bool> {
    if text.len() > MAX_CLIPBOARD_SIZE {
        debug!("clipboard payload of {} bytes skipped", text.len());
        return Ok(false);
    }

    let encoded = STANDARD.encode(text.as_bytes());
    write!(writer, "{}{}{}", CLIPBOARD_START, encoded, CLIPBOARD_END)?;
    writer.flush()?;
    Ok(true)
}

/// Whether stdout is an interactive terminal.
pub fn is_tty() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}

/// Terminal size as (columns, rows), or (80, 24) if detection fails.
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((FALLBACK_WIDTH, 24))
}

/// Terminal width in columns.
pub fn terminal_width() -> usize {
    let (cols, _) = terminal_size();
    if cols == 0 {
        FALLBACK_WIDTH as usize
    } else {
        cols as usize
    }
}

/// Feature flags for rendering.
#[derive(Debug, Clone)]
pub struct RenderFeatures {
    /// Emit OSC 52 when a fragment is copied.
    pub clipboard: bool,

    /// Emit OSC 8 hyperlinks for safe link targets.
    pub links: bool,

    /// Syntax-highlight fenced code.
    pub highlight: bool,

    /// Show fragment and dropdown ids next to their controls.
    pub show_ids: bool,

    /// Fixed width (None = auto-detect from terminal).
    pub fixed_width: Option<usize>,

    /// Left margin in columns.
    pub margin: usize,
}

impl Default for RenderFeatures {
    fn default() -> Self {
        Self {
            clipboard: true,
            links: true,
            highlight: true,
            show_ids: false,
            fixed_width: None,
            margin: 2,
        }
    }
}

impl RenderFeatures {
    /// Features from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            clipboard: config.features.clipboard,
            links: config.features.links,
            highlight: config.features.highlight,
            show_ids: false,
            fixed_width: (config.style.width > 0).then_some(config.style.width),
            margin: config.style.margin,
        }
    }

    /// Total output width, margin included.
    pub fn full_width(&self) -> usize {
        self.fixed_width.unwrap_or_else(terminal_width)
    }

    /// Width left for content after the margin.
    pub fn effective_width(&self) -> usize {
        self.full_width().saturating_sub(self.margin)
    }
}
