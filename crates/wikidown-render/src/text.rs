//! Inline styling and word wrapping.
//!
//! Styled text is built as a list of [`Piece`]s: visible text plus the escape
//! codes that open and close its style. Wrapping splits pieces into words on
//! whitespace and re-applies each piece's style on every line it lands on, so
//! no escape sequence ever spans a line break.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wikidown_ansi::codes::{
    BOLD_OFF, BOLD_ON, FGRESET, LINK_END, LINK_START, LINK_TARGET_END, RESET, UNDERLINE_OFF,
    UNDERLINE_ON,
};
use wikidown_ansi::sanitize::{is_safe_url, sanitize_for_terminal};
use wikidown_config::ComputedStyle;
use wikidown_core::FragmentId;
use wikidown_parser::InlineElement;

use crate::tree::Part;

/// Control shown on a code fragment that can be copied.
pub const COPY_MARK: &str = "⧉";

/// Control shown on the fragment copied last.
pub const COPIED_MARK: &str = "✓";

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub open: String,
    pub close: String,
    /// Kept on one line when it fits; never split at its inner spaces.
    pub atomic: bool,
}

impl Piece {
    /// Unstyled text.
    pub fn plain(text: &str) -> Self {
        Self::styled(text, "", "")
    }

    /// Styled text, breakable at whitespace.
    pub fn styled(text: &str, open: &str, close: &str) -> Self {
        Self {
            text: sanitize_for_terminal(text),
            open: open.to_string(),
            close: close.to_string(),
            atomic: false,
        }
    }

    /// Styled text kept together.
    pub fn atomic(text: &str, open: &str, close: &str) -> Self {
        Self {
            atomic: true,
            ..Self::styled(text, open, close)
        }
    }
}

struct Token<'a> {
    text: &'a str,
    open: &'a str,
    close: &'a str,
}

/// Group pieces into words. Pieces that touch without whitespace between
/// them belong to the same word.
fn words(pieces: &[Piece]) -> Vec<Vec<Token<'_>>> {
    let mut words = Vec::new();
    let mut current = Vec::new();

    for piece in pieces {
        let token = |text| Token {
            text,
            open: &piece.open,
            close: &piece.close,
        };
        if piece.atomic {
            current.push(token(piece.text.as_str()));
            continue;
        }

        let mut start = None;
        for (i, ch) in piece.text.char_indices() {
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    current.push(token(&piece.text[s..i]));
                }
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            current.push(token(&piece.text[s..]));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn push_styled(line: &mut String, open: &str, text: &str, close: &str) {
    if text.is_empty() {
        return;
    }
    line.push_str(open);
    line.push_str(text);
    line.push_str(close);
}

/// Wrap pieces to `width` columns.
///
/// Words are separated by single spaces. A word wider than a whole line is
/// broken between characters.
pub fn wrap(pieces: &[Piece], width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;

    for word in words(pieces) {
        let word_width: usize = word.iter().map(|t| t.text.width()).sum();

        if used > 0 && used + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        if used > 0 {
            line.push(' ');
            used += 1;
        }

        if used + word_width <= width {
            for t in &word {
                push_styled(&mut line, t.open, t.text, t.close);
            }
            used += word_width;
            continue;
        }

        for t in &word {
            let mut chunk = String::new();
            for ch in t.text.chars() {
                let cw = ch.width().unwrap_or(0);
                if used > 0 && used + cw > width {
                    push_styled(&mut line, t.open, &chunk, t.close);
                    chunk.clear();
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                chunk.push(ch);
                used += cw;
            }
            push_styled(&mut line, t.open, &chunk, t.close);
        }
    }

    if used > 0 || !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wrap unstyled text.
pub fn simple_wrap(text: &str, width: usize) -> Vec<String> {
    wrap(&[Piece::plain(text)], width)
}

/// Pieces for a run of formatted spans.
pub fn inline_pieces(spans: &[InlineElement], style: &ComputedStyle, links: bool) -> Vec<Piece> {
    let mut pieces = Vec::new();
    for span in spans {
        push_span(&mut pieces, span, style, links);
    }
    pieces
}

fn push_span(pieces: &mut Vec<Piece>, span: &InlineElement, style: &ComputedStyle, links: bool) {
    match span {
        InlineElement::Text(text) => {
            pieces.push(Piece::styled(text, &style.text_fg, FGRESET));
        }
        InlineElement::Bold(text) => {
            let open = format!("{}{}", BOLD_ON, style.text_fg);
            let close = format!("{}{}", BOLD_OFF, FGRESET);
            pieces.push(Piece::styled(text, &open, &close));
        }
        InlineElement::Highlight(text) => {
            let open = format!("{}{}{}", style.code_bg, style.primary_fg, BOLD_ON);
            let close = format!("{}{}", BOLD_OFF, RESET);
            pieces.push(Piece::styled(text, &open, &close));
        }
        InlineElement::Link { text, url } => {
            let (open, close) = if links && is_safe_url(url) {
                (
                    format!(
                        "{}{}{}{}{}",
                        LINK_START, url, LINK_TARGET_END, style.primary_fg, UNDERLINE_ON
                    ),
                    format!("{}{}{}", UNDERLINE_OFF, FGRESET, LINK_END),
                )
            } else {
                (
                    format!("{}{}", style.primary_fg, UNDERLINE_ON),
                    format!("{}{}", UNDERLINE_OFF, FGRESET),
                )
            };
            pieces.push(Piece::styled(text, &open, &close));
            pieces.push(Piece::plain(" "));
            pieces.push(Piece::atomic(&format!("({})", url), &style.muted_fg, FGRESET));
        }
        InlineElement::Code(text) => {
            pieces.push(code_chip(text, None, false, style));
        }
    }
}

/// An inline code fragment with its copy control.
fn code_chip(text: &str, id: Option<&FragmentId>, copied: bool, style: &ComputedStyle) -> Piece {
    let mark = if copied { COPIED_MARK } else { COPY_MARK };
    let label = match id {
        Some(id) => format!(" {} {} {} ", text, mark, id),
        None => format!(" {} {} ", text, mark),
    };
    let open = format!("{}{}", style.code_bg, style.primary_fg);
    Piece::atomic(&label, &open, RESET)
}

/// Render a paragraph's parts to wrapped lines.
///
/// `is_copied` decides which inline code fragment shows the copied mark.
pub fn render_paragraph<F>(
    parts: &[Part],
    width: usize,
    style: &ComputedStyle,
    links: bool,
    show_ids: bool,
    is_copied: F,
) -> Vec<String>
where
    F: Fn(&FragmentId) -> bool,
{
    let mut pieces = Vec::new();
    for part in parts {
        match part {
            Part::Span(span) => push_span(&mut pieces, span, style, links),
            Part::Code { id, text } => {
                let shown_id = show_ids.then_some(id);
                pieces.push(code_chip(text, shown_id, is_copied(id), style));
            }
        }
    }
    wrap(&pieces, width)
}
