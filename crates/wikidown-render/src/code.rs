//! Fenced code block rendering.
//!
//! A block is a header row (language tag on the left, copy control on the
//! right) followed by the code lines, all on the code background and padded
//! to the full width.

use wikidown_ansi::codes::{FGRESET, RESET};
use wikidown_ansi::sanitize::sanitize_for_terminal;
use wikidown_ansi::utils::{pad_to, visible_length};
use wikidown_config::ComputedStyle;
use wikidown_core::FragmentId;
use wikidown_syntax::Highlighter;

use crate::text::{COPIED_MARK, COPY_MARK};

/// Columns a tab expands to inside code.
pub const TAB_WIDTH: usize = 4;

/// Header label of the copy control.
pub fn copy_label(copied: bool) -> String {
    if copied {
        format!("{} copied", COPIED_MARK)
    } else {
        format!("{} copy", COPY_MARK)
    }
}

/// Render the header row of a code block.
pub fn render_code_header(
    id: &FragmentId,
    language: &str,
    copied: bool,
    show_id: bool,
    width: usize,
    style: &ComputedStyle,
) -> String {
    let left = format!(" {}", sanitize_for_terminal(language));
    let control = copy_label(copied);
    let right = if show_id {
        format!("{}  {} ", id, control)
    } else {
        format!("{} ", control)
    };
    let control_fg = if copied {
        &style.primary_fg
    } else {
        &style.muted_fg
    };

    let gap = width
        .saturating_sub(visible_length(&left) + visible_length(&right))
        .max(1);
    format!(
        "{}{}{}{}{}{}{}{}",
        style.code_bg,
        style.primary_fg,
        left,
        FGRESET,
        " ".repeat(gap),
        control_fg,
        right,
        RESET
    )
}

/// Render the code lines of a block.
///
/// With a highlighter the lines are syntax coloured; the code background is
/// re-applied after each highlighted line so padding keeps it.
pub fn render_code_body(
    language: &str,
    code: &str,
    width: usize,
    style: &ComputedStyle,
    highlighter: Option<&Highlighter>,
) -> Vec<String> {
    let cleaned: Vec<String> = code
        .split('\n')
        .map(|line| sanitize_for_terminal(&line.replace('\t', &" ".repeat(TAB_WIDTH))))
        .collect();

    let rendered: Vec<String> = match highlighter {
        Some(h) => h.highlight_block(&cleaned.join("\n"), language),
        None => cleaned
            .iter()
            .map(|l| format!("{}{}{}", style.text_fg, l, FGRESET))
            .collect(),
    };

    rendered
        .iter()
        .map(|line| {
            let body = format!("{} {}{}", style.code_bg, line, style.code_bg);
            format!("{}{}", pad_to(&body, width), RESET)
        })
        .collect()
}

/// Render a whole code block: header then body.
#[allow(clippy::too_many_arguments)]
pub fn render_code_block(
    id: &FragmentId,
    language: &str,
    code: &str,
    copied: bool,
    show_id: bool,
    width: usize,
    style: &ComputedStyle,
    highlighter: Option<&Highlighter>,
) -> Vec<String> {
    let mut lines = vec![render_code_header(id, language, copied, show_id, width, style)];
    lines.extend(render_code_body(language, code, width, style, highlighter));
    lines
}
