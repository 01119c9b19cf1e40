//! List rendering.

use unicode_width::UnicodeWidthStr;
use wikidown_ansi::codes::FGRESET;
use wikidown_config::ComputedStyle;
use wikidown_core::ListKind;
use wikidown_parser::InlineElement;

use crate::text::{inline_pieces, wrap};

/// Bullet for unordered lists.
pub const BULLET: &str = "•";

/// Render a list. Ordered lists are numbered from 1 in item order,
/// whatever numbers the source used.
///
/// Wrapped item text hangs under the first character after the marker.
pub fn render_list(
    kind: ListKind,
    items: &[Vec<InlineElement>],
    width: usize,
    style: &ComputedStyle,
    links: bool,
) -> Vec<String> {
    let markers: Vec<String> = (1..=items.len())
        .map(|n| match kind {
            ListKind::Unordered => BULLET.to_string(),
            ListKind::Ordered => format!("{}.", n),
        })
        .collect();
    let marker_width = markers.iter().map(|m| m.width()).max().unwrap_or(0);
    let indent = marker_width + 1;

    let mut lines = Vec::new();
    for (marker, item) in markers.iter().zip(items) {
        let body = wrap(
            &inline_pieces(item, style, links),
            width.saturating_sub(indent),
        );
        let pad = " ".repeat(marker_width - marker.width());
        let head = format!("{}{}{}{} ", pad, style.primary_fg, marker, FGRESET);

        match body.split_first() {
            Some((first, rest)) => {
                lines.push(format!("{}{}", head, first));
                for line in rest {
                    lines.push(format!("{}{}", " ".repeat(indent), line));
                }
            }
            None => lines.push(head.trim_end().to_string()),
        }
    }
    lines
}
