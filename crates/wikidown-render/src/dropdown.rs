//! Dropdown rendering.
//!
//! Collapsed: `▸ Title`. Expanded: `▾ Title`, the nested content behind a
//! `│ ` gutter, then a `╰─` closing line.

use wikidown_ansi::codes::{BOLD_OFF, BOLD_ON, FGRESET};
use wikidown_ansi::sanitize::sanitize_for_terminal;
use wikidown_config::ComputedStyle;
use wikidown_core::DropdownId;

/// Columns taken by the gutter in front of nested content.
pub const DROPDOWN_INDENT: usize = 2;

const COLLAPSED: &str = "▸";
const EXPANDED: &str = "▾";

/// The toggle row.
pub fn render_dropdown_header(
    id: &DropdownId,
    title: &str,
    expanded: bool,
    show_id: bool,
    style: &ComputedStyle,
) -> String {
    let arrow = if expanded { EXPANDED } else { COLLAPSED };
    let mut line = format!(
        "{}{}{} {}{}{}{}{}",
        style.border_fg,
        arrow,
        FGRESET,
        BOLD_ON,
        style.primary_fg,
        sanitize_for_terminal(title),
        FGRESET,
        BOLD_OFF
    );
    if show_id {
        line.push_str(&format!("  {}{}{}", style.muted_fg, id, FGRESET));
    }
    line
}

/// Put nested lines behind the gutter.
pub fn frame_children(lines: Vec<String>, style: &ComputedStyle) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                format!("{}│{}", style.border_fg, FGRESET)
            } else {
                format!("{}│{} {}", style.border_fg, FGRESET, line)
            }
        })
        .collect()
}

/// The closing line of an expanded dropdown.
pub fn render_dropdown_footer(style: &ComputedStyle) -> String {
    format!("{}╰─{}", style.border_fg, FGRESET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikidown_ansi::utils::visible;

    #[test]
    fn test_header_states() {
        let style = ComputedStyle::plain(0);
        let id = DropdownId::from("d4");
        assert_eq!(visible(&render_dropdown_header(&id, "Pro Tip", false, false, &style)), "▸ Pro Tip");
        assert_eq!(visible(&render_dropdown_header(&id, "Pro Tip", true, false, &style)), "▾ Pro Tip");
        assert_eq!(visible(&render_dropdown_header(&id, "Pro Tip", false, true, &style)), "▸ Pro Tip  d4");
    }

    #[test]
    fn test_frame_children() {
        let style = ComputedStyle::plain(0);
        let framed = frame_children(vec!["a".to_string(), String::new()], &style);
        let shown: Vec<String> = framed.iter().map(|l| visible(l)).collect();
        assert_eq!(shown, vec!["│ a", "│"]);
        assert_eq!(visible(&render_dropdown_footer(&style)), "╰─");
    }
}
