//! Heading rendering.
//!
//! - h1: bold, accent colour, `═` rule
//! - h2: bold, `─` rule
//! - h3: bold

use unicode_width::UnicodeWidthStr;
use wikidown_ansi::codes::{BOLD_OFF, BOLD_ON, FGRESET};
use wikidown_config::ComputedStyle;

use crate::text::simple_wrap;

/// Render a heading. Heading text is literal; no inline formatting applies.
pub fn render_heading(level: u8, text: &str, width: usize, style: &ComputedStyle) -> Vec<String> {
    let mut lines = simple_wrap(text, width);
    if lines.is_empty() {
        lines.push(String::new());
    }

    let color = if level == 1 {
        &style.primary_fg
    } else {
        &style.text_fg
    };
    let rule_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut result: Vec<String> = lines
        .iter()
        .map(|line| format!("{}{}{}{}{}", BOLD_ON, color, line, FGRESET, BOLD_OFF))
        .collect();

    let rule = match level {
        1 => Some('═'),
        2 => Some('─'),
        _ => None,
    };
    if let Some(ch) = rule {
        result.push(format!(
            "{}{}{}",
            style.border_fg,
            ch.to_string().repeat(rule_width),
            FGRESET
        ));
    }

    result
}
