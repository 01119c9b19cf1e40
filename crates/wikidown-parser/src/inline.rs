//! Inline formatting cascade.
//!
//! A segment of text is split by three delimiter passes, each running only
//! over the text the previous pass left unmatched:
//!
//! 1. highlight `[[text]]`
//! 2. link `[label](url)`
//! 3. bold `**text**`
//!
//! Whatever survives all three passes becomes plain text. Matched inner text
//! is never scanned again, so `[[**x**]]` is a highlight of the literal
//! `**x**`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static HIGHLIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\r\n]+?)\]\]").unwrap());

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\r\n]+?)\]\(([^\r\n]+?)\)").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\r\n]+?)\*\*").unwrap());

/// Delimiter of inline code spans and fenced code blocks.
pub const CODE_FENCE: &str = "``";

/// One typed span of a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineElement {
    /// Plain text
    Text(String),
    /// Bold text
    Bold(String),
    /// Highlighted text
    Highlight(String),
    /// A link
    Link { text: String, url: String },
    /// Inline code, copyable on its own
    Code(String),
}

impl InlineElement {
    /// The text a reader sees, without delimiters.
    pub fn visible_text(&self) -> &str {
        match self {
            InlineElement::Text(s)
            | InlineElement::Bold(s)
            | InlineElement::Highlight(s)
            | InlineElement::Code(s) => s,
            InlineElement::Link { text, .. } => text,
        }
    }

    /// The markup this span was parsed from.
    pub fn source(&self) -> String {
        match self {
            InlineElement::Text(s) => s.clone(),
            InlineElement::Bold(s) => format!("**{}**", s),
            InlineElement::Highlight(s) => format!("[[{}]]", s),
            InlineElement::Link { text, url } => format!("[{}]({})", text, url),
            InlineElement::Code(s) => format!("{}{}{}", CODE_FENCE, s, CODE_FENCE),
        }
    }
}

/// Run the formatting cascade over `text`.
///
/// Empty input produces no spans.
///
/// # Example
///
/// ```
/// use wikidown_parser::inline::{parse_inline, InlineElement};
///
/// let spans = parse_inline("see [[this]]");
/// assert_eq!(spans, vec![
///     InlineElement::Text("see ".to_string()),
///     InlineElement::Highlight("this".to_string()),
/// ]);
/// ```
pub fn parse_inline(text: &str) -> Vec<InlineElement> {
    let mut out = Vec::new();
    highlight_pass(text, &mut out);
    out
}

/// Concatenated visible text of a span sequence.
pub fn visible_text(elements: &[InlineElement]) -> String {
    elements.iter().map(InlineElement::visible_text).collect()
}

fn highlight_pass(text: &str, out: &mut Vec<InlineElement>) {
    split_pass(
        text,
        &HIGHLIGHT_RE,
        out,
        |caps| InlineElement::Highlight(caps[1].to_string()),
        link_pass,
    );
}

fn link_pass(text: &str, out: &mut Vec<InlineElement>) {
    split_pass(
        text,
        &LINK_RE,
        out,
        |caps| InlineElement::Link {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        },
        bold_pass,
    );
}

fn bold_pass(text: &str, out: &mut Vec<InlineElement>) {
    split_pass(
        text,
        &BOLD_RE,
        out,
        |caps| InlineElement::Bold(caps[1].to_string()),
        |rest, out| out.push(InlineElement::Text(rest.to_string())),
    );
}

/// Emit a span per match of `re`, handing the gaps between matches to
/// `remainder`. Matches are leftmost, non-overlapping and lazy.
fn split_pass(
    text: &str,
    re: &Regex,
    out: &mut Vec<InlineElement>,
    matched: fn(&Captures<'_>) -> InlineElement,
    remainder: fn(&str, &mut Vec<InlineElement>),
) {
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            remainder(&text[last..whole.start()], out);
        }
        out.push(matched(&caps));
        last = whole.end();
    }
    if last < text.len() {
        remainder(&text[last..], out);
    }
}
