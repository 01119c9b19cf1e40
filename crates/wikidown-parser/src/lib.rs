//! Wikidown Parser
//!
//! Scans wiki page markup into a tree of typed blocks and inline spans.
//!
//! # Overview
//!
//! The scanner walks the lines of a document with a single forward pointer.
//! Each line is tested against the block rules in a fixed order and the
//! first rule that matches decides the block and how many lines it consumes:
//!
//! | Markup | Block |
//! |---|---|
//! | `# `, `## `, `### ` | heading |
//! | `{{<Title>` … `}}` | dropdown, body scanned recursively |
//! | ``` ``'lang' ``` … ` `` ` | fenced code |
//! | text with ` `` ` | paragraph with inline code |
//! | `- ` / `* ` lines | unordered list |
//! | `1. ` lines | ordered list |
//! | blank | skipped |
//! | anything else | paragraph |
//!
//! Every input is valid. Unterminated fences and dropdowns run to the end of
//! the document.
//!
//! # Example
//!
//! ```
//! use wikidown_parser::{parse, Block};
//!
//! let doc = parse("# Title\n- a\n- b");
//! assert_eq!(doc.len(), 2);
//! assert!(matches!(&doc.blocks[0], Block::Heading { level: 1, text, .. } if text == "Title"));
//! ```

pub mod block;
pub mod inline;
pub mod snippet;

pub use block::{Block, Document, ListItem};
pub use inline::{parse_inline, visible_text, InlineElement, CODE_FENCE};
pub use snippet::{insert, Snippet};

use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;
use wikidown_core::ListKind;

/// Dropdown opener: `{{<Title>` filling the whole line.
static DROPDOWN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{\{<([^\r\n]+?)>$").unwrap());

/// Fenced code opener with quoted language tag.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^``'([^\r\n]+?)'").unwrap());

/// Unordered list marker.
static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s").unwrap());

/// Ordered list marker.
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").unwrap());

/// Line prefix that closes a dropdown.
const DROPDOWN_CLOSE: &str = "}}";

/// Nesting depth past which dropdown bodies are no longer scanned.
pub const MAX_DROPDOWN_DEPTH: usize = 64;

/// Parse a document with the default parser.
pub fn parse(text: &str) -> Document {
    Parser::new().parse(text)
}

/// Block scanner.
#[derive(Debug, Clone)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the default dropdown depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: MAX_DROPDOWN_DEPTH,
        }
    }

    /// Create a parser with a custom dropdown depth limit.
    ///
    /// Dropdowns nested deeper than `max_depth` keep their body as one raw
    /// text paragraph.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Scan `text` into a document.
    pub fn parse(&self, text: &str) -> Document {
        Document {
            blocks: self.scan(text, 0),
        }
    }

    fn scan(&self, text: &str, depth: usize) -> Vec<Block> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut blocks = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            let start = i;

            if let Some(text) = line.strip_prefix("# ") {
                blocks.push(heading(start, 1, text));
                i += 1;
            } else if let Some(text) = line.strip_prefix("## ") {
                blocks.push(heading(start, 2, text));
                i += 1;
            } else if let Some(text) = line.strip_prefix("### ") {
                blocks.push(heading(start, 3, text));
                i += 1;
            } else if let Some(caps) = DROPDOWN_RE.captures(line) {
                let title = caps[1].to_string();
                i += 1;
                let mut body = String::new();
                while i < lines.len() && !lines[i].starts_with(DROPDOWN_CLOSE) {
                    body.push_str(lines[i]);
                    body.push('\n');
                    i += 1;
                }
                let closed = i < lines.len();
                if closed {
                    i += 1;
                }
                let body = body.trim().to_string();
                trace!("dropdown '{}' at line {} (depth {})", title, start, depth + 1);
                let inner = self.dropdown_body(&body, depth + 1);
                blocks.push(Block::Dropdown {
                    lines: start..i,
                    title,
                    body,
                    blocks: inner,
                    closed,
                });
            } else if let Some(caps) = FENCE_RE.captures(line) {
                let language = caps[1].to_string();
                let rest = &line[caps.get(0).map_or(0, |m| m.end())..];
                let (code, closed) = if let Some(code) = rest.strip_suffix(CODE_FENCE) {
                    i += 1;
                    (code.to_string(), true)
                } else {
                    let mut code = String::from(rest);
                    code.push('\n');
                    i += 1;
                    while i < lines.len() && !lines[i].ends_with(CODE_FENCE) {
                        code.push_str(lines[i]);
                        code.push('\n');
                        i += 1;
                    }
                    let closed = i < lines.len();
                    if let Some(last) = lines.get(i) {
                        code.push_str(&last[..last.len() - CODE_FENCE.len()]);
                        i += 1;
                    }
                    (code.trim().to_string(), closed)
                };
                if !closed {
                    debug!("unterminated code fence at line {} runs to end", start);
                }
                blocks.push(Block::FencedCode {
                    lines: start..i,
                    language,
                    code,
                    closed,
                });
            } else if line.contains(CODE_FENCE) {
                let pieces: Vec<&str> = line.split(CODE_FENCE).collect();
                let mut spans = Vec::new();
                for (idx, piece) in pieces.iter().enumerate() {
                    if idx % 2 == 1 {
                        spans.push(InlineElement::Code(piece.to_string()));
                    } else {
                        spans.extend(parse_inline(piece));
                    }
                }
                blocks.push(Block::Paragraph {
                    lines: start..start + 1,
                    spans,
                    segments: pieces.len(),
                });
                i += 1;
            } else if UNORDERED_RE.is_match(line) {
                let items = collect_list(&lines, &mut i, &UNORDERED_RE);
                blocks.push(Block::List {
                    lines: start..i,
                    kind: ListKind::Unordered,
                    items,
                });
            } else if ORDERED_RE.is_match(line) {
                let items = collect_list(&lines, &mut i, &ORDERED_RE);
                blocks.push(Block::List {
                    lines: start..i,
                    kind: ListKind::Ordered,
                    items,
                });
            } else if line.trim().is_empty() {
                i += 1;
            } else {
                blocks.push(Block::Paragraph {
                    lines: start..start + 1,
                    spans: parse_inline(line),
                    segments: 1,
                });
                i += 1;
            }

            if let Some(block) = blocks.last() {
                if block.line() == start {
                    trace!("line {}: {} ({} lines)", start, block.kind_name(), i - start);
                }
            }
        }

        blocks
    }

    fn dropdown_body(&self, body: &str, depth: usize) -> Vec<Block> {
        if depth <= self.max_depth {
            return self.scan(body, depth);
        }
        debug!("dropdown depth {} over limit {}; body kept as text", depth, self.max_depth);
        if body.is_empty() {
            return Vec::new();
        }
        vec![Block::Paragraph {
            lines: 0..body.split('\n').count(),
            spans: vec![InlineElement::Text(body.to_string())],
            segments: 1,
        }]
    }
}

fn heading(line: usize, level: u8, text: &str) -> Block {
    Block::Heading {
        lines: line..line + 1,
        level,
        text: text.to_string(),
    }
}

/// Consume consecutive lines matching `marker`, advancing `i` past them.
///
/// The item text is the line after the marker. Lines inside the run are not
/// checked against any other rule.
fn collect_list(lines: &[&str], i: &mut usize, marker: &Regex) -> Vec<ListItem> {
    let mut items = Vec::new();
    while let Some(m) = lines.get(*i).and_then(|line| marker.find(line)) {
        let line = lines[*i];
        items.push(ListItem {
            marker: m.as_str().to_string(),
            spans: parse_inline(&line[m.end()..]),
        });
        *i += 1;
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineElement {
        InlineElement::Text(s.to_string())
    }

    #[test]
    fn test_heading_levels() {
        let doc = parse("# One\n## Two\n### Three");
        let levels: Vec<(u8, &str)> = doc
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level, text, .. } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![(1, "One"), (2, "Two"), (3, "Three")]);
    }

    #[test]
    fn test_heading_text_is_literal() {
        let doc = parse("# **not bold** [[x]]");
        assert_eq!(
            doc.blocks,
            vec![Block::Heading {
                lines: 0..1,
                level: 1,
                text: "**not bold** [[x]]".to_string(),
            }]
        );
    }

    #[test]
    fn test_four_hashes_is_paragraph() {
        let doc = parse("#### deep");
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_heading_with_inline_code_stays_heading() {
        let doc = parse("# use ``x``");
        assert!(matches!(&doc.blocks[0], Block::Heading { text, .. } if text == "use ``x``"));
    }

    #[test]
    fn test_unordered_list() {
        let doc = parse("- a\n- b");
        assert_eq!(
            doc.blocks,
            vec![Block::List {
                lines: 0..2,
                kind: ListKind::Unordered,
                items: vec![
                    ListItem {
                        marker: "- ".to_string(),
                        spans: vec![text("a")],
                    },
                    ListItem {
                        marker: "- ".to_string(),
                        spans: vec![text("b")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_mixed_bullets_one_list() {
        let doc = parse("- a\n* b\nafter");
        assert_eq!(doc.len(), 2);
        match &doc.blocks[0] {
            Block::List { items, kind, .. } => {
                assert_eq!(*kind, ListKind::Unordered);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_ordered_list_strips_marker() {
        let doc = parse("1. first\n10. **tenth**");
        match &doc.blocks[0] {
            Block::List { items, kind, .. } => {
                assert_eq!(*kind, ListKind::Ordered);
                assert_eq!(items[0].spans, vec![text("first")]);
                assert_eq!(items[1].marker, "10. ");
                assert_eq!(items[1].spans, vec![InlineElement::Bold("tenth".to_string())]);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_ordered_list_needs_ascii_digits() {
        let doc = parse("١. arabic-indic");
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_list_run_keeps_inline_code_lines() {
        // Only the marker is checked while a run continues.
        let doc = parse("- a\n- use ``x``");
        assert_eq!(doc.len(), 1);
        match &doc.blocks[0] {
            Block::List { items, .. } => {
                assert_eq!(items[1].spans, vec![text("use ``x``")]);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_with_inline_code_first_is_paragraph() {
        let doc = parse("- use ``x``\n- b");
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
        assert!(matches!(doc.blocks[1], Block::List { .. }));
    }

    #[test]
    fn test_fenced_code_multiline() {
        let doc = parse("``'yaml'\nkey: 1\n``");
        assert_eq!(
            doc.blocks,
            vec![Block::FencedCode {
                lines: 0..3,
                language: "yaml".to_string(),
                code: "key: 1".to_string(),
                closed: true,
            }]
        );
    }

    #[test]
    fn test_fenced_code_same_line() {
        let doc = parse("``'sh' ls -la ``");
        assert_eq!(
            doc.blocks,
            vec![Block::FencedCode {
                lines: 0..1,
                language: "sh".to_string(),
                code: " ls -la ".to_string(),
                closed: true,
            }]
        );
    }

    #[test]
    fn test_fenced_code_closing_line_content_kept() {
        let doc = parse("``'js'const a = 1;\nconst b = 2;``\nafter");
        match &doc.blocks[0] {
            Block::FencedCode { code, lines, .. } => {
                assert_eq!(code, "const a = 1;\nconst b = 2;");
                assert_eq!(*lines, 0..2);
            }
            other => panic!("expected code, got {:?}", other),
        }
        assert_eq!(doc.blocks[1].line(), 2);
    }

    #[test]
    fn test_fenced_code_unterminated() {
        let doc = parse("text\n``'rust'\nfn main() {}\n# not a heading\n- nor a list");
        assert_eq!(doc.len(), 2);
        match &doc.blocks[1] {
            Block::FencedCode { code, closed, lines, .. } => {
                assert!(!closed);
                assert_eq!(*lines, 1..5);
                assert_eq!(code, "fn main() {}\n# not a heading\n- nor a list");
            }
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn test_fence_body_not_scanned() {
        let doc = parse("``'md'\n{{<x>\n**b**\n``");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_inline_code_segments() {
        let doc = parse("run ``cargo build`` then **test** ``cargo test``");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                lines: 0..1,
                spans: vec![
                    text("run "),
                    InlineElement::Code("cargo build".to_string()),
                    text(" then "),
                    InlineElement::Bold("test".to_string()),
                    text(" "),
                    InlineElement::Code("cargo test".to_string()),
                ],
                segments: 5,
            }]
        );
    }

    #[test]
    fn test_bare_fence_is_empty_code() {
        let doc = parse("``");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                lines: 0..1,
                spans: vec![InlineElement::Code(String::new())],
                segments: 2,
            }]
        );
    }

    #[test]
    fn test_dropdown() {
        let doc = parse("{{<Help>\ninner [[x]]\n}}");
        assert_eq!(doc.len(), 1);
        match &doc.blocks[0] {
            Block::Dropdown {
                title,
                blocks,
                closed,
                lines,
                ..
            } => {
                assert_eq!(title, "Help");
                assert!(closed);
                assert_eq!(*lines, 0..3);
                assert_eq!(
                    blocks,
                    &vec![Block::Paragraph {
                        lines: 0..1,
                        spans: vec![text("inner "), InlineElement::Highlight("x".to_string())],
                        segments: 1,
                    }]
                );
            }
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_dropdown_body_trimmed_before_scan() {
        let doc = parse("{{<T>\n\n   - a\n\n}}");
        match &doc.blocks[0] {
            Block::Dropdown { body, blocks, .. } => {
                assert_eq!(body, "- a");
                assert!(matches!(blocks[0], Block::List { .. }));
            }
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_dropdown_close_prefix() {
        let doc = parse("{{<T>\na\n}} trailing\nafter");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks[1].line(), 3);
    }

    #[test]
    fn test_nested_dropdowns_close_on_first_marker() {
        // The first `}}` ends the outer capture, so the inner opener is
        // unterminated inside it and the second `}}` is a paragraph.
        let doc = parse("{{<Outer>\n{{<Inner>\nx\n}}\n}}");
        assert_eq!(doc.len(), 2);
        match &doc.blocks[0] {
            Block::Dropdown { blocks, .. } => match &blocks[0] {
                Block::Dropdown { title, closed, .. } => {
                    assert_eq!(title, "Inner");
                    assert!(!closed);
                }
                other => panic!("expected inner dropdown, got {:?}", other),
            },
            other => panic!("expected dropdown, got {:?}", other),
        }
        assert!(matches!(&doc.blocks[1], Block::Paragraph { spans, .. } if spans == &vec![text("}}")]));
    }

    #[test]
    fn test_dropdown_unterminated() {
        let doc = parse("{{<Open>\nline one\nline two");
        match &doc.blocks[0] {
            Block::Dropdown { closed, lines, body, .. } => {
                assert!(!closed);
                assert_eq!(*lines, 0..3);
                assert_eq!(body, "line one\nline two");
            }
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_dropdown_falls_through() {
        let doc = parse("{{<no close\n{{<> \n{{<x>y");
        assert_eq!(doc.len(), 3);
        assert!(doc.iter().all(|b| matches!(b, Block::Paragraph { .. })));
    }

    #[test]
    fn test_carriage_return_breaks_openers() {
        let doc = parse("{{<a\rb>\nx");
        assert_eq!(doc.len(), 2);
        assert!(doc.iter().all(|b| matches!(b, Block::Paragraph { .. })));

        // Not a fence, so the line is a paragraph with inline code.
        let doc = parse("``'a\rb'\n``");
        assert!(matches!(doc.blocks[0], Block::Paragraph { segments: 2, .. }));
    }

    #[test]
    fn test_visible_text_reparses_as_plain_paragraph() {
        let doc = parse("[[A]] and [B](http://u) and **C** tail");
        let visible = match &doc.blocks[0] {
            Block::Paragraph { spans, .. } => visible_text(spans),
            other => panic!("expected paragraph, got {:?}", other),
        };
        assert_eq!(visible, "A and B and C tail");

        assert_eq!(
            parse(&visible).blocks,
            vec![Block::Paragraph {
                lines: 0..1,
                spans: vec![text("A and B and C tail")],
                segments: 1,
            }]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let doc = parse("\n   \n\t\nA\n\nB\n");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks[0].line(), 3);
        assert_eq!(doc.blocks[1].line(), 5);
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_depth_limit_keeps_raw_text() {
        let parser = Parser::with_max_depth(1);
        let doc = parser.parse("{{<A>\n{{<B>\n- x\n");
        match &doc.blocks[0] {
            Block::Dropdown { blocks, .. } => match &blocks[0] {
                Block::Dropdown { title, blocks, .. } => {
                    assert_eq!(title, "B");
                    assert_eq!(blocks, &vec![Block::Paragraph {
                        lines: 0..1,
                        spans: vec![text("- x")],
                        segments: 1,
                    }]);
                }
                other => panic!("expected dropdown, got {:?}", other),
            },
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut src = String::new();
        for n in 0..500 {
            src.push_str(&format!("{{{{<L{}>\n", n));
        }
        src.push_str("leaf");
        let doc = parse(&src);
        let mut max_depth = 0;
        doc.walk(|_, depth| max_depth = max_depth.max(depth));
        // The last scanned body holds one more dropdown whose body is raw text.
        assert_eq!(max_depth, MAX_DROPDOWN_DEPTH + 1);
    }

    #[test]
    fn test_walk_is_preorder() {
        let doc = parse("# H\n{{<D>\ntext\n}}\ntail");
        let mut seen = Vec::new();
        doc.walk(|block, depth| seen.push((block.kind_name(), depth)));
        assert_eq!(
            seen,
            vec![
                ("heading", 0),
                ("dropdown", 0),
                ("paragraph", 1),
                ("paragraph", 0),
            ]
        );
    }

    #[test]
    fn test_source_reconstruction() {
        let src = "# Title\n- **a**\n* [b](c)\n3. x\nrun ``ls`` [[now]]\n``open";
        let doc = parse(src);
        let rebuilt: Vec<String> = doc.iter().filter_map(Block::source).collect();
        assert_eq!(rebuilt.join("\n"), src);
    }

    #[test]
    fn test_crlf_lines_keep_carriage_return() {
        let doc = parse("# Title\r\nbody\r\n");
        assert!(matches!(&doc.blocks[0], Block::Heading { text, .. } if text == "Title\r"));
        assert!(matches!(&doc.blocks[1], Block::Paragraph { spans, .. } if spans == &vec![text("body\r")]));
    }
}
