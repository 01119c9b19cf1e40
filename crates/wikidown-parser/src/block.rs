//! Block tree produced by the scanner.

use std::ops::Range;

use wikidown_core::ListKind;

use crate::inline::{InlineElement, CODE_FENCE};

/// One item of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// The marker as written, e.g. `"- "` or `"12. "`.
    pub marker: String,
    /// Formatted item text.
    pub spans: Vec<InlineElement>,
}

impl ListItem {
    /// The source line this item came from.
    pub fn source(&self) -> String {
        let mut out = self.marker.clone();
        out.extend(self.spans.iter().map(InlineElement::source));
        out
    }
}

/// A classified block of a document.
///
/// `lines` is the range of source lines the block consumed, relative to the
/// document it was scanned from. Dropdown bodies are separate documents, so
/// nested blocks number their lines from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# `, `## ` or `### ` heading. The text is literal.
    Heading {
        lines: Range<usize>,
        level: u8,
        text: String,
    },
    /// Collapsible `{{<Title>` … `}}` section.
    Dropdown {
        lines: Range<usize>,
        title: String,
        /// Captured body, trimmed, before it was scanned.
        body: String,
        blocks: Vec<Block>,
        /// Whether a `}}` line ended the section.
        closed: bool,
    },
    /// Fenced code with a quoted language tag.
    FencedCode {
        lines: Range<usize>,
        language: String,
        /// The copyable code text.
        code: String,
        /// Whether a closing fence ended the block.
        closed: bool,
    },
    /// Run of consecutive list lines.
    List {
        lines: Range<usize>,
        kind: ListKind,
        items: Vec<ListItem>,
    },
    /// A single line of formatted text, possibly with inline code.
    Paragraph {
        lines: Range<usize>,
        spans: Vec<InlineElement>,
        /// Number of pieces the line split into on the code fence; 1 when the
        /// line has no inline code.
        segments: usize,
    },
}

impl Block {
    /// Source lines this block consumed.
    pub fn lines(&self) -> Range<usize> {
        match self {
            Block::Heading { lines, .. }
            | Block::Dropdown { lines, .. }
            | Block::FencedCode { lines, .. }
            | Block::List { lines, .. }
            | Block::Paragraph { lines, .. } => lines.clone(),
        }
    }

    /// Index of the first source line.
    pub fn line(&self) -> usize {
        self.lines().start
    }

    /// Short name for logs and listings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Dropdown { .. } => "dropdown",
            Block::FencedCode { .. } => "code",
            Block::List { .. } => "list",
            Block::Paragraph { .. } => "paragraph",
        }
    }

    /// Rebuild the source text of a single-line-per-unit block.
    ///
    /// Headings, lists, and paragraphs reconstruct their lines exactly.
    /// Dropdowns and fenced code trim their captured bodies, so `None` is
    /// returned for them.
    pub fn source(&self) -> Option<String> {
        match self {
            Block::Heading { level, text, .. } => {
                Some(format!("{} {}", "#".repeat(*level as usize), text))
            }
            Block::List { items, .. } => Some(
                items
                    .iter()
                    .map(ListItem::source)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Block::Paragraph { spans, segments, .. } => {
                Some(paragraph_source(spans, *segments))
            }
            Block::Dropdown { .. } | Block::FencedCode { .. } => None,
        }
    }
}

fn paragraph_source(spans: &[InlineElement], segments: usize) -> String {
    let mut out = String::new();
    let mut segment = 0;
    for span in spans {
        match span {
            InlineElement::Code(code) => {
                // Code spans sit on odd segments; the fence after one is only
                // present when another segment follows.
                segment = if segment % 2 == 0 { segment + 1 } else { segment + 2 };
                out.push_str(CODE_FENCE);
                out.push_str(code);
                if segment + 1 < segments {
                    out.push_str(CODE_FENCE);
                }
            }
            other => out.push_str(&other.source()),
        }
    }
    out
}

/// A scanned document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks in source order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Number of top-level blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document produced no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate top-level blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Visit every block depth-first, pre-order, with its nesting depth.
    pub fn walk<F: FnMut(&Block, usize)>(&self, mut visit: F) {
        fn go<F: FnMut(&Block, usize)>(blocks: &[Block], depth: usize, visit: &mut F) {
            for block in blocks {
                visit(block, depth);
                if let Block::Dropdown { blocks, .. } = block {
                    go(blocks, depth + 1, visit);
                }
            }
        }
        go(&self.blocks, 0, &mut visit);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
