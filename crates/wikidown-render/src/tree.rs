//! Render tree.
//!
//! The parser's blocks carry source line numbers; the render tree turns them
//! into stable identifiers for everything a reader can act on: each code
//! fragment gets a [`FragmentId`] for its copy control and each dropdown a
//! [`DropdownId`] for its toggle. Nested documents number their lines from
//! zero, so ids inside a dropdown are prefixed with the dropdown's own id.

use wikidown_core::{DropdownId, FragmentId, FragmentKind, ListKind};
use wikidown_parser::{Block, Document, InlineElement};

/// A piece of paragraph content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Formatted text span.
    Span(InlineElement),
    /// Inline code with its own copy control.
    Code { id: FragmentId, text: String },
}

/// A renderable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        parts: Vec<Part>,
    },
    List {
        kind: ListKind,
        items: Vec<Vec<InlineElement>>,
    },
    Code {
        id: FragmentId,
        language: String,
        code: String,
    },
    Dropdown {
        id: DropdownId,
        title: String,
        children: Vec<Node>,
    },
}

/// A copyable fragment found in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub id: &'a FragmentId,
    /// Text placed on the clipboard.
    pub text: &'a str,
    /// Language tag for fenced code.
    pub language: Option<&'a str>,
    /// Innermost dropdown containing the fragment.
    pub parent: Option<&'a DropdownId>,
}

impl Fragment<'_> {
    /// Fenced or inline.
    pub fn kind(&self) -> FragmentKind {
        if self.language.is_some() {
            FragmentKind::FencedCode
        } else {
            FragmentKind::InlineCode
        }
    }
}

/// Document with ids assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTree {
    nodes: Vec<Node>,
}

impl RenderTree {
    /// Assign ids to a parsed document.
    pub fn build(document: &Document) -> Self {
        Self {
            nodes: build_nodes(&document.blocks, None),
        }
    }

    /// Top-level nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether the tree has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every copyable fragment, depth-first in document order.
    pub fn fragments(&self) -> Vec<Fragment<'_>> {
        let mut out = Vec::new();
        collect_fragments(&self.nodes, None, &mut out);
        out
    }

    /// Look up a fragment by id.
    pub fn fragment(&self, id: &FragmentId) -> Option<Fragment<'_>> {
        self.fragments().into_iter().find(|f| f.id == id)
    }

    /// Every dropdown id with its title, depth-first in document order.
    pub fn dropdowns(&self) -> Vec<(&DropdownId, &str)> {
        let mut out = Vec::new();
        collect_dropdowns(&self.nodes, &mut out);
        out
    }

    /// Whether a dropdown with this id exists.
    pub fn has_dropdown(&self, id: &DropdownId) -> bool {
        self.dropdowns().iter().any(|(d, _)| *d == id)
    }
}

fn build_nodes(blocks: &[Block], scope: Option<&DropdownId>) -> Vec<Node> {
    blocks
        .iter()
        .map(|block| match block {
            Block::Heading { level, text, .. } => Node::Heading {
                level: *level,
                text: text.clone(),
            },
            Block::Paragraph { lines, spans, .. } => {
                let mut segment = 0;
                let parts = spans
                    .iter()
                    .map(|span| match span {
                        InlineElement::Code(text) => {
                            // The k-th code span is split segment 2k + 1.
                            segment = if segment == 0 { 1 } else { segment + 2 };
                            Part::Code {
                                id: FragmentId::inline(scope, lines.start, segment),
                                text: text.clone(),
                            }
                        }
                        other => Part::Span(other.clone()),
                    })
                    .collect();
                Node::Paragraph { parts }
            }
            Block::List { kind, items, .. } => Node::List {
                kind: *kind,
                items: items.iter().map(|item| item.spans.clone()).collect(),
            },
            Block::FencedCode {
                lines,
                language,
                code,
                ..
            } => Node::Code {
                id: FragmentId::fenced(scope, lines.start),
                language: language.clone(),
                code: code.clone(),
            },
            Block::Dropdown {
                lines,
                title,
                blocks,
                ..
            } => {
                let id = DropdownId::new(scope, lines.start);
                let children = build_nodes(blocks, Some(&id));
                Node::Dropdown {
                    id,
                    title: title.clone(),
                    children,
                }
            }
        })
        .collect()
}

pub(crate) fn collect_fragments<'a>(
    nodes: &'a [Node],
    parent: Option<&'a DropdownId>,
    out: &mut Vec<Fragment<'a>>,
) {
    for node in nodes {
        match node {
            Node::Paragraph { parts } => {
                for part in parts {
                    if let Part::Code { id, text } = part {
                        out.push(Fragment {
                            id,
                            text,
                            language: None,
                            parent,
                        });
                    }
                }
            }
            Node::Code { id, language, code } => out.push(Fragment {
                id,
                text: code,
                language: Some(language),
                parent,
            }),
            Node::Dropdown { id, children, .. } => collect_fragments(children, Some(id), out),
            Node::Heading { .. } | Node::List { .. } => {}
        }
    }
}

fn collect_dropdowns<'a>(nodes: &'a [Node], out: &mut Vec<(&'a DropdownId, &'a str)>) {
    for node in nodes {
        if let Node::Dropdown {
            id,
            title,
            children,
        } = node
        {
            out.push((id, title));
            collect_dropdowns(children, out);
        }
    }
}
