//! Editor markup snippets.
//!
//! Each snippet wraps the current selection in a pair of markers, the way the
//! page editor's toolbar inserts syntax. The selection afterwards covers the
//! originally selected text inside the new markers.

use std::ops::Range;

use log::trace;

/// A toolbar snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Snippet {
    Heading1,
    Heading2,
    Bold,
    Link,
    Highlight,
    Code,
    CodeBlock,
    Dropdown,
    List,
}

impl Snippet {
    /// Every snippet, in toolbar order.
    pub const ALL: [Snippet; 9] = [
        Snippet::Heading1,
        Snippet::Heading2,
        Snippet::Bold,
        Snippet::Link,
        Snippet::Highlight,
        Snippet::Code,
        Snippet::CodeBlock,
        Snippet::Dropdown,
        Snippet::List,
    ];

    /// Markup inserted before the selection.
    pub fn before(&self) -> &'static str {
        match self {
            Snippet::Heading1 => "# ",
            Snippet::Heading2 => "## ",
            Snippet::Bold => "**",
            Snippet::Link => "[",
            Snippet::Highlight => "[[",
            Snippet::Code => "``",
            Snippet::CodeBlock => "``'language'\n",
            Snippet::Dropdown => "{{<Title>\n",
            Snippet::List => "- ",
        }
    }

    /// Markup inserted after the selection.
    pub fn after(&self) -> &'static str {
        match self {
            Snippet::Bold => "**",
            Snippet::Link => "](url)",
            Snippet::Highlight => "]]",
            Snippet::Code => "``",
            Snippet::CodeBlock => "\n``",
            Snippet::Dropdown => "\n}}",
            Snippet::Heading1 | Snippet::Heading2 | Snippet::List => "",
        }
    }

    /// Toolbar label.
    pub fn label(&self) -> &'static str {
        match self {
            Snippet::Heading1 => "H1",
            Snippet::Heading2 => "H2",
            Snippet::Bold => "Bold",
            Snippet::Link => "Link",
            Snippet::Highlight => "Highlight",
            Snippet::Code => "Code",
            Snippet::CodeBlock => "Code Block",
            Snippet::Dropdown => "Dropdown",
            Snippet::List => "List",
        }
    }

    /// Lowercase command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Snippet::Heading1 => "h1",
            Snippet::Heading2 => "h2",
            Snippet::Bold => "bold",
            Snippet::Link => "link",
            Snippet::Highlight => "highlight",
            Snippet::Code => "code",
            Snippet::CodeBlock => "codeblock",
            Snippet::Dropdown => "dropdown",
            Snippet::List => "list",
        }
    }

    /// Look a snippet up by its command-line name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap `selection` of `content` in `snippet`.
///
/// The selection is in bytes. It is clamped to the content, reordered if
/// reversed, and moved down to the nearest char boundaries. Returns the new
/// content and the selection over the original text.
///
/// # Example
///
/// ```
/// use wikidown_parser::snippet::{insert, Snippet};
///
/// let (text, sel) = insert("say hi", 4..6, Snippet::Bold);
/// assert_eq!(text, "say **hi**");
/// assert_eq!(&text[sel], "hi");
/// ```
pub fn insert(content: &str, selection: Range<usize>, snippet: Snippet) -> (String, Range<usize>) {
    let mut start = floor_char_boundary(content, selection.start);
    let mut end = floor_char_boundary(content, selection.end);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let before = snippet.before();
    let after = snippet.after();
    let selected = &content[start..end];

    let mut out = String::with_capacity(content.len() + before.len() + after.len());
    out.push_str(&content[..start]);
    out.push_str(before);
    out.push_str(selected);
    out.push_str(after);
    out.push_str(&content[end..]);

    trace!("snippet {} inserted at {}..{}", snippet, start, end);
    let sel_start = start + before.len();
    (out, sel_start..sel_start + selected.len())
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
