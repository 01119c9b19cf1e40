//! Pages and categories.

use serde::{Deserialize, Serialize};
use wikidown_parser::{parse, Block};

/// Content shown for a page id the library does not know.
pub const NOT_FOUND_CONTENT: &str = "# Page Not Found\n\nThis page doesn't exist yet.";

/// One wiki page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub order: i64,
    /// Category name, as shown in the sidebar.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "General".to_string()
}

/// A heading found in a page, for its outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
    /// Source line, counted inside the enclosing dropdown if there is one.
    pub line: usize,
    /// Dropdown nesting depth, 0 at the top level.
    pub depth: usize,
}

impl Page {
    /// Headings of the page; see [`outline`].
    pub fn outline(&self) -> Vec<OutlineEntry> {
        outline(&self.content)
    }
}

/// Headings of page content in document order, including those inside
/// dropdowns.
pub fn outline(content: &str) -> Vec<OutlineEntry> {
    let document = parse(content);
    let mut entries = Vec::new();
    document.walk(|block, depth| {
        if let Block::Heading { level, text, .. } = block {
            entries.push(OutlineEntry {
                level: *level,
                text: text.clone(),
                line: block.line(),
                depth,
            });
        }
    });
    entries
}

/// A sidebar category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: i64,
}
