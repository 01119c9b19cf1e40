//! Wikidown Library
//!
//! A read-only bundle of wiki pages and categories, loaded from TOML.
//!
//! ```toml
//! [[categories]]
//! id = "setup"
//! name = "Setup"
//! order = 1
//!
//! [[pages]]
//! id = "installation"
//! title = "Installation"
//! category = "Setup"
//! order = 1
//! content = """# Installation Guide"""
//! ```
//!
//! Pages are listed by `order`; ties keep bundle order. The sidebar groups
//! pages under their category name.

pub mod page;

pub use page::{outline, Category, OutlineEntry, Page, NOT_FOUND_CONTENT};

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use wikidown_core::{Result, WikidownError};

/// One sidebar section: a category name and its pages in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroup<'a> {
    pub name: &'a str,
    pub pages: Vec<&'a Page>,
}

/// The page library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    pages: Vec<Page>,
}

impl Library {
    /// Load a bundle from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading library from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            WikidownError::Library(msg) => {
                WikidownError::Library(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse a bundle from TOML text.
    ///
    /// Duplicate page ids are rejected; `page(id)` would otherwise be
    /// ambiguous.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: Library = toml::from_str(content)
            .map_err(|e| WikidownError::Library(format!("Parse error: {}", e)))?;

        let mut seen = std::collections::HashSet::new();
        for page in &library.pages {
            if !seen.insert(page.id.as_str()) {
                return Err(WikidownError::Library(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
        }

        for name in library.undeclared_categories() {
            warn!("category '{}' is used by pages but not declared", name);
        }
        debug!(
            "library has {} pages in {} categories",
            library.pages.len(),
            library.categories.len()
        );
        Ok(library)
    }

    /// Build a library from parts.
    pub fn new(categories: Vec<Category>, pages: Vec<Page>) -> Self {
        Self { categories, pages }
    }

    /// Pages ordered by `order`, stable for ties.
    pub fn pages(&self) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.iter().collect();
        pages.sort_by_key(|p| p.order);
        pages
    }

    /// Look up a page by id.
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Content of a page, or the not-found page for unknown ids.
    pub fn content_or_not_found(&self, id: &str) -> &str {
        match self.page(id) {
            Some(page) => &page.content,
            None => NOT_FOUND_CONTENT,
        }
    }

    /// The first page in order, the one a reader lands on.
    pub fn first_page(&self) -> Option<&Page> {
        self.pages().into_iter().next()
    }

    /// Categories ordered by `order`, stable for ties.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.order);
        categories
    }

    /// Pages grouped by category name.
    ///
    /// Declared categories come first in their order, then names only pages
    /// mention, in the order they first appear. Empty groups are left out.
    pub fn sidebar(&self) -> Vec<SidebarGroup<'_>> {
        let pages = self.pages();
        let mut names: Vec<&str> = self
            .categories()
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        for &page in &pages {
            if !names.contains(&page.category.as_str()) {
                names.push(page.category.as_str());
            }
        }

        names
            .into_iter()
            .map(|name| SidebarGroup {
                name,
                pages: pages
                    .iter()
                    .copied()
                    .filter(|p| p.category == name)
                    .collect(),
            })
            .filter(|group| !group.pages.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn undeclared_categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for page in &self.pages {
            let name = page.category.as_str();
            if !self.categories.iter().any(|c| c.name == name) && !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE: &str = r##"
[[categories]]
id = "setup"
name = "Setup"
order = 1

[[categories]]
id = "introduction"
name = "Introduction"
order = 0

[[pages]]
id = "commands"
title = "Commands"
category = "Setup"
order = 3
content = "# Commands"

[[pages]]
id = "getting-started"
title = "Getting Started"
category = "Introduction"
order = 0
content = "# Getting Started"

[[pages]]
id = "faq"
title = "FAQ"
category = "Extras"
order = 3
content = "# FAQ"

[[pages]]
id = "installation"
title = "Installation"
category = "Introduction"
order = 1
content = "# Installation"
"##;

    fn ids<'a>(pages: &[&'a Page]) -> Vec<&'a str> {
        pages.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_pages_ordered_stable() {
        let library = Library::from_toml(BUNDLE).unwrap();
        assert_eq!(
            ids(&library.pages()),
            vec!["getting-started", "installation", "commands", "faq"]
        );
    }

    #[test]
    fn test_page_lookup() {
        let library = Library::from_toml(BUNDLE).unwrap();
        assert_eq!(library.page("faq").map(|p| p.title.as_str()), Some("FAQ"));
        assert!(library.page("missing").is_none());
        assert_eq!(library.content_or_not_found("missing"), NOT_FOUND_CONTENT);
        assert_eq!(library.first_page().map(|p| p.id.as_str()), Some("getting-started"));
    }

    #[test]
    fn test_categories_ordered() {
        let library = Library::from_toml(BUNDLE).unwrap();
        let names: Vec<&str> = library.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Introduction", "Setup"]);
    }

    #[test]
    fn test_sidebar_groups() {
        let library = Library::from_toml(BUNDLE).unwrap();
        let sidebar = library.sidebar();
        let groups: Vec<(&str, Vec<&str>)> = sidebar
            .iter()
            .map(|g| (g.name, ids(&g.pages)))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("Introduction", vec!["getting-started", "installation"]),
                ("Setup", vec!["commands"]),
                ("Extras", vec!["faq"]),
            ]
        );
    }

    #[test]
    fn test_sidebar_skips_empty_categories() {
        let library = Library::new(
            vec![Category {
                id: "empty".to_string(),
                name: "Empty".to_string(),
                order: 0,
            }],
            Vec::new(),
        );
        assert!(library.sidebar().is_empty());
        assert!(library.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let bundle = "[[pages]]\nid = \"a\"\ntitle = \"A\"\n\n[[pages]]\nid = \"a\"\ntitle = \"B\"\n";
        let err = Library::from_toml(bundle).unwrap_err();
        assert!(err.to_string().contains("duplicate page id 'a'"));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            Library::from_toml("[[pages]]\nid = 3"),
            Err(WikidownError::Library(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("wikidown-library-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wiki.toml");
        std::fs::write(&path, BUNDLE).unwrap();

        let library = Library::load_from(&path).unwrap();
        assert_eq!(library.len(), 4);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = Library::load_from(Path::new("/nonexistent/wiki.toml")).unwrap_err();
        assert!(matches!(err, WikidownError::Io(_)));
    }
}
