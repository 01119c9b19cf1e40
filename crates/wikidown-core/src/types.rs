//! Identifier types for nodes of a rendered tree.
//!
//! Ids are derived from source line indices. Inside a dropdown the nested
//! document numbers its lines from zero again, so nested ids carry the path
//! of enclosing dropdowns as a prefix (`d3/code-1`). That keeps every id
//! unique across the whole tree.

use serde::{Deserialize, Serialize};

use crate::enums::FragmentKind;

/// Identifier of a copyable code fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FragmentId(String);

impl FragmentId {
    /// Id of a fenced code block opened on `line`.
    pub fn fenced(scope: Option<&DropdownId>, line: usize) -> Self {
        Self::scoped(scope, format!("{}-{}", FragmentKind::FencedCode, line))
    }

    /// Id of the inline code span at split `segment` of `line`.
    pub fn inline(scope: Option<&DropdownId>, line: usize, segment: usize) -> Self {
        Self::scoped(
            scope,
            format!("{}-{}-{}", FragmentKind::InlineCode, line, segment),
        )
    }

    fn scoped(scope: Option<&DropdownId>, local: String) -> Self {
        match scope {
            Some(parent) => Self(format!("{}/{}", parent.as_str(), local)),
            None => Self(local),
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Which kind of fragment this id names.
    pub fn kind(&self) -> FragmentKind {
        let local = self.0.rsplit('/').next().unwrap_or(&self.0);
        if local.starts_with("inline-") {
            FragmentKind::InlineCode
        } else {
            FragmentKind::FencedCode
        }
    }
}

impl std::fmt::Display for FragmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FragmentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a dropdown section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DropdownId(String);

impl DropdownId {
    /// Id of a dropdown opened on `line`, nested under `parent` if any.
    pub fn new(parent: Option<&DropdownId>, line: usize) -> Self {
        match parent {
            Some(parent) => Self(format!("{}/d{}", parent.0, line)),
            None => Self(format!("d{}", line)),
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Nesting depth (1 for a top-level dropdown).
    pub fn depth(&self) -> usize {
        self.0.split('/').count()
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DropdownId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
