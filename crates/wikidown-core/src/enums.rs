//! Core enums shared between the parser and the renderer.

use serde::{Deserialize, Serialize};

/// Represents the type of list a run of list lines forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list with `- ` or `* ` markers
    Unordered,
    /// Ordered list with `1. ` style markers
    Ordered,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "unordered"),
            ListKind::Ordered => write!(f, "ordered"),
        }
    }
}

/// Represents where a copyable fragment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentKind {
    /// Fenced code block with a language tag
    FencedCode,
    /// Inline code span inside a paragraph
    InlineCode,
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentKind::FencedCode => write!(f, "code"),
            FragmentKind::InlineCode => write!(f, "inline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_display() {
        assert_eq!(ListKind::Unordered.to_string(), "unordered");
        assert_eq!(ListKind::Ordered.to_string(), "ordered");
    }

    #[test]
    fn test_fragment_kind_display() {
        assert_eq!(FragmentKind::FencedCode.to_string(), "code");
        assert_eq!(FragmentKind::InlineCode.to_string(), "inline");
    }
}
