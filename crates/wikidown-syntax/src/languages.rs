//! Language tag lookup.
//!
//! Wiki pages tag fenced code with whatever the author typed (`'yml'`,
//! `'shell'`, `'Java'`). Tags are matched case-insensitively against this
//! table before falling back to syntect's own token matching.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Syntect syntax name and the tags that select it.
const TABLE: &[(&str, &[&str])] = &[
    ("YAML", &["yaml", "yml"]),
    ("JSON", &["json", "jsonc", "json5"]),
    ("Java", &["java", "jav"]),
    ("Java Properties", &["properties", "props", "lang"]),
    ("Bourne Again Shell (bash)", &["bash", "sh", "shell", "zsh", "console", "terminal"]),
    ("Batch File", &["bat", "batch", "cmd"]),
    ("XML", &["xml", "pom", "plist"]),
    ("HTML", &["html", "htm"]),
    ("CSS", &["css"]),
    ("JavaScript", &["javascript", "js", "node", "mjs"]),
    ("SQL", &["sql", "mysql", "sqlite"]),
    ("Python", &["python", "py", "python3"]),
    ("Rust", &["rust", "rs"]),
    ("C", &["c", "h"]),
    ("C++", &["cpp", "c++", "cxx", "hpp"]),
    ("C#", &["csharp", "cs", "c#"]),
    ("Go", &["go", "golang"]),
    ("Groovy", &["groovy", "gradle"]),
    ("Lua", &["lua"]),
    ("Makefile", &["make", "makefile"]),
    ("Markdown", &["markdown", "md"]),
    ("Diff", &["diff", "patch"]),
    ("Plain Text", &["text", "txt", "plain", "plaintext", "log", "language"]),
];

/// Lowercase tag to syntect syntax name.
pub static LANGUAGE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    TABLE
        .iter()
        .flat_map(|(name, tags)| tags.iter().map(move |tag| (*tag, *name)))
        .collect()
});

/// Resolve a language tag to a syntax name, or return it unchanged.
///
/// # Example
/// ```
/// use wikidown_syntax::language_alias;
///
/// assert_eq!(language_alias("yml"), "YAML");
/// assert_eq!(language_alias("Shell"), "Bourne Again Shell (bash)");
/// assert_eq!(language_alias("brainfuck"), "brainfuck");
/// ```
pub fn language_alias(name: &str) -> &str {
    let lower = name.trim().to_lowercase();
    LANGUAGE_ALIASES
        .get(lower.as_str())
        .copied()
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_languages() {
        assert_eq!(language_alias("yaml"), "YAML");
        assert_eq!(language_alias("java"), "Java");
        assert_eq!(language_alias("shell"), "Bourne Again Shell (bash)");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(language_alias("YAML"), "YAML");
        assert_eq!(language_alias(" Json "), "JSON");
    }

    #[test]
    fn test_editor_placeholder_is_plain_text() {
        // The editor's code-block snippet inserts `'language'` as a placeholder.
        assert_eq!(language_alias("language"), "Plain Text");
    }

    #[test]
    fn test_unknown_returns_original() {
        assert_eq!(language_alias("skript"), "skript");
    }

    #[test]
    fn test_no_duplicate_tags() {
        let total: usize = TABLE.iter().map(|(_, tags)| tags.len()).sum();
        assert_eq!(LANGUAGE_ALIASES.len(), total);
    }
}
