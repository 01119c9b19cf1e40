//! Snapshot tests for wikidown output.
//!
//! Output is rendered without colours and stripped of escapes, then compared
//! against inline snapshots. Run with `cargo insta review` to update them.

use std::time::Instant;

use wikidown_config::ComputedStyle;
use wikidown_core::{DropdownId, FragmentId};
use wikidown_render::{Preview, RenderFeatures, Renderer};

/// Helper to render a preview to plain text.
fn render_preview(preview: &Preview, width: usize) -> String {
    let features = RenderFeatures {
        highlight: false,
        clipboard: false,
        fixed_width: Some(width),
        margin: 0,
        ..RenderFeatures::default()
    };
    let renderer = Renderer::new(Vec::new(), width)
        .with_style(ComputedStyle::plain(0))
        .with_features(features);

    renderer
        .render_lines(preview)
        .iter()
        .map(|l| wikidown_ansi::utils::visible(l).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(input: &str, width: usize) -> String {
    render_preview(&Preview::new(input), width)
}

// =============================================================================
// Heading Snapshots
// =============================================================================

#[test]
fn test_snapshot_headings() {
    let output = render("# Getting Started\n## Quick Start\n### Step 1", 40);
    insta::assert_snapshot!(output, @r"
Getting Started
═══════════════

Quick Start
───────────

Step 1
");
}

// =============================================================================
// Paragraph Snapshots
// =============================================================================

#[test]
fn test_snapshot_paragraph_wrap() {
    let output = render("Welcome to **Manager**, the plugin.", 30);
    insta::assert_snapshot!(output, @r"
Welcome to Manager, the
plugin.
");
}

#[test]
fn test_snapshot_inline_formatting() {
    let output = render(
        "Use [[fast mode]] or ask on [Discord](https://discord.gg/x) now",
        80,
    );
    insta::assert_snapshot!(output, @"Use fast mode or ask on Discord (https://discord.gg/x) now");
}

#[test]
fn test_snapshot_inline_code() {
    let output = render("Run ``ls -la`` first", 80);
    insta::assert_snapshot!(output, @"Run  ls -la ⧉  first");
}

// =============================================================================
// List Snapshots
// =============================================================================

#[test]
fn test_snapshot_lists() {
    let output = render("- one\n* two\n\n3. three\n7. four", 40);
    insta::assert_snapshot!(output, @r"
• one
• two

1. three
2. four
");
}

// =============================================================================
// Code Block Snapshots
// =============================================================================

#[test]
fn test_snapshot_code_block() {
    let output = render("Settings:\n``'yaml'\nkey: 1\nother: 2\n``", 24);
    insta::assert_snapshot!(output, @r"
Settings:

 yaml            ⧉ copy
 key: 1
 other: 2
");
}

#[test]
fn test_snapshot_code_block_copied() {
    let mut preview = Preview::new("Settings:\n``'yaml'\nkey: 1\n``");
    preview.copy(&FragmentId::from("code-1"), Instant::now());
    let output = render_preview(&preview, 24);
    insta::assert_snapshot!(output, @r"
Settings:

 yaml          ✓ copied
 key: 1
");
}

// =============================================================================
// Dropdown Snapshots
// =============================================================================

#[test]
fn test_snapshot_dropdown_collapsed() {
    let output = render("{{<Need Help?>\nJoin us on Discord.\n}}\n\nAfter.", 40);
    insta::assert_snapshot!(output, @r"
▸ Need Help?

After.
");
}

#[test]
fn test_snapshot_dropdown_expanded() {
    let mut preview = Preview::new("{{<Need Help?>\n## Support\nJoin us on Discord.\n- fast\n}}");
    preview.toggle(&DropdownId::from("d0"));
    let output = render_preview(&preview, 40);
    insta::assert_snapshot!(output, @r"
▾ Need Help?
│ Support
│ ───────
│
│ Join us on Discord.
│
│ • fast
╰─
");
}
