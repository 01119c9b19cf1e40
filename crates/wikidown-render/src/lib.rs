//! Wikidown Render
//!
//! This crate turns a parsed wiki page into styled terminal output and keeps
//! the interaction state a reader changes while viewing it.
//!
//! # Features
//!
//! - **Headings** - three levels, the first two underlined with a rule
//! - **Dropdowns** - collapsible sections with a toggle arrow
//! - **Code blocks** - syntax highlighted, each with a copy control
//! - **Inline code** - copyable chips inside wrapped paragraphs
//! - **Lists** - bullets or renumbered items with hanging indents
//! - **Clipboard** - OSC 52 copy that works over SSH
//!
//! # Example
//!
//! ```
//! use wikidown_render::{Preview, Renderer};
//!
//! let preview = Preview::new("# Hello\n\nSome **bold** text");
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output, 40);
//! renderer.render(&preview).unwrap();
//! ```

pub mod code;
pub mod dropdown;
pub mod features;
pub mod heading;
pub mod list;
pub mod preview;
pub mod text;
pub mod tree;

pub use code::{render_code_block, render_code_body, render_code_header, TAB_WIDTH};
pub use dropdown::{frame_children, render_dropdown_footer, render_dropdown_header, DROPDOWN_INDENT};
pub use features::{
    copy_to_clipboard, is_tty, terminal_size, terminal_width, RenderFeatures, MAX_CLIPBOARD_SIZE,
};
pub use heading::render_heading;
pub use list::{render_list, BULLET};
pub use preview::Preview;
pub use text::{render_paragraph, simple_wrap, wrap, Piece, COPIED_MARK, COPY_MARK};
pub use tree::{Fragment, Node, Part, RenderTree};

use std::io::{self, Write};
use std::time::Instant;

use log::debug;
use wikidown_ansi::color::hex2rgb;
use wikidown_config::{ComputedStyle, Config};
use wikidown_core::FragmentId;
use wikidown_syntax::Highlighter;

/// Terminal renderer for wiki pages.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Content width, margin excluded
    width: usize,
    /// Syntax highlighter
    highlighter: Highlighter,
    /// Colour escapes
    style: ComputedStyle,
    /// Feature flags
    features: RenderFeatures,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer with the default configuration.
    pub fn new(writer: W, width: usize) -> Self {
        Self::from_config(writer, width, &Config::default())
    }

    /// Create a renderer from a loaded configuration.
    pub fn from_config(writer: W, width: usize, config: &Config) -> Self {
        let mut highlighter = Highlighter::with_theme(&config.style.syntax);
        highlighter.set_background(hex2rgb(&config.style.code_bg));
        Self {
            writer,
            width,
            highlighter,
            style: config.computed_style(),
            features: RenderFeatures::from_config(config),
        }
    }

    /// Replace the colour escapes.
    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the feature flags.
    pub fn with_features(mut self, features: RenderFeatures) -> Self {
        self.features = features;
        self
    }

    /// Set the syntax highlighting theme. Returns false for an unknown theme.
    pub fn set_theme(&mut self, theme: &str) -> bool {
        self.highlighter.set_theme(theme)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    pub fn features(&self) -> &RenderFeatures {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut RenderFeatures {
        &mut self.features
    }

    /// Render a preview to lines, without the left margin.
    ///
    /// Blocks are separated by one blank line. Collapsed dropdowns show only
    /// their header.
    pub fn render_lines(&self, preview: &Preview) -> Vec<String> {
        self.render_nodes(preview.tree().nodes(), preview, self.width)
    }

    fn render_nodes(&self, nodes: &[Node], preview: &Preview, width: usize) -> Vec<String> {
        let width = width.max(1);
        let highlighter = self.features.highlight.then_some(&self.highlighter);
        let show_ids = self.features.show_ids;
        let links = self.features.links;

        let mut out = Vec::new();
        for node in nodes {
            match node {
                Node::Heading { level, text } => {
                    out.extend(render_heading(*level, text, width, &self.style));
                }
                Node::Paragraph { parts } => {
                    out.extend(render_paragraph(
                        parts,
                        width,
                        &self.style,
                        links,
                        show_ids,
                        |id| preview.is_copied(id),
                    ));
                }
                Node::List { kind, items } => {
                    out.extend(render_list(*kind, items, width, &self.style, links));
                }
                Node::Code { id, language, code } => {
                    out.extend(render_code_block(
                        id,
                        language,
                        code,
                        preview.is_copied(id),
                        show_ids,
                        width,
                        &self.style,
                        highlighter,
                    ));
                }
                Node::Dropdown {
                    id,
                    title,
                    children,
                } => {
                    let expanded = preview.is_expanded(id);
                    out.push(render_dropdown_header(
                        id,
                        title,
                        expanded,
                        show_ids,
                        &self.style,
                    ));
                    if expanded {
                        let inner = self.render_nodes(
                            children,
                            preview,
                            width.saturating_sub(DROPDOWN_INDENT),
                        );
                        out.extend(frame_children(inner, &self.style));
                        out.push(render_dropdown_footer(&self.style));
                    }
                }
            }
            out.push(String::new());
        }

        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out
    }

    /// Render a preview to the writer, each line behind the left margin.
    pub fn render(&mut self, preview: &Preview) -> io::Result<()> {
        let lines = self.render_lines(preview);
        debug!("rendering {} lines at width {}", lines.len(), self.width);
        for line in lines {
            if line.is_empty() {
                writeln!(self.writer)?;
            } else {
                writeln!(self.writer, "{}{}", self.style.margin_spaces, line)?;
            }
        }
        self.writer.flush()
    }

    /// Copy a fragment: update the preview's confirmation and, when the
    /// clipboard feature is on, send the text to the terminal clipboard.
    ///
    /// Returns false for an unknown id.
    pub fn copy(&mut self, preview: &mut Preview, id: &FragmentId, now: Instant) -> io::Result<bool> {
        let Some(text) = preview.copy(id, now) else {
            return Ok(false);
        };
        if self.features.clipboard {
            copy_to_clipboard(text, &mut self.writer)?;
        }
        Ok(true)
    }

    /// The underlying writer, for output around the page.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
