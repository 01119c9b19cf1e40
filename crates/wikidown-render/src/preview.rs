//! A page preview: parsed content plus its interaction state.

use std::time::{Duration, Instant};

use log::{debug, warn};
use wikidown_core::{CopyState, DropdownId, DropdownState, FragmentId, ResetTicket};
use wikidown_parser::parse;

use crate::tree::{collect_fragments, Fragment, Node, RenderTree};

/// Parsed page content together with its copy and dropdown state.
///
/// Replacing the content re-parses it. Dropdown state survives for ids that
/// still exist; the copy confirmation is left to run out on its own timer.
#[derive(Debug, Clone)]
pub struct Preview {
    source: String,
    tree: RenderTree,
    copy: CopyState,
    dropdowns: DropdownState,
}

impl Preview {
    pub fn new(source: &str) -> Self {
        Self::with_copy_delay(source, wikidown_core::COPY_RESET_DELAY)
    }

    /// A preview whose copy confirmation lasts `delay`.
    pub fn with_copy_delay(source: &str, delay: Duration) -> Self {
        Self {
            source: source.to_string(),
            tree: RenderTree::build(&parse(source)),
            copy: CopyState::with_delay(delay),
            dropdowns: DropdownState::new(),
        }
    }

    /// Replace the content.
    pub fn set_content(&mut self, source: &str) {
        self.source = source.to_string();
        self.tree = RenderTree::build(&parse(source));
        let tree = &self.tree;
        self.dropdowns.retain(|id| tree.has_dropdown(id));
        debug!(
            "preview content replaced, {} dropdowns kept expanded",
            self.dropdowns.expanded_count()
        );
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    pub fn copy_state(&self) -> &CopyState {
        &self.copy
    }

    /// Mark a fragment as copied at `now`.
    ///
    /// Returns the fragment's text for the clipboard, or None for an unknown
    /// id (the state is left untouched then).
    pub fn copy(&mut self, id: &FragmentId, now: Instant) -> Option<&str> {
        let Some(fragment) = self.tree.fragment(id) else {
            warn!("no code fragment with id {}", id);
            return None;
        };
        let text = fragment.text;
        self.copy.copy(id.clone(), now);
        Some(text)
    }

    /// Apply a due copy reset. Returns true if the view changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.copy.poll(now)
    }

    /// The live reset ticket while a confirmation is showing.
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.copy.pending()
    }

    pub fn is_copied(&self, id: &FragmentId) -> bool {
        self.copy.is_copied(id)
    }

    /// Flip a dropdown. Returns the new state, or None for an unknown id.
    pub fn toggle(&mut self, id: &DropdownId) -> Option<bool> {
        if !self.tree.has_dropdown(id) {
            warn!("no dropdown with id {}", id);
            return None;
        }
        Some(self.dropdowns.toggle(id))
    }

    pub fn is_expanded(&self, id: &DropdownId) -> bool {
        self.dropdowns.is_expanded(id)
    }

    pub fn expand_all(&mut self) {
        let ids: Vec<DropdownId> = self
            .tree
            .dropdowns()
            .into_iter()
            .map(|(id, _)| id.clone())
            .collect();
        self.dropdowns.expand_all(ids);
    }

    pub fn collapse_all(&mut self) {
        self.dropdowns.collapse_all();
    }

    /// Fragments a reader can currently see: those not inside a collapsed
    /// dropdown.
    pub fn visible_fragments(&self) -> Vec<Fragment<'_>> {
        let mut out = Vec::new();
        self.visible_in(self.tree.nodes(), None, &mut out);
        out
    }

    fn visible_in<'a>(
        &self,
        nodes: &'a [Node],
        parent: Option<&'a DropdownId>,
        out: &mut Vec<Fragment<'a>>,
    ) {
        for node in nodes {
            match node {
                Node::Dropdown { id, children, .. } => {
                    if self.is_expanded(id) {
                        self.visible_in(children, Some(id), out);
                    }
                }
                other => collect_fragments(std::slice::from_ref(other), parent, out),
            }
        }
    }
}
