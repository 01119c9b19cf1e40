//! Interaction state for a rendered page.
//!
//! A page preview carries two pieces of presentation state that survive
//! re-renders but never touch the document itself:
//!
//! - [`CopyState`]: which code fragment was copied last. The confirmation
//!   clears itself [`COPY_RESET_DELAY`] after the latest copy action. There is
//!   one slot per preview, so copying another fragment replaces the previous
//!   confirmation and its pending reset.
//! - [`DropdownState`]: which dropdown sections are expanded. Everything
//!   starts collapsed.
//!
//! Time is always passed in by the caller, which keeps the state machine
//! deterministic and lets the event loop decide how to wait.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::types::{DropdownId, FragmentId};

/// How long a "copied" confirmation stays visible.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Handle for the deferred reset scheduled by a copy action.
///
/// Each copy action bumps a generation counter, so a ticket from an earlier
/// copy no longer matches and firing it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    deadline: Instant,
}

impl ResetTicket {
    /// When the reset is due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left until the reset is due, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// The `Idle → Copied(id) → Idle` confirmation slot.
#[derive(Debug, Clone)]
pub struct CopyState {
    copied: Option<FragmentId>,
    pending: Option<ResetTicket>,
    generation: u64,
    delay: Duration,
}

impl Default for CopyState {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyState {
    /// Create an idle state with the standard reset delay.
    pub fn new() -> Self {
        Self::with_delay(COPY_RESET_DELAY)
    }

    /// Create an idle state with a custom reset delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            copied: None,
            pending: None,
            generation: 0,
            delay,
        }
    }

    /// The configured reset delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a copy of `id` at `now` and schedule its reset.
    ///
    /// Any earlier pending reset is cancelled; only the returned ticket is live.
    pub fn copy(&mut self, id: FragmentId, now: Instant) -> ResetTicket {
        self.generation += 1;
        let ticket = ResetTicket {
            generation: self.generation,
            deadline: now + self.delay,
        };
        if let Some(previous) = self.copied.as_ref() {
            if previous != &id {
                debug!("copy state: {} superseded by {}", previous, id);
            }
        }
        debug!("copy state: copied {}", id);
        self.copied = Some(id);
        self.pending = Some(ticket);
        ticket
    }

    /// Fire a scheduled reset. Returns true if the ticket was still live.
    pub fn fire(&mut self, ticket: ResetTicket) -> bool {
        if self.pending != Some(ticket) {
            trace!("copy state: stale reset ignored");
            return false;
        }
        self.clear();
        true
    }

    /// Apply the pending reset if its deadline has passed.
    ///
    /// Returns true when the state changed back to idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(ticket) if ticket.deadline <= now => self.fire(ticket),
            _ => false,
        }
    }

    /// The currently confirmed fragment, if any.
    pub fn copied(&self) -> Option<&FragmentId> {
        self.copied.as_ref()
    }

    /// Whether `id` currently shows the copied confirmation.
    pub fn is_copied(&self, id: &FragmentId) -> bool {
        self.copied.as_ref() == Some(id)
    }

    /// The live reset ticket, if a confirmation is showing.
    pub fn pending(&self) -> Option<ResetTicket> {
        self.pending
    }

    /// Whether no confirmation is showing.
    pub fn is_idle(&self) -> bool {
        self.copied.is_none()
    }

    fn clear(&mut self) {
        if let Some(id) = self.copied.take() {
            debug!("copy state: {} reset to idle", id);
        }
        self.pending = None;
    }
}

/// Expanded/collapsed state of the dropdowns in one preview.
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    expanded: HashSet<DropdownId>,
}

impl DropdownState {
    /// All dropdowns collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a dropdown. Returns the new expanded flag.
    pub fn toggle(&mut self, id: &DropdownId) -> bool {
        if self.expanded.remove(id) {
            trace!("dropdown {} collapsed", id);
            false
        } else {
            trace!("dropdown {} expanded", id);
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Whether a dropdown is expanded.
    pub fn is_expanded(&self, id: &DropdownId) -> bool {
        self.expanded.contains(id)
    }

    /// Expand a dropdown.
    pub fn expand(&mut self, id: DropdownId) {
        self.expanded.insert(id);
    }

    /// Expand every dropdown in `ids`.
    pub fn expand_all<I: IntoIterator<Item = DropdownId>>(&mut self, ids: I) {
        self.expanded.extend(ids);
    }

    /// Collapse everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Drop state for dropdowns that no longer exist.
    pub fn retain<F: Fn(&DropdownId) -> bool>(&mut self, keep: F) {
        self.expanded.retain(|id| keep(id));
    }

    /// Number of expanded dropdowns.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}
