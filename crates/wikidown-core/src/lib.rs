//! Wikidown Core
//!
//! This crate provides core types, interaction state, and error definitions
//! for the wikidown page renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`CopyState`] - The single "copied" confirmation slot with its auto-reset timer
//! - [`DropdownState`] - Collapsed/expanded state of dropdown sections
//! - [`FragmentId`], [`DropdownId`] - Stable identifiers inside a rendered tree
//! - [`ListKind`], [`FragmentKind`] - Shared enums
//! - [`WikidownError`] - Error types

pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use enums::{FragmentKind, ListKind};
pub use error::{Result, WikidownError};
pub use state::{CopyState, DropdownState, ResetTicket, COPY_RESET_DELAY};
pub use types::{DropdownId, FragmentId};
