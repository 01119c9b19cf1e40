//! Wikidown ANSI
//!
//! This crate provides ANSI escape code utilities for wikidown's
//! terminal output.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants
//! - [`color`] - Hex colour parsing and colour escapes
//! - [`utils`] - Visible width, ANSI stripping, padding
//! - [`sanitize`] - Safe terminal output and hyperlink targets
//!
//! # Example
//!
//! ```
//! use wikidown_ansi::{codes, utils};
//!
//! let text = format!("{}bold text{}", codes::BOLD_ON, codes::BOLD_OFF);
//! assert_eq!(utils::visible_length(&text), 9);
//! ```

pub mod codes;
pub mod color;
pub mod sanitize;
pub mod utils;

pub use codes::*;
pub use color::*;
pub use sanitize::*;
pub use utils::*;
