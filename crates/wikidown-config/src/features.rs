//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the interactive and presentation toggles.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Feature flags configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Send copied fragments to the system clipboard via OSC 52.
    /// Default: true
    #[serde(default = "default_true")]
    pub clipboard: bool,

    /// Emit OSC 8 hyperlinks for links with a safe scheme.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,

    /// Syntax-highlight fenced code blocks.
    /// Default: true
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Start with every dropdown expanded.
    /// Default: false
    #[serde(default)]
    pub expand_dropdowns: bool,

    /// How long the "copied" confirmation stays, in milliseconds.
    /// Default: 2000
    #[serde(default = "default_copy_reset_ms")]
    pub copy_reset_ms: u64,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            clipboard: true,
            links: true,
            highlight: true,
            expand_dropdowns: false,
            copy_reset_ms: default_copy_reset_ms(),
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// Every field is copied from `other`; TOML gives no way to tell an
    /// omitted key from one set to its default, so omitted keys in `other`
    /// come back as defaults.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.clipboard = other.clipboard;
        self.links = other.links;
        self.highlight = other.highlight;
        self.expand_dropdowns = other.expand_dropdowns;
        self.copy_reset_ms = other.copy_reset_ms;
    }

    /// The copy confirmation delay as a `Duration`.
    pub fn copy_reset_delay(&self) -> Duration {
        Duration::from_millis(self.copy_reset_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_copy_reset_ms() -> u64 {
    2000
}
