//! Wikidown Config
//!
//! This crate handles configuration loading and management
//! for wikidown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/wikidown/config.toml`
//! - macOS: `~/Library/Application Support/wikidown/config.toml`
//! - Windows: `%APPDATA%\wikidown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use wikidown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod computed;
mod features;
mod style;

pub use computed::ComputedStyle;
pub use features::FeaturesConfig;
pub use style::StyleConfig;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wikidown_core::{Result, WikidownError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[features]
Clipboard       = true
Links           = true
Highlight       = true
ExpandDropdowns = false
CopyResetMs     = 2000

[style]
Margin     = 2
Width      = 0
Primary    = "#a855f7"
Foreground = "#e5e7eb"
Muted      = "#9ca3af"
CodeBg     = "#1e1b2e"
Border     = "#3f3a56"
Syntax     = "base16-ocean.dark"
"##;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use wikidown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[style]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "wikidown")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            WikidownError::Config(format!("Parse error in {}: {}", path.display(), e))
        })?;
        config.warn_invalid_colors();
        Ok(config)
    }

    /// Load configuration with an optional override file or string.
    ///
    /// The base config comes from the default location. If `override_config`
    /// names an existing file it is read; otherwise it is parsed as inline
    /// TOML. The result is merged over the base.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikidown_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nLinks = false")).unwrap();
    /// assert!(!config.features.links);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                debug!("config override from file {}", override_path.display());
                std::fs::read_to_string(override_path)?
            } else {
                debug!("config override from inline TOML");
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| WikidownError::Config(format!("Override parse error: {}", e)))?;
            override_config.warn_invalid_colors();

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use wikidown_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [features]
    ///     Links = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.links);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.style.merge(&other.style);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| WikidownError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Compute the ANSI escapes for this config's palette.
    pub fn computed_style(&self) -> ComputedStyle {
        ComputedStyle::from_config(&self.style)
    }

    fn warn_invalid_colors(&self) {
        for key in self.style.invalid_colors() {
            warn!("style.{} is not a #rrggbb colour; using terminal default", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.links);
        assert!(config.features.clipboard);
        assert!(!config.features.expand_dropdowns);
        assert_eq!(config.features.copy_reset_ms, 2000);
        assert_eq!(config.style.margin, 2);
        assert_eq!(config.style.syntax, "base16-ocean.dark");
    }

    #[test]
    fn test_default_matches_struct_defaults() {
        let parsed = Config::default();
        let features = FeaturesConfig::default();
        let style = StyleConfig::default();
        assert_eq!(parsed.features.highlight, features.highlight);
        assert_eq!(parsed.style.primary, style.primary);
        assert_eq!(parsed.style.code_bg, style.code_bg);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_toml = r#"
            [features]
            Links = false
            [style]
            Margin = 4
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert!(!base.features.links);
        assert_eq!(base.style.margin, 4);
        assert_eq!(base.style.primary, "#a855f7");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.features.highlight);
        assert_eq!(config.style.margin, 2);
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("wikidown"));
            assert!(p.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_load_from_reports_parse_error() {
        let dir = std::env::temp_dir().join(format!("wikidown-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[features\nLinks = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, WikidownError::Config(_)));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir().join(format!("wikidown-save-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.style.margin = 6;
        config.features.expand_dropdowns = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.style.margin, 6);
        assert!(loaded.features.expand_dropdowns);
        std::fs::remove_dir_all(&dir).ok();
    }
}
