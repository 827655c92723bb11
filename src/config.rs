//! Configuration persistence for default TOC settings.
//!
//! Defaults are read from `config.toml` in the platform config directory;
//! a missing or malformed file silently falls back to built-in defaults.
//! Command-line flags override whatever the file provides.

use crate::toc::{Markers, TocOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toc: TocConfig,

    /// Marker pair overrides, for documents that carry historical markers.
    #[serde(default)]
    pub markers: Markers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocConfig {
    /// Deepest heading level included in the TOC (1-6).
    #[serde(default = "default_max_level")]
    pub max_level: usize,

    /// Include the document's first heading in the TOC.
    #[serde(default)]
    pub include_first: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            max_level: default_max_level(),
            include_first: false,
        }
    }
}

fn default_max_level() -> usize {
    3
}

impl Config {
    /// Get the XDG-style config file path (~/.config/tocmd/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tocmd").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/tocmd/config.toml
    /// - Linux: ~/.config/tocmd/config.toml
    /// - Windows: %APPDATA%/tocmd/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tocmd").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/tocmd first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(xdg_path) = Self::xdg_config_path() {
                if let Ok(contents) = fs::read_to_string(&xdg_path) {
                    if let Ok(config) = toml::from_str(&contents) {
                        return config;
                    }
                }
            }
        }

        Self::config_path()
            .and_then(|path| {
                fs::read_to_string(&path)
                    .ok()
                    .and_then(|contents| toml::from_str(&contents).ok())
            })
            .unwrap_or_default()
    }

    /// TOC options from the configured defaults.
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            max_level: self.toc.max_level,
            include_first: self.toc.include_first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.toc.max_level, 3);
        assert!(!config.toc.include_first);
        assert_eq!(config.markers.open, "<!-- TOC -->");
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[toc]\nmax_level = 2\n").unwrap();
        assert_eq!(config.toc.max_level, 2);
        assert!(!config.toc.include_first);
        assert_eq!(config.markers.close, "<!-- /TOC -->");
    }

    #[test]
    fn test_marker_overrides() {
        let config: Config = toml::from_str(
            "[markers]\nopen = \"<!-- contents -->\"\nclose = \"<!-- /contents -->\"\n",
        )
        .unwrap();
        assert_eq!(config.markers.open, "<!-- contents -->");
        assert_eq!(config.markers.close, "<!-- /contents -->");
    }
}
