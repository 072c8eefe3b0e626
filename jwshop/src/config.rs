//! Configuration file support for jwshop.
//!
//! Loads an optional `jwshop.toml`:
//!
//! ```toml
//! output = "dist/index.html"
//! viewport_width = 1280
//!
//! [theme]
//! background = "#FFFFFF"
//! text_color = "#1A202C"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use storefront_leptos::theme::Theme;
use thiserror::Error;

/// Default output file of `jwshop render`.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Default viewport width in CSS pixels (a wide desktop layout).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Config loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `render` writes the page
    pub output: PathBuf,
    /// Viewport width the page is laid out for
    pub viewport_width: u32,
    /// Global typography and colours
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "cannot read config file");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.output, PathBuf::from("dist/index.html"));
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(&temp.path().join("jwshop.toml")).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("jwshop.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r##"
viewport_width = 375

[theme]
background = "#F7FAFC"
"##
        )
        .expect("write config");

        let config = SiteConfig::load(&path).expect("config");
        assert_eq!(config.viewport_width, 375);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.theme.background, "#F7FAFC");
        assert_eq!(config.theme.text_color, Theme::default().text_color);
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("jwshop.toml");
        std::fs::write(&path, "viewport_width = \"wide\"").expect("write config");

        let err = SiteConfig::load(&path).expect_err("parse error");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("jwshop.toml"));
    }

    #[test]
    fn test_load_unreadable_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("jwshop.toml");
        std::fs::create_dir(&path).expect("create dir in place of config");

        let err = SiteConfig::load(&path).expect_err("read error");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
