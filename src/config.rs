//! Demo page configuration
//!
//! Loaded from `pergola.toml`, searched in the user config directory, the
//! executable's directory, then the working directory. Missing files and
//! unreadable content fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level configuration loaded from pergola.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page copy
    #[serde(default)]
    pub page: PageConfig,

    /// Section toggles
    #[serde(default)]
    pub sections: SectionsConfig,
}

/// Landing page copy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
        }
    }
}

fn default_title() -> String {
    "Revolutionize Your Workflow".to_string()
}

fn default_tagline() -> String {
    "Streamline your projects with cutting-edge components".to_string()
}

/// Which landing page sections render
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default = "default_true")]
    pub features: bool,

    #[serde(default = "default_true")]
    pub pricing: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            features: true,
            pricing: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Find pergola.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        let candidates = [
            dirs::config_dir().map(|p| p.join("pergola").join("pergola.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("pergola.toml"))),
            Some(PathBuf::from("pergola.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            Self::load_from_path(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page.title, "Revolutionize Your Workflow");
        assert!(config.sections.features);
        assert!(config.sections.pricing);
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pergola.toml");
        fs::write(
            &path,
            "[page]\ntitle = \"Hello\"\n\n[sections]\npricing = false\n",
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.page.title, "Hello");
        // Unset fields keep their defaults
        assert_eq!(
            config.page.tagline,
            "Streamline your projects with cutting-edge components"
        );
        assert!(config.sections.features);
        assert!(!config.sections.pricing);
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pergola.toml");
        fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(ConfigError::Io(_))
        ));
    }
}
