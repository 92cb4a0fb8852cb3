//! # Configuration
//!
//! Configuration is managed by [`confique`], which layers environment
//! variables, TOML files and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `RWSXML_ATTRIBUTE_NAME`, `RWSXML_LOG`, `RWSXML_JSON`.
//! 2. **Explicit file**: passed by the caller (the CLI's `--config`).
//! 3. **User file**: `rwsxml.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped, not reported.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `attribute_name` | `class` | Attribute name used when a query only names a value |
//! | `log_filter` | `warn` | `tracing` filter directive |
//! | `json` | `false` | Emit JSON instead of text |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "rwsxml.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RwsConfig {
    /// Attribute name paired with a bare value in queries.
    #[config(default = "class", env = "RWSXML_ATTRIBUTE_NAME")]
    pub attribute_name: String,

    /// Filter directive for log output (e.g. "debug", "rwsxml=trace").
    #[config(default = "warn", env = "RWSXML_LOG")]
    pub log_filter: String,

    /// Emit JSON instead of text.
    #[config(default = false, env = "RWSXML_JSON")]
    pub json: bool,
}

impl Default for RwsConfig {
    fn default() -> Self {
        Self {
            attribute_name: "class".to_string(),
            log_filter: "warn".to_string(),
            json: false,
        }
    }
}

impl RwsConfig {
    /// Loads configuration from the environment, `explicit` (if given), the
    /// user config file and the compiled defaults, in that priority order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, user_config_path().as_deref())
    }

    /// Same as [`load`](Self::load) with the user config file given explicitly.
    pub fn load_from(explicit: Option<&Path>, user: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = user {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        tracing::debug!(?explicit, ?user, "loaded configuration");
        Ok(config)
    }
}

/// `rwsxml.toml` in the platform config directory, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rwsxml").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RwsConfig::default();
        assert_eq!(config.attribute_name, "class");
        assert_eq!(config.log_filter, "warn");
        assert!(!config.json);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");
        let config = RwsConfig::load_from(Some(&missing), None).unwrap();
        assert_eq!(config, RwsConfig::default());
    }

    #[test]
    fn test_explicit_file_overrides_user_file() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.toml");
        let user = temp.path().join(CONFIG_FILENAME);
        fs::write(&explicit, "attribute_name = \"title\"\n").unwrap();
        fs::write(&user, "attribute_name = \"id\"\njson = true\n").unwrap();

        let config = RwsConfig::load_from(Some(&explicit), Some(&user)).unwrap();
        assert_eq!(config.attribute_name, "title");
        assert!(config.json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "json = \"not a bool\"\n").unwrap();

        let err = RwsConfig::load_from(Some(&path), None).unwrap_err();
        assert!(matches!(err, crate::error::RwsError::Config(_)));
    }

    #[test]
    fn test_user_config_path_uses_config_filename() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with(CONFIG_FILENAME));
        }
    }
}
