//! User configuration for generated artifacts.
//!
//! Read from `~/.config/armature/armature.json`. Everything is optional: a
//! missing file yields the defaults (no author, apache2 license).

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::paths;

/// Path of the user config file (`~/.config/armature/armature.json`).
pub fn config_path() -> Result<PathBuf> {
    paths::armature_json()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Name placed in copyright lines, e.g. "Ada Lovelace <ada@example.com>"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// License identifier for generated files (apache2, mit, none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl AppConfig {
    /// Load the user config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let path = paths::armature_json()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read config".to_string())))?;

        serde_json::from_str(&raw)
            .map_err(|e| Error::config_invalid_json(path.to_string_lossy(), e))
    }

    pub fn license_id(&self) -> &str {
        self.license.as_deref().unwrap_or("apache2")
    }

    /// Copyright line for generated file banners: `Copyright © 2026 Author`.
    pub fn copyright_line(&self) -> String {
        let year = chrono::Utc::now().year();
        match self.author.as_deref() {
            Some(author) => format!("Copyright © {} {}", year, author),
            None => format!("Copyright © {}", year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("armature.json")).unwrap();
        assert!(cfg.author.is_none());
        assert_eq!(cfg.license_id(), "apache2");
    }

    #[test]
    fn reads_author_and_license() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armature.json");
        std::fs::write(&path, r#"{"author": "Ada", "license": "mit"}"#).unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.author.as_deref(), Some("Ada"));
        assert_eq!(cfg.license_id(), "mit");
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armature.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigInvalidJson);
    }

    #[test]
    fn copyright_line_includes_author() {
        let cfg = AppConfig {
            author: Some("Ada Lovelace".to_string()),
            license: None,
        };
        let line = cfg.copyright_line();
        assert!(line.starts_with("Copyright © "));
        assert!(line.ends_with("Ada Lovelace"));
    }
}
