//! Descriptor assembly for one generation request.
//!
//! A `CommandScaffold` is built once per invocation from CLI flags plus
//! ambient state (working directory, config, license catalog), is immutable
//! after construction, and is handed to `scaffold::create_command`.

use std::path::{Path, PathBuf};

use heck::ToKebabCase;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::ident;
use crate::license::{self, License};

/// Everything about the application being generated into.
#[derive(Debug)]
pub struct Project {
    /// Absolute directory generated command files land in (`{wd}/cmd`).
    pub absolute_path: PathBuf,
    /// Target package identifier, e.g. `acme/hugo` or `hugo`.
    pub pkg_name: String,
    /// Application name: the last `/` segment of the package identifier.
    pub app_name: String,
    pub legal: &'static License,
    pub copyright: String,
}

impl Project {
    pub fn new(working_dir: &Path, pkg_name: String, config: &AppConfig) -> Result<Self> {
        let legal = license::find(config.license_id())?;
        let app_name = app_name_of(&pkg_name);

        Ok(Self {
            absolute_path: working_dir.join("cmd"),
            pkg_name,
            app_name,
            legal,
            copyright: config.copyright_line(),
        })
    }
}

/// Descriptor for one new command artifact.
#[derive(Debug)]
pub struct CommandScaffold {
    /// Normalized command identifier, free of separator characters.
    pub cmd_name: String,
    /// Identifier of the parent command the new command attaches to.
    pub cmd_parent: String,
    pub project: Project,
}

impl CommandScaffold {
    /// Normalize `raw_name` and assemble the descriptor. Names that
    /// normalize to nothing (separators only) are rejected.
    pub fn new(raw_name: &str, parent: String, project: Project) -> Result<Self> {
        let cmd_name = ident::normalize(raw_name);
        if cmd_name.is_empty() {
            return Err(Error::validation_invalid_argument(
                "name",
                "Command name contains no usable characters",
                Some(raw_name.to_string()),
            ));
        }

        Ok(Self {
            cmd_name,
            cmd_parent: parent,
            project,
        })
    }

    /// CLI-facing use string for the generated command (kebab-case of the
    /// identifier, so `serverAdmin` is invoked as `server-admin`).
    pub fn use_name(&self) -> String {
        self.cmd_name.to_kebab_case()
    }
}

/// Resolve the target package identifier. An explicit flag wins; otherwise
/// it is derived from the `[package] name` of the working directory's
/// Cargo.toml.
pub fn resolve_package(flag: &str, working_dir: &Path) -> Result<String> {
    if !flag.is_empty() {
        return Ok(flag.to_string());
    }

    let manifest = working_dir.join("Cargo.toml");
    let raw = match std::fs::read_to_string(&manifest) {
        Ok(raw) => raw,
        Err(_) => return Err(Error::package_not_resolved(working_dir.to_string_lossy())),
    };

    let value: toml::Value = raw
        .parse()
        .map_err(|_| Error::package_not_resolved(working_dir.to_string_lossy()))?;

    value
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
        .map(|n| n.to_string())
        .ok_or_else(|| Error::package_not_resolved(working_dir.to_string_lossy()))
}

fn app_name_of(pkg_name: &str) -> String {
    pkg_name
        .rsplit('/')
        .next()
        .unwrap_or(pkg_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            author: Some("Ada".to_string()),
            license: Some("none".to_string()),
        }
    }

    #[test]
    fn scaffold_normalizes_name() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path(), "hugo".to_string(), &test_config()).unwrap();
        let scaffold =
            CommandScaffold::new("server-admin", "rootCmd".to_string(), project).unwrap();

        assert_eq!(scaffold.cmd_name, "serverAdmin");
        assert_eq!(scaffold.cmd_parent, "rootCmd");
        assert_eq!(scaffold.use_name(), "server-admin");
        assert_eq!(scaffold.project.absolute_path, dir.path().join("cmd"));
    }

    #[test]
    fn separator_only_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path(), "hugo".to_string(), &test_config()).unwrap();
        let err = CommandScaffold::new("---", "rootCmd".to_string(), project).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn app_name_is_last_segment() {
        let dir = tempfile::tempdir().unwrap();
        let project =
            Project::new(dir.path(), "acme/tools/hugo".to_string(), &test_config()).unwrap();
        assert_eq!(project.app_name, "hugo");
        assert_eq!(project.pkg_name, "acme/tools/hugo");
    }

    #[test]
    fn unknown_license_fails_assembly() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            author: None,
            license: Some("wtfpl".to_string()),
        };
        let err = Project::new(dir.path(), "hugo".to_string(), &config).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::LicenseNotFound);
    }

    #[test]
    fn package_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_package("hugo", dir.path()).unwrap(), "hugo");
    }

    #[test]
    fn package_derived_from_cargo_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"myapp\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        assert_eq!(resolve_package("", dir.path()).unwrap(), "myapp");
    }

    #[test]
    fn missing_manifest_fails_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_package("", dir.path()).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::PackageNotResolved);
        assert!(!err.hints.is_empty());
    }
}
