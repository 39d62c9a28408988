use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base armature config directory (universal ~/.config/armature/ on all platforms)
pub fn armature() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("armature"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("armature"))
    }
}

/// Global armature.json config file path
pub fn armature_json() -> Result<PathBuf> {
    Ok(armature()?.join("armature.json"))
}
