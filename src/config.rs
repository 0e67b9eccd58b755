//! Loading of Argon2 parameter sets from JSON files.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::HashParameters;

/// File name looked up in the platform config directory.
pub const PARAMS_FILE_NAME: &str = "params.json";

/// Returns the platform default parameter file location.
///
/// The file itself may not exist.
pub fn default_params_path() -> Result<PathBuf> {
    let project_dirs =
        ProjectDirs::from("", "", "zucrypt").context("could not determine platform directories")?;

    Ok(project_dirs.config_dir().join(PARAMS_FILE_NAME))
}

/// Reads a parameter set from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid parameter set.
pub fn load_params(path: &Path) -> Result<HashParameters> {
    let data = fs::read(path)
        .with_context(|| format!("failed to read parameter file {}", path.display()))?;
    let params = serde_json::from_slice(&data)
        .with_context(|| format!("invalid parameter file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded argon2 parameters");
    Ok(params)
}

/// Resolves the parameter file to use.
///
/// An explicit path must exist. Without one the platform default is used,
/// but only when present.
pub fn resolve_params(explicit: Option<&Path>) -> Result<Option<HashParameters>> {
    if let Some(path) = explicit {
        return load_params(path).map(Some);
    }

    let path = default_params_path()?;
    if path.exists() {
        load_params(&path).map(Some)
    } else {
        Ok(None)
    }
}
