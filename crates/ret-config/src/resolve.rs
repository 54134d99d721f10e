//! Path resolution for collection definitions.
//!
//! Resolves relative and tilde-prefixed paths in collection definitions to
//! absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a collection's root path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/docs`) - expanded to home directory
/// - Relative paths (`./docs`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths (`/home/user/docs`) - returned as-is after validation
///
/// The path must exist and be a directory. Returns an error otherwise.
pub fn resolve_collection_path(
    collection: &str,
    path: &str,
    config_dir: &Path,
) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    if !absolute.exists() {
        return Err(ConfigError::CollectionPathNotFound {
            collection: collection.to_string(),
            path: absolute,
        });
    }

    if !absolute.is_dir() {
        return Err(ConfigError::CollectionPathNotDirectory {
            collection: collection.to_string(),
            path: absolute,
        });
    }

    Ok(absolute.canonicalize().unwrap_or(absolute))
}

/// Expands a tilde prefix to the home directory.
pub(crate) fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
