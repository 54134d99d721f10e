//! Error types for ret configuration.

use std::{io, path::PathBuf};

use ret_index::IndexError;
use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A collection's root path does not exist.
    #[error("collection '{collection}' path does not exist: {}", path.display())]
    CollectionPathNotFound {
        /// Name of the collection.
        collection: String,
        /// The missing path.
        path: PathBuf,
    },

    /// A collection's root path exists but is not a directory.
    #[error("collection '{collection}' path is not a directory: {}", path.display())]
    CollectionPathNotDirectory {
        /// Name of the collection.
        collection: String,
        /// The offending path.
        path: PathBuf,
    },

    /// A ranking override failed validation.
    #[error("invalid ranking configuration: {0}")]
    InvalidRanking(#[from] IndexError),

    /// Failed to determine the home directory for the global config.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
