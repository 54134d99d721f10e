//! Configuration system for ret.
//!
//! ret uses TOML configuration files named `.ret.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.ret.toml` files found,
//! then loading `~/.ret.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod validate;

use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
};

use directories::BaseDirs;
pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use ret_index::RankingParams;
pub use validate::ConfigWarning;
use validate::validate_config;

use crate::{
    merge::{ParsedConfig, merge_configs},
    parse::parse_config_file,
};

/// Maximum heading depth to split markdown documents at, unless overridden.
pub const DEFAULT_MAX_HEADING_DEPTH: u8 = ret_document::DEFAULT_MAX_HEADING_DEPTH;

/// Maximum length of a generated section summary, unless overridden.
pub const DEFAULT_SUMMARY_LEN: usize = ret_document::DEFAULT_SUMMARY_LEN;

/// Formats a path for display, using `~` for home directory or relative paths where appropriate.
///
/// - If `base` is provided and the path is under it, returns a relative path
/// - If the path is under the home directory, replaces the home prefix with `~`
/// - Otherwise returns the path as-is
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    // Try relative path first if base is provided
    if let Some(base_path) = base
        && let Some(relative) = pathdiff::diff_paths(path, base_path)
    {
        let components: Vec<_> = relative.components().collect();
        let parent_count = components
            .iter()
            .take_while(|c| matches!(c, Component::ParentDir))
            .count();
        // Use relative path if it's simpler (at most 2 parent references)
        if parent_count <= 2 {
            let rel_str = relative.display().to_string();
            if !rel_str.starts_with("..") && !rel_str.starts_with('/') {
                return format!("./{rel_str}");
            }
            return rel_str;
        }
    }

    if let Some(base_dirs) = BaseDirs::new() {
        let home = base_dirs.home_dir();
        if let Ok(suffix) = path.strip_prefix(home) {
            return format!("~/{}", suffix.display());
        }
    }

    path.display().to_string()
}

/// Top-level merged configuration for ret.
///
/// This represents the fully resolved configuration after merging all discovered `.ret.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Effective BM25 and weighting parameters.
    pub ranking: RankingParams,
    /// Resolved collection name -> absolute directory path.
    pub collections: HashMap<String, PathBuf>,
    /// Per-collection relevance multipliers.
    pub collection_weights: HashMap<String, f64>,
    /// Maximum heading depth to split markdown documents at.
    pub max_heading_depth: u8,
    /// Maximum length of a generated section summary.
    pub summary_len: usize,
    /// Path to a glossary TOML file, if configured.
    pub glossary_path: Option<PathBuf>,
    /// Directory containing the most specific config file (determines index location).
    pub config_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking: RankingParams::default(),
            collections: HashMap::new(),
            collection_weights: HashMap::new(),
            max_heading_depth: DEFAULT_MAX_HEADING_DEPTH,
            summary_len: DEFAULT_SUMMARY_LEN,
            glossary_path: None,
            config_root: None,
        }
    }
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.ret.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.ret.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.ret.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// This is primarily useful for testing.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig { path: path.clone(), config })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - No collections defined
    /// - A configured glossary path that doesn't exist
    /// - Collection weights that reference an undefined collection
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }
}
