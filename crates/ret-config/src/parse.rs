//! Configuration file parsing.
//!
//! Parses individual `.ret.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// If true, discovery stops here and ignores configs further up the tree.
    pub root: Option<bool>,
    /// Ranking parameter overrides.
    pub ranking: Option<RawRanking>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Collection definitions: name -> path.
    pub collections: Option<HashMap<String, String>>,
    /// Per-collection relevance multipliers.
    pub collection_weights: Option<HashMap<String, f64>>,
}

/// Raw ranking overrides, mirroring [`ret_index::RankingParams`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRanking {
    /// BM25 term-frequency saturation parameter.
    pub k1: Option<f64>,
    /// BM25 length-normalization parameter.
    pub b: Option<f64>,
    /// Per-occurrence weight for title terms.
    pub title_weight: Option<f64>,
    /// Per-occurrence weight for code terms.
    pub code_weight: Option<f64>,
    /// Per-occurrence weight for description-matching terms.
    pub description_weight: Option<f64>,
    /// Bonus per extra distinct matched query term.
    pub term_proximity_bonus: Option<f64>,
    /// Bonus for matching every query term.
    pub full_coverage_bonus: Option<f64>,
    /// Multiplier applied to prefix (non-exact) matches.
    pub prefix_penalty: Option<f64>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Maximum heading depth to split markdown documents at.
    pub max_heading_depth: Option<u8>,
    /// Maximum length of a generated section summary.
    pub summary_len: Option<usize>,
    /// Path to a glossary TOML file (term -> expansion phrases).
    pub glossary_path: Option<String>,
}

/// Checks whether a raw TOML file has `root = true` set, without requiring
/// the rest of the document to parse successfully under [`RawConfig`].
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    parse_config_str(&contents, path)
        .map(|config| config.root.unwrap_or(false))
        .unwrap_or(false)
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
