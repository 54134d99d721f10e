//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::{collections::HashMap, path::PathBuf};

use ret_index::RankingParams;

use crate::{
    Config, ConfigError, DEFAULT_MAX_HEADING_DEPTH, DEFAULT_SUMMARY_LEN,
    parse::{RawConfig, RawRanking, RawSettings},
    resolve::{expand_tilde, resolve_collection_path},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Collections: merged by name, first definition wins completely
/// - Collection weights: merged by name, first definition wins
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let ranking = merge_ranking(configs)?;
    let (max_heading_depth, summary_len, glossary_path) = merge_settings(configs)?;
    let collections = merge_collections(configs)?;
    let collection_weights = merge_collection_weights(configs);
    let config_root = configs.first().map(|c| c.path.parent().unwrap().to_path_buf());

    Ok(Config {
        ranking,
        collections,
        collection_weights,
        max_heading_depth,
        summary_len,
        glossary_path,
        config_root,
    })
}

/// Merges ranking overrides, taking the first defined value for each field.
fn merge_ranking(configs: &[ParsedConfig]) -> Result<RankingParams, ConfigError> {
    let mut result = RankingParams::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.ranking {
            apply_raw_ranking(&mut result, raw);
        }
    }

    result.validate()?;
    Ok(result)
}

/// Applies raw ranking overrides onto `result`, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingParams, raw: &RawRanking) {
    if let Some(v) = raw.k1 {
        result.k1 = v;
    }
    if let Some(v) = raw.b {
        result.b = v;
    }
    if let Some(v) = raw.title_weight {
        result.title_weight = v;
    }
    if let Some(v) = raw.code_weight {
        result.code_weight = v;
    }
    if let Some(v) = raw.description_weight {
        result.description_weight = v;
    }
    if let Some(v) = raw.term_proximity_bonus {
        result.term_proximity_bonus = v;
    }
    if let Some(v) = raw.full_coverage_bonus {
        result.full_coverage_bonus = v;
    }
    if let Some(v) = raw.prefix_penalty {
        result.prefix_penalty = v;
    }
}

/// Merges general settings, returning `(max_heading_depth, summary_len, glossary_path)`.
///
/// `glossary_path`, if relative or tilde-prefixed, is resolved against the directory
/// of the config file that defined it.
fn merge_settings(
    configs: &[ParsedConfig],
) -> Result<(u8, usize, Option<PathBuf>), ConfigError> {
    let mut max_heading_depth = DEFAULT_MAX_HEADING_DEPTH;
    let mut summary_len = DEFAULT_SUMMARY_LEN;
    let mut glossary_path = None;

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        let Some(ref settings) = parsed.config.settings else {
            continue;
        };
        if let Some(v) = settings.max_heading_depth {
            max_heading_depth = v;
        }
        if let Some(v) = settings.summary_len {
            summary_len = v;
        }
        if let Some(ref raw_path) = settings.glossary_path {
            let config_dir = parsed.path.parent().unwrap();
            glossary_path = Some(resolve_relative(raw_path, config_dir)?);
        }
    }

    Ok((max_heading_depth, summary_len, glossary_path))
}

/// Resolves a tilde-or-relative path string against `config_dir`, without requiring
/// the result to exist (unlike a collection path, a glossary file is optional).
fn resolve_relative(raw: &str, config_dir: &std::path::Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(raw)?;
    Ok(if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    })
}

/// Merges collections from all configs, resolving paths.
///
/// Collections are merged by name - first definition wins completely.
fn merge_collections(configs: &[ParsedConfig]) -> Result<HashMap<String, PathBuf>, ConfigError> {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    // Iterate in precedence order (highest first) - first definition wins.
    for parsed in configs {
        let Some(ref collections) = parsed.config.collections else {
            continue;
        };

        let config_dir = parsed.path.parent().unwrap();

        for (name, raw_path) in collections {
            if seen.contains_key(name) {
                continue;
            }

            let resolved = resolve_collection_path(name, raw_path, config_dir)?;
            seen.insert(name.clone(), resolved);
        }
    }

    Ok(seen)
}

/// Merges per-collection weight overrides, first definition wins.
fn merge_collection_weights(configs: &[ParsedConfig]) -> HashMap<String, f64> {
    let mut seen = HashMap::new();

    for parsed in configs {
        let Some(ref weights) = parsed.config.collection_weights else {
            continue;
        };
        for (name, weight) in weights {
            seen.entry(name.clone()).or_insert(*weight);
        }
    }

    seen
}
