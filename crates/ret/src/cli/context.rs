//! Shared context for running CLI commands.
//!
//! Unlike a persistent-index system, ret keeps no on-disk index: every
//! invocation loads configuration, walks the configured collections, and
//! builds a fresh in-memory [`Engine`] before running the requested command.

use std::{collections::HashMap, env, fs, path::PathBuf, process::ExitCode};

use ret_config::Config;
use ret_index::Engine;

use crate::cli::discovery::discover_files;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Ensures at least one collection is configured.
    pub fn require_collections(&self) -> Result<(), ExitCode> {
        if self.config.collections.is_empty() {
            eprintln!("error: no collections are defined in configuration");
            eprintln!("Add a [collections] table to .ret.toml, then try again.");
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Builds a fresh in-memory engine from the configured collections.
    pub fn build_engine(&self) -> Result<Engine, ExitCode> {
        self.require_collections()?;

        let engine = Engine::new();
        let mut documents = Vec::new();

        let mut collection_names: Vec<&String> = self.config.collections.keys().collect();
        collection_names.sort();

        for name in collection_names {
            let root = &self.config.collections[name];
            for rel_path in discover_files(root) {
                match ret_document::index_path(
                    name,
                    root,
                    &rel_path,
                    self.config.max_heading_depth,
                    self.config.summary_len,
                ) {
                    Ok(document) => documents.push(document),
                    Err(e) => {
                        eprintln!("error: failed to index {}: {e}", rel_path.display());
                        return Err(ExitCode::FAILURE);
                    }
                }
            }
        }

        if let Err(e) = engine.load(documents) {
            eprintln!("error: failed to build index: {e}");
            return Err(ExitCode::FAILURE);
        }

        if let Err(e) = engine.set_ranking(self.config.ranking.clone()) {
            eprintln!("error: invalid ranking configuration: {e}");
            return Err(ExitCode::FAILURE);
        }
        engine.set_collection_weights(self.config.collection_weights.clone());

        if let Some(glossary_path) = &self.config.glossary_path {
            let entries = load_glossary_or_failure(glossary_path)?;
            engine.load_glossary(&entries);
        }

        Ok(engine)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &std::path::Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Loads a flat `term = ["phrase", ...]` glossary file.
fn load_glossary_or_failure(
    path: &std::path::Path,
) -> Result<HashMap<String, Vec<String>>, ExitCode> {
    let raw = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: failed to read glossary file {}: {e}", path.display());
        ExitCode::FAILURE
    })?;

    toml::from_str(&raw).map_err(|e| {
        eprintln!("error: failed to parse glossary file {}: {e}", path.display());
        ExitCode::FAILURE
    })
}
