//! Implementation of `ret config`.

use std::process::ExitCode;

use ret_config::{discover_config_files, format_path_for_display};
use serde::Serialize;

use crate::cli::{args::ConfigCommand, context::CommandContext};

/// JSON view of the effective configuration.
#[derive(Serialize)]
struct JsonConfig {
    config_files: Vec<String>,
    collections: Vec<(String, String)>,
    collection_weights: Vec<(String, f64)>,
    max_heading_depth: u8,
    summary_len: usize,
    glossary_path: Option<String>,
    warnings: Vec<String>,
}

/// Prints the effective configuration and any validation warnings.
pub fn run(ctx: &CommandContext, cmd: &ConfigCommand) -> ExitCode {
    let config = &ctx.config;
    let config_files = discover_config_files(&ctx.cwd);
    let warnings = config.validate();

    let mut collections: Vec<(String, String)> = config
        .collections
        .iter()
        .map(|(name, path)| (name.clone(), format_path_for_display(path, config.config_root.as_deref())))
        .collect();
    collections.sort();

    // A brand new directory with no config file at all has nothing to warn
    // about yet; only a config file that was actually found and still has
    // warnings counts as a failure worth a non-zero exit code.
    let exit_code = if warnings.is_empty() || config_files.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if cmd.output.json {
        let view = JsonConfig {
            config_files: config_files
                .iter()
                .map(|p| format_path_for_display(p, Some(&ctx.cwd)))
                .collect(),
            collections,
            collection_weights: {
                let mut weights: Vec<(String, f64)> =
                    config.collection_weights.iter().map(|(k, v)| (k.clone(), *v)).collect();
                weights.sort_by(|a, b| a.0.cmp(&b.0));
                weights
            },
            max_heading_depth: config.max_heading_depth,
            summary_len: config.summary_len,
            glossary_path: config.glossary_path.as_ref().map(|p| p.display().to_string()),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        };
        return match serde_json::to_string_pretty(&view) {
            Ok(s) => {
                println!("{s}");
                exit_code
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if config_files.is_empty() {
        println!("No configuration files found.");
    } else {
        println!("Config files:");
        for path in &config_files {
            println!("   {}", format_path_for_display(path, Some(&ctx.cwd)));
        }
    }
    println!();

    println!("Collections:");
    if collections.is_empty() {
        println!("   (none defined)");
    } else {
        for (name, path) in &collections {
            let weight = config.collection_weights.get(name);
            match weight {
                Some(w) => println!("   {name} -> {path} (weight {w})"),
                None => println!("   {name} -> {path}"),
            }
        }
    }
    println!();

    println!("Settings:");
    println!("   max_heading_depth = {}", config.max_heading_depth);
    println!("   summary_len = {}", config.summary_len);
    if let Some(path) = &config.glossary_path {
        println!("   glossary_path = {}", path.display());
    }
    println!();

    println!("Ranking:");
    println!("   k1 = {}", config.ranking.k1);
    println!("   b = {}", config.ranking.b);
    println!("   title_weight = {}", config.ranking.title_weight);
    println!("   code_weight = {}", config.ranking.code_weight);
    println!("   description_weight = {}", config.ranking.description_weight);
    println!("   term_proximity_bonus = {}", config.ranking.term_proximity_bonus);
    println!("   full_coverage_bonus = {}", config.ranking.full_coverage_bonus);
    println!("   prefix_penalty = {}", config.ranking.prefix_penalty);
    println!();

    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Warnings ({}):", warnings.len());
    for w in &warnings {
        println!("   {w}");
    }

    exit_code
}
