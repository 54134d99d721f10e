//! Command implementations and dispatch.

pub mod config;
pub mod facets;
pub mod get;
pub mod index;
pub mod ls;
pub mod search;
mod shared;
pub mod stats;
pub mod tree;

use std::process::ExitCode;

use ret_index::Engine;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext, engine: &Engine) -> ExitCode {
    match command {
        Commands::Index(cmd) => index::run(engine, &cmd),
        Commands::Search(cmd) => search::run(engine, &cmd),
        Commands::Ls(cmd) => ls::run(engine, &cmd),
        Commands::Tree(cmd) => tree::run(engine, &cmd),
        Commands::Get(cmd) => get::run(engine, &cmd),
        Commands::Stats(cmd) => stats::run(engine, &cmd),
        Commands::Facets(cmd) => facets::run(engine, &cmd),
        Commands::Config(cmd) => config::run(ctx, &cmd),
    }
}
