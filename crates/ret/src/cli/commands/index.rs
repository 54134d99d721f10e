//! Implementation of `ret index`.

use std::process::ExitCode;

use ret_index::Engine;
use ret_query::ListOptions;

use crate::cli::{args::IndexCommand, output};

/// Reports a summary of the index built by [`crate::cli::context::CommandContext::build_engine`].
pub fn run(engine: &Engine, cmd: &IndexCommand) -> ExitCode {
    let stats = engine.get_stats();
    let result = engine.list(&ListOptions { limit: usize::MAX, ..ListOptions::new() });

    output::print_index_summary(result.total, stats, cmd.output.json)
}
