//! Implementation of `ret stats`.

use std::process::ExitCode;

use ret_index::Engine;

use crate::cli::{args::StatsCommand, output};

/// Prints corpus-wide section count and average section length.
pub fn run(engine: &Engine, cmd: &StatsCommand) -> ExitCode {
    output::print_stats(engine.get_stats(), cmd.output.json)
}
