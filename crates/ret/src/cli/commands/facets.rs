//! Implementation of `ret facets`.

use std::process::ExitCode;

use ret_index::Engine;

use crate::cli::{args::FacetsCommand, output};

/// Prints per-facet value counts across the corpus.
pub fn run(engine: &Engine, cmd: &FacetsCommand) -> ExitCode {
    output::print_facets(&engine.get_facets(), cmd.output.json)
}
