//! Implementation of `ret ls`.

use std::process::ExitCode;

use ret_index::Engine;
use ret_query::{DEFAULT_LIST_LIMIT, ListOptions};

use super::shared::facets_to_map;
use crate::cli::{args::LsCommand, output};

/// Lists documents matching the given filters.
pub fn run(engine: &Engine, cmd: &LsCommand) -> ExitCode {
    let options = ListOptions {
        tag: cmd.tag.clone(),
        query: cmd.query.clone(),
        collection: cmd.collection.clone(),
        filters: facets_to_map(&cmd.facets),
        limit: cmd.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        offset: cmd.offset.unwrap_or(0),
    };

    let result = engine.list(&options);
    output::print_documents(&result, cmd.output.json)
}
