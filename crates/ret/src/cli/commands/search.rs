//! Implementation of `ret search`.

use std::process::ExitCode;

use ret_index::Engine;
use ret_query::{DEFAULT_SEARCH_LIMIT, SearchFilters, SearchOptions};

use super::shared::facets_to_map;
use crate::cli::{args::SearchCommand, output};

/// Searches the index and prints matching sections.
pub fn run(engine: &Engine, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.query.join(" ");

    let options = SearchOptions {
        limit: cmd.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        filters: SearchFilters {
            facets: facets_to_map(&cmd.facets),
            doc_id: cmd.doc_id.clone(),
            collection: cmd.collection.clone(),
        },
    };

    let results = engine.search(&query, &options);
    output::print_search_results(&results, cmd.output.json)
}
