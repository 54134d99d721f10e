//! Shared helpers for command implementations.

use std::collections::HashMap;

use crate::cli::args::FacetArg;

/// Collects repeated `--facet key=value` flags into the map shape the engine expects.
pub fn facets_to_map(facets: &[FacetArg]) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for facet in facets {
        map.entry(facet.key.clone()).or_default().push(facet.value.clone());
    }
    map
}
