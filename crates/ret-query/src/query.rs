//! Search query input types shared between the engine and its callers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Facet constraints and scoping options accompanying a search or list call.
///
/// A key absent from the filter index yields an empty result for that key
/// (and therefore an empty whitelist overall), per the filter resolution
/// rule: missing keys never match everything by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Facet key -> accepted values (OR within a key, AND across keys).
    #[serde(default)]
    pub facets: HashMap<String, Vec<String>>,
    /// Restrict results to a single document id.
    #[serde(default)]
    pub doc_id: Option<String>,
    /// Restrict results to a single collection.
    #[serde(default)]
    pub collection: Option<String>,
}

impl SearchFilters {
    /// Returns true if no constraints are present.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty() && self.doc_id.is_none() && self.collection.is_none()
    }
}

/// Options accompanying a `search` call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of results to return.
    pub limit: usize,
    /// Facet/doc_id/collection constraints applied before scoring.
    pub filters: SearchFilters,
}

/// Default number of results returned by `search` when unspecified.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            filters: SearchFilters::default(),
        }
    }
}

/// Options accompanying a `list` call.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive tag substring filter.
    pub tag: Option<String>,
    /// Case-insensitive free-text match over title/description/path.
    pub query: Option<String>,
    /// Restrict to a single collection.
    pub collection: Option<String>,
    /// Facet constraints (same semantics as [`SearchFilters::facets`]).
    pub filters: HashMap<String, Vec<String>>,
    /// Maximum number of documents to return.
    pub limit: usize,
    /// Number of documents to skip before collecting `limit`.
    pub offset: usize,
}

/// Default page size for `list` when unspecified.
pub const DEFAULT_LIST_LIMIT: usize = 20;

impl ListOptions {
    /// Creates list options with the default page size and no filters.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            ..Default::default()
        }
    }
}
