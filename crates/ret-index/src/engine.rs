//! Public entry point: a single writer, many readers, over one in-memory
//! index.

use std::{
    collections::HashMap,
    path::Path,
    sync::RwLock,
};

use ret_document::{DocId, IndexedDocument, NodeId, TreeNode};
use ret_query::{Glossary, ListOptions, SearchOptions};

use crate::{
    corpus_stats::CorpusStats,
    error::IndexError,
    list::{self, ListResult},
    ranking::RankingParams,
    search::{self, SearchResult},
    state::IndexState,
    writer,
};

/// The in-memory retrieval engine.
///
/// All state lives behind one [`RwLock`]: writes (`add`, `remove`, `load`,
/// `set_ranking`, `set_collection_weights`, `load_glossary`) take the write
/// guard for the whole mutation, and reads (`search`, `list`, tree
/// navigation, stats) take the read guard for the whole operation. A search
/// in flight always sees a consistent snapshot; it never observes a write
/// partway through, and it is not cancellable once it has the lock.
#[derive(Default)]
pub struct Engine {
    state: RwLock<IndexState>,
}

impl Engine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all indexed documents with `documents`. Ranking parameters,
    /// collection weights, and the glossary survive the reload.
    pub fn load(&self, documents: Vec<IndexedDocument>) -> Result<(), IndexError> {
        let mut state = self.state.write().expect("index lock poisoned");
        writer::load(&mut state, documents)
    }

    /// Adds or replaces a single document.
    pub fn add(&self, document: IndexedDocument) -> Result<(), IndexError> {
        let mut state = self.state.write().expect("index lock poisoned");
        writer::add_document(&mut state, document)
    }

    /// Removes a document. Returns true if it was present.
    pub fn remove(&self, doc_id: &DocId) -> bool {
        let mut state = self.state.write().expect("index lock poisoned");
        writer::remove_document(&mut state, doc_id)
    }

    /// Returns true if `path` has not yet been indexed with the content
    /// hash `hash`, i.e. the caller should reindex it.
    pub fn needs_reindex(&self, path: &Path, hash: u64) -> bool {
        let state = self.state.read().expect("index lock poisoned");
        writer::needs_reindex(&state, path, hash)
    }

    /// Runs a search and returns scored, snippeted results.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        let state = self.state.read().expect("index lock poisoned");
        search::search(&state, query, options)
    }

    /// Lists documents matching the given filters, sorted and paginated.
    /// `total` and `facet_counts` on the result reflect the full matching
    /// set, before `offset`/`limit` is applied.
    pub fn list(&self, options: &ListOptions) -> ListResult {
        let state = self.state.read().expect("index lock poisoned");
        list::list(&state, options)
    }

    /// Returns the full set of sections for a document, in document order.
    pub fn get_tree(&self, doc_id: &DocId) -> Option<Vec<TreeNode>> {
        let state = self.state.read().expect("index lock poisoned");
        state.store.get(doc_id).map(|doc| doc.nodes.clone())
    }

    /// Returns the requested sections' content, in the order requested,
    /// silently skipping ids that don't resolve.
    pub fn get_node_content(&self, doc_id: &DocId, node_ids: &[NodeId]) -> Option<Vec<TreeNode>> {
        let state = self.state.read().expect("index lock poisoned");
        state
            .store
            .node_content(doc_id, node_ids)
            .map(|nodes| nodes.into_iter().cloned().collect())
    }

    /// Returns a section and all of its descendants, breadth-first.
    pub fn get_subtree(&self, doc_id: &DocId, node_id: &NodeId) -> Option<Vec<TreeNode>> {
        let state = self.state.read().expect("index lock poisoned");
        state
            .store
            .subtree(doc_id, node_id)
            .map(|nodes| nodes.into_iter().cloned().collect())
    }

    /// Returns corpus-wide section count and average section length.
    pub fn get_stats(&self) -> CorpusStats {
        let state = self.state.read().expect("index lock poisoned");
        state.corpus
    }

    /// Returns per-key, per-value document counts across the corpus.
    pub fn get_facets(&self) -> HashMap<String, HashMap<String, usize>> {
        let state = self.state.read().expect("index lock poisoned");
        list::facets(&state)
    }

    /// Replaces the ranking parameters. Rejected (and the prior parameters
    /// kept) if any field fails validation.
    pub fn set_ranking(&self, params: RankingParams) -> Result<(), IndexError> {
        params.validate()?;
        let mut state = self.state.write().expect("index lock poisoned");
        state.ranking = params;
        Ok(())
    }

    /// Replaces the per-collection score multipliers.
    pub fn set_collection_weights(&self, weights: HashMap<String, f64>) {
        let mut state = self.state.write().expect("index lock poisoned");
        state.collection_weights = weights;
    }

    /// Replaces the glossary with `entries`.
    pub fn load_glossary(&self, entries: &HashMap<String, Vec<String>>) {
        let mut state = self.state.write().expect("index lock poisoned");
        let mut glossary = Glossary::new();
        glossary.load(entries);
        state.glossary = glossary;
    }
}
