//! The engine's single logical resource: everything a writer mutates and a
//! reader consults, bundled so one lock protects all of it together.

use std::collections::HashMap;

use ret_document::NodeId;
use ret_query::Glossary;

use crate::{
    corpus_stats::CorpusStats, filter_index::FilterIndex, posting::InvertedIndex,
    posting::NodeStats, ranking::RankingParams, store::DocumentStore,
};

/// All mutable engine state, held behind a single `RwLock` by [`crate::Engine`].
///
/// Splitting this from `Engine` keeps the writer-side functions in
/// [`crate::writer`] free of locking concerns: they take `&mut IndexState`
/// and the engine is the only place that acquires the lock.
#[derive(Debug, Default)]
pub struct IndexState {
    /// Owned documents and their trees.
    pub store: DocumentStore,
    /// Positional inverted index over all indexed sections.
    pub inverted: InvertedIndex,
    /// Faceted pre-score whitelist.
    pub filters: FilterIndex,
    /// Per-section length, for BM25 length normalization.
    pub node_stats: HashMap<NodeId, NodeStats>,
    /// Corpus-wide section count and average length.
    pub corpus: CorpusStats,
    /// Tunable BM25 and bonus parameters.
    pub ranking: RankingParams,
    /// Per-collection score multiplier; collections absent here use 1.0.
    pub collection_weights: HashMap<String, f64>,
    /// Bidirectional term/phrase expansion table.
    pub glossary: Glossary,
}
