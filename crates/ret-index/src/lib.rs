//! In-memory positional inverted index, BM25 scorer, and document store.
//!
//! [`Engine`] is the crate's single entry point: it owns a [`state::IndexState`]
//! behind one `RwLock` and exposes load/add/remove, search, catalog listing,
//! and tree navigation over it. Everything else in this crate is the
//! machinery `Engine` composes:
//!
//! - [`posting`] — the positional inverted index and per-section postings.
//! - [`filter_index`] — the faceted pre-score whitelist.
//! - [`corpus_stats`] — corpus-wide section count and average length.
//! - [`scorer`] — pure BM25 math.
//! - [`snippet`] — density-window snippet extraction.
//! - [`store`] — owns indexed documents and their trees.
//! - [`writer`] — incremental add/remove/replace.
//! - [`search`] — the query-execution orchestrator.
//! - [`list`] — catalog listing and facet counts.
//! - [`ranking`] — tunable BM25 and bonus parameters.
//!
//! ```ignore
//! use ret_index::Engine;
//! use ret_query::SearchOptions;
//!
//! let engine = Engine::new();
//! engine.add(document)?;
//! let results = engine.search("deploy pipeline", &SearchOptions::default());
//! ```

#![warn(missing_docs)]

mod corpus_stats;
mod engine;
mod error;
mod filter_index;
mod list;
mod posting;
mod ranking;
mod scorer;
mod search;
mod snippet;
mod state;
mod store;
mod writer;

pub use corpus_stats::CorpusStats;
pub use engine::Engine;
pub use error::IndexError;
pub use filter_index::FilterIndex;
pub use list::{facets, list, DocumentSummary, ListResult};
pub use posting::{InvertedIndex, NodeStats, Posting};
pub use ranking::RankingParams;
pub use scorer::{idf, length_norm, score_term, tf_norm};
pub use search::{search as run_search, SearchResult};
pub use snippet::{build_snippet, DEFAULT_SNIPPET_LEN};
pub use state::IndexState;
pub use store::DocumentStore;
pub use writer::{add_document, needs_reindex, remove_document, load as load_documents};
