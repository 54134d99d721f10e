//! Document and tree data model, plus a reference markdown/source-file
//! indexer, for ret.
//!
//! This crate owns the shape of an indexed document (a flat, ordered
//! collection of [`TreeNode`]s describing one section each) and one
//! concrete way to produce it: splitting markdown at heading boundaries, or
//! treating a non-markdown file as a single whole-file section. Callers
//! that need a different ingestion path can build [`IndexedDocument`]
//! values directly, as long as they uphold the same invariants.

#![warn(missing_docs)]

mod error;
mod frontmatter;
mod id;
mod indexer;
mod node;
mod slug;

pub use error::DocumentError;
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use id::{DocId, IdError, NodeId};
pub use indexer::{
    DEFAULT_MAX_HEADING_DEPTH, DEFAULT_SUMMARY_LEN, index_markdown, index_path, index_source,
};
pub use node::{DocumentMeta, IndexedDocument, PreorderIter, TreeNode};
pub use slug::Slugifier;
