//! Error types for the ret-index crate.

use ret_document::NodeId;
use thiserror::Error;

/// Errors that can occur when mutating the index.
///
/// Query operations never fail for corpus reasons (empty results stand in
/// for "nothing matched"); these variants cover the two ways a caller can
/// hand the engine something it must reject without mutating state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndexError {
    /// A node's `parent_id` does not resolve to another node in the same
    /// document.
    #[error("node {node_id} references a parent that does not exist in the document")]
    DanglingParent {
        /// The offending node.
        node_id: NodeId,
    },

    /// Two nodes in the same document share an id.
    #[error("duplicate node id {node_id} in document")]
    DuplicateNodeId {
        /// The repeated id.
        node_id: NodeId,
    },

    /// A ranking parameter was outside its allowed range.
    #[error("invalid ranking parameter {name}: {value} ({reason})")]
    InvalidRankingParam {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
