//! Process-wide corpus statistics used for BM25 length normalization.

/// Total indexed sections and their average length, recomputed after every
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CorpusStats {
    /// Total number of indexed sections across all documents.
    pub total_nodes: usize,
    /// Average section length in tokens (0.0 when there are no sections).
    pub avg_node_length: f64,
}

impl CorpusStats {
    /// Recomputes stats from the total token count and section count.
    pub fn recompute(total_nodes: usize, total_tokens: usize) -> Self {
        let avg_node_length = if total_nodes == 0 {
            0.0
        } else {
            total_tokens as f64 / total_nodes as f64
        };

        Self {
            total_nodes,
            avg_node_length,
        }
    }
}
