//! Per-section term statistics: postings, node stats, and the positional
//! inverted index that ties them together.

use std::collections::{BTreeMap, HashMap};

use ret_document::{DocId, NodeId};

/// One (term, document, section) entry: everywhere a term occurs in a
/// section, bundled with the weight used for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    /// Document the section belongs to.
    pub doc_id: DocId,
    /// The section itself.
    pub node_id: NodeId,
    /// Ordered token offsets into the section's title+body token stream.
    pub positions: Vec<usize>,
    /// Number of occurrences; always equal to `positions.len()`.
    pub term_frequency: usize,
    /// Maximum per-occurrence weight observed for this term in this section.
    pub weight: f64,
}

impl Posting {
    fn new(doc_id: DocId, node_id: NodeId) -> Self {
        Self {
            doc_id,
            node_id,
            positions: Vec::new(),
            term_frequency: 0,
            weight: 0.0,
        }
    }

    /// Records one more occurrence of the term at `position` with the given
    /// per-occurrence weight, keeping the maximum weight seen.
    fn record(&mut self, position: usize, weight: f64) {
        self.positions.push(position);
        self.term_frequency = self.positions.len();
        if weight > self.weight {
            self.weight = weight;
        }
    }
}

/// Per-section length, needed for BM25 length normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeStats {
    /// Total tokens in the section's title+body token stream.
    pub total_tokens: usize,
}

/// Positional inverted index: term -> section -> posting.
///
/// Keyed by a `BTreeMap` (per the design note on iteration-friendly prefix
/// scanning) rather than a hash map, so prefix queries in [`Self::prefix_terms`]
/// can walk a sorted range instead of the whole keyset.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: BTreeMap<String, HashMap<NodeId, Posting>>,
}

impl InvertedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `term` at `position` in the given section,
    /// with the given per-occurrence weight.
    pub fn record(
        &mut self,
        term: &str,
        doc_id: &DocId,
        node_id: &NodeId,
        position: usize,
        weight: f64,
    ) {
        let postings = self.terms.entry(term.to_string()).or_default();
        let posting = postings
            .entry(node_id.clone())
            .or_insert_with(|| Posting::new(doc_id.clone(), node_id.clone()));
        posting.record(position, weight);
    }

    /// Returns the postings for an exact term match, if any.
    pub fn postings(&self, term: &str) -> Option<impl Iterator<Item = &Posting>> {
        self.terms.get(term).map(|m| m.values())
    }

    /// Number of distinct sections containing `term` (BM25's `n_t`).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map(|m| m.len()).unwrap_or(0)
    }

    /// Returns every indexed term that starts with `prefix` but is not
    /// exactly `prefix`, using the map's sort order to scan only the
    /// matching range.
    pub fn prefix_terms(&self, prefix: &str) -> Vec<&str> {
        self.terms
            .range(prefix.to_string()..)
            .take_while(|(term, _)| term.starts_with(prefix))
            .filter(|(term, _)| term.as_str() != prefix)
            .map(|(term, _)| term.as_str())
            .collect()
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Removes every posting belonging to `node_id`, dropping any term
    /// bucket left empty.
    pub fn remove_node(&mut self, node_id: &NodeId) {
        self.terms.retain(|_, postings| {
            postings.remove(node_id);
            !postings.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn ids(collection: &str, path: &str, slug: Option<&str>) -> (DocId, NodeId) {
        let doc_id = DocId::from_path(collection, Path::new(path));
        let node_id = NodeId::from_path(collection, Path::new(path), slug);
        (doc_id, node_id)
    }

    #[test]
    fn record_accumulates_positions_and_max_weight() {
        let mut index = InvertedIndex::new();
        let (doc_id, node_id) = ids("docs", "g.md", Some("intro"));

        index.record("auth", &doc_id, &node_id, 0, 1.0);
        index.record("auth", &doc_id, &node_id, 5, 3.0);

        let posting = index.postings("auth").unwrap().next().unwrap();
        assert_eq!(posting.positions, vec![0, 5]);
        assert_eq!(posting.term_frequency, 2);
        assert_eq!(posting.weight, 3.0);
    }

    #[test]
    fn document_frequency_counts_distinct_sections() {
        let mut index = InvertedIndex::new();
        let (doc_id, a) = ids("docs", "a.md", None);
        let (_, b) = ids("docs", "b.md", None);

        index.record("deploy", &doc_id, &a, 0, 1.0);
        index.record("deploy", &doc_id, &b, 0, 1.0);

        assert_eq!(index.document_frequency("deploy"), 2);
        assert_eq!(index.document_frequency("missing"), 0);
    }

    #[test]
    fn prefix_terms_excludes_exact_match() {
        let mut index = InvertedIndex::new();
        let (doc_id, node_id) = ids("docs", "g.md", None);

        index.record("auth", &doc_id, &node_id, 0, 1.0);
        index.record("authentication", &doc_id, &node_id, 1, 1.0);
        index.record("authority", &doc_id, &node_id, 2, 1.0);
        index.record("other", &doc_id, &node_id, 3, 1.0);

        let mut prefixes = index.prefix_terms("auth");
        prefixes.sort();
        assert_eq!(prefixes, vec!["authentication", "authority"]);
    }

    #[test]
    fn remove_node_drops_empty_buckets() {
        let mut index = InvertedIndex::new();
        let (doc_id, node_id) = ids("docs", "g.md", None);

        index.record("auth", &doc_id, &node_id, 0, 1.0);
        assert_eq!(index.term_count(), 1);

        index.remove_node(&node_id);
        assert_eq!(index.term_count(), 0);
        assert!(index.postings("auth").is_none());
    }
}
