//! Incremental maintenance: atomic add/remove/replace of a document.

use ret_document::{DocId, IndexedDocument, TreeNode};
use ret_query::{code_tokens, tokenize_and_stem};

use crate::{corpus_stats::CorpusStats, error::IndexError, posting::NodeStats, state::IndexState};

/// Validates that a document's tree is well-formed: every parent reference
/// resolves within the document, and no two nodes share an id.
fn validate_tree(document: &IndexedDocument) -> Result<(), IndexError> {
    let mut seen = std::collections::HashSet::new();
    for node in &document.nodes {
        if !seen.insert(node.id.clone()) {
            return Err(IndexError::DuplicateNodeId {
                node_id: node.id.clone(),
            });
        }
    }

    for node in &document.nodes {
        if let Some(parent_id) = &node.parent_id
            && document.node(parent_id).is_none()
        {
            return Err(IndexError::DanglingParent {
                node_id: node.id.clone(),
            });
        }
    }

    Ok(())
}

/// Removes every trace of `doc_id` from the index, filter index, and node
/// stats, without recomputing corpus stats (the caller does that once,
/// after any further insert).
fn remove_internal(state: &mut IndexState, doc_id: &DocId) {
    if let Some(document) = state.store.remove(doc_id) {
        for node in &document.nodes {
            state.inverted.remove_node(&node.id);
            state.node_stats.remove(&node.id);
        }
    }
    state.filters.remove_document(doc_id);
}

/// Indexes one section's token stream into the inverted index and records
/// its [`NodeStats`], applying the weight-priority rules from the data
/// model: title position, then document description (first section only),
/// then code-token membership, else 1.0.
fn index_node(
    state: &mut IndexState,
    doc_id: &DocId,
    node: &TreeNode,
    description_terms: &std::collections::HashSet<String>,
    is_first_section: bool,
) {
    let title_tokens = tokenize_and_stem(&node.title);
    let body_tokens = tokenize_and_stem(&node.content);
    let code_terms = code_tokens(&node.content);

    let title_len = title_tokens.len();
    let stream: Vec<String> = title_tokens.into_iter().chain(body_tokens).collect();

    state
        .node_stats
        .insert(node.id.clone(), NodeStats { total_tokens: stream.len() });

    for (position, term) in stream.iter().enumerate() {
        let weight = if position < title_len {
            state.ranking.title_weight
        } else if is_first_section && description_terms.contains(term) {
            state.ranking.description_weight
        } else if code_terms.contains(term) {
            state.ranking.code_weight
        } else {
            1.0
        };
        state.inverted.record(term, doc_id, &node.id, position, weight);
    }
}

/// Recomputes [`CorpusStats`] from the current node stats.
fn recompute_corpus_stats(state: &mut IndexState) {
    let total_nodes = state.node_stats.len();
    let total_tokens: usize = state.node_stats.values().map(|s| s.total_tokens).sum();
    state.corpus = CorpusStats::recompute(total_nodes, total_tokens);
}

/// Inserts or replaces a document. If a document with the same id already
/// exists, all of its postings, filter entries, and node stats are removed
/// before the new version is indexed, so the whole sequence behaves as one
/// atomic replacement with respect to readers holding the writer lock.
pub fn add_document(state: &mut IndexState, document: IndexedDocument) -> Result<(), IndexError> {
    validate_tree(&document)?;

    let doc_id = document.meta.doc_id.clone();
    if state.store.contains(&doc_id) {
        remove_internal(state, &doc_id);
    }

    let description_terms: std::collections::HashSet<String> = document
        .meta
        .description
        .as_deref()
        .map(tokenize_and_stem)
        .unwrap_or_default()
        .into_iter()
        .collect();

    for (i, node) in document.nodes.iter().enumerate() {
        index_node(state, &doc_id, node, &description_terms, i == 0);
    }

    state.filters.insert_document(
        &doc_id,
        &document.meta.collection,
        &document.meta.tags,
        &document.meta.facets,
    );

    state.store.insert(document);
    recompute_corpus_stats(state);

    Ok(())
}

/// Removes a document and everything it contributed to the index, filter
/// index, and node stats, then recomputes corpus stats.
pub fn remove_document(state: &mut IndexState, doc_id: &DocId) -> bool {
    let existed = state.store.contains(doc_id);
    remove_internal(state, doc_id);
    recompute_corpus_stats(state);
    existed
}

/// Replaces all state with a fresh set of documents.
pub fn load(state: &mut IndexState, documents: Vec<IndexedDocument>) -> Result<(), IndexError> {
    *state = IndexState {
        ranking: state.ranking.clone(),
        collection_weights: state.collection_weights.clone(),
        glossary: std::mem::take(&mut state.glossary),
        ..IndexState::default()
    };

    for document in documents {
        add_document(state, document)?;
    }

    Ok(())
}

/// Returns true if `path` has never been indexed under `hash`, i.e. the
/// caller should reindex it.
pub fn needs_reindex(state: &IndexState, path: &std::path::Path, hash: u64) -> bool {
    !state
        .store
        .iter()
        .any(|doc| doc.meta.path == path && doc.meta.content_hash == hash)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use ret_document::{DocId, DocumentMeta, NodeId};

    use super::*;

    fn doc(collection: &str, path: &str, hash: u64, sections: &[(&str, &str)]) -> IndexedDocument {
        let doc_id = DocId::from_path(collection, Path::new(path));
        let root_id = NodeId::from_path(collection, Path::new(path), None);

        let mut nodes = vec![TreeNode {
            id: root_id.clone(),
            title: sections[0].0.to_string(),
            level: 0,
            parent_id: None,
            children: Vec::new(),
            content: sections[0].1.to_string(),
            summary: sections[0].1.to_string(),
            word_count: sections[0].1.split_whitespace().count(),
            line_range: (1, 1),
        }];

        for (title, body) in &sections[1..] {
            let slug = title.to_lowercase().replace(' ', "-");
            let id = NodeId::from_path(collection, Path::new(path), Some(&slug));
            nodes.push(TreeNode {
                id,
                title: title.to_string(),
                level: 1,
                parent_id: Some(root_id.clone()),
                children: Vec::new(),
                content: body.to_string(),
                summary: body.to_string(),
                word_count: body.split_whitespace().count(),
                line_range: (1, 1),
            });
        }

        IndexedDocument {
            meta: DocumentMeta {
                doc_id,
                path: PathBuf::from(path),
                title: sections[0].0.to_string(),
                description: None,
                word_count: sections.iter().map(|(_, b)| b.split_whitespace().count()).sum(),
                heading_count: sections.len() - 1,
                max_depth: 1,
                modified: None,
                tags: Vec::new(),
                content_hash: hash,
                collection: collection.to_string(),
                facets: std::collections::HashMap::new(),
            },
            root_nodes: vec![root_id],
            nodes,
        }
    }

    #[test]
    fn add_populates_index_and_corpus_stats() {
        let mut state = IndexState::default();
        let document = doc("docs", "g.md", 1, &[("Root", "intro"), ("Auth", "auth token flow")]);
        add_document(&mut state, document).unwrap();

        assert_eq!(state.corpus.total_nodes, 2);
        assert!(state.inverted.postings("auth").is_some());
    }

    #[test]
    fn adding_duplicate_id_replaces_without_residual_postings() {
        let mut state = IndexState::default();
        let d1 = doc("docs", "g.md", 1, &[("Root", "alpha")]);
        add_document(&mut state, d1).unwrap();

        let d2 = doc("docs", "g.md", 2, &[("Root", "beta")]);
        add_document(&mut state, d2).unwrap();

        assert!(state.inverted.postings("alpha").is_none());
        assert!(state.inverted.postings("beta").is_some());
        assert_eq!(state.corpus.total_nodes, 1);
    }

    #[test]
    fn remove_clears_all_traces() {
        let mut state = IndexState::default();
        let document = doc("docs", "g.md", 1, &[("Root", "alpha beta")]);
        let doc_id = document.meta.doc_id.clone();
        add_document(&mut state, document).unwrap();

        assert!(remove_document(&mut state, &doc_id));
        assert!(state.inverted.postings("alpha").is_none());
        assert_eq!(state.corpus.total_nodes, 0);
        assert!(!remove_document(&mut state, &doc_id));
    }

    #[test]
    fn dangling_parent_is_rejected_without_mutating_state() {
        let mut state = IndexState::default();
        let mut document = doc("docs", "g.md", 1, &[("Root", "alpha")]);
        document.nodes[0].parent_id = Some(NodeId::from_path("docs", Path::new("g.md"), Some("ghost")));

        let err = add_document(&mut state, document);
        assert!(err.is_err());
        assert_eq!(state.corpus.total_nodes, 0);
    }

    #[test]
    fn needs_reindex_detects_hash_change() {
        let mut state = IndexState::default();
        let document = doc("docs", "g.md", 42, &[("Root", "alpha")]);
        add_document(&mut state, document).unwrap();

        assert!(!needs_reindex(&state, Path::new("g.md"), 42));
        assert!(needs_reindex(&state, Path::new("g.md"), 99));
        assert!(needs_reindex(&state, Path::new("other.md"), 42));
    }
}
