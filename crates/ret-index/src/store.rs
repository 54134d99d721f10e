//! Owns the set of indexed documents and exposes tree navigation.

use std::collections::{HashMap, VecDeque};

use ret_document::{DocId, IndexedDocument, NodeId, TreeNode};

/// The engine's owned collection of indexed documents.
///
/// Per the lifecycle rule in the data model, the store exclusively owns a
/// document once it's been added: callers never get a document back to
/// mutate, only views onto its tree.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<DocId, IndexedDocument>,
}

impl DocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `document`, replacing any existing document with
    /// the same id.
    pub fn insert(&mut self, document: IndexedDocument) {
        self.documents.insert(document.meta.doc_id.clone(), document);
    }

    /// Removes and returns the document with the given id, if present.
    pub fn remove(&mut self, doc_id: &DocId) -> Option<IndexedDocument> {
        self.documents.remove(doc_id)
    }

    /// Returns the document with the given id, if present.
    pub fn get(&self, doc_id: &DocId) -> Option<&IndexedDocument> {
        self.documents.get(doc_id)
    }

    /// Returns true if a document with this id is currently stored.
    pub fn contains(&self, doc_id: &DocId) -> bool {
        self.documents.contains_key(doc_id)
    }

    /// Iterates over all stored documents.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedDocument> {
        self.documents.values()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Looks up a single node by (doc_id, node_id).
    pub fn node(&self, doc_id: &DocId, node_id: &NodeId) -> Option<&TreeNode> {
        self.documents.get(doc_id)?.node(node_id)
    }

    /// Returns `node_ids` resolved to [`TreeNode`]s, preserving caller order
    /// and silently omitting ids that don't resolve.
    pub fn node_content(&self, doc_id: &DocId, node_ids: &[NodeId]) -> Option<Vec<&TreeNode>> {
        let document = self.documents.get(doc_id)?;
        Some(
            node_ids
                .iter()
                .filter_map(|id| document.node(id))
                .collect(),
        )
    }

    /// Breadth-first expansion of `node_id` and all of its descendants
    /// within the same document.
    pub fn subtree(&self, doc_id: &DocId, node_id: &NodeId) -> Option<Vec<&TreeNode>> {
        let document = self.documents.get(doc_id)?;
        let root = document.node(node_id)?;

        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            out.push(node);
            for child_id in &node.children {
                if let Some(child) = document.node(child_id) {
                    queue.push_back(child);
                }
            }
        }

        Some(out)
    }
}
