//! Document and tree data model.
//!
//! A document is represented as a flat, ordered collection of [`TreeNode`]s
//! linked by [`NodeId`] rather than as a nested owning tree: the engine and
//! document store need to look up arbitrary sections by id without walking
//! from the root, so parent/child relationships are references, not
//! ownership.

use std::{
    collections::HashMap,
    path::PathBuf,
    time::SystemTime,
};

use crate::id::{DocId, NodeId};

/// One section of one document: the retrieval granularity.
///
/// Markdown headings and source-code symbols share this shape; the
/// distinction between them is carried as facets (`content_type`,
/// `symbol_kind`, `language`) on the owning document rather than as a
/// separate node variant.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Stable identifier, unique within the owning document.
    pub id: NodeId,
    /// Section heading text, or the document title for the root node.
    pub title: String,
    /// Heading level 1-6 for markdown, or a document-specific symbol depth
    /// for code (1 = top-level symbol, increasing with nesting).
    pub level: u8,
    /// Id of the parent node, or `None` for a root node.
    pub parent_id: Option<NodeId>,
    /// Ids of direct children, in document order.
    pub children: Vec<NodeId>,
    /// This section's own text, excluding any descendant section's text.
    pub content: String,
    /// First ~200 characters of `content`, for display without fetching
    /// the full section.
    pub summary: String,
    /// Word count of `content`.
    pub word_count: usize,
    /// 1-based, inclusive line range of this section within the source file.
    pub line_range: (usize, usize),
}

impl TreeNode {
    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Metadata describing a document as a whole, independent of its sections.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    /// Stable identifier, unique globally, derived from collection and path.
    pub doc_id: DocId,
    /// Path relative to the collection root.
    pub path: PathBuf,
    /// Document title (frontmatter title, first heading, or file stem).
    pub title: String,
    /// Short description (frontmatter description, or `None`).
    pub description: Option<String>,
    /// Total word count across all of the document's sections.
    pub word_count: usize,
    /// Number of non-root sections (headings or symbols).
    pub heading_count: usize,
    /// Maximum section level present in the document.
    pub max_depth: u8,
    /// Last-modified timestamp of the source file, if known.
    pub modified: Option<SystemTime>,
    /// Ordered, deduplicated tags.
    pub tags: Vec<String>,
    /// Opaque hash of the document's raw bytes; stable for identical content.
    pub content_hash: u64,
    /// Name of the collection this document belongs to.
    pub collection: String,
    /// Facet key -> ordered list of values (e.g. `content_type`, `language`).
    pub facets: HashMap<String, Vec<String>>,
}

/// A fully indexed document: its metadata plus all of its sections.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    /// Document-level metadata.
    pub meta: DocumentMeta,
    /// Every section in the document, in document order.
    pub nodes: Vec<TreeNode>,
    /// Ids of the nodes with no parent (normally just the document root).
    pub root_nodes: Vec<NodeId>,
}

impl IndexedDocument {
    /// Looks up a node by id within this document.
    pub fn node(&self, id: &NodeId) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Returns an iterator over this document's nodes in pre-order,
    /// starting from its root nodes.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        let stack: Vec<&NodeId> = self.root_nodes.iter().rev().collect();
        PreorderIter { doc: self, stack }
    }
}

/// Pre-order (depth-first) iterator over a document's nodes.
pub struct PreorderIter<'a> {
    doc: &'a IndexedDocument,
    stack: Vec<&'a NodeId>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.doc.node(id)?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
