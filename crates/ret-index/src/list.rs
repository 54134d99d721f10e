//! Catalog listing: filtered, paginated enumeration of indexed documents.

use std::collections::HashMap;

use ret_document::DocId;
use ret_query::ListOptions;

use crate::state::IndexState;

/// One row in a [`list`] result.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    /// Document id.
    pub doc_id: DocId,
    /// Document title.
    pub title: String,
    /// Document description, if any.
    pub description: Option<String>,
    /// Collection the document belongs to.
    pub collection: String,
    /// Tags attached to the document.
    pub tags: Vec<String>,
    /// Facets attached to the document.
    pub facets: HashMap<String, Vec<String>>,
}

fn matches(meta: &ret_document::DocumentMeta, options: &ListOptions) -> bool {
    if let Some(tag) = &options.tag {
        let needle = tag.to_lowercase();
        if !meta.tags.iter().any(|t| t.to_lowercase().contains(&needle)) {
            return false;
        }
    }

    if let Some(collection) = &options.collection
        && &meta.collection != collection
    {
        return false;
    }

    if let Some(query) = &options.query {
        let needle = query.to_lowercase();
        let haystack = format!("{} {} {}", meta.title, meta.description.clone().unwrap_or_default(), meta.path.display());
        if !haystack.to_lowercase().contains(&needle) {
            return false;
        }
    }

    for (key, values) in &options.filters {
        let doc_values = meta.facets.get(key);
        let has_match = match key.as_str() {
            "tags" => values.iter().any(|v| meta.tags.contains(v)),
            "collection" => values.iter().any(|v| v == &meta.collection),
            _ => doc_values
                .map(|dv| values.iter().any(|v| dv.contains(v)))
                .unwrap_or(false),
        };
        if !has_match {
            return false;
        }
    }

    true
}

/// Result of a [`list`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult {
    /// Number of documents matching `options`, before `offset`/`limit`.
    pub total: usize,
    /// The page of matching documents.
    pub documents: Vec<DocumentSummary>,
    /// Per-key, per-value document counts across the matching set (before
    /// `offset`/`limit`), not the whole corpus.
    pub facet_counts: HashMap<String, HashMap<String, usize>>,
}

fn facet_counts_for(documents: &[&ret_document::IndexedDocument]) -> HashMap<String, HashMap<String, usize>> {
    let mut counts: HashMap<String, HashMap<String, usize>> = HashMap::new();
    for doc in documents {
        *counts.entry("collection".to_string()).or_default().entry(doc.meta.collection.clone()).or_insert(0) += 1;
        for tag in &doc.meta.tags {
            *counts.entry("tags".to_string()).or_default().entry(tag.clone()).or_insert(0) += 1;
        }
        for (key, values) in &doc.meta.facets {
            for value in values {
                *counts.entry(key.clone()).or_default().entry(value.clone()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Enumerates documents matching `options`, sorted by title ascending and
/// paginated by `offset`/`limit`. `total` and `facet_counts` are computed
/// over the full matching set, before pagination is applied.
pub fn list(state: &IndexState, options: &ListOptions) -> ListResult {
    let mut matching: Vec<&ret_document::IndexedDocument> =
        state.store.iter().filter(|doc| matches(&doc.meta, options)).collect();

    matching.sort_by(|a, b| a.meta.title.cmp(&b.meta.title));

    let total = matching.len();
    let facet_counts = facet_counts_for(&matching);

    let documents = matching
        .into_iter()
        .skip(options.offset)
        .take(options.limit)
        .map(|doc| DocumentSummary {
            doc_id: doc.meta.doc_id.clone(),
            title: doc.meta.title.clone(),
            description: doc.meta.description.clone(),
            collection: doc.meta.collection.clone(),
            tags: doc.meta.tags.clone(),
            facets: doc.meta.facets.clone(),
        })
        .collect();

    ListResult { total, documents, facet_counts }
}

/// Per-key, per-value document counts across the whole corpus, including
/// the automatically maintained `tags` and `collection` keys.
pub fn facets(state: &IndexState) -> HashMap<String, HashMap<String, usize>> {
    state.filters.counts()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ret_document::{DocumentMeta, IndexedDocument, NodeId, TreeNode};

    use super::*;
    use crate::writer::add_document;

    fn doc(collection: &str, path: &str, title: &str, tags: &[&str]) -> IndexedDocument {
        let doc_id = DocId::from_path(collection, std::path::Path::new(path));
        let root_id = NodeId::from_path(collection, std::path::Path::new(path), None);

        IndexedDocument {
            meta: DocumentMeta {
                doc_id,
                path: PathBuf::from(path),
                title: title.to_string(),
                description: Some(format!("about {title}")),
                word_count: 1,
                heading_count: 0,
                max_depth: 0,
                modified: None,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                content_hash: 0,
                collection: collection.to_string(),
                facets: HashMap::new(),
            },
            root_nodes: vec![root_id.clone()],
            nodes: vec![TreeNode {
                id: root_id,
                title: title.to_string(),
                level: 0,
                parent_id: None,
                children: Vec::new(),
                content: "body".to_string(),
                summary: "body".to_string(),
                word_count: 1,
                line_range: (1, 1),
            }],
        }
    }

    #[test]
    fn lists_sorted_by_title_ascending() {
        let mut state = IndexState::default();
        add_document(&mut state, doc("docs", "b.md", "Bravo", &[])).unwrap();
        add_document(&mut state, doc("docs", "a.md", "Alpha", &[])).unwrap();

        let result = list(&state, &ListOptions::new());
        let titles: Vec<&str> = result.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Bravo"]);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn tag_filter_is_case_insensitive_substring() {
        let mut state = IndexState::default();
        add_document(&mut state, doc("docs", "a.md", "Alpha", &["Runbook"])).unwrap();
        add_document(&mut state, doc("docs", "b.md", "Bravo", &["guide"])).unwrap();

        let options = ListOptions { tag: Some("run".to_string()), ..ListOptions::new() };
        let result = list(&state, &options);
        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.documents[0].title, "Alpha");
        assert_eq!(result.total, 1);
    }

    #[test]
    fn pagination_applies_offset_and_limit_but_not_total() {
        let mut state = IndexState::default();
        for i in 0..5 {
            add_document(&mut state, doc("docs", &format!("{i}.md"), &format!("Doc{i}"), &[])).unwrap();
        }

        let options = ListOptions { offset: 2, limit: 2, ..ListOptions::new() };
        let result = list(&state, &options);
        let titles: Vec<&str> = result.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Doc2", "Doc3"]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn facet_counts_are_scoped_to_the_filtered_set() {
        let mut state = IndexState::default();
        add_document(&mut state, doc("docs", "a.md", "Alpha", &["runbook"])).unwrap();
        add_document(&mut state, doc("blog", "b.md", "Bravo", &["runbook"])).unwrap();

        let options = ListOptions { collection: Some("docs".to_string()), ..ListOptions::new() };
        let result = list(&state, &options);
        assert_eq!(result.facet_counts["collection"]["docs"], 1);
        assert!(!result.facet_counts["collection"].contains_key("blog"));
        assert_eq!(result.facet_counts["tags"]["runbook"], 1);
    }

    #[test]
    fn facets_counts_tags_and_collections() {
        let mut state = IndexState::default();
        add_document(&mut state, doc("docs", "a.md", "Alpha", &["runbook"])).unwrap();
        add_document(&mut state, doc("blog", "b.md", "Bravo", &["runbook"])).unwrap();

        let counts = facets(&state);
        assert_eq!(counts["tags"]["runbook"], 2);
        assert_eq!(counts["collection"]["docs"], 1);
        assert_eq!(counts["collection"]["blog"], 1);
    }
}
