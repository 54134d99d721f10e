//! Faceted pre-score whitelist: facet key -> value -> document set.

use std::collections::{HashMap, HashSet};

use ret_document::DocId;

/// Inverted map from facet key to facet value to the set of documents
/// carrying that value.
///
/// Automatically maintained facets are `collection`, `tags`, and any key
/// present in a document's [`ret_document::DocumentMeta::facets`] map.
#[derive(Debug, Default)]
pub struct FilterIndex {
    facets: HashMap<String, HashMap<String, HashSet<DocId>>>,
}

impl FilterIndex {
    /// Creates an empty filter index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document's facet values: its explicit facets, each tag
    /// under the `tags` key, and its collection under the `collection` key.
    pub fn insert_document(
        &mut self,
        doc_id: &DocId,
        collection: &str,
        tags: &[String],
        facets: &HashMap<String, Vec<String>>,
    ) {
        self.insert_value("collection", collection, doc_id);
        for tag in tags {
            self.insert_value("tags", tag, doc_id);
        }
        for (key, values) in facets {
            for value in values {
                self.insert_value(key, value, doc_id);
            }
        }
    }

    fn insert_value(&mut self, key: &str, value: &str, doc_id: &DocId) {
        self.facets
            .entry(key.to_string())
            .or_default()
            .entry(value.to_string())
            .or_default()
            .insert(doc_id.clone());
    }

    /// Removes every facet value associated with `doc_id`, pruning empty
    /// value sets and empty keys left behind.
    pub fn remove_document(&mut self, doc_id: &DocId) {
        self.facets.retain(|_, values| {
            values.retain(|_, docs| {
                docs.remove(doc_id);
                !docs.is_empty()
            });
            !values.is_empty()
        });
    }

    /// Resolves a set of facet constraints into a whitelist: for each key,
    /// unions document sets across its requested values, then intersects
    /// across keys. A key absent from the index yields an empty set for
    /// that key (and therefore an empty overall whitelist).
    ///
    /// Returns `None` if `constraints` is empty (no filtering requested).
    pub fn resolve(&self, constraints: &HashMap<String, Vec<String>>) -> Option<HashSet<DocId>> {
        if constraints.is_empty() {
            return None;
        }

        let mut result: Option<HashSet<DocId>> = None;
        for (key, values) in constraints {
            let mut union: HashSet<DocId> = HashSet::new();
            if let Some(by_value) = self.facets.get(key) {
                for value in values {
                    if let Some(docs) = by_value.get(value) {
                        union.extend(docs.iter().cloned());
                    }
                }
            }

            result = Some(match result {
                None => union,
                Some(acc) => acc.intersection(&union).cloned().collect(),
            });
        }

        Some(result.unwrap_or_default())
    }

    /// Returns the set of documents carrying `value` under `key`, or an
    /// empty set if the key or value is unknown.
    pub fn documents_for(&self, key: &str, value: &str) -> HashSet<DocId> {
        self.facets
            .get(key)
            .and_then(|by_value| by_value.get(value))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns per-value document counts for every known facet key.
    pub fn counts(&self) -> HashMap<String, HashMap<String, usize>> {
        self.facets
            .iter()
            .map(|(key, by_value)| {
                let counts = by_value
                    .iter()
                    .map(|(value, docs)| (value.clone(), docs.len()))
                    .collect();
                (key.clone(), counts)
            })
            .collect()
    }

    /// All known facet keys.
    pub fn keys(&self) -> Vec<String> {
        self.facets.keys().cloned().collect()
    }
}
