//! Query execution: tokenize, expand, filter, score, and snippet.

use std::collections::{HashMap, HashSet};

use ret_document::{DocId, NodeId};
use ret_query::{tokenize_and_stem, SearchFilters, SearchOptions};

use crate::{scorer, snippet, state::IndexState};

/// One scored section returned from [`search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Document the section belongs to.
    pub doc_id: DocId,
    /// Document title.
    pub doc_title: String,
    /// Section id.
    pub node_id: NodeId,
    /// Section title.
    pub node_title: String,
    /// Section nesting level.
    pub level: u8,
    /// Snippet built around the densest cluster of matches.
    pub snippet: String,
    /// Final score, including bonuses and collection weighting.
    pub score: f64,
    /// Sorted, deduplicated token positions that matched.
    pub match_positions: Vec<usize>,
    /// Original (pre-expansion) query terms that matched this section.
    pub matched_terms: Vec<String>,
    /// Document's collection.
    pub collection: String,
    /// Document's facets.
    pub facets: HashMap<String, Vec<String>>,
}

fn resolve_filters(state: &IndexState, filters: &SearchFilters) -> Option<HashSet<DocId>> {
    if filters.is_empty() {
        return None;
    }

    let mut constraints = filters.facets.clone();
    if let Some(collection) = &filters.collection {
        constraints
            .entry("collection".to_string())
            .or_default()
            .push(collection.clone());
    }

    let mut whitelist = state.filters.resolve(&constraints).unwrap_or_default();
    if constraints.is_empty() {
        // Only doc_id was set: every document is eligible until that check.
        whitelist = state.store.iter().map(|d| d.meta.doc_id.clone()).collect();
    }

    if let Some(doc_id) = &filters.doc_id {
        let target = DocId::parse(doc_id).ok();
        whitelist.retain(|id| Some(id) == target.as_ref());
    }

    Some(whitelist)
}

struct Accumulator {
    score: f64,
    positions: Vec<usize>,
    matched_terms: HashSet<String>,
}

/// Executes a search against the current index state.
///
/// Tokenizes and stems the query, expands it through the glossary, resolves
/// the filter whitelist, scores every matching section (exact matches at
/// full weight, prefix matches discounted by `prefix_penalty`), applies the
/// co-occurrence and full-coverage bonuses, multiplies by the section's
/// collection weight, and returns the top `options.limit` results sorted by
/// score descending.
pub fn search(state: &IndexState, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
    let original_terms = tokenize_and_stem(query);
    if original_terms.is_empty() {
        return Vec::new();
    }
    let expanded_terms = state.glossary.expand_with_origins(&original_terms);

    let whitelist = resolve_filters(state, &options.filters);
    if let Some(set) = &whitelist
        && set.is_empty()
    {
        return Vec::new();
    }

    let total_sections = state.corpus.total_nodes;
    let avg_length = state.corpus.avg_node_length;
    let mut by_node: HashMap<NodeId, Accumulator> = HashMap::new();

    let mut score_term = |term: &str, is_exact: bool, original_term: &str| {
        let Some(postings) = state.inverted.postings(term) else {
            return;
        };
        let df = state.inverted.document_frequency(term);
        let penalty = if is_exact { 1.0 } else { state.ranking.prefix_penalty };

        for posting in postings {
            if let Some(set) = &whitelist
                && !set.contains(&posting.doc_id)
            {
                continue;
            }
            let Some(stats) = state.node_stats.get(&posting.node_id) else {
                continue;
            };

            let raw = scorer::score_term(
                total_sections,
                df,
                posting.term_frequency,
                stats.total_tokens,
                avg_length,
                posting.weight,
                &state.ranking,
            );

            let entry = by_node.entry(posting.node_id.clone()).or_insert_with(|| Accumulator {
                score: 0.0,
                positions: Vec::new(),
                matched_terms: HashSet::new(),
            });
            entry.score += raw * penalty;
            entry.positions.extend(posting.positions.iter().copied());
            entry.matched_terms.insert(original_term.to_string());
        }
    };

    for (term, original_term) in &expanded_terms {
        score_term(term, true, original_term);
        if term.chars().count() >= 3 {
            for prefix_term in state.inverted.prefix_terms(term) {
                let owned = prefix_term.to_string();
                score_term(&owned, false, original_term);
            }
        }
    }

    let distinct_query_terms = original_terms.iter().collect::<HashSet<_>>().len();

    let mut results: Vec<SearchResult> = by_node
        .into_iter()
        .filter_map(|(node_id, acc)| {
            let document = state.store.get(&node_id.doc_id)?;
            let node = document.node(&node_id)?;

            let matched_count = acc.matched_terms.len();
            let mut score = acc.score;
            if matched_count >= 2 {
                score += (matched_count as f64 - 1.0) * state.ranking.term_proximity_bonus;
            }
            if distinct_query_terms >= 2 && matched_count == distinct_query_terms {
                score += state.ranking.full_coverage_bonus;
            }

            let collection_weight = state
                .collection_weights
                .get(&document.meta.collection)
                .copied()
                .unwrap_or(1.0);
            score *= collection_weight;

            let mut positions: Vec<usize> = acc.positions;
            positions.sort_unstable();
            positions.dedup();

            let title_token_count = ret_query::tokenize_and_stem(&node.title).len();
            let snippet = snippet::build_snippet(
                &node.content,
                &node.title,
                title_token_count,
                &positions,
                snippet::DEFAULT_SNIPPET_LEN,
            );

            let mut matched_terms: Vec<String> = acc.matched_terms.into_iter().collect();
            matched_terms.sort();

            Some(SearchResult {
                doc_id: node_id.doc_id.clone(),
                doc_title: document.meta.title.clone(),
                node_id,
                node_title: node.title.clone(),
                level: node.level,
                snippet,
                score,
                match_positions: positions,
                matched_terms,
                collection: document.meta.collection.clone(),
                facets: document.meta.facets.clone(),
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(options.limit);
    results
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use ret_document::{DocumentMeta, IndexedDocument, TreeNode};

    use super::*;
    use crate::writer::add_document;

    fn doc(collection: &str, path: &str, sections: &[(&str, &str)]) -> IndexedDocument {
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
                content_hash: 0,
                collection: collection.to_string(),
                facets: HashMap::new(),
            },
            root_nodes: vec![root_id],
            nodes,
        }
    }

    #[test]
    fn exact_heading_match_ranks_above_unrelated_section() {
        let mut state = IndexState::default();
        add_document(
            &mut state,
            doc(
                "docs",
                "g.md",
                &[("Guide", "overview"), ("Authentication", "auth token flow details")],
            ),
        )
        .unwrap();

        let results = search(&state, "authentication", &SearchOptions::default());
        assert!(!results.is_empty());
        assert_eq!(results[0].node_title, "Authentication");
    }

    #[test]
    fn co_occurrence_bonus_favors_sections_matching_more_terms() {
        let mut state = IndexState::default();
        add_document(
            &mut state,
            doc(
                "docs",
                "g.md",
                &[
                    ("Guide", "overview"),
                    ("Auth Only", "token refresh cycles for authentication"),
                    ("Auth And Deploy", "token refresh during deploy pipeline"),
                ],
            ),
        )
        .unwrap();

        let results = search(&state, "token deploy", &SearchOptions::default());
        let top = &results[0];
        assert_eq!(top.node_title, "Auth And Deploy");
    }

    #[test]
    fn prefix_match_is_discounted_relative_to_exact() {
        let mut state = IndexState::default();
        add_document(
            &mut state,
            doc(
                "docs",
                "g.md",
                &[("Guide", "overview"), ("Authentication", "authentication flow")],
            ),
        )
        .unwrap();

        let exact = search(&state, "authentication", &SearchOptions::default());
        let prefix = search(&state, "auth", &SearchOptions::default());
        assert!(exact[0].score >= prefix[0].score);
    }

    #[test]
    fn filter_pre_scoping_excludes_other_collections() {
        let mut state = IndexState::default();
        add_document(&mut state, doc("docs", "a.md", &[("Guide", "deploy pipeline")])).unwrap();
        add_document(&mut state, doc("blog", "b.md", &[("Post", "deploy pipeline")])).unwrap();

        let mut options = SearchOptions::default();
        options.filters.collection = Some("blog".to_string());
        let results = search(&state, "deploy", &options);
        assert!(results.iter().all(|r| r.collection == "blog"));
    }

    #[test]
    fn glossary_expansion_matches_synonym_terms() {
        let mut state = IndexState::default();
        state.glossary.add_pair("cli", "command line interface");
        add_document(
            &mut state,
            doc("docs", "g.md", &[("Guide", "the command line interface accepts flags")]),
        )
        .unwrap();

        let results = search(&state, "cli", &SearchOptions::default());
        assert!(!results.is_empty());
    }

    #[test]
    fn empty_query_returns_no_results() {
        let state = IndexState::default();
        let results = search(&state, "   ", &SearchOptions::default());
        assert!(results.is_empty());
    }
}
