//! Rendering and JSON serialization for CLI output.

use std::{collections::HashMap, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use ret_document::TreeNode;
use ret_index::{CorpusStats, DocumentSummary, ListResult, SearchResult};
use serde::Serialize;

/// JSON view of a single search result.
#[derive(Serialize)]
struct JsonSearchResult {
    doc_id: String,
    doc_title: String,
    node_id: String,
    node_title: String,
    level: u8,
    snippet: String,
    score: f64,
    matched_terms: Vec<String>,
    collection: String,
}

impl From<&SearchResult> for JsonSearchResult {
    fn from(r: &SearchResult) -> Self {
        Self {
            doc_id: r.doc_id.to_string(),
            doc_title: r.doc_title.clone(),
            node_id: r.node_id.to_string(),
            node_title: r.node_title.clone(),
            level: r.level,
            snippet: r.snippet.clone(),
            score: r.score,
            matched_terms: r.matched_terms.clone(),
            collection: r.collection.clone(),
        }
    }
}

/// Prints search results as a ranked list, or as JSON.
pub fn print_search_results(results: &[SearchResult], json: bool) -> ExitCode {
    if json {
        let view: Vec<JsonSearchResult> = results.iter().map(JsonSearchResult::from).collect();
        return print_json(&view);
    }

    if results.is_empty() {
        println!("No matches.");
        return ExitCode::SUCCESS;
    }

    for result in results {
        println!("{}  ({:.2})", result.node_id, result.score);
        println!("  {} \u{2014} {}", result.doc_title, result.node_title);
        println!("  {}", result.snippet);
        println!();
    }

    ExitCode::SUCCESS
}

/// JSON view of a document summary row.
#[derive(Serialize)]
struct JsonDocumentSummary {
    doc_id: String,
    title: String,
    description: Option<String>,
    collection: String,
    tags: Vec<String>,
}

impl From<&DocumentSummary> for JsonDocumentSummary {
    fn from(d: &DocumentSummary) -> Self {
        Self {
            doc_id: d.doc_id.to_string(),
            title: d.title.clone(),
            description: d.description.clone(),
            collection: d.collection.clone(),
            tags: d.tags.clone(),
        }
    }
}

/// JSON view of a [`ListResult`]: the page of documents alongside the
/// total match count and facet counts scoped to the whole matching set.
#[derive(Serialize)]
struct JsonListResult {
    total: usize,
    documents: Vec<JsonDocumentSummary>,
    facet_counts: HashMap<String, HashMap<String, usize>>,
}

/// Prints a document listing as a table, or as JSON.
pub fn print_documents(result: &ListResult, json: bool) -> ExitCode {
    if json {
        let view = JsonListResult {
            total: result.total,
            documents: result.documents.iter().map(JsonDocumentSummary::from).collect(),
            facet_counts: result.facet_counts.clone(),
        };
        return print_json(&view);
    }

    if result.documents.is_empty() {
        println!("No documents.");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["doc_id", "title", "collection", "tags"]);

    for doc in &result.documents {
        table.add_row(vec![
            Cell::new(doc.doc_id.to_string()),
            Cell::new(&doc.title),
            Cell::new(&doc.collection),
            Cell::new(doc.tags.join(", ")),
        ]);
    }

    println!("{table}");
    println!("{} of {} documents", result.documents.len(), result.total);
    ExitCode::SUCCESS
}

/// JSON view of one section, without its content (used for tree listings).
#[derive(Serialize)]
struct JsonTreeNode {
    node_id: String,
    title: String,
    level: u8,
    word_count: usize,
}

impl JsonTreeNode {
    fn from_node(doc_id: &ret_document::DocId, node: &TreeNode) -> Self {
        Self {
            node_id: ret_document::NodeId { doc_id: doc_id.clone(), slug: node.id.slug.clone() }
                .to_string(),
            title: node.title.clone(),
            level: node.level,
            word_count: node.word_count,
        }
    }
}

/// Prints a document's section tree as indented titles, or as JSON.
pub fn print_tree(doc_id: &ret_document::DocId, nodes: &[TreeNode], json: bool) -> ExitCode {
    if json {
        let view: Vec<JsonTreeNode> = nodes.iter().map(|n| JsonTreeNode::from_node(doc_id, n)).collect();
        return print_json(&view);
    }

    if nodes.is_empty() {
        println!("No sections.");
        return ExitCode::SUCCESS;
    }

    for node in nodes {
        let indent = "  ".repeat(node.level as usize);
        println!("{indent}{} ({} words)", node.title, node.word_count);
    }

    ExitCode::SUCCESS
}

/// JSON view of one section with its content, for `get`.
#[derive(Serialize)]
struct JsonNodeContent {
    node_id: String,
    title: String,
    level: u8,
    content: String,
}

impl JsonNodeContent {
    fn from_node(doc_id: &ret_document::DocId, node: &TreeNode) -> Self {
        Self {
            node_id: ret_document::NodeId { doc_id: doc_id.clone(), slug: node.id.slug.clone() }
                .to_string(),
            title: node.title.clone(),
            level: node.level,
            content: node.content.clone(),
        }
    }
}

/// Prints one or more sections' full content, or as JSON.
pub fn print_node_content(doc_id: &ret_document::DocId, nodes: &[TreeNode], json: bool) -> ExitCode {
    if json {
        let view: Vec<JsonNodeContent> = nodes.iter().map(|n| JsonNodeContent::from_node(doc_id, n)).collect();
        return print_json(&view);
    }

    if nodes.is_empty() {
        println!("Not found.");
        return ExitCode::SUCCESS;
    }

    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("# {}", node.title);
        println!("{}", node.content);
    }

    ExitCode::SUCCESS
}

/// JSON view of an index build summary.
#[derive(Serialize)]
struct JsonIndexSummary {
    documents: usize,
    sections: usize,
    avg_section_length: f64,
}

/// Prints a summary of a freshly-built index, or as JSON.
pub fn print_index_summary(document_count: usize, stats: CorpusStats, json: bool) -> ExitCode {
    if json {
        return print_json(&JsonIndexSummary {
            documents: document_count,
            sections: stats.total_nodes,
            avg_section_length: stats.avg_node_length,
        });
    }

    println!("indexed {document_count} documents, {} sections", stats.total_nodes);
    println!("avg section length: {:.1} tokens", stats.avg_node_length);
    ExitCode::SUCCESS
}

/// JSON view of corpus statistics.
#[derive(Serialize)]
struct JsonStats {
    total_nodes: usize,
    avg_node_length: f64,
}

/// Prints corpus-wide statistics, or as JSON.
pub fn print_stats(stats: CorpusStats, json: bool) -> ExitCode {
    if json {
        return print_json(&JsonStats {
            total_nodes: stats.total_nodes,
            avg_node_length: stats.avg_node_length,
        });
    }

    println!("total sections:     {}", stats.total_nodes);
    println!("avg section length: {:.1} tokens", stats.avg_node_length);
    ExitCode::SUCCESS
}

/// Prints per-facet value counts, or as JSON.
pub fn print_facets(facets: &HashMap<String, HashMap<String, usize>>, json: bool) -> ExitCode {
    if json {
        return print_json(facets);
    }

    if facets.is_empty() {
        println!("No facets.");
        return ExitCode::SUCCESS;
    }

    let mut keys: Vec<&String> = facets.keys().collect();
    keys.sort();

    for key in keys {
        println!("{key}");
        let values = &facets[key];
        let mut pairs: Vec<(&String, &usize)> = values.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (value, count) in pairs {
            println!("  {value:<24} {count}");
        }
    }

    ExitCode::SUCCESS
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
