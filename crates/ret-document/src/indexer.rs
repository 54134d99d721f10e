//! Reference indexer: turns markdown and plain source files into
//! [`IndexedDocument`]s.
//!
//! This is one concrete producer of the document/tree data model in
//! [`crate::node`]; callers that ingest other formats are free to build
//! `IndexedDocument` values directly as long as they uphold the same
//! invariants (forest rooted at `root_nodes`, section content excluding
//! descendant content).

use std::{
    collections::HashMap,
    fs,
    hash::Hasher,
    path::{Path, PathBuf},
    time::SystemTime,
};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use siphasher::sip::SipHasher13;

use crate::{
    error::DocumentError,
    frontmatter::parse_frontmatter,
    id::{DocId, NodeId},
    node::{DocumentMeta, IndexedDocument, TreeNode},
    slug::Slugifier,
};

/// Default length, in characters, of a section's generated summary.
pub const DEFAULT_SUMMARY_LEN: usize = 200;

/// Default maximum heading depth honored by the indexer; headings below
/// this level are treated as plain text rather than section boundaries.
pub const DEFAULT_MAX_HEADING_DEPTH: u8 = 6;

struct Heading {
    level: u8,
    title: String,
    /// Byte offset, relative to the markdown body, where content following
    /// this heading's line begins.
    content_start: usize,
}

/// Indexes a single file on disk, dispatching to the markdown or source-code
/// path by extension.
pub fn index_path(
    collection: &str,
    root: &Path,
    path: &Path,
    max_heading_depth: u8,
    summary_len: usize,
) -> Result<IndexedDocument, DocumentError> {
    let full_path = root.join(path);
    let raw = fs::read(&full_path).map_err(|source| DocumentError::ReadFile {
        path: full_path.clone(),
        source,
    })?;
    let modified = fs::metadata(&full_path)
        .and_then(|m| m.modified())
        .ok();

    match path.extension().and_then(|e| e.to_str()) {
        Some("md") | Some("markdown") => {
            index_markdown(collection, path, &raw, modified, max_heading_depth, summary_len)
        }
        Some(ext) => Ok(index_source(collection, path, &raw, modified, ext)),
        None => Ok(index_source(collection, path, &raw, modified, "")),
    }
}

/// Indexes markdown content (with optional YAML frontmatter) into a tree of
/// sections split at heading boundaries.
pub fn index_markdown(
    collection: &str,
    path: &Path,
    raw: &[u8],
    modified: Option<SystemTime>,
    max_heading_depth: u8,
    summary_len: usize,
) -> Result<IndexedDocument, DocumentError> {
    let content = String::from_utf8_lossy(raw);
    let (frontmatter, body) = parse_frontmatter(&content);
    let body_offset = content.len() - body.len();

    let headings = extract_headings(body, max_heading_depth);

    let doc_id = DocId::from_path(collection, path);
    let file_stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let title = frontmatter
        .as_ref()
        .and_then(|fm| fm.title.clone())
        .or_else(|| headings.iter().find(|h| h.level == 1).map(|h| h.title.clone()))
        .unwrap_or(file_stem);

    let mut slugifier = Slugifier::new();
    let root_id = NodeId::from_path(collection, path, None);

    // Node starts, in document order: the root (whole-document preamble)
    // followed by each heading. A node's own content runs from its start to
    // the next node's start, which automatically excludes descendant text.
    let mut starts = vec![0usize];
    starts.extend(headings.iter().map(|h| h.content_start));

    let mut nodes = Vec::with_capacity(starts.len());
    let mut stack: Vec<(u8, NodeId)> = vec![(0, root_id.clone())];

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(body.len());
        let own_content = body[start..end].trim().to_string();

        let (level, node_title, node_id, parent_id) = if i == 0 {
            (0u8, title.clone(), root_id.clone(), None)
        } else {
            let h = &headings[i - 1];
            while stack.last().is_some_and(|(lvl, _)| *lvl >= h.level) {
                stack.pop();
            }
            let parent = stack.last().map(|(_, id)| id.clone()).unwrap_or_else(|| root_id.clone());
            let slug = slugifier.slugify(&h.title);
            let id = NodeId::from_path(collection, path, Some(&slug));
            stack.push((h.level, id.clone()));
            (h.level, h.title.clone(), id, Some(parent))
        };

        let line_range = (
            line_number(&content, body_offset + start),
            line_number(&content, body_offset + end.saturating_sub(1).max(start)),
        );

        nodes.push(TreeNode {
            id: node_id,
            title: node_title,
            level,
            parent_id,
            children: Vec::new(),
            summary: truncate_summary(&own_content, summary_len),
            word_count: own_content.split_whitespace().count(),
            content: own_content,
            line_range,
        });
    }

    link_children(&mut nodes);

    let word_count = nodes.iter().map(|n| n.word_count).sum();
    let heading_count = nodes.len() - 1;
    let max_depth = nodes.iter().map(|n| n.level).max().unwrap_or(0);

    let mut facets = frontmatter.as_ref().map(|fm| fm.facets.clone()).unwrap_or_default();
    facets.entry("content_type".into()).or_insert_with(|| vec!["markdown".into()]);
    let tags = frontmatter.as_ref().map(|fm| fm.tags.clone()).unwrap_or_default();

    let meta = DocumentMeta {
        doc_id,
        path: path.to_path_buf(),
        title,
        description: frontmatter.and_then(|fm| fm.description),
        word_count,
        heading_count,
        max_depth,
        modified,
        tags: dedup(tags),
        content_hash: hash_bytes(raw),
        collection: collection.to_string(),
        facets,
    };

    Ok(IndexedDocument {
        meta,
        root_nodes: vec![root_id],
        nodes,
    })
}

/// Indexes a non-markdown file as a single whole-file section, tagged with
/// `content_type`/`language` facets so it scores and filters alongside
/// markdown sections without a distinct type hierarchy.
pub fn index_source(
    collection: &str,
    path: &Path,
    raw: &[u8],
    modified: Option<SystemTime>,
    language: &str,
) -> IndexedDocument {
    let content = String::from_utf8_lossy(raw).into_owned();
    let doc_id = DocId::from_path(collection, path);
    let node_id = NodeId::from_path(collection, path, None);
    let title = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let line_count = content.lines().count().max(1);
    let node = TreeNode {
        id: node_id.clone(),
        title: title.clone(),
        level: 1,
        parent_id: None,
        children: Vec::new(),
        summary: truncate_summary(&content, DEFAULT_SUMMARY_LEN),
        word_count: content.split_whitespace().count(),
        line_range: (1, line_count),
        content,
    };

    let mut facets: HashMap<String, Vec<String>> = HashMap::new();
    facets.insert("content_type".into(), vec!["code".into()]);
    if !language.is_empty() {
        facets.insert("language".into(), vec![language.to_string()]);
    }

    let meta = DocumentMeta {
        doc_id,
        path: path.to_path_buf(),
        title,
        description: None,
        word_count: node.word_count,
        heading_count: 0,
        max_depth: node.level,
        modified,
        tags: Vec::new(),
        content_hash: hash_bytes(raw),
        collection: collection.to_string(),
        facets,
    };

    IndexedDocument {
        meta,
        root_nodes: vec![node_id],
        nodes: vec![node],
    }
}

/// Extracts headings (level, title, content-start offset) from markdown
/// body text, ignoring headings deeper than `max_depth`.
fn extract_headings(body: &str, max_depth: u8) -> Vec<Heading> {
    let parser = Parser::new_ext(body, Options::empty()).into_offset_iter();
    let mut headings = Vec::new();
    let mut current: Option<(u8, String, usize)> = None;

    for (event, range) in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let depth = heading_depth(level);
                if depth <= max_depth {
                    current = Some((depth, String::new(), range.end));
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title, content_start)) = current.take() {
                    headings.push(Heading {
                        level,
                        title: title.trim().to_string(),
                        content_start,
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, title, _)) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            _ => {}
        }
    }

    headings
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Assigns `children` for every node based on `parent_id`, preserving
/// document order.
fn link_children(nodes: &mut [TreeNode]) {
    let mut children_of: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for node in nodes.iter() {
        if let Some(parent) = &node.parent_id {
            children_of.entry(parent.clone()).or_default().push(node.id.clone());
        }
    }
    for node in nodes.iter_mut() {
        if let Some(children) = children_of.remove(&node.id) {
            node.children = children;
        }
    }
}

fn truncate_summary(content: &str, max_len: usize) -> String {
    if content.chars().count() <= max_len {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_len).collect();
    format!("{}...", truncated.trim_end())
}

fn line_number(content: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(content.len());
    1 + content[..clamped].matches('\n').count()
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = SipHasher13::new();
    hasher.write(bytes);
    hasher.finish()
}

fn dedup(mut tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.retain(|t| seen.insert(t.clone()));
    tags
}
