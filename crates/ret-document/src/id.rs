//! Identifier types for documents and tree nodes.
//!
//! IDs are represented as strings in the format `collection:path` for
//! documents and `collection:path#slug` for nodes. These newtypes centralize
//! parsing and formatting to avoid ad-hoc string handling across crates.

use std::{fmt, path::Path, str::FromStr};

use thiserror::Error;

/// Errors that can occur when parsing document or node IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input did not match the expected `collection:path[#slug]` format.
    #[error("invalid id format")]
    InvalidFormat,
}

/// A document identifier in `collection:path` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocId {
    /// Name of the collection this document belongs to.
    pub collection: String,
    /// Path relative to the collection root.
    pub path: String,
}

impl DocId {
    /// Constructs a doc ID from a collection name and filesystem path.
    pub fn from_path(collection: &str, path: &Path) -> Self {
        Self {
            collection: collection.to_string(),
            path: path.to_string_lossy().replace('\\', "/"),
        }
    }

    /// Parses a doc ID from `collection:path` format.
    pub fn parse(id: &str) -> Result<Self, IdError> {
        let Some((collection, path)) = id.split_once(':') else {
            return Err(IdError::InvalidFormat);
        };

        if collection.is_empty() || path.is_empty() {
            return Err(IdError::InvalidFormat);
        }

        if collection.len() == 1 && id.chars().nth(1) == Some(':') {
            return Err(IdError::InvalidFormat);
        }

        Ok(Self {
            collection: collection.to_string(),
            path: path.replace('\\', "/"),
        })
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.path)
    }
}

impl FromStr for DocId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A tree node identifier in `collection:path#slug` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// The parent document ID.
    pub doc_id: DocId,
    /// Optional slug for a specific section within the document.
    pub slug: Option<String>,
}

impl NodeId {
    /// Constructs a node ID from collection, path, and optional slug.
    pub fn from_path(collection: &str, path: &Path, slug: Option<&str>) -> Self {
        Self {
            doc_id: DocId::from_path(collection, path),
            slug: slug.map(str::to_string),
        }
    }

    /// Parses a node ID from `collection:path#slug` or `collection:path` format.
    pub fn parse(id: &str) -> Result<Self, IdError> {
        let Some((collection, rest)) = id.split_once(':') else {
            return Err(IdError::InvalidFormat);
        };

        if collection.is_empty() || rest.is_empty() {
            return Err(IdError::InvalidFormat);
        }

        if collection.len() == 1 && id.chars().nth(1) == Some(':') {
            return Err(IdError::InvalidFormat);
        }

        let (path, slug) = match rest.split_once('#') {
            Some((p, s)) if !p.is_empty() => (p, Some(s)),
            Some(_) => return Err(IdError::InvalidFormat),
            None => (rest, None),
        };

        Ok(Self {
            doc_id: DocId {
                collection: collection.to_string(),
                path: path.replace('\\', "/"),
            },
            slug: slug.filter(|s| !s.is_empty()).map(str::to_string),
        })
    }

    /// Returns true if this ID refers to a whole document (the root node).
    pub fn is_document(&self) -> bool {
        self.slug.is_none()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slug {
            Some(slug) => write!(f, "{}#{}", self.doc_id, slug),
            None => write!(f, "{}", self.doc_id),
        }
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
