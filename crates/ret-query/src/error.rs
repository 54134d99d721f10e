//! Error types for the ret-query crate.

use thiserror::Error;

/// Errors that can occur while building or expanding a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A glossary source was malformed (not a `term -> [phrase, ...]` map).
    #[error("invalid glossary entry for term {term:?}")]
    InvalidGlossaryEntry {
        /// The offending term.
        term: String,
    },
}
