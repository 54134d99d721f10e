//! Tokenizer, stemmer, glossary expansion, and query types for ret.
//!
//! This crate holds the pieces of query handling that are pure functions of
//! their input and shared between indexing and searching: tokenization,
//! stemming, code-token recognition, glossary expansion, and the small
//! value types that describe a search or list request.

#![warn(missing_docs)]

mod error;
mod glossary;
mod query;
mod tokenizer;

pub use error::QueryError;
pub use glossary::Glossary;
pub use query::{
    DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, ListOptions, SearchFilters, SearchOptions,
};
pub use tokenizer::{code_tokens, stem, tokenize, tokenize_and_stem};
