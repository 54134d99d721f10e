//! ret: a local retrieval engine for mixed markdown/code corpora.
//!
//! ret indexes one or more configured collections of markdown documents and
//! source files entirely in memory and exposes tree navigation and BM25
//! keyword search over the result. There is no persistent on-disk index and
//! no embedding model: every invocation of the `ret` binary builds a fresh
//! in-memory index from the collections named in `.ret.toml`, then answers a
//! single command against it.

#![warn(missing_docs)]
