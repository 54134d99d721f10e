//! Implementation of `ret tree`.

use std::process::ExitCode;

use ret_document::{DocId, NodeId};
use ret_index::Engine;

use crate::cli::{args::TreeCommand, output};

/// Prints a document's section tree, or a subtree rooted at one node.
pub fn run(engine: &Engine, cmd: &TreeCommand) -> ExitCode {
    let Ok(doc_id) = DocId::parse(&cmd.doc_id) else {
        eprintln!("error: invalid document id: {}", cmd.doc_id);
        return ExitCode::FAILURE;
    };

    let nodes = if let Some(node_str) = &cmd.node {
        let Ok(node_id) = NodeId::parse(node_str) else {
            eprintln!("error: invalid node id: {node_str}");
            return ExitCode::FAILURE;
        };

        match engine.get_subtree(&doc_id, &node_id) {
            Some(nodes) => nodes,
            None => {
                eprintln!("error: no such node: {node_str}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match engine.get_tree(&doc_id) {
            Some(nodes) => nodes,
            None => {
                eprintln!("error: no such document: {}", cmd.doc_id);
                return ExitCode::FAILURE;
            }
        }
    };

    output::print_tree(&doc_id, &nodes, cmd.output.json)
}
