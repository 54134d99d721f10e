//! Implementation of `ret get`.

use std::process::ExitCode;

use ret_document::NodeId;
use ret_index::Engine;

use crate::cli::{args::GetCommand, output};

/// Retrieves one or more sections' content by node id.
pub fn run(engine: &Engine, cmd: &GetCommand) -> ExitCode {
    let primary: NodeId = match cmd.id.parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("error: invalid id format: {}", cmd.id);
            eprintln!("expected format: collection:path#slug or collection:path");
            return ExitCode::FAILURE;
        }
    };

    if cmd.extra_nodes.is_empty() && primary.is_document() {
        return match engine.get_tree(&primary.doc_id) {
            Some(nodes) => output::print_node_content(&primary.doc_id, &nodes, cmd.output.json),
            None => {
                eprintln!("error: not found: {}", cmd.id);
                ExitCode::FAILURE
            }
        };
    }

    let mut node_ids = vec![primary.clone()];
    for extra in &cmd.extra_nodes {
        match extra.parse::<NodeId>() {
            Ok(id) => node_ids.push(id),
            Err(_) => {
                eprintln!("error: invalid id format: {extra}");
                return ExitCode::FAILURE;
            }
        }
    }

    match engine.get_node_content(&primary.doc_id, &node_ids) {
        Some(nodes) if !nodes.is_empty() => {
            output::print_node_content(&primary.doc_id, &nodes, cmd.output.json)
        }
        _ => {
            eprintln!("error: not found: {}", cmd.id);
            ExitCode::FAILURE
        }
    }
}
