//! Clap argument definitions for the `ret` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "ret")]
#[command(about = "Local retrieval engine over markdown and source collections")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flag.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// A single `key=value` facet constraint, parsed from a repeated flag.
#[derive(Debug, Clone)]
pub struct FacetArg {
    /// Facet key.
    pub key: String,
    /// Accepted value for this key.
    pub value: String,
}

fn parse_facet(s: &str) -> Result<FacetArg, String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("expected key=value, got '{s}'"));
    };
    if key.is_empty() || value.is_empty() {
        return Err(format!("expected key=value, got '{s}'"));
    }
    Ok(FacetArg { key: key.to_string(), value: value.to_string() })
}

/// Arguments for `ret index`.
#[derive(Args, Debug, Clone)]
pub struct IndexCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results to return
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Restrict results to a single collection
    #[arg(long)]
    pub collection: Option<String>,

    /// Restrict results to a single document id (collection:path)
    #[arg(long)]
    pub doc_id: Option<String>,

    /// Facet constraint, e.g. --facet language=rust (repeatable)
    #[arg(long = "facet", value_parser = parse_facet)]
    pub facets: Vec<FacetArg>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Case-insensitive tag substring filter
    #[arg(long)]
    pub tag: Option<String>,

    /// Case-insensitive free-text filter over title/description/path
    #[arg(long)]
    pub query: Option<String>,

    /// Restrict to a single collection
    #[arg(long)]
    pub collection: Option<String>,

    /// Facet constraint, e.g. --facet language=rust (repeatable)
    #[arg(long = "facet", value_parser = parse_facet)]
    pub facets: Vec<FacetArg>,

    /// Maximum number of documents to return
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Number of documents to skip before collecting `limit`
    #[arg(long)]
    pub offset: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret tree`.
#[derive(Args, Debug, Clone)]
pub struct TreeCommand {
    /// Document id (collection:path)
    pub doc_id: String,

    /// Print only the subtree rooted at this node id (collection:path#slug)
    #[arg(long)]
    pub node: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Node or document id (collection:path or collection:path#slug)
    pub id: String,

    /// Additional node ids to fetch alongside `id`, within the same document
    #[arg(long = "node")]
    pub extra_nodes: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret facets`.
#[derive(Args, Debug, Clone)]
pub struct FacetsCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ret config`.
#[derive(Args, Debug, Clone)]
pub struct ConfigCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Supported `ret` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build the in-memory index from configured collections and report a summary
    Index(IndexCommand),
    /// Search the corpus and output matching sections
    Search(SearchCommand),
    /// List documents matching optional filters
    Ls(LsCommand),
    /// Print a document's section tree, or a subtree rooted at one node
    Tree(TreeCommand),
    /// Fetch the content of one or more sections
    Get(GetCommand),
    /// Print corpus-wide statistics
    Stats(StatsCommand),
    /// Print facet keys, values, and document counts
    Facets(FacetsCommand),
    /// Print the effective configuration and any validation warnings
    Config(ConfigCommand),
}

/// Parses command-line arguments, exiting on error via clap's default handling.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
