//! Biograph CLI
//!
//! File-level front door to the answer-enumeration engine: read a message
//! (query graph + annotated knowledge graph) as JSON, enumerate answers,
//! write the updated message back out. The HTTP transport used in
//! production lives elsewhere; this binary exists for pipelines and
//! debugging.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod resultify;

#[derive(Parser)]
#[command(name = "biograph")]
#[command(
    author,
    version,
    about = "Biograph: knowledge-graph answer enumeration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The closed set of supported actions. Unrecognized action names fail at
/// argument parsing, not at dispatch time.
#[derive(Subcommand)]
enum Commands {
    /// Enumerate the subgraphs of a knowledge graph that cover its query
    /// graph, and write them onto the message as answers.
    Resultify(resultify::ResultifyArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Resultify(args) => resultify::run(&args),
    }
}
