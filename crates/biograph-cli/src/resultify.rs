//! The `resultify` subcommand.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use biograph_answers::{resultify, ReportLevel, ResultifyParams};
use biograph_model::Message;

#[derive(Debug, Args)]
pub struct ResultifyArgs {
    /// Message JSON: query graph plus annotated knowledge graph.
    pub message: PathBuf,

    /// Where to write the updated message (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Only match a knowledge edge to its query edge in subject-to-object
    /// order (edge direction is ignored by default).
    #[arg(long)]
    pub respect_edge_direction: bool,

    /// Query node ids to treat as non-set even when declared `is_set=true`.
    /// May be repeated.
    #[arg(long = "force-isset-false", value_name = "QNODE_ID")]
    pub force_isset_false: Vec<String>,

    /// Abort if enumeration would produce more answers than this.
    #[arg(long)]
    pub max_answers: Option<usize>,
}

pub fn run(args: &ResultifyArgs) -> Result<()> {
    let text = fs::read_to_string(&args.message)
        .with_context(|| format!("reading message file {}", args.message.display()))?;
    let mut message: Message =
        serde_json::from_str(&text).context("parsing message JSON")?;

    let params = ResultifyParams {
        ignore_edge_direction: !args.respect_edge_direction,
        force_isset_false: args.force_isset_false.clone(),
        max_answers: args.max_answers,
    };
    tracing::debug!(
        message = %args.message.display(),
        ignore_edge_direction = params.ignore_edge_direction,
        force_isset_false = ?params.force_isset_false,
        max_answers = ?params.max_answers,
        "running resultify"
    );
    let report = resultify(&mut message, &params);

    for entry in &report.entries {
        match entry.level {
            ReportLevel::Debug => {}
            ReportLevel::Info => eprintln!("{}", entry.message),
            ReportLevel::Warning => {
                eprintln!("{} {}", "warning:".yellow().bold(), entry.message)
            }
            ReportLevel::Error => {
                eprintln!("{} {}", "error:".red().bold(), entry.message)
            }
        }
    }

    let rendered =
        serde_json::to_string_pretty(&message).context("serializing updated message")?;
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing updated message to {}", path.display()))?,
        None => println!("{rendered}"),
    }

    if !report.is_ok() {
        bail!("resultify failed: {}", report.status_code);
    }
    Ok(())
}
