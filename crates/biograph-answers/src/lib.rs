//! Answer enumeration for the biomedical question-answering pipeline.
//!
//! The retrieval stage hands us a knowledge graph whose every node (and
//! optionally edge) is annotated with the query-graph element it satisfies.
//! This crate turns that annotated graph back into discrete answers: it
//! validates that the bindings are internally consistent, then enumerates
//! every maximal subgraph that covers the query graph.
//!
//! Pipeline, leaves first:
//!
//! 1. [`validate::validate_bindings`] — consistency/completeness checks,
//!    fatal on the first violated category (all offenders reported),
//! 2. [`index::BindingIndex`] — forward/reverse binding and adjacency maps,
//! 3. [`partition::NodePartition`] — splits query nodes into always-include
//!    (set-typed) and enumerable groups, honoring `force_isset_false`,
//! 4. [`enumerate::enumerate_node_sets`] — Cartesian product over the
//!    enumerable candidates, one node-set per combination,
//! 5. [`materialize::answer_from_node_set`] — node-set to [`Answer`],
//! 6. [`resultify`] — the message-level entry point sequencing the above.
//!
//! Everything is synchronous, allocation-only, and a pure function of the
//! `(QueryGraph, KnowledgeGraph, params)` inputs; the graphs are never
//! mutated.

pub mod enumerate;
pub mod error;
pub mod index;
pub mod materialize;
pub mod partition;
pub mod report;
pub mod validate;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use biograph_model::{Answer, KnowledgeGraph, Message, QueryGraph};

pub use error::AnswerError;
pub use report::{Report, ReportEntry, ReportLevel};

/// Description placeholder put on every answer; real summaries are written
/// by a downstream stage.
const ANSWER_DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// Caller-facing knobs for [`resultify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultifyParams {
    /// When true (the default), a KG edge matches its query edge regardless
    /// of which physical endpoint is the source.
    pub ignore_edge_direction: bool,
    /// Query node ids to treat as non-set even if declared `is_set = true`.
    pub force_isset_false: Vec<String>,
    /// Refuse to enumerate more than this many answers. `None` (the
    /// default) preserves the unbounded behavior.
    pub max_answers: Option<usize>,
}

impl Default for ResultifyParams {
    fn default() -> Self {
        Self {
            ignore_edge_direction: true,
            force_isset_false: Vec::new(),
            max_answers: None,
        }
    }
}

/// Compute the answer list for an annotated KG/QG pair.
///
/// This is the pure core behind [`resultify`], for callers that do not use
/// the message envelope. Answer count equals the product of the enumerable
/// query nodes' reverse-binding cardinalities.
pub fn answers_for_query(
    qg: &QueryGraph,
    kg: &KnowledgeGraph,
    force_isset_false: &HashSet<String>,
    ignore_edge_direction: bool,
    max_answers: Option<usize>,
) -> Result<Vec<Answer>, AnswerError> {
    validate::validate_bindings(qg, kg, force_isset_false, ignore_edge_direction)?;
    let index = index::BindingIndex::build(qg, kg);
    let partition = partition::NodePartition::classify(qg, &index, force_isset_false);
    let node_sets = enumerate::enumerate_node_sets(&partition, max_answers)?;
    Ok(node_sets
        .iter()
        .map(|node_set| materialize::answer_from_node_set(kg, node_set))
        .collect())
}

/// Enumerate answers for `message` and write them back onto it.
///
/// Preconditions and outcomes:
/// - If the message already has results the call is refused with a warning
///   and the message is left untouched (not an error; the caller may keep
///   going with the unchanged message).
/// - On validation or enumeration failure, the error kind and text are
///   recorded on the report and the message, and the result list is set to
///   empty. Partial answer lists are never written.
/// - On success the answer list and its count are written back, each answer
///   carrying the placeholder description expected downstream.
pub fn resultify(message: &mut Message, params: &ResultifyParams) -> Report {
    let mut report = Report::new();

    if !message.results.is_empty() {
        report.warning(format!(
            "message already has {} results; refusing to overwrite them",
            message.results.len()
        ));
        return report;
    }

    report.debug(format!(
        "resultify: ignore_edge_direction={}, force_isset_false={:?}, max_answers={:?}",
        params.ignore_edge_direction, params.force_isset_false, params.max_answers
    ));

    let force_isset_false: HashSet<String> = params.force_isset_false.iter().cloned().collect();
    match answers_for_query(
        &message.query_graph,
        &message.knowledge_graph,
        &force_isset_false,
        params.ignore_edge_direction,
        params.max_answers,
    ) {
        Ok(mut answers) => {
            for answer in &mut answers {
                answer.description = Some(ANSWER_DESCRIPTION_PLACEHOLDER.to_string());
            }
            message.n_results = answers.len();
            message.results = answers;
            message.status_code = Some("OK".to_string());
            message.status_description =
                Some("Answer list computed from KG and QG".to_string());
            report.info(format!("computed {} answers", message.n_results));
        }
        Err(err) => {
            message.results = Vec::new();
            message.n_results = 0;
            message.status_code = Some(err.kind().to_string());
            message.status_description = Some(err.to_string());
            report.error(err.kind(), err.to_string());
        }
    }
    report
}
