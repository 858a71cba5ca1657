//! Message envelope shared by the pipeline stages.

use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::knowledge::KnowledgeGraph;
use crate::query::QueryGraph;

/// The unit of work passed between pipeline stages: both graphs plus the
/// answer list produced by the enumeration stage.
///
/// `status_code`/`status_description` record the outcome of the last stage
/// that wrote to the message (`"OK"` on success, an error kind otherwise).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub query_graph: QueryGraph,
    #[serde(default)]
    pub knowledge_graph: KnowledgeGraph,
    #[serde(default)]
    pub results: Vec<Answer>,
    #[serde(default)]
    pub n_results: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
}

impl Message {
    pub fn new(query_graph: QueryGraph, knowledge_graph: KnowledgeGraph) -> Self {
        Self {
            query_graph,
            knowledge_graph,
            results: Vec::new(),
            n_results: 0,
            status_code: None,
            status_description: None,
        }
    }
}
