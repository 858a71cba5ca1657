//! Answers: one enumerated subgraph per record, expressed as bindings.

use serde::{Deserialize, Serialize};

/// Associates one knowledge node with the query node it satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeBinding {
    pub qnode_id: String,
    pub node_id: String,
}

impl NodeBinding {
    pub fn new(qnode_id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            qnode_id: qnode_id.into(),
            node_id: node_id.into(),
        }
    }
}

/// Associates one knowledge edge with the query edge it satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBinding {
    pub qedge_id: String,
    pub edge_id: String,
}

impl EdgeBinding {
    pub fn new(qedge_id: impl Into<String>, edge_id: impl Into<String>) -> Self {
        Self {
            qedge_id: qedge_id.into(),
            edge_id: edge_id.into(),
        }
    }
}

/// One complete answer: the node bindings it contains and the edge bindings
/// whose endpoints both lie inside the answer's node set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub node_bindings: Vec<NodeBinding>,
    pub edge_bindings: Vec<EdgeBinding>,
    /// Human-readable summary, filled in by the orchestrator. Downstream
    /// ranking and persistence expect this to be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Answer {
    pub fn new(node_bindings: Vec<NodeBinding>, edge_bindings: Vec<EdgeBinding>) -> Self {
        Self {
            node_bindings,
            edge_bindings,
            description: None,
        }
    }

    /// The query node ids covered by this answer, in binding order.
    pub fn covered_qnode_ids(&self) -> Vec<&str> {
        self.node_bindings
            .iter()
            .map(|b| b.qnode_id.as_str())
            .collect()
    }
}
