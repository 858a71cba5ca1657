//! Validation and enumeration failures.
//!
//! Every failure is detected before any answer is produced and aborts the
//! whole call; the orchestrator never writes partial answer lists. Each
//! variant carries *all* offending ids of its category, so one failed call
//! yields an actionable diagnostic rather than the first bad id.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// A KG node has no `qnode_id` binding at all.
    #[error("these KG nodes do not have qnode_id set: {0:?}")]
    UnboundKgNode(Vec<String>),

    /// A `qnode_id` binding names a query node that is not in the QG.
    #[error("query node ids referenced by node bindings that are not in the query graph: {0:?}")]
    UnknownQgNodeReference(Vec<String>),

    /// A node binding refers to a KG node id that is not in the KG.
    #[error("KG node ids referenced by node bindings that are not in the knowledge graph: {0:?}")]
    UnknownKgNodeReference(Vec<String>),

    /// A `qedge_id` binding names a query edge that is not in the QG.
    #[error("query edge ids referenced by edge bindings that are not in the query graph: {0:?}")]
    UnknownQgEdgeReference(Vec<String>),

    /// An edge binding refers to a KG edge id that is not in the KG.
    #[error("KG edge ids referenced by edge bindings that are not in the knowledge graph: {0:?}")]
    UnknownKgEdgeReference(Vec<String>),

    /// Some query node has zero bound KG nodes, so no answer can cover the QG.
    #[error("the node bindings do not cover these query nodes: {0:?}")]
    IncompleteQgCoverage(Vec<String>),

    /// A KG or QG edge references a node id that does not exist in its graph.
    #[error("edges refer to these non-existent nodes: {0:?}")]
    DanglingEdgeEndpoint(Vec<String>),

    /// A bound KG edge's endpoint bindings do not line up with the subject
    /// and object of its query edge under the active direction policy.
    #[error("the endpoint bindings of these KG edges do not match their query edge: {0:?}")]
    EdgeDirectionMismatch(Vec<String>),

    /// A KG node is bound to one end of a query edge but is not adjacent to
    /// any KG node bound to the opposite end.
    #[error("inconsistent with their bindings, these KG nodes are not connected across their query edge: {0:?}")]
    DisconnectedBinding(Vec<String>),

    /// `force_isset_false` names a query node id absent from the QG.
    #[error("these query nodes in force_isset_false are not in the query graph: {0:?}")]
    UnknownOverrideNodeId(Vec<String>),

    /// The Cartesian product would exceed the caller-supplied answer cap.
    #[error("enumeration would produce {predicted} answers, exceeding the cap of {cap}")]
    AnswerBudgetExceeded { predicted: u128, cap: usize },
}

impl AnswerError {
    /// Stable machine-readable kind, written into `Message::status_code`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnboundKgNode(_) => "UnboundKGNode",
            Self::UnknownQgNodeReference(_) => "UnknownQGNodeReference",
            Self::UnknownKgNodeReference(_) => "UnknownKGNodeReference",
            Self::UnknownQgEdgeReference(_) => "UnknownQGEdgeReference",
            Self::UnknownKgEdgeReference(_) => "UnknownKGEdgeReference",
            Self::IncompleteQgCoverage(_) => "IncompleteQGCoverage",
            Self::DanglingEdgeEndpoint(_) => "DanglingEdgeEndpoint",
            Self::EdgeDirectionMismatch(_) => "EdgeDirectionMismatch",
            Self::DisconnectedBinding(_) => "DisconnectedBinding",
            Self::UnknownOverrideNodeId(_) => "UnknownOverrideNodeID",
            Self::AnswerBudgetExceeded { .. } => "AnswerBudgetExceeded",
        }
    }
}
