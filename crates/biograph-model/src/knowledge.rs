//! Knowledge graph: concrete entities and relationships, annotated with the
//! query element each one is meant to satisfy.

use serde::{Deserialize, Serialize};

/// A concrete entity (identified by a CURIE such as `DOID:12345`).
///
/// `qnode_id` is the binding back to the query graph. The retrieval stage is
/// required to set it on every node it produces; the answer engine rejects
/// graphs where it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub qnode_id: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: Some(category.into()),
            qnode_id: None,
        }
    }

    pub fn bound_to(mut self, qnode_id: impl Into<String>) -> Self {
        self.qnode_id = Some(qnode_id.into());
        self
    }
}

/// A concrete relationship between two knowledge nodes.
///
/// `qedge_id` is optional: edges retrieved as incidental connectivity (not
/// answering any query edge) carry `None` and are never reported in answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default)]
    pub qedge_id: Option<String>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            qedge_id: None,
        }
    }

    pub fn bound_to(mut self, qedge_id: impl Into<String>) -> Self {
        self.qedge_id = Some(qedge_id.into());
        self
    }
}

/// The retrieved graph. Node and edge ids are unique within the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl KnowledgeGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
