//! Query graph: the abstract pattern a client asks to have matched.

use serde::{Deserialize, Serialize};

/// A typed slot in the query pattern.
///
/// `is_set` controls answer enumeration: when `Some(true)`, every knowledge
/// node bound to this query node appears together in each answer instead of
/// being enumerated one combination at a time. `None` is treated the same as
/// `Some(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_set: Option<bool>,
}

impl QNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: None,
            is_set: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_is_set(mut self, is_set: bool) -> Self {
        self.is_set = Some(is_set);
        self
    }
}

/// A directed relationship slot between two query nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QEdge {
    pub id: String,
    pub subject: String,
    pub object: String,
}

impl QEdge {
    pub fn new(id: impl Into<String>, subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            object: object.into(),
        }
    }
}

/// The full query pattern. Node and edge ids are unique within the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryGraph {
    #[serde(default)]
    pub nodes: Vec<QNode>,
    #[serde(default)]
    pub edges: Vec<QEdge>,
}

impl QueryGraph {
    pub fn new(nodes: Vec<QNode>, edges: Vec<QEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&QNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&QEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}
