//! Binding and adjacency indexes over a validated knowledge graph.

use std::collections::{BTreeSet, HashMap, HashSet};

use biograph_model::{KnowledgeGraph, QueryGraph};

/// Lookup maps shared by the classifier and enumerator.
///
/// A pure function of its inputs, O(|nodes| + |edges|) to construct. Built
/// only after [`crate::validate::validate_bindings`] has accepted the graphs,
/// so every KG node is known to carry a binding to an existing query node.
///
/// Reverse-binding sets are `BTreeSet`s: candidate enumeration order is
/// deterministic across runs, not merely stable within one invocation.
#[derive(Debug, Clone, Default)]
pub struct BindingIndex {
    /// KG node id -> the query node id it is bound to.
    pub qnode_of: HashMap<String, String>,
    /// Query node id -> every KG node id bound to it.
    pub nodes_for_qnode: HashMap<String, BTreeSet<String>>,
    /// KG node id -> out-neighbor KG node ids.
    pub out_neighbors: HashMap<String, HashSet<String>>,
    /// KG node id -> in-neighbor KG node ids.
    pub in_neighbors: HashMap<String, HashSet<String>>,
}

impl BindingIndex {
    pub fn build(qg: &QueryGraph, kg: &KnowledgeGraph) -> Self {
        let mut index = Self::default();

        for qnode in &qg.nodes {
            index
                .nodes_for_qnode
                .insert(qnode.id.clone(), BTreeSet::new());
        }

        for node in &kg.nodes {
            index
                .out_neighbors
                .insert(node.id.clone(), HashSet::new());
            index.in_neighbors.insert(node.id.clone(), HashSet::new());
            let Some(qnode_id) = &node.qnode_id else {
                continue;
            };
            index.qnode_of.insert(node.id.clone(), qnode_id.clone());
            index
                .nodes_for_qnode
                .entry(qnode_id.clone())
                .or_default()
                .insert(node.id.clone());
        }

        for edge in &kg.edges {
            index
                .out_neighbors
                .entry(edge.source_id.clone())
                .or_default()
                .insert(edge.target_id.clone());
            index
                .in_neighbors
                .entry(edge.target_id.clone())
                .or_default()
                .insert(edge.source_id.clone());
        }

        index
    }

    /// Every KG node directly connected to `node_id`, in either direction.
    pub fn neighbors(&self, node_id: &str) -> impl Iterator<Item = &String> {
        self.out_neighbors
            .get(node_id)
            .into_iter()
            .flatten()
            .chain(self.in_neighbors.get(node_id).into_iter().flatten())
    }
}
