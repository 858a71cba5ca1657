//! Answer materialization: from a node-set to bindings.

use std::collections::BTreeSet;

use biograph_model::{Answer, EdgeBinding, KnowledgeGraph, NodeBinding};

/// Convert one node-set into an [`Answer`].
///
/// Node bindings cover every KG node inside the set; edge bindings cover the
/// bound KG edges whose endpoints both lie inside the set. Unbound edges
/// (`qedge_id = None`) exist only to satisfy the connectivity invariant and
/// are never reported, even when both endpoints are included.
///
/// Pure: the same node-set always materializes to the same answer.
pub fn answer_from_node_set(kg: &KnowledgeGraph, node_set: &BTreeSet<String>) -> Answer {
    let node_bindings = kg
        .nodes
        .iter()
        .filter(|n| node_set.contains(&n.id))
        .filter_map(|n| {
            n.qnode_id
                .as_deref()
                .map(|q| NodeBinding::new(q, &n.id))
        })
        .collect();
    let edge_bindings = kg
        .edges
        .iter()
        .filter(|e| node_set.contains(&e.source_id) && node_set.contains(&e.target_id))
        .filter_map(|e| {
            e.qedge_id
                .as_deref()
                .map(|q| EdgeBinding::new(q, &e.id))
        })
        .collect();
    Answer::new(node_bindings, edge_bindings)
}
