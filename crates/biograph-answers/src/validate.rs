//! Binding validation: every check that must hold before enumeration.
//!
//! The checks run in a fixed order. Each one collects *every* offender of
//! its category before failing, so the first violated category is reported
//! in full. Later checks may assume earlier ones passed (e.g. the direction
//! check can assume every `qedge_id` names a real query edge).

use std::collections::{BTreeSet, HashMap, HashSet};

use biograph_model::{KnowledgeGraph, QueryGraph};

use crate::error::AnswerError;

/// Check that the KG's bindings to the QG are self-consistent and complete.
///
/// `force_isset_false` is validated here too: an override naming a missing
/// query node is a caller bug we refuse to paper over.
pub fn validate_bindings(
    qg: &QueryGraph,
    kg: &KnowledgeGraph,
    force_isset_false: &HashSet<String>,
    ignore_edge_direction: bool,
) -> Result<(), AnswerError> {
    // Every KG node must be bound to some query node.
    let unbound: Vec<String> = kg
        .nodes
        .iter()
        .filter(|n| n.qnode_id.is_none())
        .map(|n| n.id.clone())
        .collect();
    if !unbound.is_empty() {
        return Err(AnswerError::UnboundKgNode(unbound));
    }

    let qg_node_ids: HashSet<&str> = qg.nodes.iter().map(|n| n.id.as_str()).collect();
    let qg_edge_ids: HashSet<&str> = qg.edges.iter().map(|e| e.id.as_str()).collect();
    let kg_node_ids: HashSet<&str> = kg.nodes.iter().map(|n| n.id.as_str()).collect();
    let kg_edge_ids: HashSet<&str> = kg.edges.iter().map(|e| e.id.as_str()).collect();

    // The is_set override list must name real query nodes.
    let mut unknown_overrides: Vec<String> = force_isset_false
        .iter()
        .filter(|id| !qg_node_ids.contains(id.as_str()))
        .cloned()
        .collect();
    unknown_overrides.sort();
    if !unknown_overrides.is_empty() {
        return Err(AnswerError::UnknownOverrideNodeId(unknown_overrides));
    }

    // KG node id -> bound query node id. Total after the unbound check.
    let qnode_of: HashMap<&str, &str> = kg
        .nodes
        .iter()
        .filter_map(|n| n.qnode_id.as_deref().map(|q| (n.id.as_str(), q)))
        .collect();
    // KG edge id -> bound query edge id, for bound edges only.
    let qedge_of: HashMap<&str, &str> = kg
        .edges
        .iter()
        .filter_map(|e| e.qedge_id.as_deref().map(|q| (e.id.as_str(), q)))
        .collect();

    // Referential integrity of the node bindings, both directions.
    let bad_qnode_refs: Vec<String> = qnode_of
        .values()
        .filter(|q| !qg_node_ids.contains(**q))
        .map(|q| q.to_string())
        .collect();
    if !bad_qnode_refs.is_empty() {
        return Err(AnswerError::UnknownQgNodeReference(dedup_sorted(
            bad_qnode_refs,
        )));
    }
    let bad_kg_node_refs: Vec<String> = qnode_of
        .keys()
        .filter(|id| !kg_node_ids.contains(**id))
        .map(|id| id.to_string())
        .collect();
    if !bad_kg_node_refs.is_empty() {
        return Err(AnswerError::UnknownKgNodeReference(dedup_sorted(
            bad_kg_node_refs,
        )));
    }

    // Referential integrity of the edge bindings, both directions.
    let bad_qedge_refs: Vec<String> = qedge_of
        .values()
        .filter(|q| !qg_edge_ids.contains(**q))
        .map(|q| q.to_string())
        .collect();
    if !bad_qedge_refs.is_empty() {
        return Err(AnswerError::UnknownQgEdgeReference(dedup_sorted(
            bad_qedge_refs,
        )));
    }
    let bad_kg_edge_refs: Vec<String> = qedge_of
        .keys()
        .filter(|id| !kg_edge_ids.contains(**id))
        .map(|id| id.to_string())
        .collect();
    if !bad_kg_edge_refs.is_empty() {
        return Err(AnswerError::UnknownKgEdgeReference(dedup_sorted(
            bad_kg_edge_refs,
        )));
    }

    // Coverage: every query node needs at least one bound KG node.
    let bound_qnode_ids: HashSet<&str> = qnode_of.values().copied().collect();
    let uncovered: Vec<String> = qg
        .nodes
        .iter()
        .filter(|n| !bound_qnode_ids.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect();
    if !uncovered.is_empty() {
        return Err(AnswerError::IncompleteQgCoverage(uncovered));
    }

    // Edge endpoints must exist in their own graph, KG and QG alike.
    let mut dangling: Vec<String> = Vec::new();
    for edge in &kg.edges {
        if !kg_node_ids.contains(edge.source_id.as_str()) {
            dangling.push(edge.source_id.clone());
        }
        if !kg_node_ids.contains(edge.target_id.as_str()) {
            dangling.push(edge.target_id.clone());
        }
    }
    for qedge in &qg.edges {
        if !qg_node_ids.contains(qedge.subject.as_str()) {
            dangling.push(qedge.subject.clone());
        }
        if !qg_node_ids.contains(qedge.object.as_str()) {
            dangling.push(qedge.object.clone());
        }
    }
    if !dangling.is_empty() {
        return Err(AnswerError::DanglingEdgeEndpoint(dangling));
    }

    check_edge_direction(qg, kg, &qnode_of, ignore_edge_direction)?;
    check_binding_connectivity(qg, kg, &qnode_of)
}

/// For each bound KG edge, its endpoints' query-node bindings must equal the
/// (subject, object) of the query edge it is bound to. With
/// `ignore_edge_direction` the swapped alignment is accepted too.
fn check_edge_direction(
    qg: &QueryGraph,
    kg: &KnowledgeGraph,
    qnode_of: &HashMap<&str, &str>,
    ignore_edge_direction: bool,
) -> Result<(), AnswerError> {
    let mut mismatched: Vec<String> = Vec::new();
    for edge in &kg.edges {
        let Some(qedge_id) = edge.qedge_id.as_deref() else {
            continue;
        };
        // Earlier checks guarantee these lookups succeed.
        let Some(qedge) = qg.edge(qedge_id) else {
            continue;
        };
        let (Some(q_source), Some(q_target)) = (
            qnode_of.get(edge.source_id.as_str()),
            qnode_of.get(edge.target_id.as_str()),
        ) else {
            continue;
        };
        let forward = *q_source == qedge.subject && *q_target == qedge.object;
        let backward = *q_source == qedge.object && *q_target == qedge.subject;
        if !(forward || (ignore_edge_direction && backward)) {
            mismatched.push(edge.id.clone());
        }
    }
    if !mismatched.is_empty() {
        return Err(AnswerError::EdgeDirectionMismatch(mismatched));
    }
    Ok(())
}

/// For every query edge, each KG node bound to one endpoint must be directly
/// connected (either orientation) to at least one KG node bound to the other.
///
/// Adjacency here is deliberately direction-agnostic: direction sensitivity
/// is enforced by the edge-direction check above, on bound edges only.
fn check_binding_connectivity(
    qg: &QueryGraph,
    kg: &KnowledgeGraph,
    qnode_of: &HashMap<&str, &str>,
) -> Result<(), AnswerError> {
    let mut nodes_for_qnode: HashMap<&str, HashSet<&str>> = HashMap::new();
    for (&node_id, &qnode_id) in qnode_of {
        nodes_for_qnode.entry(qnode_id).or_default().insert(node_id);
    }

    let mut neighbors: HashMap<&str, HashSet<&str>> = HashMap::new();
    for edge in &kg.edges {
        neighbors
            .entry(edge.source_id.as_str())
            .or_default()
            .insert(edge.target_id.as_str());
        neighbors
            .entry(edge.target_id.as_str())
            .or_default()
            .insert(edge.source_id.as_str());
    }

    let empty = HashSet::new();
    let mut stranded: BTreeSet<String> = BTreeSet::new();
    for qedge in &qg.edges {
        let subject_nodes = nodes_for_qnode
            .get(qedge.subject.as_str())
            .unwrap_or(&empty);
        let object_nodes = nodes_for_qnode
            .get(qedge.object.as_str())
            .unwrap_or(&empty);
        for &node_id in subject_nodes {
            let adjacent = neighbors.get(node_id).unwrap_or(&empty);
            if adjacent.is_disjoint(object_nodes) {
                stranded.insert(node_id.to_string());
            }
        }
        for &node_id in object_nodes {
            let adjacent = neighbors.get(node_id).unwrap_or(&empty);
            if adjacent.is_disjoint(subject_nodes) {
                stranded.insert(node_id.to_string());
            }
        }
    }
    if !stranded.is_empty() {
        return Err(AnswerError::DisconnectedBinding(
            stranded.into_iter().collect(),
        ));
    }
    Ok(())
}

fn dedup_sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids.dedup();
    ids
}
