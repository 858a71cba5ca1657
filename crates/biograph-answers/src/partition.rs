//! Set-node classification: which query nodes are enumerated, which are
//! carried whole into every answer.

use std::collections::{BTreeSet, HashSet};

use biograph_model::QueryGraph;

use crate::index::BindingIndex;

/// One enumerable query node and its candidate KG nodes, in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub qnode_id: String,
    pub candidates: Vec<String>,
}

/// The partition of query nodes driving enumeration.
///
/// `always_include` is the union of the reverse-binding sets of every
/// set-typed query node (minus overridden ones); `dimensions` holds the
/// remaining query nodes in QG declaration order, each contributing one
/// Cartesian factor. A dimension with no candidates collapses the whole
/// product to zero answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePartition {
    pub always_include: BTreeSet<String>,
    pub dimensions: Vec<Dimension>,
}

impl NodePartition {
    /// `force_isset_false` takes precedence over a query node's own
    /// `is_set = true`; an unset `is_set` means enumerable.
    pub fn classify(
        qg: &QueryGraph,
        index: &BindingIndex,
        force_isset_false: &HashSet<String>,
    ) -> Self {
        let mut partition = Self::default();
        for qnode in &qg.nodes {
            let bound = index
                .nodes_for_qnode
                .get(&qnode.id)
                .cloned()
                .unwrap_or_default();
            if qnode.is_set == Some(true) && !force_isset_false.contains(&qnode.id) {
                partition.always_include.extend(bound);
            } else {
                partition.dimensions.push(Dimension {
                    qnode_id: qnode.id.clone(),
                    candidates: bound.into_iter().collect(),
                });
            }
        }
        partition
    }
}
