//! Subgraph enumeration: the Cartesian product over enumerable dimensions.

use std::collections::BTreeSet;

use crate::error::AnswerError;
use crate::partition::NodePartition;

/// Enumerate one node-set per combination of enumerable candidates, each
/// unioned with the always-include set, in the product's natural order.
///
/// The result count is exactly the product of the dimension cardinalities —
/// exponential in the number of enumerable query nodes. Query graphs are
/// small (≤10 nodes), so correctness wins over scalability here; `max_answers`
/// is the guard for callers that cannot afford a blow-up, checked before any
/// node-set is built.
///
/// Node-sets are not deduplicated. Distinct combinations only coincide when
/// the same KG node is bound to several enumerable query nodes, which normal
/// bindings never produce.
pub fn enumerate_node_sets(
    partition: &NodePartition,
    max_answers: Option<usize>,
) -> Result<Vec<BTreeSet<String>>, AnswerError> {
    let dimensions = &partition.dimensions;

    let predicted: u128 = dimensions
        .iter()
        .map(|d| d.candidates.len() as u128)
        .product();
    if let Some(cap) = max_answers {
        if predicted > cap as u128 {
            return Err(AnswerError::AnswerBudgetExceeded { predicted, cap });
        }
    }
    if predicted == 0 {
        return Ok(Vec::new());
    }

    let mut node_sets = Vec::new();
    let mut cursor = vec![0usize; dimensions.len()];
    loop {
        let mut node_set = partition.always_include.clone();
        for (dimension, &choice) in dimensions.iter().zip(&cursor) {
            node_set.insert(dimension.candidates[choice].clone());
        }
        node_sets.push(node_set);

        // Advance the odometer, rightmost dimension fastest.
        let mut position = dimensions.len();
        loop {
            if position == 0 {
                return Ok(node_sets);
            }
            position -= 1;
            cursor[position] += 1;
            if cursor[position] < dimensions[position].candidates.len() {
                break;
            }
            cursor[position] = 0;
        }
    }
}
