//! Property tests for the enumeration laws: answer count equals the product
//! of enumerable cardinalities, set membership is honored in every answer,
//! overrides take precedence, and materialization is pure.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use biograph_answers::materialize::answer_from_node_set;
use biograph_answers::answers_for_query;
use biograph_model::{Edge, KnowledgeGraph, QEdge, QNode, QueryGraph};
use biograph_model::Node;

/// A star fixture: `n_proteins` proteins each linked to one disease, which
/// links to `n_phenotypes` phenotypes. Always passes validation.
fn star_graphs(
    n_proteins: usize,
    protein_is_set: bool,
    n_phenotypes: usize,
    phenotype_is_set: bool,
) -> (QueryGraph, KnowledgeGraph) {
    let qg = QueryGraph::new(
        vec![
            QNode::new("n01")
                .with_category("protein")
                .with_is_set(protein_is_set),
            QNode::new("n00").with_category("disease"),
            QNode::new("n02")
                .with_category("phenotypic_feature")
                .with_is_set(phenotype_is_set),
        ],
        vec![
            QEdge::new("qe01", "n01", "n00"),
            QEdge::new("qe02", "n00", "n02"),
        ],
    );

    let mut nodes = vec![Node::new("DOID:1", "disease").bound_to("n00")];
    let mut edges = Vec::new();
    for i in 0..n_proteins {
        let id = format!("UniProtKB:{i}");
        nodes.push(Node::new(&id, "protein").bound_to("n01"));
        edges.push(Edge::new(format!("kep{i}"), &id, "DOID:1").bound_to("qe01"));
    }
    for i in 0..n_phenotypes {
        let id = format!("HP:{i}");
        nodes.push(Node::new(&id, "phenotypic_feature").bound_to("n02"));
        edges.push(Edge::new(format!("keh{i}"), "DOID:1", &id).bound_to("qe02"));
    }
    (qg, KnowledgeGraph::new(nodes, edges))
}

proptest! {
    #[test]
    fn answer_count_follows_the_cartesian_count_law(
        n_proteins in 1usize..5,
        protein_is_set: bool,
        n_phenotypes in 1usize..5,
        phenotype_is_set: bool,
    ) {
        let (qg, kg) = star_graphs(n_proteins, protein_is_set, n_phenotypes, phenotype_is_set);
        let answers = answers_for_query(&qg, &kg, &HashSet::new(), true, None)
            .expect("star fixture is always valid");

        // Set-typed query nodes contribute no factor, only riders.
        let expected = (if protein_is_set { 1 } else { n_proteins })
            * (if phenotype_is_set { 1 } else { n_phenotypes });
        prop_assert_eq!(answers.len(), expected);
    }

    #[test]
    fn every_answer_covers_the_query_graph(
        n_proteins in 1usize..5,
        protein_is_set: bool,
        n_phenotypes in 1usize..5,
        phenotype_is_set: bool,
    ) {
        let (qg, kg) = star_graphs(n_proteins, protein_is_set, n_phenotypes, phenotype_is_set);
        let answers = answers_for_query(&qg, &kg, &HashSet::new(), true, None)
            .expect("star fixture is always valid");

        for answer in &answers {
            let proteins = answer.node_bindings.iter().filter(|b| b.qnode_id == "n01").count();
            let diseases = answer.node_bindings.iter().filter(|b| b.qnode_id == "n00").count();
            let phenotypes = answer.node_bindings.iter().filter(|b| b.qnode_id == "n02").count();
            // Enumerable query nodes appear exactly once, set-typed ones in full.
            prop_assert_eq!(proteins, if protein_is_set { n_proteins } else { 1 });
            prop_assert_eq!(diseases, 1);
            prop_assert_eq!(phenotypes, if phenotype_is_set { n_phenotypes } else { 1 });
        }
    }

    #[test]
    fn force_isset_false_always_wins_over_is_set(
        n_proteins in 1usize..5,
        n_phenotypes in 1usize..5,
    ) {
        let (qg, kg) = star_graphs(n_proteins, true, n_phenotypes, true);
        let force: HashSet<String> = ["n01".to_string()].into_iter().collect();
        let answers = answers_for_query(&qg, &kg, &force, true, None)
            .expect("star fixture is always valid");
        prop_assert_eq!(answers.len(), n_proteins);
    }

    #[test]
    fn enumeration_is_deterministic(
        n_proteins in 1usize..4,
        n_phenotypes in 1usize..4,
    ) {
        let (qg, kg) = star_graphs(n_proteins, false, n_phenotypes, true);
        let first = answers_for_query(&qg, &kg, &HashSet::new(), true, None)
            .expect("star fixture is always valid");
        let second = answers_for_query(&qg, &kg, &HashSet::new(), true, None)
            .expect("star fixture is always valid");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn materialization_is_pure(
        picks in proptest::collection::btree_set("[a-e]", 0..5),
    ) {
        let (_, kg) = star_graphs(3, false, 3, false);
        // An arbitrary node-set, including ids absent from the KG: the
        // materializer simply binds whatever intersects.
        let node_set: BTreeSet<String> = picks
            .into_iter()
            .chain(["DOID:1".to_string(), "UniProtKB:0".to_string()])
            .collect();
        let first = answer_from_node_set(&kg, &node_set);
        let second = answer_from_node_set(&kg, &node_set);
        prop_assert_eq!(first, second);
    }
}
