//! Cycle reporting for graphs that could not be fully ordered.
//!
//! After a traversal every resolved item has an empty dependency set, so the
//! links that remain are exactly those among unresolved items. Running
//! Tarjan's SCC algorithm over that remainder separates the items that sit
//! on a cycle from the ones merely waiting downstream of one.

#![allow(clippy::module_name_repetitions)]

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::build::ClothingGraph;
use super::node::{compare_ignore_case, sort_ignore_case};

/// Display names of every item that still has unresolved prerequisites,
/// sorted case-insensitively.
#[must_use]
pub fn unresolved_items(graph: &ClothingGraph) -> Vec<String> {
    let mut items: Vec<String> = graph
        .nodes()
        .filter(|(_, node)| !node.is_ready())
        .map(|(_, node)| node.name.clone())
        .collect();
    sort_ignore_case(&mut items);
    items
}

/// Find all cycles among the current dependency links of `graph`.
///
/// Each entry is one strongly connected component, its names sorted
/// case-insensitively. Entries are ordered by their first name.
#[must_use]
pub fn find_cycles(graph: &ClothingGraph) -> Vec<Vec<String>> {
    let digraph = graph.to_digraph();

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&digraph)
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|node| has_self_loop(&digraph, *node))
        })
        .map(|component| {
            let mut names: Vec<String> = component
                .into_iter()
                .filter_map(|idx| digraph.node_weight(idx).cloned())
                .collect();
            sort_ignore_case(&mut names);
            names
        })
        .collect();

    cycles.sort_by(|a, b| {
        let first_a = a.first().map_or("", String::as_str);
        let first_b = b.first().map_or("", String::as_str);
        compare_ignore_case(first_a, first_b)
    });
    cycles
}

fn has_self_loop(digraph: &DiGraph<String, ()>, node: NodeIndex) -> bool {
    digraph.find_edge(node, node).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acyclic_graph_has_no_cycles() {
        let graph = ClothingGraph::from_edges(&[("a", "b"), ("b", "c")]).expect("build graph");
        assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    fn reports_each_cycle_separately() {
        let graph = ClothingGraph::from_edges(&[
            ("Vest", "coat"),
            ("coat", "vest"),
            ("b", "c"),
            ("c", "a"),
            ("a", "b"),
            ("a", "scarf"),
        ])
        .expect("build graph");

        let cycles = find_cycles(&graph);
        assert_eq!(
            cycles,
            vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["coat".to_string(), "Vest".to_string()],
            ]
        );
    }

    #[test]
    fn every_node_is_unresolved_before_traversal_except_roots() {
        let graph = ClothingGraph::from_edges(&[("socks", "shoes"), ("Laces", "shoes"), ("shoes", "gaiters")])
            .expect("build graph");
        assert_eq!(unresolved_items(&graph), vec!["gaiters", "shoes"]);
    }
}
