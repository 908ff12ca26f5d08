//! Known-topology regression tests for dressing orders.
//!
//! Each wardrobe is small enough that the expected steps are worked out by
//! hand and hardcoded.

use dressing_core::demo::SUIT_EDGES;
use dressing_core::graph::ClothingGraph;
use dressing_core::{DressingError, create_dressing_order, dressing_order, initial_frontier, traverse};

fn steps(order: &str) -> Vec<&str> {
    order.lines().collect()
}

#[test]
fn suit_layers_and_prerequisites() {
    let graph = ClothingGraph::from_edges(SUIT_EDGES).expect("build graph");
    assert_eq!(graph.node_count(), 12);
    assert_eq!(graph.edge_count(), 18);

    let prereqs = graph.prerequisites();
    assert_eq!(
        prereqs["suit jacket"],
        vec!["belt", "dress shirt", "pants", "t-shirt", "tie"]
    );
    assert_eq!(
        prereqs["overcoat"],
        vec!["left shoe", "right shoe", "suit jacket", "sun glasses"]
    );

    let order = dressing_order(SUIT_EDGES).expect("order");
    assert_eq!(order.len(), 7);
    assert_eq!(order.layer_of("belt"), Some(3));
    assert_eq!(order.layer_of("Overcoat"), Some(6));
}

#[test]
fn suit_order_is_independent_of_edge_order() {
    let mut shuffled: Vec<(&str, &str)> = SUIT_EDGES.to_vec();
    shuffled.reverse();
    shuffled.rotate_left(5);

    assert_eq!(
        create_dressing_order(&shuffled).expect("order"),
        create_dressing_order(SUIT_EDGES).expect("order")
    );
}

#[test]
fn mixed_case_input_keeps_first_spelling() {
    let order = create_dressing_order(&[
        ("Undershirt", "shirt"),
        ("undershirt", "Vest"),
        ("SHIRT", "vest"),
    ])
    .expect("order");
    assert_eq!(steps(&order), vec!["Undershirt", "shirt", "Vest"]);
}

#[test]
fn single_terminal_layer_flushes_identically_on_both_paths() {
    // Terminal layer reached from one parent: flushed when the queue drains.
    let fan_out = create_dressing_order(&[("base", "x"), ("base", "y")]).expect("order");
    // Terminal layer reached from two parents dequeued in one layer.
    let fan_in = create_dressing_order(&[("a", "x"), ("b", "y"), ("base", "a"), ("base", "b")])
        .expect("order");

    assert_eq!(steps(&fan_out), vec!["base", "x, y"]);
    assert_eq!(steps(&fan_in), vec!["base", "a, b", "x, y"]);
}

#[test]
fn unrelated_outfits_share_steps() {
    let order = create_dressing_order(&[
        ("socks", "boots"),
        ("boots", "gaiters"),
        ("base layer", "fleece"),
        ("fleece", "shell"),
        ("hat", "goggles"),
    ])
    .expect("order");

    assert_eq!(
        steps(&order),
        vec!["base layer, hat, socks", "boots, fleece, goggles", "gaiters, shell"]
    );
}

#[test]
fn cycle_behind_a_valid_prefix_fails_whole_call() {
    let err = create_dressing_order(&[
        ("socks", "shoes"),
        ("shoes", "spats"),
        ("spats", "shoes"),
    ])
    .expect_err("cycle");

    assert_eq!(
        err.to_string(),
        "circular dependencies found with clothing item(s): shoes, spats"
    );
}

#[test]
fn second_traversal_sees_drained_graph() {
    let mut graph = ClothingGraph::from_edges(&[("socks", "shoes")]).expect("build graph");
    let frontier = initial_frontier(&graph);
    traverse(&frontier, &mut graph).expect("first traversal");

    // Every dependency set is drained, so both items now look like roots and
    // the second pass yields a single flat step.
    let again = traverse(&initial_frontier(&graph), &mut graph).expect("second traversal");
    assert_eq!(again.render(), "shoes, socks");
}

#[test]
fn all_cyclic_input_has_no_frontier() {
    let mut graph = ClothingGraph::from_edges(&[("a", "b"), ("b", "a")]).expect("build graph");
    let frontier = initial_frontier(&graph);
    assert!(frontier.is_empty());

    let err = traverse(&frontier, &mut graph).expect_err("cycle");
    assert!(matches!(err, DressingError::CircularDependency { ref cycles, .. } if cycles.len() == 1));
}
