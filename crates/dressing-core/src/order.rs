//! Layered topological ordering of a clothing graph.
//!
//! Kahn's algorithm with grouped emission: the work queue holds one layer
//! followed by the next. A layer's names are buffered while its nodes are
//! dequeued and flushed exactly once, either when the first node of the
//! following layer comes off the queue or when the queue drains.
//!
//! Two checks report cycles:
//! - a node dequeued twice fails immediately;
//! - any node still holding prerequisites once the queue drains fails the
//!   whole traversal, naming every such node.

#![allow(clippy::missing_const_for_fn)]

use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::DressingError;
use crate::graph::build::missing;
use crate::graph::{
    ClothingGraph, NodeId, compare_ignore_case, find_cycles, normalize_key, sort_ignore_case,
    unresolved_items,
};

/// Separator between items that can be put on in the same step.
pub const GROUP_SEPARATOR: &str = ", ";

/// Separator between steps in the rendered order.
pub const LINE_SEPARATOR: &str = "\n";

/// Ordered dressing steps. Each layer is sorted case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DressingOrder {
    pub layers: Vec<Vec<String>>,
}

impl DressingOrder {
    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Zero-based step containing `item`, ignoring case.
    #[must_use]
    pub fn layer_of(&self, item: &str) -> Option<usize> {
        let key = normalize_key(item);
        self.layers
            .iter()
            .position(|layer| layer.iter().any(|name| normalize_key(name) == key))
    }

    /// One line per step, items joined with [`GROUP_SEPARATOR`].
    #[must_use]
    pub fn render(&self) -> String {
        self.layers
            .iter()
            .map(|layer| layer.join(GROUP_SEPARATOR))
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }
}

impl fmt::Display for DressingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Every node with no prerequisites, sorted case-insensitively by name.
#[must_use]
pub fn initial_frontier(graph: &ClothingGraph) -> Vec<NodeId> {
    let mut ready: Vec<(NodeId, &str)> = graph
        .nodes()
        .filter(|(_, node)| node.is_ready())
        .map(|(id, node)| (id, node.name.as_str()))
        .collect();
    ready.sort_by(|a, b| compare_ignore_case(a.1, b.1));
    ready.into_iter().map(|(id, _)| id).collect()
}

/// Walk `graph` breadth-first from `frontier`, emitting one layer per step.
///
/// Drains the dependency sets of `graph`; the graph cannot be traversed a
/// second time.
///
/// # Errors
///
/// - [`DressingError::CircularDependency`] if a node is dequeued twice or any
///   node still has prerequisites when the queue drains.
/// - [`DressingError::MissingNode`] if `frontier` or a dependent set refers to
///   a node outside `graph`.
#[instrument(skip_all, fields(frontier = frontier.len(), nodes = graph.node_count()))]
pub fn traverse(
    frontier: &[NodeId],
    graph: &mut ClothingGraph,
) -> Result<DressingOrder, DressingError> {
    let mut queue: VecDeque<NodeId> = frontier.iter().copied().collect();
    let mut dequeued: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());
    let mut layers: Vec<Vec<String>> = Vec::new();
    let mut group: Vec<String> = Vec::new();

    // Nodes of the current layer still queued, and of the next layer so far.
    let mut current_left = queue.len();
    let mut next_left = 0_usize;

    while let Some(id) = queue.pop_front() {
        if current_left == 0 {
            flush_group(&mut layers, &mut group);
            current_left = std::mem::take(&mut next_left);
        }
        current_left = current_left.saturating_sub(1);

        let node = graph.node(id).ok_or_else(|| missing(id))?;
        if !dequeued.insert(id) {
            warn!(item = %node.name, "clothing item reached the queue twice");
            return Err(DressingError::CircularDependency {
                items: vec![node.name.clone()],
                cycles: find_cycles(graph),
            });
        }
        group.push(node.name.clone());
        let dependents: Vec<NodeId> = node.dependents.iter().copied().collect();

        for dependent in dependents {
            let waiting = graph.node_mut(dependent).ok_or_else(|| missing(dependent))?;
            if waiting.dependencies.remove(&id) && waiting.is_ready() {
                queue.push_back(dependent);
                next_left += 1;
            }
        }
    }
    flush_group(&mut layers, &mut group);

    let unresolved = unresolved_items(graph);
    if !unresolved.is_empty() {
        let cycles = find_cycles(graph);
        warn!(
            unresolved = unresolved.len(),
            cycles = cycles.len(),
            "dependency cycle left items unordered"
        );
        return Err(DressingError::CircularDependency {
            items: unresolved,
            cycles,
        });
    }

    debug!(layers = layers.len(), "dressing order resolved");
    Ok(DressingOrder { layers })
}

fn flush_group(layers: &mut Vec<Vec<String>>, group: &mut Vec<String>) {
    if group.is_empty() {
        return;
    }
    sort_ignore_case(group);
    layers.push(std::mem::take(group));
}
