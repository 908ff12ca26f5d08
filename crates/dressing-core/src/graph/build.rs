//! Graph construction from `(dependency, dependent)` pairs.
//!
//! # Edge Direction
//!
//! A pair `(A, B)` means "A must be worn before B". `B` lands in
//! `A.dependents` and `A` lands in `B.dependencies`; the two sets are always
//! inverses of each other.
//!
//! # Identity
//!
//! Names are matched case-insensitively through [`normalize_key`]. The first
//! spelling seen becomes the node's display name.
//!
//! # Content Hash
//!
//! [`ClothingGraph::content_hash`] is a BLAKE3 hash of the sorted, normalized
//! edge set. It does not depend on edge order, duplicates, or casing.

#![allow(clippy::module_name_repetitions, clippy::missing_const_for_fn)]

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, instrument};

use super::node::{ClothingNode, NodeId, normalize_key, sort_ignore_case};
use crate::error::DressingError;

// ---------------------------------------------------------------------------
// ClothingGraph
// ---------------------------------------------------------------------------

/// Arena of clothing nodes keyed by normalized item name.
///
/// Built once per ordering request. [`crate::order::traverse`] drains the
/// dependency sets in place, so a graph must not be traversed twice.
#[derive(Debug, Clone, Default)]
pub struct ClothingGraph {
    nodes: Vec<ClothingNode>,
    /// Normalized item name → arena index.
    node_map: HashMap<String, NodeId>,
}

impl ClothingGraph {
    /// Build a graph from `(dependency, dependent)` pairs.
    ///
    /// # Errors
    ///
    /// - [`DressingError::InvalidInput`] if either side of an entry is empty.
    /// - [`DressingError::SelfDependency`] if both sides name the same item.
    #[instrument(skip(edges), fields(entries = edges.len()))]
    pub fn from_edges<S: AsRef<str>>(edges: &[(S, S)]) -> Result<Self, DressingError> {
        let mut graph = Self::default();

        for (index, (dependency, dependent)) in edges.iter().enumerate() {
            let (dependency, dependent) = (dependency.as_ref(), dependent.as_ref());
            check_entry(index, dependency, dependent)?;

            let dependency_id = graph.intern(dependency);
            let dependent_id = graph.intern(dependent);
            graph.link(dependency_id, dependent_id)?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built clothing graph"
        );
        Ok(graph)
    }

    /// Number of distinct items.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct dependency links. Unaffected by traversal.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.dependents.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node id by item name, ignoring case.
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(&normalize_key(name)).copied()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ClothingNode> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut ClothingNode> {
        self.nodes.get_mut(id.0)
    }

    /// Iterate every node with its id, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &ClothingNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Display name for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DressingError::MissingNode`] if `id` is not in this graph.
    pub fn name(&self, id: NodeId) -> Result<&str, DressingError> {
        self.node(id)
            .map(|node| node.name.as_str())
            .ok_or_else(|| missing(id))
    }

    /// Current prerequisites of `name`, sorted case-insensitively.
    #[must_use]
    pub fn dependencies_of(&self, name: &str) -> Option<Vec<&str>> {
        let node = self.node(self.node_id(name)?)?;
        Some(self.sorted_names(node.dependencies.iter().copied()))
    }

    /// Items waiting on `name`, sorted case-insensitively.
    #[must_use]
    pub fn dependents_of(&self, name: &str) -> Option<Vec<&str>> {
        let node = self.node(self.node_id(name)?)?;
        Some(self.sorted_names(node.dependents.iter().copied()))
    }

    /// Direct prerequisites of every item, keyed by display name.
    ///
    /// Reflects the current dependency sets, so call it before traversal.
    #[must_use]
    pub fn prerequisites(&self) -> BTreeMap<String, Vec<String>> {
        self.nodes
            .iter()
            .map(|node| {
                let names = self
                    .sorted_names(node.dependencies.iter().copied())
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (node.name.clone(), names)
            })
            .collect()
    }

    /// BLAKE3 hash of the normalized edge set, prefixed with `blake3:`.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut edges: Vec<(String, String)> = self
            .nodes
            .iter()
            .flat_map(|node| {
                node.dependents.iter().filter_map(move |&dependent| {
                    let target = self.node(dependent)?;
                    Some((normalize_key(&node.name), normalize_key(&target.name)))
                })
            })
            .collect();
        edges.sort_unstable();
        compute_edge_hash(&edges)
    }

    /// Project the current dependency sets into a petgraph `DiGraph`.
    ///
    /// Node weights are display names; edges run `dependency → dependent`.
    /// After a traversal only unresolved links remain.
    #[must_use]
    pub fn to_digraph(&self) -> DiGraph<String, ()> {
        let mut digraph = DiGraph::with_capacity(self.nodes.len(), self.edge_count());
        let indices: Vec<NodeIndex> = self
            .nodes
            .iter()
            .map(|node| digraph.add_node(node.name.clone()))
            .collect();

        for (idx, node) in self.nodes.iter().enumerate() {
            for dependency in &node.dependencies {
                if let (Some(&from), Some(&to)) = (indices.get(dependency.0), indices.get(idx)) {
                    digraph.add_edge(from, to, ());
                }
            }
        }

        digraph
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_map.get(&normalize_key(name)) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(ClothingNode::new(name));
        self.node_map.insert(normalize_key(name), id);
        id
    }

    fn link(&mut self, dependency: NodeId, dependent: NodeId) -> Result<(), DressingError> {
        self.node_mut(dependency)
            .ok_or_else(|| missing(dependency))?
            .dependents
            .insert(dependent);
        self.node_mut(dependent)
            .ok_or_else(|| missing(dependent))?
            .dependencies
            .insert(dependency);
        Ok(())
    }

    fn sorted_names(&self, ids: impl Iterator<Item = NodeId>) -> Vec<&str> {
        let mut names: Vec<&str> = ids
            .filter_map(|id| self.node(id).map(|node| node.name.as_str()))
            .collect();
        sort_ignore_case(&mut names);
        names
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn check_entry(index: usize, dependency: &str, dependent: &str) -> Result<(), DressingError> {
    if dependency.is_empty() || dependent.is_empty() {
        return Err(DressingError::InvalidInput {
            index,
            dependency: dependency.to_string(),
            dependent: dependent.to_string(),
        });
    }

    if normalize_key(dependency) == normalize_key(dependent) {
        return Err(DressingError::SelfDependency {
            item: dependent.to_string(),
        });
    }

    Ok(())
}

pub(crate) fn missing(id: NodeId) -> DressingError {
    DressingError::MissingNode { id }
}

fn compute_edge_hash(edges: &[(String, String)]) -> String {
    let mut hasher = blake3::Hasher::new();
    for (dependency, dependent) in edges {
        hasher.update(dependency.as_bytes());
        hasher.update(b"\x00");
        hasher.update(dependent.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
