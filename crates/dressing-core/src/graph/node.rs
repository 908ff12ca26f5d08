//! Arena nodes and case-insensitive naming rules.
//!
//! Nodes never own each other. Each [`ClothingNode`] stores the [`NodeId`]s
//! of its neighbours, and the owning [`ClothingGraph`](super::ClothingGraph)
//! resolves ids back to nodes. This keeps the mutual
//! `dependencies` ↔ `dependents` references free of ownership cycles.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Index of a node inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// One item of clothing in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingNode {
    /// Display name, cased as it first appeared in the input.
    pub name: String,
    /// Items that must be worn before this one. Drained during traversal.
    pub dependencies: BTreeSet<NodeId>,
    /// Items that list this one as a dependency.
    pub dependents: BTreeSet<NodeId>,
}

impl ClothingNode {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dependencies: BTreeSet::new(),
            dependents: BTreeSet::new(),
        }
    }

    /// `true` once every prerequisite has been resolved.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// Lookup key for an item name. Two names with the same key are one node.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
}

/// Ordinal comparison with both sides folded to upper case.
///
/// Falls back to a plain ordinal comparison so the order stays total when two
/// distinct strings fold to the same upper-case form.
#[must_use]
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
        .then_with(|| a.cmp(b))
}

/// Sort names in place with [`compare_ignore_case`].
pub fn sort_ignore_case<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| compare_ignore_case(a.as_ref(), b.as_ref()));
}
