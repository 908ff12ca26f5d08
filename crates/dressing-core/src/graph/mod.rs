//! Clothing dependency graph.
//!
//! # Overview
//!
//! This module turns a flat list of `(dependency, dependent)` pairs into an
//! arena of [`ClothingNode`]s. Each node tracks the items it still waits on
//! and the items waiting on it. The graph feeds the layered sorter in
//! [`crate::order`].
//!
//! ## Pipeline
//!
//! ```text
//! [(dependency, dependent), ...]
//!        ↓  build::ClothingGraph::from_edges()
//! ClothingGraph (arena + case-insensitive name map)
//!        ↓  order::traverse()
//! DressingOrder (layers)  or  cycles::find_cycles() for the error report
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use dressing_core::graph::ClothingGraph;
//!
//! let graph = ClothingGraph::from_edges(&[("socks", "shoes")])?;
//! assert_eq!(graph.dependencies_of("Shoes"), Some(vec!["socks"]));
//! # Ok::<(), dressing_core::DressingError>(())
//! ```

pub mod build;
pub mod cycles;
pub mod node;

pub use build::ClothingGraph;
pub use cycles::{find_cycles, unresolved_items};
pub use node::{ClothingNode, NodeId, compare_ignore_case, normalize_key, sort_ignore_case};
