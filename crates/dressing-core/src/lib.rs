#![forbid(unsafe_code)]
//! dressing-core library.
//!
//! Computes a dressing order from pairwise clothing dependencies: each output
//! line lists the items that can be put on once every earlier line is worn,
//! sorted case-insensitively. Cyclic input is rejected.
//!
//! ```rust
//! let order = dressing_core::create_dressing_order(&[
//!     ("socks", "shoes"),
//!     ("pants", "shoes"),
//!     ("shoes", "coat"),
//! ])?;
//! assert_eq!(order, "pants, socks\nshoes\ncoat");
//! # Ok::<(), dressing_core::DressingError>(())
//! ```
//!
//! # Conventions
//!
//! - **Errors**: Typed `thiserror` enums in the library, `anyhow::Result` for
//!   configuration loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod demo;
pub mod error;
pub mod graph;
pub mod input;
pub mod order;

pub use error::{DressingError, ErrorCode};
pub use graph::{ClothingGraph, ClothingNode, NodeId};
pub use order::{DressingOrder, initial_frontier, traverse};

use tracing::instrument;

/// Build the graph for `edges` and order it into layers.
///
/// # Errors
///
/// Returns [`DressingError`] for empty names, self-dependencies, or cycles.
#[instrument(skip(edges), fields(entries = edges.len()))]
pub fn dressing_order<S: AsRef<str>>(edges: &[(S, S)]) -> Result<DressingOrder, DressingError> {
    let mut graph = ClothingGraph::from_edges(edges)?;
    let frontier = initial_frontier(&graph);
    traverse(&frontier, &mut graph)
}

/// Render the dressing order for `edges`: one line per step, items joined
/// with `", "`.
///
/// # Errors
///
/// Returns [`DressingError`] for empty names, self-dependencies, or cycles.
/// No partial output is produced.
pub fn create_dressing_order<S: AsRef<str>>(edges: &[(S, S)]) -> Result<String, DressingError> {
    dressing_order(edges).map(|order| order.render())
}
