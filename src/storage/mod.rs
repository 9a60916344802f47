//! Graph storage layer
//!
//! Fixed-size, append-only adjacency structures over integer vertices
//! `0..num_vertices`, all backed by the [`Csr`] row store.

pub mod csr;
pub mod edge;
pub mod flow;
pub mod graph;
pub mod symbol;
pub mod text;
pub mod weighted;

pub use csr::Csr;
pub use edge::{DirectedEdge, Edge};
pub use flow::{FlowEdge, FlowNetwork};
pub use graph::{Digraph, Graph};
pub use symbol::{SymbolDigraph, SymbolGraph, DEFAULT_SYMBOL_DELIMITER};
pub use weighted::{EdgeWeightedDigraph, EdgeWeightedGraph};

/// Vertex identifier in `0..num_vertices`
pub type Vertex = usize;

/// Positional access to adjacency rows
///
/// Traversals walk rows with an explicit `(vertex, position)` stack, so the
/// trait exposes the row length and the arc at a given position rather than
/// an iterator.
pub trait Adjacency {
    /// Payload recorded for a traversed arc (`()` for unweighted graphs)
    type Edge: Copy;

    /// Number of vertices
    fn num_vertices(&self) -> usize;

    /// Number of arcs leaving `vertex`
    fn degree(&self, vertex: Vertex) -> usize;

    /// Arc at `position` in `vertex`'s row: `(neighbor, edge)`
    fn arc(&self, vertex: Vertex, position: usize) -> (Vertex, Self::Edge);
}
