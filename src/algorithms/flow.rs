//! Maximum flow and minimum cut (Ford-Fulkerson, shortest augmenting paths)
//!
//! Each round runs a breadth-first search over edges with spare residual
//! capacity, so augmenting paths are the shortest available (Edmonds-Karp).
//! When the sink can no longer be reached, the vertices the last search
//! reached form the source side of a minimum cut.
//!
//! # Example
//!
//! ```
//! use classic_graph::{FlowNetwork, FordFulkerson};
//!
//! let mut network = FlowNetwork::from_edges(
//!     4,
//!     &[(0, 1, 2.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 2.0), (1, 2, 1.0)],
//! )
//! .unwrap();
//!
//! let max_flow = FordFulkerson::new(&mut network, 0, 3).unwrap();
//! assert_eq!(max_flow.value(), 3.0);
//! assert!(max_flow.in_cut(0));
//! assert!(!max_flow.in_cut(3));
//! ```

use crate::error::{check_vertex, GraphError, Result};
use crate::storage::{FlowNetwork, Vertex};
use std::collections::VecDeque;
use tracing::debug;

/// Residual capacity at or below this counts as saturated
///
/// Repeated `capacity - flow` subtractions leave rounding residue that would
/// otherwise produce endless vanishing augmentations.
pub const RESIDUAL_EPSILON: f64 = 1e-11;

/// Maximum flow from `source` to `sink`, computed in place on the network
#[derive(Debug, Clone, PartialEq)]
pub struct FordFulkerson {
    source: Vertex,
    sink: Vertex,
    value: f64,
    in_cut: Vec<bool>,
    augmentations: usize,
}

impl FordFulkerson {
    /// Augment along shortest paths until the sink is cut off
    ///
    /// Flow already present on the network is kept and extended.
    ///
    /// # Complexity
    ///
    /// O(V E²) augmenting path searches in the worst case
    ///
    /// # Errors
    ///
    /// Returns an error if either terminal is out of bounds, or
    /// [`GraphError::SameSourceAndSink`] if they coincide.
    pub fn new(network: &mut FlowNetwork, source: Vertex, sink: Vertex) -> Result<Self> {
        let num_vertices = network.num_vertices();
        check_vertex(source, num_vertices)?;
        check_vertex(sink, num_vertices)?;
        if source == sink {
            return Err(GraphError::SameSourceAndSink(source));
        }

        let mut value = -network.net_outflow(sink);
        let mut augmentations = 0;

        let in_cut = loop {
            let (marked, edge_to) = augmenting_path(network, source, sink)?;
            if !marked[sink] {
                break marked;
            }

            // Walk the path back from the sink: (edge id, vertex it leads to)
            let mut path = Vec::new();
            let mut vertex = sink;
            while let Some(id) = edge_to[vertex] {
                path.push((id, vertex));
                vertex = network.edge_at(id).other(vertex)?;
            }

            let mut bottleneck = f64::INFINITY;
            for &(id, toward) in &path {
                bottleneck = bottleneck.min(network.edge_at(id).residual_capacity_to(toward)?);
            }
            for &(id, toward) in &path {
                network.edge_at_mut(id).add_residual_flow_to(toward, bottleneck)?;
            }

            value += bottleneck;
            augmentations += 1;
        };

        debug!(source, sink, value, augmentations, "Maximum flow found");

        Ok(Self {
            source,
            sink,
            value,
            in_cut,
            augmentations,
        })
    }

    /// Value of the maximum flow (net inflow at the sink)
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// True if `vertex` is on the source side of the minimum cut
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn in_cut(&self, vertex: Vertex) -> bool {
        self.in_cut[vertex]
    }

    /// Source vertex
    #[must_use]
    pub const fn source(&self) -> Vertex {
        self.source
    }

    /// Sink vertex
    #[must_use]
    pub const fn sink(&self) -> Vertex {
        self.sink
    }

    /// Number of augmenting paths pushed
    #[must_use]
    pub const fn augmentations(&self) -> usize {
        self.augmentations
    }
}

/// Breadth-first search over unsaturated residual edges
///
/// Returns the marked set and, per vertex, the id of the edge it was
/// reached through. Stops early once the sink is marked.
fn augmenting_path(
    network: &FlowNetwork,
    source: Vertex,
    sink: Vertex,
) -> Result<(Vec<bool>, Vec<Option<usize>>)> {
    let num_vertices = network.num_vertices();
    let mut marked = vec![false; num_vertices];
    let mut edge_to = vec![None; num_vertices];
    let mut queue = VecDeque::from([source]);
    marked[source] = true;

    while let Some(vertex) = queue.pop_front() {
        for &id in network.row(vertex) {
            let edge = network.edge_at(id);
            let other = edge.other(vertex)?;
            if !marked[other] && edge.residual_capacity_to(other)? > RESIDUAL_EPSILON {
                edge_to[other] = Some(id);
                marked[other] = true;
                if other == sink {
                    return Ok((marked, edge_to));
                }
                queue.push_back(other);
            }
        }
    }

    Ok((marked, edge_to))
}
