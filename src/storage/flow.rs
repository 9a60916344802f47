//! Residual flow network
//!
//! [`FlowEdge`] values live once in an edge arena; both endpoint rows hold the
//! edge's arena index, so a flow update made while walking from either side
//! is seen from the other.

use super::graph::write_rows;
use super::{Csr, Vertex};
use crate::error::{check_vertex, GraphError, Result};
use std::fmt;

/// Capacitated edge `from → to` carrying a mutable flow
///
/// Invariant: `0 ≤ flow ≤ capacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEdge {
    from: Vertex,
    to: Vertex,
    capacity: f64,
    flow: f64,
}

impl FlowEdge {
    /// Create an edge with zero flow
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCapacity`] for a negative or NaN capacity.
    pub fn new(from: Vertex, to: Vertex, capacity: f64) -> Result<Self> {
        if capacity.is_nan() || capacity < 0.0 {
            return Err(GraphError::InvalidCapacity(capacity));
        }
        Ok(Self {
            from,
            to,
            capacity,
            flow: 0.0,
        })
    }

    /// Tail vertex
    #[must_use]
    pub const fn from(&self) -> Vertex {
        self.from
    }

    /// Head vertex
    #[must_use]
    pub const fn to(&self) -> Vertex {
        self.to
    }

    /// Edge capacity
    #[must_use]
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Current flow
    #[must_use]
    pub const fn flow(&self) -> f64 {
        self.flow
    }

    /// The endpoint other than `vertex`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InconsistentEdge`] if `vertex` is not an endpoint.
    pub fn other(&self, vertex: Vertex) -> Result<Vertex> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(self.inconsistent(vertex))
        }
    }

    /// Residual capacity toward `vertex`
    ///
    /// Toward `from` this is the current flow (it can be cancelled); toward
    /// `to` it is the unused capacity.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InconsistentEdge`] if `vertex` is not an endpoint.
    pub fn residual_capacity_to(&self, vertex: Vertex) -> Result<f64> {
        if vertex == self.from {
            Ok(self.flow)
        } else if vertex == self.to {
            Ok(self.capacity - self.flow)
        } else {
            Err(self.inconsistent(vertex))
        }
    }

    /// Push `delta` units of residual flow toward `vertex`
    ///
    /// Toward `to` the flow grows; toward `from` it shrinks. The result is
    /// clamped into `[0, capacity]` to absorb floating-point rounding.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InconsistentEdge`] if `vertex` is not an endpoint,
    /// or [`GraphError::FlowOverflow`] if `delta` is negative or exceeds the
    /// residual capacity toward `vertex`. The edge is unchanged on error.
    pub fn add_residual_flow_to(&mut self, vertex: Vertex, delta: f64) -> Result<()> {
        let residual = self.residual_capacity_to(vertex)?;
        if delta.is_nan() || delta < 0.0 || delta > residual {
            return Err(GraphError::FlowOverflow {
                vertex,
                delta,
                residual,
            });
        }

        let flow = if vertex == self.from {
            self.flow - delta
        } else {
            self.flow + delta
        };
        self.flow = flow.clamp(0.0, self.capacity);
        Ok(())
    }

    fn inconsistent(&self, vertex: Vertex) -> GraphError {
        GraphError::InconsistentEdge {
            vertex,
            edge: self.to_string(),
        }
    }
}

impl fmt::Display for FlowEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} (capacity={:.2}, flow={:.2})",
            self.from, self.to, self.capacity, self.flow
        )
    }
}

/// Flow network over an edge arena
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNetwork {
    /// Edge arena, in insertion order
    edges: Vec<FlowEdge>,

    /// Per-vertex rows of arena indices (edge appears under both endpoints)
    adjacency: Csr<usize>,
}

impl FlowNetwork {
    /// Create a network with `num_vertices` vertices and no edges
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: Csr::new(num_vertices),
        }
    }

    /// Build from `(from, to, capacity)` triples in one pass
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-bounds endpoint or invalid capacity.
    pub fn from_edges(num_vertices: usize, edges: &[(Vertex, Vertex, f64)]) -> Result<Self> {
        let mut arena = Vec::with_capacity(edges.len());
        let mut pairs = Vec::with_capacity(edges.len() * 2);
        for (id, &(from, to, capacity)) in edges.iter().enumerate() {
            check_vertex(from, num_vertices)?;
            check_vertex(to, num_vertices)?;
            arena.push(FlowEdge::new(from, to, capacity)?);
            pairs.push((from, id));
            pairs.push((to, id));
        }

        Ok(Self {
            edges: arena,
            adjacency: Csr::from_pairs(num_vertices, pairs),
        })
    }

    /// Add `edge`, returning its arena index
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of bounds.
    pub fn add_edge(&mut self, edge: FlowEdge) -> Result<usize> {
        check_vertex(edge.from(), self.num_vertices())?;
        check_vertex(edge.to(), self.num_vertices())?;

        let id = self.edges.len();
        self.edges.push(edge);
        self.adjacency.push(edge.from(), id);
        self.adjacency.push(edge.to(), id);
        Ok(id)
    }

    /// Number of vertices
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    /// Number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Edge by arena index
    #[must_use]
    pub fn edge(&self, id: usize) -> Option<&FlowEdge> {
        self.edges.get(id)
    }

    /// Arena indices of the edges incident to `vertex` (in and out)
    ///
    /// # Errors
    ///
    /// Returns error if vertex is out of bounds
    pub fn adjacent_to(&self, vertex: Vertex) -> Result<&[usize]> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.adjacency.row(vertex))
    }

    /// Edges incident to `vertex` (in and out)
    ///
    /// # Errors
    ///
    /// Returns error if vertex is out of bounds
    pub fn edges_adjacent_to(&self, vertex: Vertex) -> Result<impl Iterator<Item = &FlowEdge>> {
        Ok(self.adjacent_to(vertex)?.iter().map(|&id| &self.edges[id]))
    }

    /// Every edge once, in insertion order
    #[must_use]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Total flow leaving minus entering `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn net_outflow(&self, vertex: Vertex) -> f64 {
        self.adjacency
            .row(vertex)
            .iter()
            .map(|&id| &self.edges[id])
            .filter(|edge| edge.from() != edge.to())
            .map(|edge| {
                if edge.from() == vertex {
                    edge.flow()
                } else {
                    -edge.flow()
                }
            })
            .sum()
    }

    /// Row access for algorithms that already validated `vertex`
    pub(crate) fn row(&self, vertex: Vertex) -> &[usize] {
        self.adjacency.row(vertex)
    }

    pub(crate) fn edge_at(&self, id: usize) -> &FlowEdge {
        &self.edges[id]
    }

    pub(crate) fn edge_at_mut(&mut self, id: usize) -> &mut FlowEdge {
        &mut self.edges[id]
    }
}

impl fmt::Display for FlowNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.num_vertices(),
            self.num_edges()
        )?;

        // Outgoing edges only
        let outgoing = Csr::from_pairs(
            self.num_vertices(),
            self.edges.iter().map(|edge| (edge.from(), *edge)).collect(),
        );
        write_rows(f, &outgoing)
    }
}
