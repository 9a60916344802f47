//! Weighted edge values
//!
//! Edges are immutable `Copy` values stored directly in adjacency rows, so an
//! undirected edge simply appears in both endpoint rows.

use crate::error::{GraphError, Result};
use crate::storage::Vertex;
use std::cmp::Ordering;
use std::fmt;

/// Undirected weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    u: Vertex,
    v: Vertex,
    weight: f64,
}

impl Edge {
    /// Create an edge `u - v` with the given weight
    #[must_use]
    pub const fn new(u: Vertex, v: Vertex, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Edge weight
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// One endpoint (the first one given at construction)
    #[must_use]
    pub const fn either(&self) -> Vertex {
        self.u
    }

    /// The endpoint other than `vertex`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InconsistentEdge`] if `vertex` is not an endpoint.
    pub fn other(&self, vertex: Vertex) -> Result<Vertex> {
        if vertex == self.u {
            Ok(self.v)
        } else if vertex == self.v {
            Ok(self.u)
        } else {
            Err(GraphError::InconsistentEdge {
                vertex,
                edge: self.to_string(),
            })
        }
    }

    /// Infallible variant for callers that read the edge out of `vertex`'s own row
    pub(crate) const fn opposite(&self, vertex: Vertex) -> Vertex {
        if vertex == self.u {
            self.v
        } else {
            self.u
        }
    }

    /// Natural ordering: by weight (total order, NaN sorts last)
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.2}", self.u, self.v, self.weight)
    }
}

/// Directed weighted edge `from → to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
    from: Vertex,
    to: Vertex,
    weight: f64,
}

impl DirectedEdge {
    /// Create an edge `from → to` with the given weight
    #[must_use]
    pub const fn new(from: Vertex, to: Vertex, weight: f64) -> Self {
        Self { from, to, weight }
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

    /// Edge weight
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

/// Min-heap adapter for [`std::collections::BinaryHeap`] (max-heap by default)
#[derive(Debug, Clone, Copy)]
pub(crate) struct LightestFirst(pub Edge);

impl PartialEq for LightestFirst {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LightestFirst {}

impl Ord for LightestFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other.0.cmp_weight(&self.0)
    }
}

impl PartialOrd for LightestFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
