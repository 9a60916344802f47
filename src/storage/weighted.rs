//! Edge-weighted graphs: undirected [`EdgeWeightedGraph`] and directed
//! [`EdgeWeightedDigraph`]

use super::graph::write_rows;
use super::{Adjacency, Csr, DirectedEdge, Edge, Vertex};
use crate::error::{check_vertex, Result};
use std::fmt;

/// Undirected edge-weighted graph
///
/// Each [`Edge`] value is stored in the rows of both endpoints (once for a
/// self-loop's single vertex, twice in that row). Parallel edges are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedGraph {
    adjacency: Csr<Edge>,
    num_edges: usize,
}

impl EdgeWeightedGraph {
    /// Create a graph with `num_vertices` vertices and no edges
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: Csr::new(num_vertices),
            num_edges: 0,
        }
    }

    /// Build from `(u, v, weight)` triples in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint is out of bounds.
    pub fn from_edges(num_vertices: usize, edges: &[(Vertex, Vertex, f64)]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(edges.len() * 2);
        for &(u, v, weight) in edges {
            check_vertex(u, num_vertices)?;
            check_vertex(v, num_vertices)?;
            let edge = Edge::new(u, v, weight);
            pairs.push((u, edge));
            pairs.push((v, edge));
        }

        Ok(Self {
            adjacency: Csr::from_pairs(num_vertices, pairs),
            num_edges: edges.len(),
        })
    }

    /// Add `edge` to the rows of both endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of bounds.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let u = edge.either();
        let v = edge.opposite(u);
        check_vertex(u, self.num_vertices())?;
        check_vertex(v, self.num_vertices())?;

        self.adjacency.push(u, edge);
        self.adjacency.push(v, edge);
        self.num_edges += 1;
        Ok(())
    }

    /// Number of vertices
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    /// Number of edges added
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Edges incident to `vertex`
    ///
    /// # Errors
    ///
    /// Returns error if vertex is out of bounds
    pub fn adjacent_to(&self, vertex: Vertex) -> Result<&[Edge]> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.adjacency.row(vertex))
    }

    /// All edges, each listed once; parallel edges kept, self-loops excluded
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter_rows()
            .flat_map(|(vertex, row)| {
                row.iter()
                    .filter(move |edge| edge.opposite(vertex) > vertex)
                    .copied()
            })
            .collect()
    }

    /// Row access for algorithms that already validated `vertex`
    pub(crate) fn row(&self, vertex: Vertex) -> &[Edge] {
        self.adjacency.row(vertex)
    }
}

impl Adjacency for EdgeWeightedGraph {
    type Edge = Edge;

    fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency.row_len(vertex)
    }

    fn arc(&self, vertex: Vertex, position: usize) -> (Vertex, Edge) {
        let edge = self.adjacency.row(vertex)[position];
        (edge.opposite(vertex), edge)
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.num_vertices(), self.num_edges)?;
        write_rows(f, &self.adjacency)
    }
}

/// Directed edge-weighted graph
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedDigraph {
    adjacency: Csr<DirectedEdge>,
}

impl EdgeWeightedDigraph {
    /// Create a digraph with `num_vertices` vertices and no edges
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: Csr::new(num_vertices),
        }
    }

    /// Build from `(from, to, weight)` triples in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint is out of bounds.
    pub fn from_edges(num_vertices: usize, edges: &[(Vertex, Vertex, f64)]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(edges.len());
        for &(from, to, weight) in edges {
            check_vertex(from, num_vertices)?;
            check_vertex(to, num_vertices)?;
            pairs.push((from, DirectedEdge::new(from, to, weight)));
        }

        Ok(Self {
            adjacency: Csr::from_pairs(num_vertices, pairs),
        })
    }

    /// Add `edge` to its tail's row
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of bounds.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        check_vertex(edge.from(), self.num_vertices())?;
        check_vertex(edge.to(), self.num_vertices())?;

        self.adjacency.push(edge.from(), edge);
        Ok(())
    }

    /// Number of vertices
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    /// Number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.adjacency.len()
    }

    /// Edges leaving `vertex`
    ///
    /// # Errors
    ///
    /// Returns error if vertex is out of bounds
    pub fn adjacent_to(&self, vertex: Vertex) -> Result<&[DirectedEdge]> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.adjacency.row(vertex))
    }

    /// All edges, grouped by tail vertex
    #[must_use]
    pub fn edges(&self) -> Vec<DirectedEdge> {
        self.adjacency.iter().copied().collect()
    }

    /// Row access for algorithms that already validated `vertex`
    pub(crate) fn row(&self, vertex: Vertex) -> &[DirectedEdge] {
        self.adjacency.row(vertex)
    }
}

impl Adjacency for EdgeWeightedDigraph {
    type Edge = DirectedEdge;

    fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency.row_len(vertex)
    }

    fn arc(&self, vertex: Vertex, position: usize) -> (Vertex, DirectedEdge) {
        let edge = self.adjacency.row(vertex)[position];
        (edge.to(), edge)
    }
}

impl fmt::Display for EdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.num_vertices(),
            self.num_edges()
        )?;
        write_rows(f, &self.adjacency)
    }
}
