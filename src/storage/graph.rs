//! Unweighted graphs: undirected [`Graph`] and directed [`Digraph`]
//!
//! # Example
//!
//! ```
//! use classic_graph::{Digraph, Graph};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! assert_eq!(graph.adjacent_to(1).unwrap(), &[0, 2]);
//!
//! let digraph = Digraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
//! assert_eq!(digraph.reverse().adjacent_to(1).unwrap(), &[2]);
//! ```

use super::{Adjacency, Csr, Vertex};
use crate::error::{check_vertex, Result};
use std::fmt;

/// Undirected graph: each edge `u - v` is stored in both rows
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adjacency: Csr<Vertex>,
    num_edges: usize,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: Csr::new(num_vertices),
            num_edges: 0,
        }
    }

    /// Build a graph from an edge list in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint is out of bounds.
    pub fn from_edges(num_vertices: usize, edges: &[(Vertex, Vertex)]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(edges.len() * 2);
        for &(u, v) in edges {
            check_vertex(u, num_vertices)?;
            check_vertex(v, num_vertices)?;
            pairs.push((u, v));
            pairs.push((v, u));
        }

        Ok(Self {
            adjacency: Csr::from_pairs(num_vertices, pairs),
            num_edges: edges.len(),
        })
    }

    /// Add the undirected edge `u - v`
    ///
    /// Parallel edges and self-loops are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of bounds.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        check_vertex(u, self.num_vertices())?;
        check_vertex(v, self.num_vertices())?;

        self.adjacency.push(u, v);
        self.adjacency.push(v, u);
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

    /// Neighbors of `vertex`
    ///
    /// # Errors
    ///
    /// Returns error if vertex is out of bounds
    pub fn adjacent_to(&self, vertex: Vertex) -> Result<&[Vertex]> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.adjacency.row(vertex))
    }

    /// Number of neighbors of `vertex` (a self-loop counts twice)
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency.row_len(vertex)
    }

    /// All edges as `(u, v)` with `u < v`, each listed once; self-loops excluded
    #[must_use]
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        self.adjacency
            .iter_rows()
            .flat_map(|(u, row)| row.iter().filter(move |&&v| v > u).map(move |&v| (u, v)))
            .collect()
    }
}

impl Adjacency for Graph {
    type Edge = ();

    fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency.row_len(vertex)
    }

    fn arc(&self, vertex: Vertex, position: usize) -> (Vertex, ()) {
        (self.adjacency.row(vertex)[position], ())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.num_vertices(), self.num_edges)?;
        write_rows(f, &self.adjacency)
    }
}

/// Directed graph: edge `u → v` is stored in `u`'s row only
#[derive(Debug, Clone, PartialEq)]
pub struct Digraph {
    adjacency: Csr<Vertex>,
}

impl Digraph {
    /// Create a digraph with `num_vertices` vertices and no edges
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: Csr::new(num_vertices),
        }
    }

    /// Build a digraph from an edge list in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint is out of bounds.
    pub fn from_edges(num_vertices: usize, edges: &[(Vertex, Vertex)]) -> Result<Self> {
        for &(u, v) in edges {
            check_vertex(u, num_vertices)?;
            check_vertex(v, num_vertices)?;
        }

        Ok(Self {
            adjacency: Csr::from_pairs(num_vertices, edges.to_vec()),
        })
    }

    /// Add the directed edge `from → to`
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of bounds.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<()> {
        check_vertex(from, self.num_vertices())?;
        check_vertex(to, self.num_vertices())?;

        self.adjacency.push(from, to);
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

    /// Heads of the edges leaving `vertex`
    ///
    /// # Errors
    ///
    /// Returns error if vertex is out of bounds
    pub fn adjacent_to(&self, vertex: Vertex) -> Result<&[Vertex]> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.adjacency.row(vertex))
    }

    /// Number of edges leaving `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn out_degree(&self, vertex: Vertex) -> usize {
        self.adjacency.row_len(vertex)
    }

    /// All edges as `(from, to)` pairs
    #[must_use]
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        self.adjacency
            .iter_rows()
            .flat_map(|(u, row)| row.iter().map(move |&v| (u, v)))
            .collect()
    }

    /// Same vertices with every edge reversed
    #[must_use]
    pub fn reverse(&self) -> Self {
        let pairs = self
            .adjacency
            .iter_rows()
            .flat_map(|(u, row)| row.iter().map(move |&v| (v, u)))
            .collect();

        Self {
            adjacency: Csr::from_pairs(self.num_vertices(), pairs),
        }
    }
}

impl Adjacency for Digraph {
    type Edge = ();

    fn num_vertices(&self) -> usize {
        self.adjacency.num_rows()
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency.row_len(vertex)
    }

    fn arc(&self, vertex: Vertex, position: usize) -> (Vertex, ()) {
        (self.adjacency.row(vertex)[position], ())
    }
}

impl fmt::Display for Digraph {
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

/// One `v: payload payload ...` line per row
pub(crate) fn write_rows<T: fmt::Display>(f: &mut fmt::Formatter<'_>, rows: &Csr<T>) -> fmt::Result {
    for (vertex, row) in rows.iter_rows() {
        write!(f, "{vertex}:")?;
        for payload in row {
            write!(f, " {payload}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}
