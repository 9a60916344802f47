//! Shortest path algorithms on edge-weighted digraphs
//!
//! Provides single-source shortest path trees behind the [`ShortestPaths`]
//! trait:
//! - [`Dijkstra`]: non-negative weights, indexed priority queue
//! - [`AcyclicPaths`]: shortest or longest paths on a DAG by topological relaxation
//! - [`BellmanFord`](super::bellman_ford::BellmanFord): arbitrary weights
//!
//! Preconditions (non-negative weights for Dijkstra, acyclicity for
//! [`AcyclicPaths`]) are not checked; violating them yields wrong distances.
//!
//! # Example
//!
//! ```
//! use classic_graph::{Dijkstra, EdgeWeightedDigraph, ShortestPaths};
//!
//! let digraph = EdgeWeightedDigraph::from_edges(
//!     4,
//!     &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)],
//! )
//! .unwrap();
//!
//! let paths = Dijkstra::new(&digraph, 0).unwrap();
//! assert_eq!(paths.distance_to(3), 4.0); // 0→1→2→3 = 4.0, not 0→3 = 5.0
//! assert_eq!(paths.path_to(3).unwrap().len(), 3);
//! ```

use super::traversal::DepthFirstOrder;
use crate::collections::IndexedPriorityQueue;
use crate::error::{check_vertex, Result};
use crate::storage::{DirectedEdge, EdgeWeightedDigraph, Vertex};

/// Query interface shared by single-source path trees
pub trait ShortestPaths {
    /// Source vertex of the tree
    fn source(&self) -> Vertex;

    /// Distance from the source (`+∞` if unreached; `-∞` for unreached
    /// vertices of a longest-path tree)
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    fn distance_to(&self, vertex: Vertex) -> f64;

    /// True if `vertex` is reachable from the source
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    fn has_path_to(&self, vertex: Vertex) -> bool {
        self.distance_to(vertex).is_finite()
    }

    /// Edges of the tree path from the source to `vertex`, in travel order
    ///
    /// Returns `None` if `vertex` is unreachable; the source's own path is empty.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    fn path_to(&self, vertex: Vertex) -> Option<Vec<DirectedEdge>>;
}

/// Distance and parent-edge arrays of a path tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PathTree {
    pub(crate) source: Vertex,
    pub(crate) dist_to: Vec<f64>,
    pub(crate) edge_to: Vec<Option<DirectedEdge>>,
}

impl PathTree {
    /// Every distance `unreached`, the source at 0
    pub(crate) fn new(num_vertices: usize, source: Vertex, unreached: f64) -> Self {
        let mut dist_to = vec![unreached; num_vertices];
        dist_to[source] = 0.0;
        Self {
            source,
            dist_to,
            edge_to: vec![None; num_vertices],
        }
    }

    /// Follow parent edges back to the source
    ///
    /// Gives up after `V` edges, which only happens when the parent edges
    /// contain a cycle.
    pub(crate) fn path_to(&self, vertex: Vertex) -> Option<Vec<DirectedEdge>> {
        if !self.dist_to[vertex].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = vertex;
        while current != self.source {
            let edge = self.edge_to[current]?;
            if path.len() == self.edge_to.len() {
                return None;
            }
            path.push(edge);
            current = edge.from();
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's single-source shortest paths (non-negative weights)
///
/// # Complexity
///
/// O(E log V) using an indexed binary heap with decrease-key
#[derive(Debug, Clone, PartialEq)]
pub struct Dijkstra {
    tree: PathTree,
}

impl Dijkstra {
    /// Grow the shortest path tree from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn new(graph: &EdgeWeightedDigraph, source: Vertex) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        check_vertex(source, num_vertices)?;

        let mut tree = PathTree::new(num_vertices, source, f64::INFINITY);
        let mut queue = IndexedPriorityQueue::new(num_vertices);
        let mut settled = vec![false; num_vertices];
        queue.insert(source, 0.0)?;

        while !queue.is_empty() {
            let vertex = queue.delete_min()?;
            settled[vertex] = true;
            for &edge in graph.row(vertex) {
                let to = edge.to();
                let distance = tree.dist_to[vertex] + edge.weight();
                // Settled distances are final, even under negative weights
                if !settled[to] && distance < tree.dist_to[to] {
                    tree.dist_to[to] = distance;
                    tree.edge_to[to] = Some(edge);
                    if queue.contains(to)? {
                        queue.decrease_key(to, distance)?;
                    } else {
                        queue.insert(to, distance)?;
                    }
                }
            }
        }

        Ok(Self { tree })
    }
}

impl ShortestPaths for Dijkstra {
    fn source(&self) -> Vertex {
        self.tree.source
    }

    fn distance_to(&self, vertex: Vertex) -> f64 {
        self.tree.dist_to[vertex]
    }

    fn path_to(&self, vertex: Vertex) -> Option<Vec<DirectedEdge>> {
        self.tree.path_to(vertex)
    }
}

/// Dijkstra from every vertex
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraAllPairs {
    trees: Vec<Dijkstra>,
}

impl DijkstraAllPairs {
    /// One shortest path tree per source
    ///
    /// # Errors
    ///
    /// Propagates priority queue errors, which a well-formed digraph never
    /// triggers.
    pub fn new(graph: &EdgeWeightedDigraph) -> Result<Self> {
        let trees = (0..graph.num_vertices())
            .map(|source| Dijkstra::new(graph, source))
            .collect::<Result<_>>()?;
        Ok(Self { trees })
    }

    /// Shortest distance `source → target` (`+∞` if unreachable)
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[must_use]
    pub fn distance(&self, source: Vertex, target: Vertex) -> f64 {
        self.trees[source].distance_to(target)
    }

    /// Shortest path `source → target`
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[must_use]
    pub fn path(&self, source: Vertex, target: Vertex) -> Option<Vec<DirectedEdge>> {
        self.trees[source].path_to(target)
    }

    /// The tree rooted at `source`
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of bounds.
    #[must_use]
    pub fn tree(&self, source: Vertex) -> &Dijkstra {
        &self.trees[source]
    }
}

/// Shortest or longest paths on a DAG, relaxing vertices in topological order
///
/// Arbitrary (also negative) weights are fine. The input is assumed acyclic:
/// on a cyclic digraph the relaxation order is a plain depth-first reverse
/// postorder and the distances are meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct AcyclicPaths {
    tree: PathTree,
    longest: bool,
}

impl AcyclicPaths {
    /// Shortest paths from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn shortest(graph: &EdgeWeightedDigraph, source: Vertex) -> Result<Self> {
        Self::relax_in_order(graph, source, false)
    }

    /// Longest paths from `source` (unreached vertices report `-∞`)
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn longest(graph: &EdgeWeightedDigraph, source: Vertex) -> Result<Self> {
        Self::relax_in_order(graph, source, true)
    }

    fn relax_in_order(graph: &EdgeWeightedDigraph, source: Vertex, longest: bool) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        check_vertex(source, num_vertices)?;

        let unreached = if longest {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut tree = PathTree::new(num_vertices, source, unreached);

        for vertex in DepthFirstOrder::new(graph).reverse_post() {
            for &edge in graph.row(vertex) {
                let to = edge.to();
                let distance = tree.dist_to[vertex] + edge.weight();
                let better = if longest {
                    distance > tree.dist_to[to]
                } else {
                    distance < tree.dist_to[to]
                };
                if better {
                    tree.dist_to[to] = distance;
                    tree.edge_to[to] = Some(edge);
                }
            }
        }

        Ok(Self { tree, longest })
    }

    /// True if this tree holds longest paths
    #[must_use]
    pub const fn is_longest(&self) -> bool {
        self.longest
    }
}

impl ShortestPaths for AcyclicPaths {
    fn source(&self) -> Vertex {
        self.tree.source
    }

    fn distance_to(&self, vertex: Vertex) -> f64 {
        self.tree.dist_to[vertex]
    }

    fn path_to(&self, vertex: Vertex) -> Option<Vec<DirectedEdge>> {
        self.tree.path_to(vertex)
    }
}
