//! Minimum spanning trees of edge-weighted undirected graphs
//!
//! Three classic constructions behind the [`SpanningTree`] trait:
//! - [`LazyPrim`]: heap of candidate crossing edges, stale entries skipped
//! - [`Prim`]: indexed priority queue with one entry per vertex
//! - [`Kruskal`]: edges in ascending weight, union-find to reject cycles
//!
//! On a disconnected graph every construction returns a minimum spanning
//! forest (one tree per component). All of them agree on the total weight.
//!
//! # Example
//!
//! ```
//! use classic_graph::{EdgeWeightedGraph, Kruskal, LazyPrim, Prim, SpanningTree};
//!
//! let graph = EdgeWeightedGraph::from_edges(
//!     4,
//!     &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0), (0, 2, 4.0)],
//! )
//! .unwrap();
//!
//! let kruskal = Kruskal::new(&graph).unwrap();
//! assert_eq!(kruskal.edges().len(), 3);
//! assert_eq!(kruskal.weight(), 4.0);
//! assert_eq!(Prim::new(&graph).unwrap().weight(), 4.0);
//! assert_eq!(LazyPrim::new(&graph).weight(), 4.0);
//! ```

use crate::collections::{IndexedPriorityQueue, UnionFind};
use crate::error::Result;
use crate::storage::edge::LightestFirst;
use crate::storage::{Edge, EdgeWeightedGraph, Vertex};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Query interface shared by spanning tree constructions
pub trait SpanningTree {
    /// Tree edges, in the order the construction accepted them
    fn edges(&self) -> &[Edge];

    /// Sum of the tree's edge weights
    fn weight(&self) -> f64;
}

fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}

/// Lazy Prim: grows the tree from a heap of crossing edges
#[derive(Debug, Clone, PartialEq)]
pub struct LazyPrim {
    edges: Vec<Edge>,
    weight: f64,
}

impl LazyPrim {
    /// Grow a tree from vertex 0, then from every vertex still unmarked
    ///
    /// # Complexity
    ///
    /// O(E log E) time, O(E) heap entries
    #[must_use]
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        let mut crossing = BinaryHeap::new();
        let mut edges = Vec::with_capacity(num_vertices.saturating_sub(1));

        let visit = |vertex: Vertex, marked: &mut [bool], crossing: &mut BinaryHeap<LightestFirst>| {
            marked[vertex] = true;
            for &edge in graph.row(vertex) {
                if !marked[edge.opposite(vertex)] {
                    crossing.push(LightestFirst(edge));
                }
            }
        };

        for root in 0..num_vertices {
            if marked[root] {
                continue;
            }
            visit(root, &mut marked, &mut crossing);

            while let Some(LightestFirst(edge)) = crossing.pop() {
                let u = edge.either();
                let v = edge.opposite(u);
                // Stale: both endpoints joined the tree after it was queued
                if marked[u] && marked[v] {
                    continue;
                }
                edges.push(edge);
                if !marked[u] {
                    visit(u, &mut marked, &mut crossing);
                }
                if !marked[v] {
                    visit(v, &mut marked, &mut crossing);
                }
            }
        }

        let weight = total_weight(&edges);
        debug!(edges = edges.len(), weight, "Lazy Prim spanning tree built");
        Self { edges, weight }
    }
}

impl SpanningTree for LazyPrim {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Queue key ordered by [`f64::total_cmp`], the order [`Kruskal`] and
/// [`LazyPrim`] pop edges in
#[derive(Debug, Clone, Copy)]
struct TotalWeight(f64);

impl PartialEq for TotalWeight {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl PartialOrd for TotalWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.total_cmp(&other.0))
    }
}

/// Eager Prim: keeps only the lightest known edge into each non-tree vertex
#[derive(Debug, Clone, PartialEq)]
pub struct Prim {
    edges: Vec<Edge>,
    weight: f64,
}

impl Prim {
    /// Grow a tree from vertex 0, then from every vertex still unmarked
    ///
    /// # Complexity
    ///
    /// O(E log V) time, at most V priority queue entries
    ///
    /// # Errors
    ///
    /// Propagates priority queue errors, which a well-formed graph never
    /// triggers.
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        // None until some tree edge reaches the vertex
        let mut dist_to: Vec<Option<f64>> = vec![None; num_vertices];
        let mut edge_to: Vec<Option<Edge>> = vec![None; num_vertices];
        let mut queue = IndexedPriorityQueue::new(num_vertices);

        for root in 0..num_vertices {
            if marked[root] {
                continue;
            }
            queue.insert(root, TotalWeight(0.0))?;

            while !queue.is_empty() {
                let vertex = queue.delete_min()?;
                marked[vertex] = true;

                for &edge in graph.row(vertex) {
                    let other = edge.opposite(vertex);
                    let lighter = dist_to[other]
                        .map_or(true, |dist| edge.weight().total_cmp(&dist).is_lt());
                    if marked[other] || !lighter {
                        continue;
                    }
                    dist_to[other] = Some(edge.weight());
                    edge_to[other] = Some(edge);
                    let key = TotalWeight(edge.weight());
                    if queue.contains(other)? {
                        queue.decrease_key(other, key)?;
                    } else {
                        queue.insert(other, key)?;
                    }
                }
            }
        }

        let edges: Vec<Edge> = edge_to.into_iter().flatten().collect();
        let weight = total_weight(&edges);
        debug!(edges = edges.len(), weight, "Eager Prim spanning tree built");
        Ok(Self { edges, weight })
    }
}

impl SpanningTree for Prim {
    /// Tree edges ordered by the vertex they first reached
    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Kruskal: lightest edges first, skipping any that would close a cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Kruskal {
    edges: Vec<Edge>,
    weight: f64,
}

impl Kruskal {
    /// Scan edges in ascending weight until `V - 1` are accepted
    ///
    /// # Complexity
    ///
    /// O(E log E)
    ///
    /// # Errors
    ///
    /// Propagates union-find errors, which a well-formed graph never
    /// triggers.
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        let target = num_vertices.saturating_sub(1);
        let mut candidates: BinaryHeap<LightestFirst> =
            graph.edges().into_iter().map(LightestFirst).collect();
        let mut components = UnionFind::new(num_vertices);
        let mut edges = Vec::with_capacity(target);

        while edges.len() < target {
            let Some(LightestFirst(edge)) = candidates.pop() else {
                break;
            };
            let u = edge.either();
            if components.union(u, edge.opposite(u))? {
                edges.push(edge);
            }
        }

        let weight = total_weight(&edges);
        debug!(edges = edges.len(), weight, "Kruskal spanning tree built");
        Ok(Self { edges, weight })
    }
}

impl SpanningTree for Kruskal {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}
