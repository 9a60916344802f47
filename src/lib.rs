//! classic-graph: classical graph algorithms over vertex-indexed storage
//!
//! # Overview
//!
//! classic-graph provides the textbook graph toolkit: four adjacency
//! representations plus flow networks, an indexed priority queue and
//! union-find, and the algorithms built on them. Vertices are dense
//! integers `0..V`; every algorithm runs in its constructor and is queried
//! afterwards.
//!
//! # Quick Start
//!
//! ```
//! use classic_graph::{Dijkstra, EdgeWeightedDigraph, ShortestPaths};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Build a digraph from (from, to, weight) triples
//! let digraph = EdgeWeightedDigraph::from_edges(
//!     3,
//!     &[(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)],
//! )?;
//!
//! // Shortest path tree from vertex 0
//! let paths = Dijkstra::new(&digraph, 0)?;
//! assert_eq!(paths.distance_to(2), 0.75);
//!
//! let hops: Vec<String> = paths.path_to(2).unwrap().iter().map(ToString::to_string).collect();
//! assert_eq!(hops, vec!["0->1 0.50", "1->2 0.25"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: [`Csr`] adjacency rows behind [`Graph`], [`Digraph`],
//!   [`EdgeWeightedGraph`], [`EdgeWeightedDigraph`] and [`FlowNetwork`];
//!   plain-text loaders and symbol graphs over string labels
//! - **Collections**: [`IndexedPriorityQueue`], [`UnionFind`]
//! - **Algorithms**: traversal, components, cycles and topological order,
//!   shortest paths, spanning trees, max flow, plus scheduling and arbitrage
//! - **Errors**: construction and mutation return [`GraphError`]; file
//!   loaders return [`anyhow::Result`] with the path as context; queries on
//!   finished results panic on out-of-range vertices

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod collections;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{
    AcyclicPaths, Arbitrage, BellmanFord, Bipartite, BreadthFirstPaths, ConnectedComponents,
    CriticalPath, Cycle, DepthFirstOrder, DepthFirstPaths, DepthFirstSearch, Dijkstra,
    DijkstraAllPairs, DirectedCycle, Eccentricity, Exchange, FordFulkerson, Job, Kruskal,
    LazyPrim, Prim, ShortestPaths, SpanningTree, StronglyConnectedComponents, Topological,
    TransitiveClosure, RESIDUAL_EPSILON,
};
pub use collections::{IndexedPriorityQueue, UnionFind};
pub use storage::{
    Adjacency, Csr, Digraph, DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph,
    FlowEdge, FlowNetwork, Graph, SymbolDigraph, SymbolGraph, Vertex, DEFAULT_SYMBOL_DELIMITER,
};

// Error type
pub use error::{GraphError, KeyChange, Result};
