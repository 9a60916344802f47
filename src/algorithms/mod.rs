//! Graph algorithms (traversal, paths, spanning trees, flow, components)
//!
//! Every algorithm runs to completion inside its constructor and answers
//! queries from the finished result afterwards.

pub mod applications;
pub mod bellman_ford;
pub mod flow;
pub mod mst;
pub mod shortest_path;
pub mod structure;
pub mod topo;
pub mod traversal;

pub use applications::{Arbitrage, CriticalPath, Exchange, Job};
pub use bellman_ford::BellmanFord;
pub use flow::{FordFulkerson, RESIDUAL_EPSILON};
pub use mst::{Kruskal, LazyPrim, Prim, SpanningTree};
pub use shortest_path::{AcyclicPaths, Dijkstra, DijkstraAllPairs, ShortestPaths};
pub use structure::{
    Bipartite, ConnectedComponents, Cycle, Eccentricity, StronglyConnectedComponents,
};
pub use topo::{DirectedCycle, Topological};
pub use traversal::{
    BreadthFirstPaths, DepthFirstOrder, DepthFirstPaths, DepthFirstSearch, TransitiveClosure,
};
