//! Topological algorithms: directed cycle detection and topological sort
//!
//! Provides graph ordering algorithms needed for dependency analysis:
//! - [`DirectedCycle`]: find one directed cycle, if any
//! - [`Topological`]: topological order of a DAG (Directed Acyclic Graph)
//!
//! Both work on unweighted and edge-weighted digraphs through [`Adjacency`].
//!
//! # Example
//!
//! ```
//! use classic_graph::{Digraph, DirectedCycle, Topological};
//!
//! // Build a DAG: 0 → 1 → 2
//! let dag = Digraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
//! assert!(!DirectedCycle::new(&dag).has_cycle());
//! assert_eq!(Topological::new(&dag).order(), Some(&[0, 1, 2][..]));
//!
//! // Cyclic: 0 → 1 → 2 → 0
//! let cyclic = Digraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
//! assert_eq!(DirectedCycle::new(&cyclic).cycle(), Some(&[0, 1, 2, 0][..]));
//! assert!(Topological::new(&cyclic).order().is_none());
//! ```

use super::traversal::{DepthFirstOrder, DepthFirstWalk, Step};
use crate::storage::{Adjacency, Vertex};

/// Node state during DFS traversal
#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeState {
    /// Not yet visited
    Unvisited,
    /// Currently in DFS stack (part of current path)
    InStack,
    /// Fully processed (all descendants visited)
    Finished,
}

/// First directed cycle found by depth-first search
///
/// Uses three-state marking:
/// - Unvisited: not yet seen
/// - `InStack`: on the current path (an arc to it is a back edge, so a cycle)
/// - Finished: fully explored
///
/// The search stops at the first back edge. The cycle is rebuilt by walking
/// parent edges from the back edge's tail up to its head.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedCycle<E = ()> {
    /// Closed walk: first vertex repeated last
    vertices: Option<Vec<Vertex>>,
    /// Arcs of the walk, in the same order
    edges: Option<Vec<E>>,
}

impl<E: Copy> DirectedCycle<E> {
    /// Search every vertex as a potential root
    #[must_use]
    pub fn new<G: Adjacency<Edge = E>>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        let mut state = vec![NodeState::Unvisited; num_vertices];
        let mut edge_to: Vec<Option<(Vertex, E)>> = vec![None; num_vertices];
        let mut walk = DepthFirstWalk::new();

        for root in 0..num_vertices {
            if state[root] != NodeState::Unvisited {
                continue;
            }
            walk.start(root, &mut marked);
            state[root] = NodeState::InStack;

            while let Some(step) = walk.next_step(graph, &mut marked) {
                match step {
                    Step::Tree { from, to, edge } => {
                        state[to] = NodeState::InStack;
                        edge_to[to] = Some((from, edge));
                    }
                    Step::NonTree { from, to, edge } if state[to] == NodeState::InStack => {
                        // Back edge found - cycle detected!
                        walk.clear();
                        return Self::rebuild(&edge_to, from, to, edge);
                    }
                    Step::NonTree { .. } => {}
                    Step::Finish(vertex) => state[vertex] = NodeState::Finished,
                }
            }
        }

        Self {
            vertices: None,
            edges: None,
        }
    }

    /// Cycle `to → ... → from → to` closed by the back edge `from → to`
    fn rebuild(edge_to: &[Option<(Vertex, E)>], from: Vertex, to: Vertex, back: E) -> Self {
        let mut vertices = vec![to, from];
        let mut edges = vec![back];

        let mut current = from;
        while current != to {
            let Some((parent, edge)) = edge_to[current] else {
                break;
            };
            edges.push(edge);
            vertices.push(parent);
            current = parent;
        }

        vertices.reverse();
        edges.reverse();
        Self {
            vertices: Some(vertices),
            edges: Some(edges),
        }
    }

    /// True if a directed cycle exists
    #[must_use]
    pub const fn has_cycle(&self) -> bool {
        self.vertices.is_some()
    }

    /// The cycle as a closed walk `v0, v1, ..., v0`
    #[must_use]
    pub fn cycle(&self) -> Option<&[Vertex]> {
        self.vertices.as_deref()
    }

    /// The arcs of [`cycle`](Self::cycle), in walk order
    #[must_use]
    pub fn cycle_edges(&self) -> Option<&[E]> {
        self.edges.as_deref()
    }
}

/// Topological order of a digraph, present only when it is acyclic
///
/// The order is the reverse postorder of a depth-first search over all
/// vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topological {
    order: Option<Vec<Vertex>>,
    rank: Vec<usize>,
}

impl Topological {
    /// Check for a cycle, then order the vertices
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        if DirectedCycle::new(graph).has_cycle() {
            return Self {
                order: None,
                rank: Vec::new(),
            };
        }

        let order: Vec<Vertex> = DepthFirstOrder::new(graph).reverse_post().collect();
        let mut rank = vec![0; order.len()];
        for (position, &vertex) in order.iter().enumerate() {
            rank[vertex] = position;
        }

        Self {
            order: Some(order),
            rank,
        }
    }

    /// Vertices such that every edge points forward, or `None` if cyclic
    #[must_use]
    pub fn order(&self) -> Option<&[Vertex]> {
        self.order.as_deref()
    }

    /// True if the digraph is a DAG
    #[must_use]
    pub const fn is_dag(&self) -> bool {
        self.order.is_some()
    }

    /// Position of `vertex` in the order, or `None` if cyclic
    ///
    /// # Panics
    ///
    /// Panics if the digraph is a DAG and `vertex` is out of bounds.
    #[must_use]
    pub fn rank(&self, vertex: Vertex) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[vertex])
    }
}
