//! Structural analyses: connected components, bipartiteness, undirected
//! cycles, eccentricity and strongly connected components
//!
//! # Example
//!
//! ```
//! use classic_graph::{ConnectedComponents, Digraph, Graph, StronglyConnectedComponents};
//!
//! // Two components: 0 - 1, 2 - 3
//! let graph = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
//! let components = ConnectedComponents::new(&graph);
//! assert_eq!(components.count(), 2);
//! assert!(components.connected(2, 3));
//!
//! // Cycle: 0 → 1 → 2 → 0, plus 2 → 3
//! let digraph = Digraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
//! let sccs = StronglyConnectedComponents::new(&digraph);
//! assert_eq!(sccs.count(), 2);
//! assert!(sccs.strongly_connected(0, 2));
//! ```

use super::traversal::{BreadthFirstPaths, DepthFirstOrder, DepthFirstWalk, Step};
use crate::storage::{Adjacency, Digraph, Vertex};
use tracing::debug;

/// Connected components of an undirected graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    sizes: Vec<usize>,
}

impl ConnectedComponents {
    /// Label every vertex with its component id (`0..count`, in order of the
    /// component's lowest vertex)
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        let mut id = vec![0; num_vertices];
        let mut sizes = Vec::new();
        let mut walk = DepthFirstWalk::new();

        for root in 0..num_vertices {
            if marked[root] {
                continue;
            }
            let component = sizes.len();
            let mut size = 0;
            walk.run(graph, root, &mut marked, |step| {
                if let Step::Finish(vertex) = step {
                    id[vertex] = component;
                    size += 1;
                }
            });
            sizes.push(size);
        }

        Self { id, sizes }
    }

    /// Number of components
    #[must_use]
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Component id of `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn id(&self, vertex: Vertex) -> usize {
        self.id[vertex]
    }

    /// Number of vertices in component `id`
    ///
    /// # Panics
    ///
    /// Panics if `id >= count()`.
    #[must_use]
    pub fn size(&self, id: usize) -> usize {
        self.sizes[id]
    }

    /// True if `u` and `v` are in the same component
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[must_use]
    pub fn connected(&self, u: Vertex, v: Vertex) -> bool {
        self.id[u] == self.id[v]
    }
}

/// Two-coloring test for undirected graphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartite {
    color: Vec<bool>,
    is_bipartite: bool,
}

impl Bipartite {
    /// Color every component; any edge joining equal colors (self-loops
    /// included) makes the graph non-bipartite
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        let mut color = vec![false; num_vertices];
        let mut is_bipartite = true;
        let mut walk = DepthFirstWalk::new();

        for root in 0..num_vertices {
            if marked[root] {
                continue;
            }
            walk.run(graph, root, &mut marked, |step| match step {
                Step::Tree { from, to, .. } => color[to] = !color[from],
                Step::NonTree { from, to, .. } if color[to] == color[from] => is_bipartite = false,
                _ => {}
            });
        }

        Self {
            color,
            is_bipartite,
        }
    }

    /// True if no edge joins two vertices of the same color
    #[must_use]
    pub const fn is_bipartite(&self) -> bool {
        self.is_bipartite
    }

    /// Side of `vertex` in the two-coloring (meaningful when bipartite)
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn color(&self, vertex: Vertex) -> bool {
        self.color[vertex]
    }
}

/// Cycle test for undirected graphs
///
/// Every edge back to a vertex's depth-first parent is exempt, so parallel
/// edges alone are not a cycle. A root is its own parent, which exempts a
/// self-loop on it; a self-loop anywhere else is a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    has_cycle: bool,
}

impl Cycle {
    /// Search every component for a non-tree edge
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        let mut parent: Vec<Vertex> = (0..num_vertices).collect();
        let mut walk = DepthFirstWalk::new();

        for root in 0..num_vertices {
            if marked[root] {
                continue;
            }
            walk.start(root, &mut marked);
            while let Some(step) = walk.next_step(graph, &mut marked) {
                match step {
                    Step::Tree { from, to, .. } => parent[to] = from,
                    Step::NonTree { from, to, .. } if parent[from] != to => {
                        return Self { has_cycle: true };
                    }
                    Step::NonTree { .. } | Step::Finish(_) => {}
                }
            }
        }

        Self { has_cycle: false }
    }

    /// True if the graph contains a cycle
    #[must_use]
    pub const fn has_cycle(&self) -> bool {
        self.has_cycle
    }

    /// True if the graph is a forest
    #[must_use]
    pub const fn is_acyclic(&self) -> bool {
        !self.has_cycle
    }
}

/// Hop-count eccentricity of every vertex
///
/// A vertex's eccentricity is the largest BFS distance to any vertex it can
/// reach; unreachable vertices are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eccentricity {
    eccentricities: Vec<usize>,
}

impl Eccentricity {
    /// One breadth-first search per vertex
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        let eccentricities = (0..graph.num_vertices())
            .map(|source| {
                BreadthFirstPaths::new(graph, source).map_or(0, |paths| {
                    (0..graph.num_vertices())
                        .filter_map(|v| paths.dist_to(v))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect();

        Self { eccentricities }
    }

    /// Eccentricity of `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn eccentricity(&self, vertex: Vertex) -> usize {
        self.eccentricities[vertex]
    }

    /// Smallest eccentricity (0 for an empty graph)
    #[must_use]
    pub fn radius(&self) -> usize {
        self.eccentricities.iter().copied().min().unwrap_or(0)
    }

    /// Largest eccentricity (0 for an empty graph)
    #[must_use]
    pub fn diameter(&self) -> usize {
        self.eccentricities.iter().copied().max().unwrap_or(0)
    }

    /// Vertices whose eccentricity equals the radius
    #[must_use]
    pub fn center(&self) -> Vec<Vertex> {
        let radius = self.radius();
        (0..self.eccentricities.len())
            .filter(|&v| self.eccentricities[v] == radius)
            .collect()
    }
}

/// Strongly connected components (Kosaraju)
///
/// # Algorithm
///
/// Kosaraju's algorithm runs in O(V + E):
/// 1. Depth-first order of the reversed digraph
/// 2. Depth-first search of the digraph, taking roots in that order's
///    reverse postorder
/// 3. Each tree found in step 2 is one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    id: Vec<usize>,
    count: usize,
}

impl StronglyConnectedComponents {
    /// Label every vertex with its component id
    #[must_use]
    pub fn new(digraph: &Digraph) -> Self {
        let num_vertices = digraph.num_vertices();
        let order = DepthFirstOrder::new(&digraph.reverse());

        let mut marked = vec![false; num_vertices];
        let mut id = vec![0; num_vertices];
        let mut count = 0;
        let mut walk = DepthFirstWalk::new();

        for root in order.reverse_post() {
            if marked[root] {
                continue;
            }
            walk.run(digraph, root, &mut marked, |step| {
                if let Step::Finish(vertex) = step {
                    id[vertex] = count;
                }
            });
            count += 1;
        }

        debug!(vertices = num_vertices, components = count, "Strong components found");
        Self { id, count }
    }

    /// Number of components
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Component id of `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn id(&self, vertex: Vertex) -> usize {
        self.id[vertex]
    }

    /// True if `u` and `v` reach each other
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[must_use]
    pub fn strongly_connected(&self, u: Vertex, v: Vertex) -> bool {
        self.id[u] == self.id[v]
    }

    /// Members of each component, indexed by id
    #[must_use]
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let mut components = vec![Vec::new(); self.count];
        for (vertex, &id) in self.id.iter().enumerate() {
            components[id].push(vertex);
        }
        components
    }
}
