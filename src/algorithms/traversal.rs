//! Depth-first and breadth-first traversals
//!
//! Every depth-first computation in the crate runs on [`DepthFirstWalk`], an
//! explicit stack of `(vertex, next position)` frames, so path-like graphs with
//! millions of vertices do not exhaust the call stack.
//!
//! # Example
//!
//! ```
//! use classic_graph::{BreadthFirstPaths, DepthFirstOrder, Digraph};
//!
//! // 0 → 1 → 3, 0 → 2 → 3
//! let digraph = Digraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//!
//! let paths = BreadthFirstPaths::new(&digraph, 0).unwrap();
//! assert_eq!(paths.dist_to(3), Some(2));
//! assert_eq!(paths.path_to(3), Some(vec![0, 1, 3]));
//!
//! let order = DepthFirstOrder::new(&digraph);
//! assert_eq!(order.reverse_post().next(), Some(0));
//! ```

use crate::error::{check_vertex, Result};
use crate::storage::{Adjacency, Vertex};
use std::collections::VecDeque;

/// One event of a depth-first walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step<E> {
    /// `to` was unmarked; it is now marked and on top of the stack
    Tree { from: Vertex, to: Vertex, edge: E },
    /// `to` was already marked when the arc was examined
    NonTree { from: Vertex, to: Vertex, edge: E },
    /// Every arc of the vertex has been examined; it left the stack
    Finish(Vertex),
}

/// Explicit-stack depth-first walk driven one [`Step`] at a time
///
/// Marks are owned by the caller so several walks (one per root) can share
/// them, and so callers can stop early.
#[derive(Debug, Default)]
pub(crate) struct DepthFirstWalk {
    stack: Vec<(Vertex, usize)>,
}

impl DepthFirstWalk {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mark `root` and push it as the bottom frame
    pub(crate) fn start(&mut self, root: Vertex, marked: &mut [bool]) {
        marked[root] = true;
        self.stack.push((root, 0));
    }

    /// Advance the top frame by one arc, or finish it
    pub(crate) fn next_step<G: Adjacency>(
        &mut self,
        graph: &G,
        marked: &mut [bool],
    ) -> Option<Step<G::Edge>> {
        let top = self.stack.len().checked_sub(1)?;
        let (vertex, position) = self.stack[top];

        if position == graph.degree(vertex) {
            self.stack.pop();
            return Some(Step::Finish(vertex));
        }

        self.stack[top].1 += 1;
        let (to, edge) = graph.arc(vertex, position);
        if marked[to] {
            return Some(Step::NonTree {
                from: vertex,
                to,
                edge,
            });
        }

        marked[to] = true;
        self.stack.push((to, 0));
        Some(Step::Tree {
            from: vertex,
            to,
            edge,
        })
    }

    /// Walk the whole tree under `root`, passing every step to `visit`
    pub(crate) fn run<G: Adjacency>(
        &mut self,
        graph: &G,
        root: Vertex,
        marked: &mut [bool],
        mut visit: impl FnMut(Step<G::Edge>),
    ) {
        self.start(root, marked);
        while let Some(step) = self.next_step(graph, marked) {
            visit(step);
        }
    }

    /// Abandon the remaining frames
    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Vertices reachable from one or more sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
}

impl DepthFirstSearch {
    /// Search from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn new<G: Adjacency>(graph: &G, source: Vertex) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Search from every vertex in `sources`, in order
    ///
    /// # Errors
    ///
    /// Returns an error if any source is out of bounds.
    pub fn from_sources<G: Adjacency>(graph: &G, sources: &[Vertex]) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        for &source in sources {
            check_vertex(source, num_vertices)?;
        }

        let mut marked = vec![false; num_vertices];
        let mut walk = DepthFirstWalk::new();
        for &source in sources {
            if !marked[source] {
                walk.run(graph, source, &mut marked, |_| {});
            }
        }

        let count = marked.iter().filter(|&&m| m).count();
        Ok(Self { marked, count })
    }

    /// True if `vertex` is reachable from a source
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn is_marked(&self, vertex: Vertex) -> bool {
        self.marked[vertex]
    }

    /// Number of reachable vertices (sources included)
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// Walk parent links from `vertex` back to a root, returning root-first order
fn trace_back(edge_to: &[Option<Vertex>], vertex: Vertex) -> Vec<Vertex> {
    let mut path = vec![vertex];
    let mut current = vertex;
    while let Some(parent) = edge_to[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Depth-first tree of paths from a single source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstPaths {
    source: Vertex,
    marked: Vec<bool>,
    edge_to: Vec<Option<Vertex>>,
}

impl DepthFirstPaths {
    /// Build the tree rooted at `source`
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn new<G: Adjacency>(graph: &G, source: Vertex) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        check_vertex(source, num_vertices)?;

        let mut marked = vec![false; num_vertices];
        let mut edge_to = vec![None; num_vertices];
        DepthFirstWalk::new().run(graph, source, &mut marked, |step| {
            if let Step::Tree { from, to, .. } = step {
                edge_to[to] = Some(from);
            }
        });

        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    /// Root of the tree
    #[must_use]
    pub const fn source(&self) -> Vertex {
        self.source
    }

    /// True if `vertex` is reachable from the source
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn has_path_to(&self, vertex: Vertex) -> bool {
        self.marked[vertex]
    }

    /// Tree path `source, ..., vertex`, or `None` if unreachable
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn path_to(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        self.has_path_to(vertex)
            .then(|| trace_back(&self.edge_to, vertex))
    }
}

/// Fewest-edge paths from one or more sources
///
/// Sources sit at distance 0; a path starts at whichever source is nearest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadthFirstPaths {
    edge_to: Vec<Option<Vertex>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Search from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn new<G: Adjacency>(graph: &G, source: Vertex) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Search from every vertex in `sources` simultaneously
    ///
    /// # Errors
    ///
    /// Returns an error if any source is out of bounds.
    pub fn from_sources<G: Adjacency>(graph: &G, sources: &[Vertex]) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        for &source in sources {
            check_vertex(source, num_vertices)?;
        }

        let mut edge_to = vec![None; num_vertices];
        let mut dist_to = vec![None; num_vertices];
        let mut queue = VecDeque::new();

        for &source in sources {
            if dist_to[source].is_none() {
                dist_to[source] = Some(0);
                queue.push_back(source);
            }
        }

        while let Some(vertex) = queue.pop_front() {
            let next = dist_to[vertex].map_or(0, |d| d + 1);
            for position in 0..graph.degree(vertex) {
                let (neighbor, _) = graph.arc(vertex, position);
                if dist_to[neighbor].is_none() {
                    edge_to[neighbor] = Some(vertex);
                    dist_to[neighbor] = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(Self { edge_to, dist_to })
    }

    /// True if `vertex` is reachable from a source
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn has_path_to(&self, vertex: Vertex) -> bool {
        self.dist_to[vertex].is_some()
    }

    /// Number of edges on a shortest path, or `None` if unreachable
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn dist_to(&self, vertex: Vertex) -> Option<usize> {
        self.dist_to[vertex]
    }

    /// A fewest-edge path `source, ..., vertex`, or `None` if unreachable
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn path_to(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        self.has_path_to(vertex)
            .then(|| trace_back(&self.edge_to, vertex))
    }
}

/// Preorder and postorder of a depth-first search over all vertices
///
/// Roots are taken in increasing vertex order. For a DAG, reverse postorder
/// is a topological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    pre: Vec<Vertex>,
    post: Vec<Vertex>,
}

impl DepthFirstOrder {
    /// Visit every vertex
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut marked = vec![false; num_vertices];
        let mut pre = Vec::with_capacity(num_vertices);
        let mut post = Vec::with_capacity(num_vertices);
        let mut walk = DepthFirstWalk::new();

        for root in 0..num_vertices {
            if marked[root] {
                continue;
            }
            pre.push(root);
            walk.run(graph, root, &mut marked, |step| match step {
                Step::Tree { to, .. } => pre.push(to),
                Step::Finish(vertex) => post.push(vertex),
                Step::NonTree { .. } => {}
            });
        }

        Self { pre, post }
    }

    /// Vertices in the order they were first reached
    #[must_use]
    pub fn pre(&self) -> &[Vertex] {
        &self.pre
    }

    /// Vertices in the order they were finished
    #[must_use]
    pub fn post(&self) -> &[Vertex] {
        &self.post
    }

    /// Postorder reversed
    pub fn reverse_post(&self) -> impl DoubleEndedIterator<Item = Vertex> + '_ {
        self.post.iter().rev().copied()
    }
}

/// All-pairs reachability: one depth-first search per vertex
///
/// Space is `V²` bits' worth of flags; meant for small graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitiveClosure {
    searches: Vec<DepthFirstSearch>,
}

impl TransitiveClosure {
    /// Search from every vertex
    #[must_use]
    pub fn new<G: Adjacency>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut walk = DepthFirstWalk::new();
        let searches = (0..num_vertices)
            .map(|source| {
                let mut marked = vec![false; num_vertices];
                walk.run(graph, source, &mut marked, |_| {});
                let count = marked.iter().filter(|&&m| m).count();
                DepthFirstSearch { marked, count }
            })
            .collect();

        Self { searches }
    }

    /// True if there is a path `from → to` (every vertex reaches itself)
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[must_use]
    pub fn reachable(&self, from: Vertex, to: Vertex) -> bool {
        self.searches[from].is_marked(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Digraph, EdgeWeightedDigraph, Graph};

    /// tinyCG from the classic text: 6 vertices, 8 edges
    fn tiny_cg() -> Graph {
        Graph::from_edges(
            6,
            &[(0, 5), (2, 4), (2, 3), (1, 2), (0, 1), (3, 4), (3, 5), (0, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_walk_steps_cover_every_arc() {
        let digraph = Digraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let mut marked = vec![false; 3];
        let mut steps = Vec::new();
        DepthFirstWalk::new().run(&digraph, 0, &mut marked, |step| steps.push(step));

        assert_eq!(
            steps,
            vec![
                Step::Tree { from: 0, to: 1, edge: () },
                Step::Tree { from: 1, to: 2, edge: () },
                Step::NonTree { from: 2, to: 0, edge: () },
                Step::Finish(2),
                Step::Finish(1),
                Step::Finish(0),
            ]
        );
    }

    #[test]
    fn test_walk_deep_path_no_stack_overflow() {
        let n = 200_000;
        let edges: Vec<_> = (0..n - 1).map(|v| (v, v + 1)).collect();
        let digraph = Digraph::from_edges(n, &edges).unwrap();

        let search = DepthFirstSearch::new(&digraph, 0).unwrap();
        assert_eq!(search.count(), n);
    }

    #[test]
    fn test_dfs_marks_component() {
        let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
        let search = DepthFirstSearch::new(&graph, 0).unwrap();
        assert_eq!(search.count(), 3);
        assert!(search.is_marked(2));
        assert!(!search.is_marked(3));
    }

    #[test]
    fn test_dfs_multiple_sources() {
        let digraph = Digraph::from_edges(5, &[(0, 1), (3, 4)]).unwrap();
        let search = DepthFirstSearch::from_sources(&digraph, &[0, 3]).unwrap();
        assert_eq!(search.count(), 4);
        assert!(!search.is_marked(2));
    }

    #[test]
    fn test_dfs_invalid_source() {
        let graph = Graph::new(2);
        assert!(DepthFirstSearch::new(&graph, 2).is_err());
        assert!(BreadthFirstPaths::from_sources(&graph, &[0, 7]).is_err());
        assert!(DepthFirstPaths::new(&graph, 9).is_err());
    }

    #[test]
    fn test_dfs_paths() {
        let paths = DepthFirstPaths::new(&tiny_cg(), 0).unwrap();
        assert_eq!(paths.source(), 0);
        assert_eq!(paths.path_to(0), Some(vec![0]));

        let path = paths.path_to(4).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&4));

        let graph = tiny_cg();
        for pair in path.windows(2) {
            assert!(graph.adjacent_to(pair[0]).unwrap().contains(&pair[1]));
        }
    }

    #[test]
    fn test_bfs_shortest_paths() {
        let paths = BreadthFirstPaths::new(&tiny_cg(), 0).unwrap();
        assert_eq!(paths.dist_to(0), Some(0));
        assert_eq!(paths.dist_to(4), Some(2));
        assert_eq!(paths.path_to(3).unwrap().len(), 3);
        assert_eq!(paths.path_to(5), Some(vec![0, 5]));
    }

    #[test]
    fn test_bfs_unreachable() {
        let digraph = Digraph::from_edges(3, &[(1, 0)]).unwrap();
        let paths = BreadthFirstPaths::new(&digraph, 0).unwrap();
        assert!(!paths.has_path_to(1));
        assert_eq!(paths.path_to(1), None);
        assert_eq!(paths.dist_to(2), None);
    }

    #[test]
    fn test_bfs_multi_source_nearest() {
        let digraph = Digraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (4, 3)]).unwrap();
        let paths = BreadthFirstPaths::from_sources(&digraph, &[0, 4]).unwrap();
        assert_eq!(paths.dist_to(3), Some(1));
        assert_eq!(paths.path_to(3), Some(vec![4, 3]));
    }

    #[test]
    fn test_bfs_path_idempotent() {
        let paths = BreadthFirstPaths::new(&tiny_cg(), 0).unwrap();
        assert_eq!(paths.path_to(4), paths.path_to(4));
    }

    #[test]
    fn test_depth_first_order() {
        // 0 → 1, 0 → 2, 1 → 3, 2 → 3
        let digraph = Digraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let order = DepthFirstOrder::new(&digraph);

        assert_eq!(order.pre(), &[0, 1, 3, 2]);
        assert_eq!(order.post(), &[3, 1, 2, 0]);
        assert_eq!(order.reverse_post().collect::<Vec<_>>(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_depth_first_order_weighted() {
        let digraph = EdgeWeightedDigraph::from_edges(3, &[(2, 1, 1.0), (1, 0, 1.0)]).unwrap();
        let order = DepthFirstOrder::new(&digraph);
        assert_eq!(order.reverse_post().collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_depth_first_order_single_vertex() {
        let order = DepthFirstOrder::new(&Digraph::new(1));
        assert_eq!(order.pre(), &[0]);
        assert_eq!(order.post(), &[0]);
    }

    #[test]
    fn test_transitive_closure() {
        let digraph = Digraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let closure = TransitiveClosure::new(&digraph);

        assert!(closure.reachable(0, 3));
        assert!(closure.reachable(2, 1));
        assert!(closure.reachable(3, 3));
        assert!(!closure.reachable(3, 0));
    }
}
