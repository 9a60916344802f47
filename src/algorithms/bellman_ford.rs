//! Queue-based Bellman-Ford shortest paths with negative-cycle detection
//!
//! Only vertices whose distance changed in the previous pass are relaxed
//! again. Every `V` relaxations the parent edges are checked for a cycle,
//! which is necessarily negative; the search stops as soon as one is found.
//!
//! # Example
//!
//! ```
//! use classic_graph::{BellmanFord, EdgeWeightedDigraph, ShortestPaths};
//!
//! // 1 → 2 → 1 weighs -1.0 in total
//! let digraph = EdgeWeightedDigraph::from_edges(
//!     3,
//!     &[(0, 1, 1.0), (1, 2, 1.0), (2, 1, -2.0)],
//! )
//! .unwrap();
//!
//! let paths = BellmanFord::new(&digraph, 0).unwrap();
//! let cycle = paths.negative_cycle().unwrap();
//! assert!(cycle.iter().map(|e| e.weight()).sum::<f64>() < 0.0);
//! ```

use super::shortest_path::{PathTree, ShortestPaths};
use super::topo::DirectedCycle;
use crate::error::{check_vertex, Result};
use crate::storage::{DirectedEdge, EdgeWeightedDigraph, Vertex};
use std::collections::VecDeque;
use tracing::debug;

/// Single-source shortest paths allowing negative weights
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFord {
    tree: PathTree,
    negative_cycle: Option<Vec<DirectedEdge>>,
}

impl BellmanFord {
    /// Relax from `source` until distances settle or a negative cycle
    /// reachable from `source` shows up
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is out of bounds.
    pub fn new(graph: &EdgeWeightedDigraph, source: Vertex) -> Result<Self> {
        let num_vertices = graph.num_vertices();
        check_vertex(source, num_vertices)?;

        let mut tree = PathTree::new(num_vertices, source, f64::INFINITY);
        let mut on_queue = vec![false; num_vertices];
        let mut queue = VecDeque::from([source]);
        on_queue[source] = true;

        let mut relaxations = 0_usize;
        let mut negative_cycle = None;

        'passes: while let Some(vertex) = queue.pop_front() {
            on_queue[vertex] = false;

            for &edge in graph.row(vertex) {
                let to = edge.to();
                let distance = tree.dist_to[vertex] + edge.weight();
                if distance < tree.dist_to[to] {
                    tree.dist_to[to] = distance;
                    tree.edge_to[to] = Some(edge);
                    if !on_queue[to] {
                        queue.push_back(to);
                        on_queue[to] = true;
                    }
                }

                if relaxations % num_vertices == 0 {
                    negative_cycle = find_negative_cycle(&tree.edge_to)?;
                    if negative_cycle.is_some() {
                        break 'passes;
                    }
                }
                relaxations += 1;
            }
        }

        if let Some(cycle) = &negative_cycle {
            debug!(
                source,
                relaxations,
                cycle_len = cycle.len(),
                "Negative cycle found"
            );
        }

        Ok(Self {
            tree,
            negative_cycle,
        })
    }

    /// True if a negative cycle is reachable from the source
    #[must_use]
    pub const fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Edges of a negative cycle, in walk order
    #[must_use]
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge]> {
        self.negative_cycle.as_deref()
    }
}

/// Cycle among the current parent edges, if any
fn find_negative_cycle(edge_to: &[Option<DirectedEdge>]) -> Result<Option<Vec<DirectedEdge>>> {
    let parents: Vec<_> = edge_to
        .iter()
        .flatten()
        .map(|edge| (edge.from(), edge.to(), edge.weight()))
        .collect();
    let shortest_path_tree = EdgeWeightedDigraph::from_edges(edge_to.len(), &parents)?;

    Ok(DirectedCycle::new(&shortest_path_tree)
        .cycle_edges()
        .map(<[DirectedEdge]>::to_vec))
}

impl ShortestPaths for BellmanFord {
    fn source(&self) -> Vertex {
        self.tree.source
    }

    /// Distance from the source; with a negative cycle present this is only
    /// the value reached when the search stopped
    fn distance_to(&self, vertex: Vertex) -> f64 {
        self.tree.dist_to[vertex]
    }

    /// Tree path to `vertex`; `None` whenever a negative cycle was found
    fn path_to(&self, vertex: Vertex) -> Option<Vec<DirectedEdge>> {
        if self.has_negative_cycle() {
            return None;
        }
        self.tree.path_to(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Dijkstra;

    /// tinyEWDn from the classic text: negative weights, no negative cycle
    fn tiny_ewdn() -> EdgeWeightedDigraph {
        EdgeWeightedDigraph::from_edges(
            8,
            &[
                (4, 5, 0.35),
                (5, 4, 0.35),
                (4, 7, 0.37),
                (5, 7, 0.28),
                (7, 5, 0.28),
                (5, 1, 0.32),
                (0, 4, 0.38),
                (0, 2, 0.26),
                (7, 3, 0.39),
                (1, 3, 0.29),
                (2, 7, 0.34),
                (6, 2, -1.20),
                (3, 6, 0.52),
                (6, 0, -1.40),
                (6, 4, -1.25),
            ],
        )
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_negative_weights_tiny_ewdn() {
        let paths = BellmanFord::new(&tiny_ewdn(), 0).unwrap();
        assert!(!paths.has_negative_cycle());

        let expected = [0.00, 0.93, 0.26, 0.99, 0.26, 0.61, 1.51, 0.60];
        for (vertex, &distance) in expected.iter().enumerate() {
            assert_close(paths.distance_to(vertex), distance);
        }

        let path = paths.path_to(4).unwrap();
        let hops: Vec<Vertex> = path.iter().map(DirectedEdge::to).collect();
        assert_eq!(hops, vec![2, 7, 3, 6, 4]);
    }

    #[test]
    fn test_negative_cycle_tiny_ewdnc() {
        // tinyEWDnc: 4 → 5 → 4 weighs 0.35 - 0.66 = -0.31
        let mut edges = vec![
            (4, 5, 0.35),
            (5, 4, -0.66),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ];
        let digraph = EdgeWeightedDigraph::from_edges(8, &edges).unwrap();
        let paths = BellmanFord::new(&digraph, 0).unwrap();

        let cycle = paths.negative_cycle().unwrap();
        let total: f64 = cycle.iter().map(DirectedEdge::weight).sum();
        assert!(total < 0.0);
        for pair in cycle.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
        assert_eq!(cycle.last().map(DirectedEdge::to), cycle.first().map(DirectedEdge::from));
        assert_eq!(paths.path_to(7), None);

        // Same digraph without the negative edge has no cycle
        edges[1].2 = 0.35;
        let digraph = EdgeWeightedDigraph::from_edges(8, &edges).unwrap();
        assert!(!BellmanFord::new(&digraph, 0).unwrap().has_negative_cycle());
    }

    #[test]
    fn test_unreachable_negative_cycle_ignored() {
        let digraph =
            EdgeWeightedDigraph::from_edges(4, &[(0, 1, 1.0), (2, 3, -1.0), (3, 2, -1.0)]).unwrap();
        let paths = BellmanFord::new(&digraph, 0).unwrap();
        assert!(!paths.has_negative_cycle());
        assert!(!paths.has_path_to(2));
    }

    #[test]
    fn test_self_loop_negative_cycle() {
        let digraph = EdgeWeightedDigraph::from_edges(2, &[(0, 1, 1.0), (1, 1, -0.5)]).unwrap();
        let paths = BellmanFord::new(&digraph, 0).unwrap();
        assert_eq!(
            paths.negative_cycle(),
            Some(&[DirectedEdge::new(1, 1, -0.5)][..])
        );
    }

    #[test]
    fn test_matches_dijkstra_on_non_negative() {
        let digraph =
            EdgeWeightedDigraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)])
                .unwrap();
        let bellman_ford = BellmanFord::new(&digraph, 0).unwrap();
        let dijkstra = Dijkstra::new(&digraph, 0).unwrap();
        for vertex in 0..4 {
            assert_close(bellman_ford.distance_to(vertex), dijkstra.distance_to(vertex));
        }
        assert_eq!(bellman_ford.path_to(3), dijkstra.path_to(3));
    }

    #[test]
    fn test_single_vertex() {
        let paths = BellmanFord::new(&EdgeWeightedDigraph::new(1), 0).unwrap();
        assert_eq!(paths.distance_to(0), 0.0);
        assert_eq!(paths.path_to(0), Some(Vec::new()));
    }

    #[test]
    fn test_invalid_source() {
        assert!(BellmanFord::new(&EdgeWeightedDigraph::new(0), 0).is_err());
    }
}
