//! Property-based tests for classic-graph
//!
//! Verifies algorithm invariants hold for arbitrary graphs

use classic_graph::{
    AcyclicPaths, BellmanFord, ConnectedComponents, Digraph, Dijkstra, DirectedEdge,
    EdgeWeightedDigraph, EdgeWeightedGraph, FlowNetwork, FordFulkerson, Graph,
    IndexedPriorityQueue, Kruskal, LazyPrim, Prim, ShortestPaths, SpanningTree,
    StronglyConnectedComponents, Topological, TransitiveClosure, UnionFind,
};
use proptest::prelude::*;

// Property: all three MST constructions agree on the total weight
proptest! {
    #[test]
    fn prop_mst_weights_agree(edges in prop_connected_weighted(1usize..30usize, 0usize..60usize)) {
        let (num_vertices, edges) = edges;
        let graph = EdgeWeightedGraph::from_edges(num_vertices, &edges).unwrap();

        let lazy = LazyPrim::new(&graph);
        let eager = Prim::new(&graph).unwrap();
        let kruskal = Kruskal::new(&graph).unwrap();

        // Connected: V - 1 edges each
        prop_assert_eq!(lazy.edges().len(), num_vertices - 1);
        prop_assert_eq!(eager.edges().len(), num_vertices - 1);
        prop_assert_eq!(kruskal.edges().len(), num_vertices - 1);

        prop_assert!((lazy.weight() - kruskal.weight()).abs() < 1e-6);
        prop_assert!((eager.weight() - kruskal.weight()).abs() < 1e-6);
    }
}

// Property: topological relaxation matches Dijkstra on non-negative DAGs
proptest! {
    #[test]
    fn prop_acyclic_matches_dijkstra(dag in prop_weighted_dag(1usize..25usize, 0usize..80usize)) {
        let (num_vertices, edges) = dag;
        let digraph = EdgeWeightedDigraph::from_edges(num_vertices, &edges).unwrap();

        let acyclic = AcyclicPaths::shortest(&digraph, 0).unwrap();
        let dijkstra = Dijkstra::new(&digraph, 0).unwrap();

        for vertex in 0..num_vertices {
            let (a, d) = (acyclic.distance_to(vertex), dijkstra.distance_to(vertex));
            prop_assert!(a == d || (a - d).abs() < 1e-9, "vertex {}: {} vs {}", vertex, a, d);
            prop_assert_eq!(acyclic.has_path_to(vertex), dijkstra.has_path_to(vertex));
        }
    }
}

// Property: Dijkstra paths are consistent with the reported distances
proptest! {
    #[test]
    fn prop_dijkstra_path_weights(digraph in prop_weighted_digraph(1usize..25usize, 0usize..80usize)) {
        let (num_vertices, edges) = digraph;
        let digraph = EdgeWeightedDigraph::from_edges(num_vertices, &edges).unwrap();
        let paths = Dijkstra::new(&digraph, 0).unwrap();

        for vertex in 0..num_vertices {
            match paths.path_to(vertex) {
                Some(path) => {
                    let total: f64 = path.iter().map(DirectedEdge::weight).sum();
                    prop_assert!((total - paths.distance_to(vertex)).abs() < 1e-9);
                    // No edge leaving a reached vertex can shorten the tree
                    for edge in digraph.adjacent_to(vertex).unwrap() {
                        prop_assert!(
                            paths.distance_to(edge.to())
                                <= paths.distance_to(vertex) + edge.weight() + 1e-9
                        );
                    }
                }
                None => prop_assert!(paths.distance_to(vertex).is_infinite()),
            }
        }
    }
}

// Property: a reachable negative cycle is always reported, and is negative
proptest! {
    #[test]
    fn prop_bellman_ford_finds_negative_cycle(
        digraph in prop_weighted_digraph(3usize..20usize, 0usize..60usize),
        cycle_len in 1usize..3usize,
    ) {
        let (num_vertices, mut edges) = digraph;
        // Path 0 → 1 → ... → cycle_len, then back to 1, all at -1.0
        for vertex in 0..cycle_len {
            edges.push((vertex, vertex + 1, -1.0));
        }
        edges.push((cycle_len, 1, -1.0));
        let digraph = EdgeWeightedDigraph::from_edges(num_vertices, &edges).unwrap();

        let paths = BellmanFord::new(&digraph, 0).unwrap();
        let cycle = paths.negative_cycle().unwrap();

        prop_assert!(!cycle.is_empty());
        let total: f64 = cycle.iter().map(DirectedEdge::weight).sum();
        prop_assert!(total < 0.0);
        for pair in cycle.windows(2) {
            prop_assert_eq!(pair[0].to(), pair[1].from());
        }
        prop_assert_eq!(
            cycle.last().map(DirectedEdge::to),
            cycle.first().map(DirectedEdge::from)
        );
    }
}

// Property: max flow value equals min cut capacity, and the flow is feasible
proptest! {
    #[test]
    fn prop_max_flow_min_cut(network in prop_flow_network(2usize..15usize, 0usize..50usize)) {
        let (num_vertices, edges) = network;
        let sink = num_vertices - 1;
        let mut network = FlowNetwork::from_edges(num_vertices, &edges).unwrap();

        let max_flow = FordFulkerson::new(&mut network, 0, sink).unwrap();
        prop_assert!(max_flow.in_cut(0));
        prop_assert!(!max_flow.in_cut(sink));

        let cut_capacity: f64 = network
            .edges()
            .iter()
            .filter(|edge| max_flow.in_cut(edge.from()) && !max_flow.in_cut(edge.to()))
            .map(classic_graph::FlowEdge::capacity)
            .sum();
        prop_assert!((cut_capacity - max_flow.value()).abs() < 1e-9);

        for edge in network.edges() {
            prop_assert!(edge.flow() >= 0.0 && edge.flow() <= edge.capacity());
        }
        for vertex in 1..sink {
            prop_assert!(network.net_outflow(vertex).abs() < 1e-9);
        }
        prop_assert!((network.net_outflow(0) - max_flow.value()).abs() < 1e-9);
    }
}

// Property: strong connectivity is mutual reachability
proptest! {
    #[test]
    fn prop_scc_is_mutual_reachability(digraph in prop_digraph(1usize..20usize, 0usize..50usize)) {
        let (num_vertices, edges) = digraph;
        let digraph = Digraph::from_edges(num_vertices, &edges).unwrap();

        let scc = StronglyConnectedComponents::new(&digraph);
        let closure = TransitiveClosure::new(&digraph);

        for u in 0..num_vertices {
            for v in 0..num_vertices {
                let mutual = closure.reachable(u, v) && closure.reachable(v, u);
                prop_assert_eq!(scc.strongly_connected(u, v), mutual);
                prop_assert_eq!(scc.strongly_connected(u, v), scc.strongly_connected(v, u));
            }
        }

        // Acyclic exactly when every component is a single vertex
        // (self-loops aside, which are cycles of one vertex)
        let has_self_loop = edges.iter().any(|(u, v)| u == v);
        prop_assert_eq!(
            Topological::new(&digraph).is_dag(),
            scc.count() == num_vertices && !has_self_loop
        );
    }
}

// Property: union-find and depth-first components agree
proptest! {
    #[test]
    fn prop_union_find_matches_components(graph in prop_digraph(1usize..30usize, 0usize..40usize)) {
        let (num_vertices, edges) = graph;
        let graph = Graph::from_edges(num_vertices, &edges).unwrap();
        let components = ConnectedComponents::new(&graph);

        let mut sets = UnionFind::new(num_vertices);
        for &(u, v) in &edges {
            sets.union(u, v).unwrap();
        }

        prop_assert_eq!(sets.count(), components.count());
        for u in 0..num_vertices {
            for v in 0..num_vertices {
                prop_assert_eq!(sets.connected(u, v).unwrap(), components.connected(u, v));
            }
        }
    }
}

// Property: delete_min yields keys in ascending order
proptest! {
    #[test]
    fn prop_heap_order(keys in prop::collection::vec(-1000i32..1000i32, 0..64)) {
        let mut queue = IndexedPriorityQueue::new(keys.len());
        for (index, &key) in keys.iter().enumerate() {
            queue.insert(index, key).unwrap();
        }

        let mut sorted = keys.clone();
        sorted.sort_unstable();

        // Iteration leaves the queue untouched
        let iterated: Vec<i32> = queue.iter().map(|index| keys[index]).collect();
        prop_assert_eq!(&iterated, &sorted);
        prop_assert_eq!(queue.len(), keys.len());

        let mut drained = Vec::with_capacity(keys.len());
        while !queue.is_empty() {
            let index = queue.delete_min().unwrap();
            drained.push(keys[index]);
        }
        prop_assert_eq!(drained, sorted);
    }
}

/// Random `(u, v)` pairs over `1..=max_vertices` vertices
fn prop_digraph(
    num_vertices: impl Strategy<Value = usize>,
    num_edges: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (num_vertices, num_edges).prop_flat_map(|(n, m)| {
        let n = n.max(1);
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..=m),
        )
    })
}

/// Random weighted arcs with non-negative weights
fn prop_weighted_digraph(
    num_vertices: impl Strategy<Value = usize>,
    num_edges: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (num_vertices, num_edges).prop_flat_map(|(n, m)| {
        let n = n.max(1);
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0.0..100.0f64), 0..=m),
        )
    })
}

/// Random arcs pointing from lower to higher vertex, so always acyclic
fn prop_weighted_dag(
    num_vertices: impl Strategy<Value = usize>,
    num_edges: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    prop_weighted_digraph(num_vertices, num_edges).prop_map(|(n, edges)| {
        let edges = edges
            .into_iter()
            .filter(|(u, v, _)| u != v)
            .map(|(u, v, w)| (u.min(v), u.max(v), w))
            .collect();
        (n, edges)
    })
}

/// A random spanning chain plus random extra edges, so always connected
fn prop_connected_weighted(
    num_vertices: impl Strategy<Value = usize>,
    extra_edges: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    prop_weighted_digraph(num_vertices, extra_edges).prop_flat_map(|(n, extra)| {
        prop::collection::vec(0.0..100.0f64, n - 1).prop_map(move |chain_weights| {
            let mut edges: Vec<_> = chain_weights
                .into_iter()
                .enumerate()
                .map(|(v, w)| (v, v + 1, w))
                .collect();
            edges.extend(extra.iter().copied());
            (n, edges)
        })
    })
}

/// Random integer capacities in `0..20`
fn prop_flow_network(
    num_vertices: impl Strategy<Value = usize>,
    num_edges: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (num_vertices, num_edges).prop_flat_map(|(n, m)| {
        let n = n.max(2);
        (
            Just(n),
            prop::collection::vec(
                (0..n, 0..n, 0u32..20u32).prop_map(|(u, v, c)| (u, v, f64::from(c))),
                0..=m,
            ),
        )
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_graph_invariants() {
        let graph = EdgeWeightedGraph::new(0);
        assert_eq!(Kruskal::new(&graph).unwrap().weight(), 0.0);

        let digraph = Digraph::new(0);
        assert_eq!(StronglyConnectedComponents::new(&digraph).count(), 0);
        assert!(Topological::new(&digraph).is_dag());
    }
}
