//! Criterion benchmarks for graph algorithms
//!
//! Covers the hot paths:
//! - Adjacency construction from edge lists
//! - Dijkstra and Bellman-Ford shortest paths
//! - Lazy Prim, eager Prim and Kruskal spanning trees
//! - Ford-Fulkerson max flow and Kosaraju strong components

use classic_graph::{
    BellmanFord, Digraph, Dijkstra, DirectedEdge, EdgeWeightedDigraph, EdgeWeightedGraph,
    FlowNetwork, FordFulkerson, Kruskal, LazyPrim, Prim, StronglyConnectedComponents,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Random weighted edges, `edges_per_vertex` out of every vertex
fn generate_random_edges(num_vertices: usize, edges_per_vertex: usize) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::with_capacity(num_vertices * edges_per_vertex);
    let mut rng_state = 12345_u64; // Simple LCG for reproducibility

    for vertex in 0..num_vertices {
        for _ in 0..edges_per_vertex {
            rng_state = rng_state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let target = (rng_state % num_vertices as u64) as usize;
            let weight = (rng_state >> 33) as f64 / f64::from(u32::MAX);

            if target != vertex {
                edges.push((vertex, target, weight));
            }
        }
    }

    edges
}

/// Benchmark: adjacency construction from edge list
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 1000, 10_000] {
        let edges = generate_random_edges(size, 4);

        group.bench_with_input(BenchmarkId::new("digraph", size), &edges, |b, edges| {
            b.iter(|| {
                let digraph = EdgeWeightedDigraph::from_edges(size, black_box(edges)).unwrap();
                black_box(digraph);
            });
        });

        group.bench_with_input(BenchmarkId::new("digraph_add_edge", size), &edges, |b, edges| {
            b.iter(|| {
                let mut digraph = EdgeWeightedDigraph::new(size);
                for &(from, to, weight) in black_box(edges) {
                    digraph.add_edge(DirectedEdge::new(from, to, weight)).unwrap();
                }
                black_box(digraph);
            });
        });

        group.bench_with_input(BenchmarkId::new("undirected", size), &edges, |b, edges| {
            b.iter(|| {
                let graph = EdgeWeightedGraph::from_edges(size, black_box(edges)).unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

/// Benchmark: single-source shortest paths
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for size in [100, 1000, 10_000] {
        let digraph = EdgeWeightedDigraph::from_edges(size, &generate_random_edges(size, 4)).unwrap();

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &digraph, |b, digraph| {
            b.iter(|| black_box(Dijkstra::new(black_box(digraph), 0).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &digraph, |b, digraph| {
            b.iter(|| black_box(BellmanFord::new(black_box(digraph), 0).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: minimum spanning trees
fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_trees");

    for size in [100, 1000, 10_000] {
        let graph = EdgeWeightedGraph::from_edges(size, &generate_random_edges(size, 4)).unwrap();

        group.bench_with_input(BenchmarkId::new("lazy_prim", size), &graph, |b, graph| {
            b.iter(|| black_box(LazyPrim::new(black_box(graph))));
        });

        group.bench_with_input(BenchmarkId::new("prim", size), &graph, |b, graph| {
            b.iter(|| black_box(Prim::new(black_box(graph)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("kruskal", size), &graph, |b, graph| {
            b.iter(|| black_box(Kruskal::new(black_box(graph)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: max flow (fresh network per iteration, flows are written in place)
fn bench_max_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow");

    for size in [100, 1000] {
        let edges: Vec<_> = generate_random_edges(size, 4)
            .into_iter()
            .map(|(u, v, w)| (u, v, (w * 100.0).round()))
            .collect();
        let network = FlowNetwork::from_edges(size, &edges).unwrap();

        group.bench_with_input(BenchmarkId::new("ford_fulkerson", size), &network, |b, network| {
            b.iter_batched(
                || network.clone(),
                |mut network| black_box(FordFulkerson::new(&mut network, 0, size - 1).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: Kosaraju strong components
fn bench_strong_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("strong_components");

    for size in [100, 1000, 10_000] {
        let arcs: Vec<_> = generate_random_edges(size, 2)
            .into_iter()
            .map(|(u, v, _)| (u, v))
            .collect();
        let digraph = Digraph::from_edges(size, &arcs).unwrap();

        group.bench_with_input(BenchmarkId::new("kosaraju", size), &digraph, |b, digraph| {
            b.iter(|| black_box(StronglyConnectedComponents::new(black_box(digraph))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_shortest_paths,
    bench_spanning_trees,
    bench_max_flow,
    bench_strong_components
);
criterion_main!(benches);
