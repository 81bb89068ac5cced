use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use ppinet::algorithms::most_confident_path;
use ppinet::graph::{EdgeListGraph, GraphMetrics, PpiGraph};

/// Layered synthetic network: `layers + 1` ranks of `width` proteins with
/// full bipartite connections between adjacent ranks and deterministic
/// pseudo-varied confidences.
fn synthetic_network(layers: usize, width: usize) -> EdgeListGraph {
    let mut graph = EdgeListGraph::new();
    for layer in 0..layers {
        for i in 0..width {
            for j in 0..width {
                let weight = 0.5 + ((i * 7 + j * 13 + layer) % 50) as f64 / 100.0;
                graph.add_edge(
                    &format!("L{layer}N{i}"),
                    &format!("L{}N{j}", layer + 1),
                    weight,
                );
            }
        }
    }
    graph
}

fn bench_metrics(c: &mut Criterion) {
    let graph = synthetic_network(8, 8);
    c.bench_function("metrics_full_sweep", |b| {
        b.iter(|| GraphMetrics::compute(black_box(&graph)));
    });
}

fn bench_most_confident_path(c: &mut Criterion) {
    let graph = synthetic_network(8, 8);
    c.bench_function("most_confident_path", |b| {
        b.iter(|| most_confident_path(black_box(&graph), "L0N0", "L8N7"));
    });
}

criterion_group!(benches, bench_metrics, bench_most_confident_path);
criterion_main!(benches);
