use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hopgraph_core::Graph;

/// Square grid where each cell links right and down.
fn grid(side: u32) -> Graph<u32> {
    let mut graph = Graph::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let cell = row * side + col;
            if col + 1 < side {
                graph.add_edge(cell, cell + 1);
            }
            if row + 1 < side {
                graph.add_edge(cell, cell + side);
            }
        }
    }
    graph
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path.grid");

    for side in [8u32, 32, 128] {
        let graph = grid(side);
        let corner = side * side - 1;
        group.throughput(Throughput::Elements(graph.vertex_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("corner_to_corner", side),
            &graph,
            |b, graph| b.iter(|| black_box(graph.shortest_path(&0, black_box(&corner)))),
        );

        group.bench_with_input(
            BenchmarkId::new("unreachable", side),
            &graph,
            |b, graph| b.iter(|| black_box(graph.shortest_path(black_box(&corner), &0))),
        );
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build.grid_64", |b| b.iter(|| black_box(grid(64))));
}

criterion_group!(benches, bench_shortest_path, bench_build);
criterion_main!(benches);
