//! Criterion micro-benchmarks for exploration-graph operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tether_core::CellPos;
use tether_graph::ExplorationGraph;

/// Comb: a spine along row 0 with a tooth hanging down from every column.
fn comb(teeth: i32, depth: i32) -> ExplorationGraph {
    let mut g = ExplorationGraph::new(CellPos::new(0, 0));
    for col in 1..teeth {
        g.add_node(CellPos::new(0, col), col as u32, false, CellPos::new(0, col - 1))
            .unwrap();
    }
    for col in 0..teeth {
        for row in 1..=depth {
            g.add_node(
                CellPos::new(row, col),
                (col + row) as u32,
                false,
                CellPos::new(row - 1, col),
            )
            .unwrap();
        }
    }
    g
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_comb_10k", |b| {
        b.iter(|| black_box(comb(100, 99)));
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let g = comb(100, 99);
    c.bench_function("shortest_path_across_comb", |b| {
        b.iter(|| {
            let path = g
                .shortest_path(CellPos::new(99, 0), CellPos::new(99, 99))
                .unwrap();
            black_box(path);
        });
    });
}

fn bench_frontier(c: &mut Criterion) {
    let g = comb(100, 99);
    c.bench_function("unvisited_snapshot_10k", |b| {
        b.iter(|| black_box(g.unvisited_nodes()));
    });
}

criterion_group!(benches, bench_build, bench_shortest_path, bench_frontier);
criterion_main!(benches);
