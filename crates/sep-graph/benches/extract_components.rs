use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sep_graph::{extract_components, AdjacencyList, Fragment};

fn grid(side: usize) -> AdjacencyList {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                edges.push((id, id + 1));
            }
            if row + 1 < side {
                edges.push((id, id + side));
            }
        }
    }
    AdjacencyList::from_edge_list(side * side, &edges).unwrap()
}

fn extract_bench(c: &mut Criterion) {
    let side = 300;
    let root = Fragment::root(grid(side).to_compressed());
    // The middle column splits the grid into two halves.
    let separator: BTreeSet<usize> = (0..side).map(|row| row * side + side / 2).collect();

    c.bench_function("extract_components_grid_300", |b| {
        b.iter(|| {
            let fragments = extract_components(&root, &separator);
            black_box(fragments);
        });
    });
}

criterion_group!(benches, extract_bench);
criterion_main!(benches);
