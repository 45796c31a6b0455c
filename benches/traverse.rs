use battleship_navigation::standard::GridConfig;
use battleship_navigation::types::Coordinate;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use itertools::Itertools;

fn bench_traverse_classic(c: &mut Criterion) {
    let navigator = GridConfig::default().navigator().unwrap();
    c.bench_function("traverse classic board size 2", |b| {
        b.iter(|| black_box(&navigator).traverse_grid(black_box(2)))
    });
    c.bench_function("traverse classic board size 5 unique", |b| {
        b.iter(|| black_box(&navigator).traverse_grid_unique(black_box(5)))
    });
}

fn bench_alignments_classic(c: &mut Criterion) {
    let navigator = GridConfig::default().navigator().unwrap();
    let hits: Vec<Coordinate<char, u8>> = "A1 A2 A4 B2 C2 C5 D2 E7 E8 E9 G3 H3 J3 J10"
        .split_whitespace()
        .map(|c| c.parse().unwrap())
        .collect_vec();
    c.bench_function("find alignments classic board", |b| {
        b.iter(|| black_box(&navigator).find_alignments(black_box(hits.clone()), 4))
    });
}

fn bench_surrounding_everywhere(c: &mut Criterion) {
    let navigator = GridConfig::default().navigator().unwrap();
    let cells = navigator.grid_coordinates();
    c.bench_function("surrounding coordinates classic board", |b| {
        b.iter(|| {
            cells
                .iter()
                .map(|cell| black_box(&navigator).get_surrounding_coordinates(cell).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    benches,
    bench_traverse_classic,
    bench_alignments_classic,
    bench_surrounding_everywhere
);
criterion_main!(benches);
