//! Set algebra benchmark for the crate's own stores.
//!
//! `InlineSet` trades hashing for a linear scan, which pays off while the
//! set stays small. These groups compare it against `BTreeSet` on either
//! side of that boundary.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use setwise::prelude::*;
use std::collections::BTreeSet;
use std::hint::black_box;

const SIZES: [i32; 4] = [4, 8, 32, 256];

fn benchmark_from_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_from_sequence");

    for size in SIZES {
        let base_vec: Vec<i32> = (0..size).chain(0..size).collect();

        group.bench_with_input(BenchmarkId::new("inline_set", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(InlineSet::from_sequence(black_box(elements))),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("btree_set", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| {
                    black_box(<BTreeSet<i32> as RepeatableSet>::from_sequence(black_box(
                        elements,
                    )))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_intersection");

    for size in SIZES {
        let inline_left: InlineSet<i32> = (0..size).collect();
        let inline_right: InlineSet<i32> = (size / 2..size + size / 2).collect();
        let tree_left: BTreeSet<i32> = (0..size).collect();
        let tree_right: BTreeSet<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("inline_set", size), &size, |bencher, _| {
            bencher.iter(|| black_box(inline_left.intersection(black_box(&inline_right))));
        });

        group.bench_with_input(BenchmarkId::new("btree_set", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(UniqueSet::intersection(&tree_left, black_box(&tree_right)))
            });
        });
    }

    group.finish();
}

fn benchmark_is_disjoint(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_is_disjoint");

    for size in SIZES {
        let evens: InlineSet<i32> = (0..size).map(|element| element * 2).collect();
        let odds: InlineSet<i32> = (0..size).map(|element| element * 2 + 1).collect();

        group.bench_with_input(BenchmarkId::new("inline_set", size), &size, |bencher, _| {
            bencher.iter(|| black_box(evens.is_disjoint(black_box(&odds))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_sequence,
    benchmark_intersection,
    benchmark_is_disjoint
);

criterion_main!(benches);
