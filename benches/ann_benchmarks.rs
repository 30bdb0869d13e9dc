//! Benchmarks for tree construction and queries

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use oxiann::{AnnIndex, AnnTree, DenseVector, KdTree, RpTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const POINTS: usize = 2_000;
const DIMENSION: usize = 8;

fn random_points(seed: u64, count: usize) -> Vec<DenseVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| DenseVector::new((0..DIMENSION).map(|_| rng.gen_range(-1.0..1.0)).collect()))
        .collect()
}

fn built_kd_tree(points: &[DenseVector], balanced: bool) -> KdTree<DenseVector, ()> {
    let mut tree: KdTree<DenseVector, ()> = AnnTree::kd();
    tree.construct_from_vectors(points.iter().cloned()).unwrap();
    if balanced {
        tree.balance();
    }
    tree
}

/// Benchmark bulk insertion
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.measurement_time(Duration::from_secs(10));
    group.throughput(Throughput::Elements(POINTS as u64));
    let points = random_points(1, POINTS);

    group.bench_function("kd_tree", |b| {
        b.iter(|| black_box(built_kd_tree(&points, false)));
    });
    group.bench_function("rp_tree", |b| {
        b.iter(|| {
            let mut tree: RpTree<DenseVector, ()> = AnnTree::rp(7);
            tree.construct_from_vectors(points.iter().cloned()).unwrap();
            black_box(tree)
        });
    });

    group.finish();
}

/// Benchmark rebalancing an insertion-ordered tree
fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");
    group.throughput(Throughput::Elements(POINTS as u64));
    let points = random_points(2, POINTS);

    group.bench_function("kd_tree", |b| {
        b.iter_batched(
            || built_kd_tree(&points, false),
            |mut tree| {
                tree.balance();
                black_box(tree)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark k-NN and radius search
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.measurement_time(Duration::from_secs(10));
    let points = random_points(3, POINTS);
    let queries = random_points(4, 100);
    group.throughput(Throughput::Elements(queries.len() as u64));

    for (name, balanced) in [("unbalanced", false), ("balanced", true)] {
        let tree = built_kd_tree(&points, balanced);
        group.bench_function(format!("knn_10_{name}"), |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(tree.nearest_neighbours(query, 10).unwrap());
                }
            });
        });
        group.bench_function(format!("radius_{name}"), |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(tree.within_radius(query, 0.5).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_balance, bench_search);
criterion_main!(benches);
