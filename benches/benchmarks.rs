//! Benchmarks for fuzzy distribution training and queries.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fuzzy_dist::{Config, Distribution};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn random_rows(n_rows: usize, n_features: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n_rows)
        .map(|_| {
            let mut row: Vec<f64> = (0..n_features).map(|_| rng.random_range(0.0..10.0)).collect();
            let y = row.iter().sum::<f64>() + rng.random_range(-1.0..1.0);
            row.push(y);
            row
        })
        .collect()
}

fn config(terms: usize) -> Config {
    Config::builder()
        .feature_terms(terms)
        .dependent_terms(terms)
        .threshold(0.05)
        .build()
        .unwrap()
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");

    for n_rows in [100, 500, 1000] {
        let data = random_rows(n_rows, 4, 42);

        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &n_rows, |b, _| {
            b.iter(|| {
                let dist: Distribution = Distribution::train(black_box(&data), &config(5)).unwrap();
                black_box(dist)
            });
        });
    }

    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    for n_terms in [3, 7, 15] {
        let data = random_rows(200, 8, 7);
        let dist: Distribution = Distribution::train(&data, &config(n_terms)).unwrap();
        let a = data[0][..8].to_vec();
        let b = data[1][..8].to_vec();

        group.bench_with_input(BenchmarkId::from_parameter(n_terms), &n_terms, |bench, _| {
            bench.iter(|| black_box(dist.distance(black_box(&a), black_box(&b))));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let data = random_rows(1000, 4, 3);
    let dist: Distribution = Distribution::train(&data, &config(5)).unwrap();
    let queries: Vec<Vec<f64>> = random_rows(64, 4, 9)
        .into_iter()
        .map(|mut r| {
            r.pop();
            r
        })
        .collect();

    c.bench_function("estimate_64_queries", |b| {
        b.iter(|| {
            for q in &queries {
                let _ = black_box(dist.estimate(black_box(q), 0.2));
            }
        });
    });
}

criterion_group!(benches, bench_train, bench_distance, bench_classify);
criterion_main!(benches);
