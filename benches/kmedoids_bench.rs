use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmedoid::{Dissimilarity, DistanceMatrix, Euclidean, KMedoids};
use rand::prelude::*;

fn generate_points(n_samples: usize, n_features: usize) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..n_samples)
        .map(|_| (0..n_features).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let points = generate_points(200, 8);

    let mut group = c.benchmark_group("kmedoids_fit");

    for &n_clusters in &[2, 5, 10] {
        group.bench_with_input(
            BenchmarkId::new("n200_d8", n_clusters),
            &n_clusters,
            |b, &k| {
                let model = KMedoids::new(k).max_iter(50);

                b.iter(|| {
                    black_box(
                        model
                            .fit(black_box(&points), |a, b| Euclidean.distance(a, b))
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_matrix_build(c: &mut Criterion) {
    let points = generate_points(500, 16);

    let mut group = c.benchmark_group("distance_matrix");

    group.bench_function("sequential_n500_d16", |b| {
        b.iter(|| {
            black_box(
                DistanceMatrix::from_fn(black_box(&points), |a, b| Euclidean.distance(a, b))
                    .unwrap(),
            )
        });
    });

    group.bench_function("parallel_n500_d16", |b| {
        b.iter(|| {
            black_box(
                DistanceMatrix::from_fn_parallel(black_box(&points), |a, b| {
                    Euclidean.distance(a, b)
                })
                .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit, bench_matrix_build);
criterion_main!(benches);
