use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knn::ml::classic::{euclidean, BoundedNeighbourCollection};
use knn::{Dataset, KNNClassifier};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

const FEATURES: usize = 16;

fn clustered_dataset(rows: usize, rng: &mut ChaCha8Rng) -> Dataset<u8> {
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut values = Vec::with_capacity(rows * FEATURES);
    let mut labels = Vec::with_capacity(rows);
    for i in 0..rows {
        let label = (i % 4) as u8;
        let centre = f64::from(label) * 3.0;
        values.extend((0..FEATURES).map(|_| centre + noise.sample(rng)));
        labels.push(label);
    }
    let features = Array2::from_shape_vec((rows, FEATURES), values).unwrap();
    Dataset::from_array(features, labels).unwrap()
}

fn bench_distance(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let a: Vec<f64> = (0..256).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let b: Vec<f64> = (0..256).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let mut group = c.benchmark_group("euclidean");
    group.bench_function("unbounded", |bench| {
        bench.iter(|| euclidean(black_box(&a), black_box(&b), f64::INFINITY))
    });
    group.bench_function("tight_bound", |bench| {
        bench.iter(|| euclidean(black_box(&a), black_box(&b), 0.5))
    });
    group.finish();
}

fn bench_collection(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let distances: Vec<f64> = (0..10_000).map(|_| rng.gen_range(0.0..100.0)).collect();

    let mut group = c.benchmark_group("bounded_neighbours");
    for k in [1, 5, 25] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |bench, &k| {
            bench.iter(|| {
                let mut nearest = BoundedNeighbourCollection::new(k).unwrap();
                for (i, &d) in distances.iter().enumerate() {
                    nearest.insert(i % 3, d);
                }
                nearest.vote().unwrap()
            })
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let data = clustered_dataset(5_000, &mut rng);
    let query: Vec<f64> = (0..FEATURES).map(|_| rng.gen_range(0.0..9.0)).collect();

    let mut group = c.benchmark_group("classify");
    for k in [1, 5, 25] {
        let mut knn = KNNClassifier::new(k).unwrap();
        knn.train(&data).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &query, |bench, query| {
            bench.iter(|| knn.classify(black_box(query)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_collection, bench_classify);
criterion_main!(benches);
