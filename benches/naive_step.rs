use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use naive_kmeans::*;
use rand::prelude::*;

fn random_samples(sample_cnt: usize, sample_dims: usize) -> Vec<f64> {
    let mut rnd = rand::rngs::StdRng::seed_from_u64(1337);
    let mut samples = vec![0.0f64; sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rnd.gen_range(0.0, 1.0));
    samples
}

fn naive_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_step");
    for &(sample_cnt, sample_dims, k) in &[(2000, 200, 32), (10000, 8, 32), (20000, 256, 8)] {
        let samples = random_samples(sample_cnt, sample_dims);
        let centroids: Vec<f64> = samples.iter().cloned().take(k * sample_dims).collect();
        let dataset = Dataset::new(&samples, sample_cnt, sample_dims).unwrap();
        let label = format!("{}x{}/k{}", sample_cnt, sample_dims, k);
        let (mut new_centroids, mut counts) = (Vec::new(), Vec::new());

        group.bench_with_input(BenchmarkId::new("iterate", &label), &centroids, |b, centroids| {
            let mut metric = SquaredEuclideanDistance;
            let mut step = NaiveKMeans::new(dataset, &mut metric);
            b.iter(|| step.iterate(centroids, &mut new_centroids, &mut counts).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("par_iterate", &label), &centroids, |b, centroids| {
            let mut metric = SquaredEuclideanDistance;
            let mut step = NaiveKMeans::new(dataset, &mut metric);
            b.iter(|| step.par_iterate(centroids, &mut new_centroids, &mut counts).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, naive_step);
criterion_main!(benches);
