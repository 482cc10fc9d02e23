use naive_kmeans::*;
use rand::prelude::*;

fn main() {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 16, 4, 100);

    // Generate some random data
    let mut rnd = rand::rngs::StdRng::seed_from_u64(1337);
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rnd.gen_range(0.0, 1.0));

    // Seed with random samples
    let mut centroids: Vec<f64> = samples.chunks_exact(sample_dims)
        .choose_multiple(&mut rnd, k).into_iter()
        .flatten().cloned().collect();

    let conf = NaiveStepConfig::build()
        .iteration_done(&|s| println!("Distortion: {:.6} | Empty clusters: {}", s.distortion, s.empty_clusters))
        .build();
    let dataset = Dataset::new(&samples, sample_cnt, sample_dims).expect("sample buffer matches its shape");
    let mut metric = EuclideanDistance;
    let mut step = NaiveKMeans::with_config(dataset, &mut metric, conf);

    let (mut new_centroids, mut counts) = (Vec::new(), Vec::new());
    for _ in 0..max_iter {
        let distortion = step.par_iterate(&centroids, &mut new_centroids, &mut counts).expect("centroids match the samples");
        // Reseed empty clusters from a random sample, keep the old position otherwise
        for (idx, c) in new_centroids.iter().enumerate() {
            let dst = &mut centroids[idx * sample_dims..(idx + 1) * sample_dims];
            match c {
                Centroid::Valid(c) => dst.copy_from_slice(c),
                Centroid::Empty => dst.copy_from_slice(dataset.sample(rnd.gen_range(0, sample_cnt))),
            }
        }
        if distortion < 1e-8 {
            break;
        }
    }

    println!("Centroids: {:?}", centroids);
    println!("Cluster-Sizes: {:?}", counts);
    println!("Distance calculations: {}", step.distance_calculations());
}
