use crate::{
    Centroid, ClusterAccumulator, Dataset, DistanceFunction, DistortionMode, IterationStats, KMeansError,
    NaiveStepConfig, Primitive, Result,
};
use rayon::prelude::*;

/// Single Lloyd step with naive (brute-force) assignment.
///
/// Every sample is compared against every centroid, so a step costs `k * sample_cnt` metric
/// evaluations. This is still the best choice for small datasets, or for data with a
/// dimensionality high enough to defeat any pruning.
///
/// The kernel borrows the samples and the metric, and counts all metric evaluations done
/// during assignment over its whole lifetime (see [`NaiveKMeans::distance_calculations`]).
pub struct NaiveKMeans<'a, T: Primitive, D: DistanceFunction<T>> {
    dataset: Dataset<'a, T>,
    metric: &'a mut D,
    config: NaiveStepConfig<'a, T>,
    distance_calculations: usize,
}

impl<'a, T: Primitive, D: DistanceFunction<T>> NaiveKMeans<'a, T, D> {
    /// Create a new kernel using the default [`NaiveStepConfig`].
    pub fn new(dataset: Dataset<'a, T>, metric: &'a mut D) -> Self {
        Self::with_config(dataset, metric, NaiveStepConfig::default())
    }

    pub fn with_config(dataset: Dataset<'a, T>, metric: &'a mut D, config: NaiveStepConfig<'a, T>) -> Self {
        Self { dataset, metric, config, distance_calculations: 0 }
    }

    pub fn dataset(&self) -> &Dataset<'a, T> { &self.dataset }
    pub fn config(&self) -> &NaiveStepConfig<'a, T> { &self.config }

    /// Amount of metric evaluations done during assignment passes, since this kernel was created.
    pub fn distance_calculations(&self) -> usize { self.distance_calculations }

    /// Run one step: assign every sample to its nearest centroid, and compute the new centroids.
    ///
    /// ## Arguments
    /// - **centroids**: Current cluster centers [row-major] = [<centroid0>,<centroid1>,...]
    /// - **new_centroids**: Overwritten with the updated cluster centers (one entry per centroid)
    /// - **counts**: Overwritten with the amount of samples assigned to each centroid
    ///
    /// ## Returns
    /// The distortion, computed according to the configured [`DistortionMode`].
    ///
    /// ## Panics
    /// If the metric does not report any centroid closer than infinity for a sample.
    pub fn iterate(&mut self, centroids: &[T], new_centroids: &mut Vec<Centroid<T>>, counts: &mut Vec<usize>) -> Result<T> {
        let k = self.check_centroids(centroids)?;
        let sample_dims = self.dataset.sample_dims;

        let metric = &mut *self.metric;
        let acc = self.dataset.iter()
            .fold(ClusterAccumulator::new(k, sample_dims), |mut acc, s| {
                let closest = closest_centroid(&mut *metric, s, centroids, sample_dims);
                acc.add_sample(closest, s);
                acc
            });

        Ok(self.finish_step(centroids, acc, new_centroids, counts))
    }

    /// Parallel version of [`NaiveKMeans::iterate`], with the exact same contract.
    ///
    /// Samples are split into work packets, each folded into a private [`ClusterAccumulator`]
    /// by a worker owning its own clone of the metric. The partial results are merged before
    /// the new centroids and the distortion are computed. Results only differ from
    /// [`NaiveKMeans::iterate`] by floating point summation order.
    pub fn par_iterate(&mut self, centroids: &[T], new_centroids: &mut Vec<Centroid<T>>, counts: &mut Vec<usize>) -> Result<T>
            where D: Clone + Send + Sync {
        let k = self.check_centroids(centroids)?;
        let sample_dims = self.dataset.sample_dims;

        // manually calculate work-packet size, because rayon does not do static scheduling (which is more apropriate here)
        let work_packet_size = (self.dataset.sample_cnt / rayon::current_num_threads()).max(1);
        log::trace!("Assigning {} samples in work packets of at least {}", self.dataset.sample_cnt, work_packet_size);

        let metric: &D = &*self.metric;
        let acc = self.dataset.samples.par_chunks_exact(sample_dims)
            .with_min_len(work_packet_size)
            .fold(
                || (ClusterAccumulator::new(k, sample_dims), metric.clone()),
                |(mut acc, mut metric), s| {
                    let closest = closest_centroid(&mut metric, s, centroids, sample_dims);
                    acc.add_sample(closest, s);
                    (acc, metric)
                })
            .map(|(acc, _)| acc)
            .reduce(|| ClusterAccumulator::new(k, sample_dims), ClusterAccumulator::merge);

        Ok(self.finish_step(centroids, acc, new_centroids, counts))
    }

    fn check_centroids(&self, centroids: &[T]) -> Result<usize> {
        let sample_dims = self.dataset.sample_dims;
        if centroids.is_empty() {
            return Err(KMeansError::NoCentroids);
        }
        if centroids.len() % sample_dims != 0 {
            return Err(KMeansError::CentroidShape { len: centroids.len(), sample_dims });
        }
        Ok(centroids.len() / sample_dims)
    }

    fn finish_step(&mut self, centroids: &[T], acc: ClusterAccumulator<T>,
                   new_centroids: &mut Vec<Centroid<T>>, counts: &mut Vec<usize>) -> T {
        let k = acc.k();
        let (centroids_out, counts_out) = acc.into_centroids();
        *new_centroids = centroids_out;
        *counts = counts_out;

        self.distance_calculations += k * self.dataset.sample_cnt;

        let distortion = self.distortion(centroids, new_centroids);
        let empty_clusters = new_centroids.iter().filter(|c| c.is_empty()).count();
        if empty_clusters > 0 {
            log::warn!("{} of {} clusters did not get any samples assigned", empty_clusters, k);
        }
        log::debug!("Step done: k={} samples={} distortion={:e} distance calculations={}",
            k, self.dataset.sample_cnt, distortion, self.distance_calculations);

        (self.config.iteration_done)(&IterationStats {
            k,
            sample_cnt: self.dataset.sample_cnt,
            empty_clusters,
            distortion,
            distance_calculations: self.distance_calculations,
        });
        distortion
    }

    /// Fold the movement of every centroid into a single value.
    /// Empty clusters are measured against a centroid with `T::max_value()` in every coordinate.
    fn distortion(&mut self, centroids: &[T], new_centroids: &[Centroid<T>]) -> T {
        let sample_dims = self.dataset.sample_dims;
        let sentinel = vec![T::max_value(); sample_dims];
        let mode = self.config.distortion;

        let norm: T = centroids.chunks_exact(sample_dims)
            .zip(new_centroids.iter())
            .map(|(old, new)| {
                let new = new.as_slice().unwrap_or(&sentinel[..]);
                let dist = self.metric.distance(old, new);
                let dist = dist * dist;
                match mode {
                    DistortionMode::FourthPower => dist * dist,
                    DistortionMode::Squared => dist,
                }
            })
            .sum();
        norm.sqrt()
    }
}

/// Index of the centroid nearest to **sample**. Ties go to the lower index.
#[inline(always)]
fn closest_centroid<T: Primitive, D: DistanceFunction<T>>(metric: &mut D, sample: &[T], centroids: &[T], sample_dims: usize) -> usize {
    let k = centroids.len() / sample_dims;
    let mut min_distance = T::infinity();
    let mut closest = k;
    for (j, c) in centroids.chunks_exact(sample_dims).enumerate() {
        let distance = metric.distance(sample, c);
        if distance < min_distance {
            min_distance = distance;
            closest = j;
        }
    }
    assert!(closest != k, "no centroid out of {} is closer than infinity to sample {:?}", k, sample);
    closest
}
