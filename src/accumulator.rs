use crate::{Centroid, Primitive};

/// Per-cluster running sums and sample counts of one assignment pass.
///
/// Accumulators over disjoint sample sets can be combined with [`ClusterAccumulator::merge`],
/// which is an element-wise addition (commutative and associative). This is what allows
/// the assignment pass to run either as one sequential fold or as independent work packets.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterAccumulator<T: Primitive> {
    sample_dims: usize,
    sums: Vec<T>,
    counts: Vec<usize>,
}
impl<T: Primitive> ClusterAccumulator<T> {
    pub fn new(k: usize, sample_dims: usize) -> Self {
        Self {
            sample_dims,
            sums: vec![T::zero(); k * sample_dims],
            counts: vec![0usize; k],
        }
    }

    pub fn k(&self) -> usize { self.counts.len() }
    pub fn counts(&self) -> &[usize] { &self.counts }

    #[inline(always)]
    pub fn add_sample(&mut self, cluster: usize, sample: &[T]) {
        let offset = cluster * self.sample_dims;
        self.sums[offset..offset + self.sample_dims].iter_mut()
            .zip(sample.iter())
            .for_each(|(c, s)| *c += s);
        self.counts[cluster] += 1;
    }

    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.sums.len(), other.sums.len());
        self.sums.iter_mut().zip(other.sums.iter()).for_each(|(a, b)| *a += b);
        self.counts.iter_mut().zip(other.counts.iter()).for_each(|(a, b)| *a += b);
        self
    }

    /// Turn the running sums into cluster means. Clusters without samples become [`Centroid::Empty`].
    pub fn into_centroids(self) -> (Vec<Centroid<T>>, Vec<usize>) {
        let centroids = self.sums.chunks_exact(self.sample_dims)
            .zip(self.counts.iter().cloned())
            .map(|(sum, cnt)| {
                if cnt == 0 {
                    return Centroid::Empty;
                }
                // usize always fits into a float, at worst with rounding
                let cnt = T::from(cnt).unwrap_or_else(T::infinity);
                Centroid::Valid(sum.iter().map(|&v| v / cnt).collect())
            })
            .collect();
        (centroids, self.counts)
    }
}
