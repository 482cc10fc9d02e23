use crate::{KMeansError, Primitive, Result};

/// Borrowed, row-major view of the samples a k-means step operates on.
///
/// The samples are owned by the caller and are never copied or mutated.
///
/// ## Fields
/// - **samples**: Sample buffer [row-major] = [<sample0>,<sample1>,<sample2>,...]
/// - **sample_cnt**: Amount of samples contained in **samples**
/// - **sample_dims**: Amount of dimensions each sample has
#[derive(Clone, Copy, Debug)]
pub struct Dataset<'a, T: Primitive> {
    pub(crate) samples: &'a [T],
    pub(crate) sample_cnt: usize,
    pub(crate) sample_dims: usize,
}
impl<'a, T: Primitive> Dataset<'a, T> {
    /// Create a new view over **samples**.
    ///
    /// ## Errors
    /// - [`KMeansError::ZeroDimensions`] if **sample_dims** is zero
    /// - [`KMeansError::SampleShape`] if `samples.len() != sample_cnt * sample_dims`
    pub fn new(samples: &'a [T], sample_cnt: usize, sample_dims: usize) -> Result<Self> {
        if sample_dims == 0 {
            return Err(KMeansError::ZeroDimensions);
        }
        if sample_cnt.checked_mul(sample_dims) != Some(samples.len()) {
            return Err(KMeansError::SampleShape { len: samples.len(), sample_cnt, sample_dims });
        }
        Ok(Self { samples, sample_cnt, sample_dims })
    }

    pub fn sample_cnt(&self) -> usize { self.sample_cnt }
    pub fn sample_dims(&self) -> usize { self.sample_dims }
    pub fn is_empty(&self) -> bool { self.sample_cnt == 0 }

    /// Borrow the sample with index **idx**.
    pub fn sample(&self, idx: usize) -> &'a [T] {
        let offset = idx * self.sample_dims;
        &self.samples[offset..offset + self.sample_dims]
    }

    /// Iterate over all samples in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'a, T> {
        self.samples.chunks_exact(self.sample_dims)
    }
}
