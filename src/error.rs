use thiserror::Error;

/// Precondition failures detected at the boundary of a k-means step.
///
/// These are checked once per call, never inside the per-sample loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KMeansError {
    #[error("sample buffer holds {len} values, expected {sample_cnt} samples x {sample_dims} dims")]
    SampleShape { len: usize, sample_cnt: usize, sample_dims: usize },
    #[error("samples must have at least one dimension")]
    ZeroDimensions,
    #[error("at least one centroid is required")]
    NoCentroids,
    #[error("centroid buffer holds {len} values, which is not a multiple of the sample dimensionality {sample_dims}")]
    CentroidShape { len: usize, sample_dims: usize },
}

/// Convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, KMeansError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_shape() {
        let err = KMeansError::SampleShape { len: 5, sample_cnt: 3, sample_dims: 2 };
        assert_eq!(err.to_string(), "sample buffer holds 5 values, expected 3 samples x 2 dims");
        let err = KMeansError::CentroidShape { len: 7, sample_dims: 3 };
        assert!(err.to_string().contains("multiple of the sample dimensionality 3"));
    }
}
