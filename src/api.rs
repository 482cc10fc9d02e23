use crate::Primitive;

pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&IterationStats<T>);

/// Updated position of a single cluster, as produced by one k-means step.
///
/// A cluster that lost all of its samples is reported as [`Centroid::Empty`] instead of
/// a numeric placeholder, so no arithmetic can accidentally be done on it. What to do
/// with an empty cluster (reseed it, drop it) is up to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Centroid<T: Primitive> {
    /// Mean of all samples assigned to the cluster
    Valid(Vec<T>),
    /// No sample was assigned to the cluster
    Empty,
}
impl<T: Primitive> Centroid<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Centroid::Empty)
    }

    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Centroid::Valid(c) => Some(c),
            Centroid::Empty => None,
        }
    }

    /// Flatten **centroids** into a row-major buffer, filling every coordinate of empty
    /// clusters with `T::max_value()`. This is the layout consumers relying on a numeric
    /// "invalid centroid" marker expect.
    pub fn flatten_with_sentinel(centroids: &[Centroid<T>], sample_dims: usize) -> Vec<T> {
        let mut res = Vec::with_capacity(centroids.len() * sample_dims);
        for c in centroids {
            match c {
                Centroid::Valid(c) => res.extend_from_slice(c),
                Centroid::Empty => res.extend(std::iter::repeat(T::max_value()).take(sample_dims)),
            }
        }
        res
    }
}

/// How the per-cluster movement is folded into the distortion value returned by a step.
///
/// With `d_j` being the distance between the old and the new position of cluster `j`:
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DistortionMode {
    /// `sqrt(sum((d_j^2)^2))`. The squared movement is squared a second time before
    /// summing. Convergence thresholds tuned against earlier releases depend on this.
    #[default]
    FourthPower,
    /// `sqrt(sum(d_j^2))`, the norm of the centroid movement.
    Squared,
}

/// Status information about a finished step, handed to the `iteration_done` callback.
///
/// ## Fields
/// - **k**: Amount of clusters in this step
/// - **sample_cnt**: Amount of samples that were assigned
/// - **empty_clusters**: Amount of clusters without any sample
/// - **distortion**: Distortion returned by the step
/// - **distance_calculations**: Cumulative amount of metric evaluations during assignment
#[derive(Clone, Debug, PartialEq)]
pub struct IterationStats<T: Primitive> {
    pub k: usize,
    pub sample_cnt: usize,
    pub empty_clusters: usize,
    pub distortion: T,
    pub distance_calculations: usize,
}

/// Configuration of a [`crate::NaiveKMeans`] kernel.
///
/// For a more detailed information about all possible options, have a look at [`NaiveStepConfigBuilder`].
pub struct NaiveStepConfig<'a, T: Primitive> {
    /// Callback that is called after each step
    /// ## Arguments
    /// - **stats**: [`IterationStats`] of the step that just finished
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Formula used to compute the distortion
    pub(crate) distortion: DistortionMode,
}
impl<'a, T: Primitive> Default for NaiveStepConfig<'a, T> {
    fn default() -> Self {
        Self {
            iteration_done: &|_| {},
            distortion: DistortionMode::default(),
        }
    }
}
impl<'a, T: Primitive> NaiveStepConfig<'a, T> {
    /// Use the [`NaiveStepConfigBuilder`] to build a [`NaiveStepConfig`] instance.
    pub fn build() -> NaiveStepConfigBuilder<'a, T> {
        NaiveStepConfigBuilder { config: NaiveStepConfig::default() }
    }

    pub fn distortion(&self) -> DistortionMode { self.distortion }
}
impl<'a, T: Primitive> std::fmt::Debug for NaiveStepConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveStepConfig").field("distortion", &self.distortion).finish_non_exhaustive()
    }
}

pub struct NaiveStepConfigBuilder<'a, T: Primitive> {
    config: NaiveStepConfig<'a, T>,
}
impl<'a, T: Primitive> NaiveStepConfigBuilder<'a, T> {
    /// Set the callback that should be called after each step.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the formula used to compute the distortion. For more information,
    /// see documentation of [`DistortionMode`].
    /// ## Default
    /// [`DistortionMode::FourthPower`]
    pub fn distortion(mut self, distortion: DistortionMode) -> Self {
        self.config.distortion = distortion; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> NaiveStepConfig<'a, T> { self.config }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_fills_empty_clusters_with_max() {
        let centroids = vec![Centroid::Valid(vec![1.0f64, 2.0]), Centroid::Empty, Centroid::Valid(vec![3.0, 4.0])];
        assert_eq!(
            Centroid::flatten_with_sentinel(&centroids, 2),
            vec![1.0, 2.0, f64::MAX, f64::MAX, 3.0, 4.0]
        );
        assert!(centroids[1].is_empty());
        assert_eq!(centroids[1].as_slice(), None);
        assert_eq!(centroids[2].as_slice(), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn builder_overrides_defaults() {
        let conf: NaiveStepConfig<f32> = NaiveStepConfig::default();
        assert_eq!(conf.distortion(), DistortionMode::FourthPower);
        let conf: NaiveStepConfig<f32> = NaiveStepConfig::build().distortion(DistortionMode::Squared).build();
        assert_eq!(conf.distortion(), DistortionMode::Squared);
    }
}
