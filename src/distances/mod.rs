use crate::Primitive;

mod euclideandistance;
mod histogramdistance;
mod manhattandistance;

pub use euclideandistance::{EuclideanDistance, SquaredEuclideanDistance};
pub use histogramdistance::HistogramDistance;
pub use manhattandistance::ManhattanDistance;

/// Pairwise distance between two samples of equal dimensionality.
///
/// The metric is taken by mutable reference, so implementations are free to keep
/// internal state (caches, statistics) between evaluations. The returned value has
/// to be non-negative, and consistent for equal inputs within one run.
pub trait DistanceFunction<T: Primitive> {
    fn distance(&mut self, a: &[T], b: &[T]) -> T;
}
