use crate::{DistanceFunction, Primitive};

/// Euclidean (L2) distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl<T: Primitive> DistanceFunction<T> for EuclideanDistance {
    #[inline(always)]
    fn distance(&mut self, a: &[T], b: &[T]) -> T {
        SquaredEuclideanDistance.distance(a, b).sqrt()
    }
}

/// Squared euclidean distance. Cheaper than [`EuclideanDistance`] and yields the same
/// nearest-centroid assignments.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredEuclideanDistance;

impl<T: Primitive> DistanceFunction<T> for SquaredEuclideanDistance {
    #[inline(always)]
    fn distance(&mut self, a: &[T], b: &[T]) -> T {
        a.iter().zip(b.iter())
            .map(|(&sv, &cv)| sv - cv)      // <sample> - <centroid>
            .map(|v| v * v)                 // <vec_components> ^2
            .sum()                          // sum(<vec_components>^2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_root_of_squared() {
        let (a, b) = ([0.0f64, 0.0], [3.0f64, 4.0]);
        assert_eq!(SquaredEuclideanDistance.distance(&a, &b), 25.0);
        assert_eq!(EuclideanDistance.distance(&a, &b), 5.0);
        assert_eq!(EuclideanDistance.distance(&b, &b), 0.0);
    }

    #[test]
    fn sentinel_vector_is_infinitely_far() {
        let a = [0.0f32, 1.0];
        let b = [f32::MAX, f32::MAX];
        assert!(EuclideanDistance.distance(&a, &b).is_infinite());
    }
}
