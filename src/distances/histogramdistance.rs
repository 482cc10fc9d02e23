use crate::{DistanceFunction, Primitive};

/// One-dimensional earth mover's distance between two histograms, computed over
/// their cumulative sums. Bins are expected in the same order in both samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistogramDistance;

impl<T: Primitive> DistanceFunction<T> for HistogramDistance {
    #[inline(always)]
    fn distance(&mut self, a: &[T], b: &[T]) -> T {
        let mut total = T::zero();
        let mut cdf_a = T::zero();
        let mut cdf_b = T::zero();
        for (x, y) in a.iter().zip(b.iter()) {
            cdf_a += x;
            cdf_b += y;
            total += (cdf_a - cdf_b).abs();
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_mass_one_bin_costs_one() {
        let a = [1.0f64, 0.0, 0.0];
        let b = [0.0f64, 1.0, 0.0];
        let c = [0.0f64, 0.0, 1.0];
        assert_eq!(HistogramDistance.distance(&a, &b), 1.0);
        assert_eq!(HistogramDistance.distance(&a, &c), 2.0);
        assert_eq!(HistogramDistance.distance(&c, &c), 0.0);
    }
}
