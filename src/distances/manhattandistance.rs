use crate::{DistanceFunction, Primitive};

/// Manhattan (L1) distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl<T: Primitive> DistanceFunction<T> for ManhattanDistance {
    #[inline(always)]
    fn distance(&mut self, a: &[T], b: &[T]) -> T {
        a.iter().zip(b.iter())
            .map(|(&x, &y)| (x - y).abs())
            .sum()
    }
}
