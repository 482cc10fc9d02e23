#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use crate::{Centroid, Primitive};

	/// Straight-forward nearest-centroid assignment and mean calculation, used as
	/// ground truth for the optimized step implementations.
	pub fn naive_reference<T: Primitive>(samples: &[T], sample_dims: usize, centroids: &[T]) -> (Vec<Option<Vec<T>>>, Vec<usize>) {
		let k = centroids.len() / sample_dims;
		let mut sums = vec![vec![T::zero(); sample_dims]; k];
		let mut counts = vec![0usize; k];
		for s in samples.chunks_exact(sample_dims) {
			let mut best = (0, T::infinity());
			for (j, c) in centroids.chunks_exact(sample_dims).enumerate() {
				let dist: T = s.iter().zip(c.iter()).map(|(&a, &b)| (a - b) * (a - b)).sum();
				if dist < best.1 {
					best = (j, dist);
				}
			}
			sums[best.0].iter_mut().zip(s.iter()).for_each(|(a, b)| *a += b);
			counts[best.0] += 1;
		}
		let means = sums.into_iter().zip(counts.iter())
			.map(|(sum, &cnt)| match cnt {
				0 => None,
				cnt => Some(sum.into_iter().map(|v| v / T::from(cnt).unwrap()).collect()),
			})
			.collect();
		(means, counts)
	}

	pub fn assert_step_eq<T: Primitive>(should_centroids: &[Option<Vec<T>>], should_counts: &[usize],
										actual_centroids: &[Centroid<T>], actual_counts: &[usize], cmp_epsilon: T) {
		assert_eq!(should_counts, actual_counts);
		assert_eq!(should_centroids.len(), actual_centroids.len());
		for (idx, (should, actual)) in should_centroids.iter().zip(actual_centroids.iter()).enumerate() {
			match (should, actual.as_slice()) {
				(None, None) => {},
				(Some(should), Some(actual)) => {
					for (&s, &a) in should.iter().zip(actual.iter()) {
						assert_approx_eq!(s, a, cmp_epsilon);
					}
				},
				_ => panic!("Centroid {} mismatch. Actual: {:?} but should have been: {:?}", idx, actual, should),
			}
		}
	}
}
