//! # naive-kmeans - API documentation
//!
//! A single step of the Lloyd algorithm for k-means clustering, using naive (brute-force)
//! assignment: every sample is compared against every centroid under a pluggable distance
//! metric, samples are accumulated per nearest cluster, and the updated centroids as well
//! as a distortion value (how far the centroids moved) are returned.
//!
//! ## Design target
//! This crate is the numerical kernel only. Loading data, seeding the initial centroids,
//! deciding when to stop iterating and what to do with clusters that ran empty is left to
//! the caller, which is why the API-surface is rather plain: samples and centroids are
//! given as raw row-major slices, instead of any high-level matrix crate.
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use naive_kmeans::*;
//!
//! let samples = vec![0.0f64, 0.0, 0.0, 2.0, 10.0, 10.0, 10.0, 12.0];
//! let dataset = Dataset::new(&samples, 4, 2).unwrap();
//! let mut metric = EuclideanDistance;
//! let mut step = NaiveKMeans::new(dataset, &mut metric);
//!
//! let mut centroids = vec![0.0, 0.0, 10.0, 10.0];
//! let (mut new_centroids, mut counts) = (Vec::new(), Vec::new());
//! loop {
//!     let distortion = step.iterate(&centroids, &mut new_centroids, &mut counts).unwrap();
//!     centroids = Centroid::flatten_with_sentinel(&new_centroids, 2);
//!     if distortion < 1e-9 { break; }
//! }
//! assert_eq!(centroids, vec![0.0, 1.0, 10.0, 11.0]);
//! assert_eq!(counts, vec![2, 2]);
//! ```
//!
//! ## Short API-Overview / Description
//! A [`Dataset`] is a validated, borrowed view on the samples. A [`NaiveKMeans`] kernel is
//! created from it and a mutable reference to a [`DistanceFunction`]. Each call to
//! [`NaiveKMeans::iterate`] (or its parallel twin [`NaiveKMeans::par_iterate`]) overwrites the
//! passed output buffers with one [`Centroid`] and one sample count per cluster, and returns
//! the distortion. Clusters without any samples are reported as [`Centroid::Empty`].
//!
//! The kernel counts the metric evaluations it did for assignment over its whole lifetime,
//! see [`NaiveKMeans::distance_calculations`].

#[macro_use] mod helpers;
mod primitive;
mod error;
mod dataset;
mod api;
mod accumulator;
mod distances;
mod variants;

pub use accumulator::ClusterAccumulator;
pub use api::{Centroid, DistortionMode, IterationStats, NaiveStepConfig, NaiveStepConfigBuilder};
pub use dataset::Dataset;
pub use distances::{DistanceFunction, EuclideanDistance, HistogramDistance, ManhattanDistance, SquaredEuclideanDistance};
pub use error::{KMeansError, Result};
pub use primitive::Primitive;
pub use variants::NaiveKMeans;
