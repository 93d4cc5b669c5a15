//! Dominant-color clustering
//!
//! [`DominantColorExtractor`] partitions a [`PixelSet`](crate::PixelSet) into
//! K clusters with seeded k-means and reports each centroid as an 8-bit
//! color together with its population.

mod kmeans;
mod options;

pub use kmeans::{Cluster, ClusterError, ClusterResult, DominantColorExtractor};
pub use options::{ClusterOptions, InitMethod, DEFAULT_MAX_ITERATIONS};
