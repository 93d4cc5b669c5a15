//! Lloyd's k-means over a [`PixelSet`].
//!
//! Everything runs over flat buffers: samples are read straight from the
//! pixel set's byte slice, centroids are `[f64; 3]` and assignments are a
//! `Vec<u32>` indexed by sample. Nothing is allocated per pixel.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::options::{ClusterOptions, InitMethod};
use crate::color::{PixelSet, Rgb};

/// Error returned when clustering cannot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// K is zero or larger than the number of samples
    InvalidClusterCount {
        /// The requested K
        requested: usize,
        /// Number of samples available
        samples: usize,
    },
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::InvalidClusterCount { requested, samples } => write!(
                f,
                "invalid cluster count {} (must be between 1 and {} samples)",
                requested, samples
            ),
        }
    }
}

impl std::error::Error for ClusterError {}

/// One representative color and the number of samples assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    /// Centroid rounded half-up and clamped to 8 bits
    pub color: Rgb,
    /// Number of samples assigned to this cluster
    pub population: usize,
    /// Position of the centroid before any ordering was applied
    pub index: usize,
}

/// Output of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    /// Exactly K clusters, population-ordered if requested
    pub clusters: Vec<Cluster>,
    /// Number of assignment passes performed
    pub iterations: usize,
    /// False if the iteration cap was hit before assignments settled
    pub converged: bool,
}

impl ClusterResult {
    /// Representative colors in result order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.clusters.iter().map(|c| c.color).collect()
    }

    /// Sum of all cluster populations. Always equals the sample count.
    pub fn total_population(&self) -> usize {
        self.clusters.iter().map(|c| c.population).sum()
    }

    /// Number of clusters (K).
    #[inline]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// True only for a default-constructed result; extraction never yields one.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Extracts the K dominant colors of a pixel set.
///
/// Centroids are initialized per [`InitMethod`] from a [`StdRng`] seeded by
/// [`ClusterOptions::seed`], then refined by alternating nearest-centroid
/// assignment and mean recomputation until no assignment changes or
/// [`ClusterOptions::max_iterations`] is reached.
///
/// Assignment ties go to the lower centroid index. A cluster that ends an
/// update empty is moved onto the sample lying farthest from its own
/// centroid (taken only from clusters with more than one member), so images
/// with fewer distinct colors than K still return K results, some of which
/// may have population 0.
///
/// # Reproducibility
///
/// With `seed: Some(_)` results are identical run to run. With `seed: None`
/// the generator is seeded from OS entropy and centroids may differ between
/// runs, though the partition properties (K results, populations summing to
/// N) always hold.
///
/// # Example
///
/// ```
/// use dominant_colors::{DominantColorExtractor, PixelSet, Rgb};
///
/// let pixels = PixelSet::from_colors(&[Rgb::new(255, 0, 0); 4]).unwrap();
/// let result = DominantColorExtractor::new(1).extract(&pixels).unwrap();
///
/// assert_eq!(result.colors(), vec![Rgb::new(255, 0, 0)]);
/// assert_eq!(result.clusters[0].population, 4);
/// ```
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    k: usize,
    options: ClusterOptions,
}

impl DominantColorExtractor {
    /// Create an extractor for `k` clusters with default options.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            options: ClusterOptions::default(),
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: ClusterOptions) -> Self {
        self.options = options;
        self
    }

    /// The configured cluster count.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// The configured options.
    #[inline]
    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    /// Partition `pixels` into K clusters.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InvalidClusterCount`] if `k == 0` or
    /// `k > pixels.len()`.
    pub fn extract(&self, pixels: &PixelSet) -> Result<ClusterResult, ClusterError> {
        let samples = pixels.as_bytes();
        let n = pixels.len();
        let k = self.k;
        if k == 0 || k > n {
            return Err(ClusterError::InvalidClusterCount {
                requested: k,
                samples: n,
            });
        }

        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut centroids = match self.options.init {
            InitMethod::KMeansPlusPlus => init_plus_plus(samples, k, &mut rng),
            InitMethod::RandomSample => init_random(samples, k, &mut rng),
        };

        let max_iterations = self.options.max_iterations.max(1);
        let mut assignments = vec![u32::MAX; n];
        let mut populations = vec![0usize; k];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < max_iterations {
            iterations += 1;
            if assign(samples, &centroids, &mut assignments) == 0 {
                converged = true;
                break;
            }
            update(samples, &mut centroids, &mut assignments, &mut populations);
        }

        let mut clusters: Vec<Cluster> = centroids
            .iter()
            .zip(&populations)
            .enumerate()
            .map(|(index, (&centroid, &population))| Cluster {
                color: Rgb::from_mean(centroid),
                population,
                index,
            })
            .collect();

        if self.options.sort_by_population {
            // Stable, so equal populations stay in centroid index order
            clusters.sort_by(|a, b| b.population.cmp(&a.population));
        }

        Ok(ClusterResult {
            clusters,
            iterations,
            converged,
        })
    }
}

#[inline]
fn sample_at(samples: &[u8], i: usize) -> [f64; 3] {
    let base = i * 3;
    [
        samples[base] as f64,
        samples[base + 1] as f64,
        samples[base + 2] as f64,
    ]
}

#[inline]
fn dist_sq(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

fn init_random(samples: &[u8], k: usize, rng: &mut StdRng) -> Vec<[f64; 3]> {
    let n = samples.len() / 3;
    rand::seq::index::sample(rng, n, k)
        .into_iter()
        .map(|i| sample_at(samples, i))
        .collect()
}

/// k-means++ seeding with D² weighting.
fn init_plus_plus(samples: &[u8], k: usize, rng: &mut StdRng) -> Vec<[f64; 3]> {
    let n = samples.len() / 3;
    let mut centroids = Vec::with_capacity(k);

    let first = sample_at(samples, rng.gen_range(0..n));
    centroids.push(first);

    // Squared distance from each sample to its nearest chosen centroid
    let mut weights: Vec<f64> = (0..n)
        .map(|i| dist_sq(sample_at(samples, i), first))
        .collect();

    while centroids.len() < k {
        let total: f64 = weights.iter().sum();
        let chosen = if total > 0.0 {
            let target = rng.gen::<f64>() * total;
            pick_weighted(&weights, target)
        } else {
            // Every sample coincides with a chosen centroid
            rng.gen_range(0..n)
        };

        let centroid = sample_at(samples, chosen);
        centroids.push(centroid);
        for (i, w) in weights.iter_mut().enumerate() {
            let d = dist_sq(sample_at(samples, i), centroid);
            if d < *w {
                *w = d;
            }
        }
    }

    centroids
}

/// Index of the sample whose cumulative weight first exceeds `target`.
fn pick_weighted(weights: &[f64], target: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if cumulative > target {
            return i;
        }
    }
    // Float round-off can leave target just above the final sum
    last_positive
}

/// Assign each sample to its nearest centroid. Returns how many changed.
fn assign(samples: &[u8], centroids: &[[f64; 3]], assignments: &mut [u32]) -> usize {
    let mut changed = 0;
    for (i, slot) in assignments.iter_mut().enumerate() {
        let nearest = nearest_centroid(sample_at(samples, i), centroids) as u32;
        if *slot != nearest {
            *slot = nearest;
            changed += 1;
        }
    }
    changed
}

#[inline]
fn nearest_centroid(point: [f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (j, &c) in centroids.iter().enumerate() {
        let d = dist_sq(point, c);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }
    best
}

/// Recompute centroids as member means and relocate empty clusters.
fn update(
    samples: &[u8],
    centroids: &mut [[f64; 3]],
    assignments: &mut [u32],
    populations: &mut [usize],
) {
    let k = centroids.len();
    let mut sums = vec![[0.0f64; 3]; k];
    populations.iter_mut().for_each(|p| *p = 0);

    for (i, &a) in assignments.iter().enumerate() {
        let j = a as usize;
        let p = sample_at(samples, i);
        sums[j][0] += p[0];
        sums[j][1] += p[1];
        sums[j][2] += p[2];
        populations[j] += 1;
    }

    for j in 0..k {
        if populations[j] > 0 {
            centroids[j] = mean(sums[j], populations[j]);
        }
    }

    for empty in 0..k {
        if populations[empty] > 0 {
            continue;
        }
        let Some((donor_sample, distance)) =
            farthest_sample(samples, centroids, assignments, populations)
        else {
            continue;
        };
        if distance <= 0.0 {
            continue;
        }

        let donor = assignments[donor_sample] as usize;
        let p = sample_at(samples, donor_sample);
        for c in 0..3 {
            sums[donor][c] -= p[c];
        }
        populations[donor] -= 1;
        centroids[donor] = mean(sums[donor], populations[donor]);

        sums[empty] = p;
        populations[empty] = 1;
        centroids[empty] = p;
        assignments[donor_sample] = empty as u32;
    }
}

/// The sample farthest from its own centroid among clusters with more than
/// one member, with that squared distance.
fn farthest_sample(
    samples: &[u8],
    centroids: &[[f64; 3]],
    assignments: &[u32],
    populations: &[usize],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &a) in assignments.iter().enumerate() {
        let j = a as usize;
        if populations[j] <= 1 {
            continue;
        }
        let d = dist_sq(sample_at(samples, i), centroids[j]);
        if best.map_or(true, |(_, bd)| d > bd) {
            best = Some((i, d));
        }
    }
    best
}

#[inline]
fn mean(sum: [f64; 3], count: usize) -> [f64; 3] {
    let n = count as f64;
    [sum[0] / n, sum[1] / n, sum[2] / n]
}
