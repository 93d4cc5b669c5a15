//! Clustering configuration.

use std::fmt;
use std::str::FromStr;

/// Iteration cap used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// How initial centroids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMethod {
    /// k-means++: first centroid uniform, each further centroid drawn with
    /// probability proportional to its squared distance from the nearest
    /// centroid chosen so far.
    #[default]
    KMeansPlusPlus,
    /// K distinct samples chosen uniformly at random.
    RandomSample,
}

impl fmt::Display for InitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitMethod::KMeansPlusPlus => write!(f, "kmeans++"),
            InitMethod::RandomSample => write!(f, "random"),
        }
    }
}

impl FromStr for InitMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmeans++" | "k-means++" | "plusplus" => Ok(InitMethod::KMeansPlusPlus),
            "random" => Ok(InitMethod::RandomSample),
            other => Err(format!(
                "unknown init method {other:?} (expected \"kmeans++\" or \"random\")"
            )),
        }
    }
}

/// Options for [`DominantColorExtractor`](super::DominantColorExtractor).
///
/// Uses a consuming builder so options can be chained:
///
/// ```
/// use dominant_colors::{ClusterOptions, InitMethod};
///
/// let options = ClusterOptions::new()
///     .seed(Some(42))
///     .max_iterations(50)
///     .init(InitMethod::RandomSample)
///     .sort_by_population(false);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOptions {
    /// RNG seed for centroid initialization. `None` seeds from OS entropy,
    /// making runs non-reproducible.
    pub seed: Option<u64>,
    /// Upper bound on assign/update rounds.
    pub max_iterations: usize,
    /// Centroid initialization policy.
    pub init: InitMethod,
    /// Order results by population descending (ties by centroid index).
    pub sort_by_population: bool,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            seed: Some(0),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            init: InitMethod::default(),
            sort_by_population: true,
        }
    }
}

impl ClusterOptions {
    /// Default options: seed 0, k-means++, 300 iterations, sorted output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[inline]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the iteration cap. Zero is treated as one.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Set the initialization method.
    #[inline]
    pub fn init(mut self, init: InitMethod) -> Self {
        self.init = init;
        self
    }

    /// Enable or disable population ordering.
    #[inline]
    pub fn sort_by_population(mut self, enabled: bool) -> Self {
        self.sort_by_population = enabled;
        self
    }
}
