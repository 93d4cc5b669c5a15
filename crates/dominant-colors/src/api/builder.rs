//! ColorNamer builder -- the primary entry point for the crate.
//!
//! [`ColorNamer`] wraps clustering and nearest-name matching behind a fluent
//! builder holding a shared catalog.

use std::fmt;
use std::sync::Arc;

use super::error::ExtractError;
use crate::catalog::{CatalogError, ColorCatalog};
use crate::cluster::{ClusterOptions, ClusterResult, DominantColorExtractor, InitMethod};
use crate::color::{PixelSet, Rgb};
use crate::matcher::NearestColorMatcher;

/// Cluster count used when none is configured.
pub const DEFAULT_CLUSTERS: usize = 4;

/// A representative color and the catalog name closest to it.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColor {
    /// Name of the nearest catalog entry
    pub name: String,
    /// The representative (cluster) color
    pub color: Rgb,
    /// Number of samples in the cluster
    pub population: usize,
    /// Euclidean distance from `color` to the named entry's color
    pub distance: f64,
}

impl fmt::Display for NamedColor {
    /// Formats as `<name> (<r>, <g>, <b>)` using the representative color.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.color)
    }
}

/// Named dominant colors of one image, in cluster result order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPalette {
    /// One entry per cluster
    pub colors: Vec<NamedColor>,
    /// Assignment passes the clustering took
    pub iterations: usize,
    /// Whether clustering settled before the iteration cap
    pub converged: bool,
}

impl NamedPalette {
    /// The representative colors, in order.
    pub fn representative_colors(&self) -> Vec<Rgb> {
        self.colors.iter().map(|c| c.color).collect()
    }
}

/// High-level dominant-color naming builder.
///
/// # Design
///
/// - Constructor requires the catalog, shared through an [`Arc`]
/// - Configuration methods consume and return `self`
/// - [`name_colors()`](Self::name_colors) takes `&self` so one namer can be
///   reused across images without reloading the catalog
///
/// # Example
///
/// ```
/// use dominant_colors::{ColorCatalog, ColorNamer, PixelSet, Rgb};
///
/// let catalog = ColorCatalog::parse(
///     "group,Red,#FF0000,255,0,0\ngroup,Blue,#0000FF,0,0,255",
/// ).unwrap();
/// let namer = ColorNamer::new(catalog).clusters(1).seed(Some(7));
///
/// let pixels = PixelSet::from_colors(&[Rgb::new(240, 10, 5); 4]).unwrap();
/// let palette = namer.name_colors(&pixels).unwrap();
///
/// assert_eq!(palette.colors[0].to_string(), "Red (240, 10, 5)");
/// ```
#[derive(Debug, Clone)]
pub struct ColorNamer {
    catalog: Arc<ColorCatalog>,
    k: usize,
    options: ClusterOptions,
}

impl ColorNamer {
    /// Create a namer over `catalog`, extracting 4 colors by default.
    pub fn new(catalog: impl Into<Arc<ColorCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            k: DEFAULT_CLUSTERS,
            options: ClusterOptions::default(),
        }
    }

    /// Set the number of dominant colors.
    #[inline]
    pub fn clusters(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the clustering seed. `None` seeds from OS entropy.
    #[inline]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    /// Set the clustering iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.options = self.options.max_iterations(max_iterations);
        self
    }

    /// Set the centroid initialization method.
    #[inline]
    pub fn init(mut self, init: InitMethod) -> Self {
        self.options = self.options.init(init);
        self
    }

    /// Enable or disable population ordering.
    #[inline]
    pub fn sort_by_population(mut self, enabled: bool) -> Self {
        self.options = self.options.sort_by_population(enabled);
        self
    }

    /// Replace all clustering options.
    pub fn options(mut self, options: ClusterOptions) -> Self {
        self.options = options;
        self
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Arc<ColorCatalog> {
        &self.catalog
    }

    /// Cluster `pixels` without naming.
    pub fn extract(&self, pixels: &PixelSet) -> Result<ClusterResult, ExtractError> {
        let result = DominantColorExtractor::new(self.k)
            .with_options(self.options.clone())
            .extract(pixels)?;
        Ok(result)
    }

    /// Name every cluster of an existing result.
    pub fn name(&self, result: &ClusterResult) -> Result<NamedPalette, ExtractError> {
        let matcher = NearestColorMatcher::new(&self.catalog);
        let colors = result
            .clusters
            .iter()
            .map(|cluster| {
                let found = matcher.find_nearest(cluster.color)?;
                Ok(NamedColor {
                    name: found.entry.name.clone(),
                    color: cluster.color,
                    population: cluster.population,
                    distance: found.distance,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(NamedPalette {
            colors,
            iterations: result.iterations,
            converged: result.converged,
        })
    }

    /// Cluster `pixels` and name each representative color.
    ///
    /// An empty catalog is reported before any clustering work is done.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Catalog`] with [`CatalogError::EmptyCatalog`]
    /// - [`ExtractError::Cluster`] if K is out of range for `pixels`
    pub fn name_colors(&self, pixels: &PixelSet) -> Result<NamedPalette, ExtractError> {
        if self.catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog.into());
        }
        let result = self.extract(pixels)?;
        self.name(&result)
    }
}
