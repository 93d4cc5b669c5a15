//! End-to-end color naming for one image.
//!
//! The pipeline samples the image, clusters the samples, then names each
//! representative color against the shared catalog. Any failure aborts the
//! run, so callers never see a partial report.

use std::fmt;
use std::path::{Path, PathBuf};

use dominant_colors::{ClusterOptions, ColorNamer, NamedColor, Rgb};

use crate::error::PipelineError;
use crate::services::catalog_store::CatalogStore;
use crate::services::sampler::{self, SampledImage};

/// The named dominant colors of one image.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorReport {
    pub image: PathBuf,
    pub colors: Vec<NamedColor>,
    /// Seed the clustering actually used
    pub seed: u64,
    pub iterations: usize,
    pub converged: bool,
}

impl ColorReport {
    /// Representative colors in report order
    pub fn representative_colors(&self) -> Vec<Rgb> {
        self.colors.iter().map(|c| c.color).collect()
    }

    /// One `<name> (<r>, <g>, <b>)` line per color
    pub fn lines(&self) -> Vec<String> {
        self.colors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            writeln!(f, "{color}")?;
        }
        Ok(())
    }
}

/// A finished run: the decoded image plus its report
#[derive(Debug, Clone)]
pub struct ColorRun {
    pub sampled: SampledImage,
    pub report: ColorReport,
}

pub struct ColorPipeline {
    catalog: CatalogStore,
}

impl ColorPipeline {
    pub fn new(catalog: CatalogStore) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Sample, cluster and name the image at `path`.
    pub fn describe(
        &self,
        path: &Path,
        clusters: usize,
        options: &ClusterOptions,
    ) -> Result<ColorRun, PipelineError> {
        let catalog = self.catalog.get()?;
        let sampled = sampler::sample_file(path)?;

        let seed = resolve_seed(options.seed);
        let namer = ColorNamer::new(catalog)
            .clusters(clusters)
            .options(options.clone().seed(Some(seed)));

        let named = namer.name_colors(&sampled.pixels)?;
        if !named.converged {
            tracing::warn!(
                iterations = named.iterations,
                "Clustering hit the iteration cap before converging"
            );
        }
        tracing::info!(
            path = %path.display(),
            clusters,
            samples = sampled.pixels.len(),
            seed,
            iterations = named.iterations,
            "Named dominant colors"
        );

        let report = ColorReport {
            image: path.to_path_buf(),
            colors: named.colors,
            seed,
            iterations: named.iterations,
            converged: named.converged,
        };
        Ok(ColorRun { sampled, report })
    }
}

/// Pin an unseeded run to a fresh random seed so it can be reproduced.
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let drawn = rand::random::<u64>();
        tracing::info!(seed = drawn, "No seed configured, drew a fresh one");
        drawn
    })
}
