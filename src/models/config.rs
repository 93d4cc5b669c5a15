use crate::assets::AssetLoader;
use dominant_colors::{ClusterOptions, InitMethod};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Dominant colors reported by `huename colors`
    pub clusters: usize,

    /// Dominant colors painted by `huename palette`
    pub palette_clusters: usize,

    /// Palette canvas width multiplier
    pub scale: f64,

    /// k-means seed (`None` draws a fresh seed per run)
    pub seed: Option<u64>,

    /// k-means iteration cap
    pub max_iterations: usize,

    /// Centroid initialization method
    #[serde(deserialize_with = "deserialize_init")]
    pub init: InitMethod,

    /// Order reported colors by cluster population
    pub sort_by_population: bool,

    /// Output path for `huename palette`
    pub palette_output: PathBuf,

    /// Catalog file overriding the embedded one
    pub catalog: Option<PathBuf>,
}

fn deserialize_init<'de, D>(deserializer: D) -> Result<InitMethod, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        clusters = config.clusters,
                        palette_clusters = config.palette_clusters,
                        seed = ?config.seed,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Clustering options derived from this config
    pub fn cluster_options(&self) -> ClusterOptions {
        ClusterOptions::new()
            .seed(self.seed)
            .max_iterations(self.max_iterations)
            .init(self.init)
            .sort_by_population(self.sort_by_population)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clusters: 4,
            palette_clusters: 8,
            scale: dominant_colors::output::DEFAULT_SCALE,
            seed: Some(0),
            max_iterations: dominant_colors::cluster::DEFAULT_MAX_ITERATIONS,
            init: InitMethod::KMeansPlusPlus,
            sort_by_population: true,
            palette_output: PathBuf::from("output.jpg"),
            catalog: None,
        }
    }
}
