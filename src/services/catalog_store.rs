use std::sync::{Arc, OnceLock};

use dominant_colors::ColorCatalog;

use crate::assets::{AssetCategory, AssetLoader, AssetSource};
use crate::error::PipelineError;

/// Loads the color catalog on first use and hands out shared references.
///
/// The catalog text is parsed at most once per store; every later call
/// returns the same `Arc`.
pub struct CatalogStore {
    loader: AssetLoader,
    catalog: OnceLock<Arc<ColorCatalog>>,
}

impl CatalogStore {
    pub fn new(loader: AssetLoader) -> Self {
        Self {
            loader,
            catalog: OnceLock::new(),
        }
    }

    /// Where the catalog is (or would be) read from
    pub fn source(&self) -> AssetSource {
        self.loader.source(AssetCategory::Catalog)
    }

    /// The loaded catalog, parsing it on first call.
    pub fn get(&self) -> Result<Arc<ColorCatalog>, PipelineError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.load()?);
        Ok(Arc::clone(self.catalog.get_or_init(|| catalog)))
    }

    fn load(&self) -> Result<ColorCatalog, PipelineError> {
        let (text, source) =
            self.loader
                .read_catalog_string()
                .map_err(|e| PipelineError::CatalogLoad {
                    source_name: self.source().to_string(),
                    reason: e.to_string(),
                })?;

        let catalog = ColorCatalog::parse(&text).map_err(|e| PipelineError::CatalogLoad {
            source_name: source.to_string(),
            reason: e.to_string(),
        })?;

        if catalog.is_empty() {
            tracing::warn!(source = %source, "Color catalog has no entries");
        } else {
            tracing::info!(source = %source, entries = catalog.len(), "Loaded color catalog");
        }
        Ok(catalog)
    }
}
