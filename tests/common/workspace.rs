//! Temporary directory holding test images, catalogs and outputs.

use std::path::{Path, PathBuf};

use huename::assets::AssetLoader;
use huename::services::{CatalogStore, ColorPipeline};
use image::RgbImage;
use tempfile::TempDir;

/// A scratch directory that is removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Encode `image` to `name`; the format follows the extension
    pub fn write_image(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).expect("Failed to write test image");
        path
    }

    /// Write catalog rows to `colors.csv`
    pub fn write_catalog(&self, text: &str) -> PathBuf {
        let path = self.path("colors.csv");
        std::fs::write(&path, text).expect("Failed to write test catalog");
        path
    }

    /// Pipeline over the catalog at `catalog`, or the embedded one
    pub fn pipeline(&self, catalog: Option<&Path>) -> ColorPipeline {
        let loader = AssetLoader::new(catalog.map(Path::to_path_buf), None);
        ColorPipeline::new(CatalogStore::new(loader))
    }
}
