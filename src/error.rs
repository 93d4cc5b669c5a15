use std::path::PathBuf;

use dominant_colors::{CatalogError, ClusterError, ExtractError, PaletteImageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported image layout in {path}: {layout} (expected 8-bit RGB without alpha)")]
    UnsupportedLayout { path: PathBuf, layout: String },

    #[error("Image has no pixels: {path}")]
    EmptyImage { path: PathBuf },

    #[error("Invalid cluster count {requested}: must be between 1 and {samples}")]
    InvalidClusterCount { requested: usize, samples: usize },

    #[error("Failed to load color catalog from {source_name}: {reason}")]
    CatalogLoad { source_name: String, reason: String },

    #[error("Color catalog has no entries")]
    EmptyCatalog,

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteImageError),

    #[error("Failed to write palette image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// True for errors caused by the input image itself.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            PipelineError::Decode { .. } | PipelineError::UnsupportedLayout { .. }
        )
    }
}

impl From<ClusterError> for PipelineError {
    fn from(e: ClusterError) -> Self {
        match e {
            ClusterError::InvalidClusterCount { requested, samples } => {
                PipelineError::InvalidClusterCount { requested, samples }
            }
        }
    }
}

impl From<CatalogError> for PipelineError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::EmptyCatalog => PipelineError::EmptyCatalog,
            other => PipelineError::CatalogLoad {
                source_name: "catalog".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl From<ExtractError> for PipelineError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::Cluster(e) => e.into(),
            ExtractError::Catalog(e) => e.into(),
            ExtractError::Palette(e) => e.into(),
            ExtractError::Pixel(e) => PipelineError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e.to_string(),
            )),
            ExtractError::ParseColor(e) => PipelineError::CatalogLoad {
                source_name: "color".to_string(),
                reason: e.to_string(),
            },
        }
    }
}
