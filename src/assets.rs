//! Asset loading with embedded fallbacks
//!
//! This module provides a unified interface for loading the color catalog and
//! the config file with the following behavior:
//!
//! - If an override path is NOT set: use the embedded asset (no filesystem access)
//! - If an override path IS set and exists: read it from the filesystem
//! - If a config override IS set but missing: fall back to the embedded config
//! - If a catalog override IS set but missing: fail with `NotFound`

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the embedded color catalog
pub const CATALOG_ASSET: &str = "colors.csv";

/// File name of the embedded default config
pub const CONFIG_ASSET: &str = "config.yaml";

/// Embedded default color catalog
#[derive(RustEmbed)]
#[folder = "."]
#[include = "colors.csv"]
struct EmbeddedCatalog;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Catalog,
    Config,
}

impl AssetCategory {
    fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Catalog => CATALOG_ASSET,
            AssetCategory::Config => CONFIG_ASSET,
        }
    }

    fn embedded(self) -> Option<Cow<'static, [u8]>> {
        match self {
            AssetCategory::Catalog => EmbeddedCatalog::get(CATALOG_ASSET).map(|f| f.data),
            AssetCategory::Config => EmbeddedConfig::get(CONFIG_ASSET).map(|f| f.data),
        }
    }
}

/// Where an asset was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => write!(f, "embedded"),
            AssetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External catalog file (from CATALOG_FILE env var or --catalog)
    catalog_file: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if an override was requested.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(catalog_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            catalog_file,
            config_file,
        }
    }

    /// Create a loader from the `CATALOG_FILE` and `CONFIG_FILE` env vars
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CATALOG_FILE").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// Return a loader whose catalog override is `path` (if given)
    pub fn with_catalog_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_file = path;
        }
        self
    }

    /// The configured catalog override, if any
    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }

    /// The configured config override, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    fn override_path(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Catalog => self.catalog_file.as_deref(),
            AssetCategory::Config => self.config_file.as_deref(),
        }
    }

    /// Read an asset, preferring the filesystem override.
    ///
    /// An explicit catalog override that does not exist is an error. A
    /// missing config override falls back to the embedded config.
    pub fn read(&self, category: AssetCategory) -> io::Result<(Cow<'static, [u8]>, AssetSource)> {
        if let Some(path) = self.override_path(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok((Cow::Owned(fs::read(path)?), AssetSource::File(path.into())));
            }
            if category == AssetCategory::Catalog {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Catalog file not found: {}", path.display()),
                ));
            }
            tracing::debug!(path = %path.display(), "Override missing, using embedded asset");
        }

        category
            .embedded()
            .map(|data| {
                tracing::trace!(asset = category.file_name(), "Loading asset from embedded assets");
                (data, AssetSource::Embedded)
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {} not found", category.file_name()),
                )
            })
    }

    /// Read an asset as a UTF-8 string
    pub fn read_string(&self, category: AssetCategory) -> io::Result<(String, AssetSource)> {
        let (bytes, source) = self.read(category)?;
        let text = String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok((text, source))
    }

    /// Read the catalog text
    pub fn read_catalog_string(&self) -> io::Result<(String, AssetSource)> {
        self.read_string(AssetCategory::Catalog)
    }

    /// Read the config text
    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config).map(|(text, _)| text)
    }

    /// Where an asset would currently be read from
    pub fn source(&self, category: AssetCategory) -> AssetSource {
        match self.override_path(category) {
            Some(path) if path.exists() => AssetSource::File(path.into()),
            _ => AssetSource::Embedded,
        }
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults in the working directory if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = self
                .override_path(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".").join(category.file_name()));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = category.embedded() {
                fs::write(&path, &*data)?;
                tracing::info!(path = %path.display(), "Extracted embedded asset");
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Catalog => EmbeddedCatalog::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => EmbeddedConfig::iter().map(|s| s.to_string()).collect(),
        }
    }
}
