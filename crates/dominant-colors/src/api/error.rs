//! Unified error type for the dominant-colors public API.
//!
//! [`ExtractError`] wraps every error type in the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::catalog::{CatalogError, ParseColorError};
use crate::cluster::ClusterError;
use crate::color::PixelError;
use crate::output::PaletteImageError;

/// Unified error type for the dominant-colors public API.
///
/// # Example
///
/// ```
/// use dominant_colors::{ColorCatalog, ExtractError, PixelSet, Rgb};
///
/// fn load(text: &str, colors: &[Rgb]) -> Result<(ColorCatalog, PixelSet), ExtractError> {
///     let catalog = ColorCatalog::parse(text)?;
///     let pixels = PixelSet::from_colors(colors)?;
///     Ok((catalog, pixels))
/// }
///
/// assert!(load("group,Red,#FF0000,255,0,0", &[]).is_err());
/// ```
#[derive(Debug)]
pub enum ExtractError {
    /// Pixel buffer could not be sampled
    Pixel(PixelError),
    /// Clustering rejected its input
    Cluster(ClusterError),
    /// Catalog failed to parse or has no entries
    Catalog(CatalogError),
    /// Palette image could not be composed
    Palette(PaletteImageError),
    /// Hex color string could not be parsed
    ParseColor(ParseColorError),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Pixel(err) => write!(f, "pixel error: {}", err),
            ExtractError::Cluster(err) => write!(f, "cluster error: {}", err),
            ExtractError::Catalog(err) => write!(f, "catalog error: {}", err),
            ExtractError::Palette(err) => write!(f, "palette error: {}", err),
            ExtractError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Pixel(err) => Some(err),
            ExtractError::Cluster(err) => Some(err),
            ExtractError::Catalog(err) => Some(err),
            ExtractError::Palette(err) => Some(err),
            ExtractError::ParseColor(err) => Some(err),
        }
    }
}

impl From<PixelError> for ExtractError {
    fn from(err: PixelError) -> Self {
        ExtractError::Pixel(err)
    }
}

impl From<ClusterError> for ExtractError {
    fn from(err: ClusterError) -> Self {
        ExtractError::Cluster(err)
    }
}

impl From<CatalogError> for ExtractError {
    fn from(err: CatalogError) -> Self {
        ExtractError::Catalog(err)
    }
}

impl From<PaletteImageError> for ExtractError {
    fn from(err: PaletteImageError) -> Self {
        ExtractError::Palette(err)
    }
}

impl From<ParseColorError> for ExtractError {
    fn from(err: ParseColorError) -> Self {
        ExtractError::ParseColor(err)
    }
}
