#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! dominant-colors: dominant color extraction and nearest named-color matching
//!
//! The crate turns an image's pixels into a handful of representative colors
//! and names each one after the closest entry of a named-color catalog. It
//! performs no I/O: callers decode images and read catalog text themselves.
//!
//! # Quick Start
//!
//! The [`ColorNamer`] builder is the primary entry point:
//!
//! ```
//! use dominant_colors::{ChannelOrder, ColorCatalog, ColorNamer, PixelSet};
//!
//! let catalog = ColorCatalog::parse(
//!     "group,Red,#FF0000,255,0,0\n\
//!      group,Blue,#0000FF,0,0,255\n",
//! ).unwrap();
//!
//! // 2x2 image, row-major RGB: three reds and one blue
//! let raw = [250, 0, 0, 250, 0, 0, 250, 0, 0, 0, 0, 250];
//! let pixels = PixelSet::from_interleaved(&raw, 2, 2, ChannelOrder::Rgb).unwrap();
//!
//! let palette = ColorNamer::new(catalog).clusters(2).name_colors(&pixels).unwrap();
//! let lines: Vec<String> = palette.colors.iter().map(|c| c.to_string()).collect();
//! assert_eq!(lines, vec!["Red (250, 0, 0)", "Blue (0, 0, 250)"]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! interleaved bytes --PixelSet::from_interleaved--> PixelSet (column-major RGB)
//!     |
//!     v
//! DominantColorExtractor (seeded k-means) --> ClusterResult (K colors + populations)
//!     |                                            |
//!     v                                            v
//! NearestColorMatcher over ColorCatalog     PaletteComposer
//!     |                                            |
//!     v                                            v
//! NamedPalette ("<name> (r, g, b)")         PaletteImage (source + color strip)
//! ```
//!
//! # Determinism
//!
//! - Catalog iteration follows load order, and nearest-color ties go to the
//!   entry loaded first.
//! - Clustering draws from a [`StdRng`](rand::rngs::StdRng) seeded with
//!   [`ClusterOptions::seed`] (default `Some(0)`). A `None` seed uses OS
//!   entropy and results may then vary run to run.
//! - Cluster ordering by population is stable over centroid index.
//!
//! # Distance
//!
//! All distances are plain Euclidean in 8-bit RGB. This is not a perceptual
//! metric; two colors at equal RGB distance from a query may look quite
//! different.

pub mod api;
pub mod catalog;
pub mod cluster;
pub mod color;
pub mod matcher;
pub mod output;


pub use api::{ColorNamer, ExtractError, NamedColor, NamedPalette};
pub use catalog::{CatalogEntry, CatalogError, ColorCatalog, ParseColorError};
pub use cluster::{
    Cluster, ClusterError, ClusterOptions, ClusterResult, DominantColorExtractor, InitMethod,
};
pub use color::{ChannelOrder, PixelError, PixelSet, Rgb};
pub use matcher::{ColorMatch, NearestColorMatcher};
pub use output::{block_ranges, PaletteComposer, PaletteImage, PaletteImageError};
