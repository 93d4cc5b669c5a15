//! Public API for the dominant-colors crate.
//!
//! This module provides the high-level API: the [`ColorNamer`] builder and
//! the [`ExtractError`] unified error type.

mod builder;
mod error;

pub use builder::{ColorNamer, NamedColor, NamedPalette, DEFAULT_CLUSTERS};
pub use error::ExtractError;
