//! Named-color catalog
//!
//! This module provides the [`ColorCatalog`] lookup table and its error
//! types, including [`ParseColorError`] for hex color strings.

mod catalog;
mod error;

pub use catalog::{CatalogEntry, ColorCatalog};
pub use error::{CatalogError, ParseColorError};
