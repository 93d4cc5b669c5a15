//! Huename - find the dominant colors of an image and name them
//!
//! Clusters an image's pixels into a few representative colors and reports
//! each as the closest entry of a named-color catalog.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
