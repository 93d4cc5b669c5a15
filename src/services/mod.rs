pub mod catalog_store;
pub mod pipeline;
pub mod sampler;

pub use catalog_store::CatalogStore;
pub use pipeline::{ColorPipeline, ColorReport, ColorRun};
pub use sampler::{sample_file, sample_image, SampledImage};
