//! Image decoding into pixel samples.

use std::path::{Path, PathBuf};

use dominant_colors::{ChannelOrder, PixelError, PixelSet};
use image::{DynamicImage, RgbImage};

use crate::error::PipelineError;

/// A decoded 8-bit RGB image and its flattened samples
#[derive(Debug, Clone)]
pub struct SampledImage {
    /// Source path, kept for error messages
    pub path: PathBuf,
    /// The decoded image, row-major RGB
    pub image: RgbImage,
    /// Every pixel in column-major scan order
    pub pixels: PixelSet,
}

impl SampledImage {
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }
}

/// Decode an image file and flatten it into samples.
pub fn sample_file(path: &Path) -> Result<SampledImage, PipelineError> {
    let decoded = image::open(path).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    sample_image(path, decoded)
}

/// Flatten an already decoded image.
///
/// Only 3-channel 8-bit images are accepted; alpha, grayscale and
/// high-bit-depth images are rejected rather than silently converted.
pub fn sample_image(path: &Path, decoded: DynamicImage) -> Result<SampledImage, PipelineError> {
    let image = match decoded {
        DynamicImage::ImageRgb8(image) => image,
        other => {
            return Err(PipelineError::UnsupportedLayout {
                path: path.to_path_buf(),
                layout: format!("{:?}", other.color()),
            })
        }
    };

    let (width, height) = (image.width() as usize, image.height() as usize);
    // `image` hands out RGB regardless of the container format
    let pixels = PixelSet::from_interleaved(image.as_raw(), width, height, ChannelOrder::Rgb)
        .map_err(|e| match e {
            PixelError::EmptyImage => PipelineError::EmptyImage {
                path: path.to_path_buf(),
            },
            other => PipelineError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                other.to_string(),
            )),
        })?;

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        samples = pixels.len(),
        "Sampled image"
    );

    Ok(SampledImage {
        path: path.to_path_buf(),
        image,
        pixels,
    })
}
