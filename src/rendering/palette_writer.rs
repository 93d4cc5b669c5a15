use std::path::Path;

use dominant_colors::{PaletteComposer, PaletteImage, Rgb};
use image::RgbImage;

use crate::error::PipelineError;
use crate::services::SampledImage;

/// Composes palette strips onto a sampled image and encodes the result.
///
/// The output format follows the file extension (`output.jpg` is JPEG).
pub struct PaletteWriter {
    composer: PaletteComposer,
}

impl PaletteWriter {
    /// Create a writer, rejecting a scale that leaves no room for a strip
    pub fn new(scale: f64) -> Result<Self, PipelineError> {
        let composer = PaletteComposer::new().scale(scale);
        composer.output_width(0)?;
        Ok(Self { composer })
    }

    /// Build the palette image without writing it
    pub fn compose(
        &self,
        sampled: &SampledImage,
        colors: &[Rgb],
    ) -> Result<PaletteImage, PipelineError> {
        let palette = self.composer.compose(
            sampled.image.as_raw(),
            sampled.width(),
            sampled.height(),
            colors,
        )?;

        if palette.strip_width() == 0 {
            tracing::warn!(
                width = sampled.width(),
                scale = self.composer.scale_factor(),
                "Image too narrow for a palette strip, writing a plain copy"
            );
        }
        Ok(palette)
    }

    /// Compose and write the palette image to `output`
    pub fn write(
        &self,
        sampled: &SampledImage,
        colors: &[Rgb],
        output: &Path,
    ) -> Result<PaletteImage, PipelineError> {
        let palette = self.compose(sampled, colors)?;
        let image = to_rgb_image(&palette)?;

        image.save(output).map_err(|source| PipelineError::Encode {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %output.display(),
            width = palette.width(),
            height = palette.height(),
            colors = colors.len(),
            "Wrote palette image"
        );
        Ok(palette)
    }
}

fn to_rgb_image(palette: &PaletteImage) -> Result<RgbImage, PipelineError> {
    RgbImage::from_raw(
        palette.width() as u32,
        palette.height() as u32,
        palette.as_bytes().to_vec(),
    )
    .ok_or_else(|| {
        PipelineError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "palette buffer does not match its dimensions",
        ))
    })
}
