//! Palette strip composition.
//!
//! [`PaletteComposer`] places the source image on a wider black canvas and
//! paints the representative colors as solid blocks in the extra strip on
//! the right, top to bottom in the order given.

use std::fmt;
use std::ops::Range;

use crate::color::{ChannelOrder, Rgb};

/// Width multiplier used when none is configured.
pub const DEFAULT_SCALE: f64 = 1.1;

/// Error returned by [`PaletteComposer::compose`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteImageError {
    /// Scale factor is not finite or not greater than 1
    InvalidScale(f64),
    /// Scaled canvas does not fit in memory or in `u32` dimensions
    TooLarge,
    /// No colors to paint
    NoColors,
    /// Source width or height is zero
    EmptyImage,
    /// Source buffer length does not equal `width * height * 3`
    BufferLength {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
}

impl fmt::Display for PaletteImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteImageError::InvalidScale(scale) => {
                write!(f, "palette scale must be a finite value above 1, got {}", scale)
            }
            PaletteImageError::TooLarge => write!(f, "palette canvas is too large"),
            PaletteImageError::NoColors => write!(f, "no colors to paint"),
            PaletteImageError::EmptyImage => write!(f, "source image has no pixels"),
            PaletteImageError::BufferLength { expected, actual } => write!(
                f,
                "source buffer has {} bytes, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for PaletteImageError {}

/// Row ranges of `count` blocks stacked over `height` rows.
///
/// Every block is `height / count` rows tall except the last, which runs to
/// `height`. When `count > height` the leading blocks are empty.
///
/// # Example
///
/// ```
/// use dominant_colors::block_ranges;
///
/// assert_eq!(block_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// ```
pub fn block_ranges(height: usize, count: usize) -> Vec<Range<usize>> {
    if count == 0 {
        return Vec::new();
    }
    let block = height / count;
    (0..count)
        .map(|i| {
            let start = i * block;
            let end = if i + 1 == count { height } else { start + block };
            start..end
        })
        .collect()
}

/// Renders a source image with a strip of color blocks beside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteComposer {
    scale: f64,
}

impl Default for PaletteComposer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl PaletteComposer {
    /// Composer with the default 1.1 width scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width multiplier. Checked at compose time.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// The configured width multiplier.
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Canvas width for a source of width `source_width`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteImageError::InvalidScale`] if the scale is not a
    /// finite value above 1, and [`PaletteImageError::TooLarge`] if the
    /// scaled width exceeds `u32::MAX`.
    pub fn output_width(&self, source_width: usize) -> Result<usize, PaletteImageError> {
        if !self.scale.is_finite() || self.scale <= 1.0 {
            return Err(PaletteImageError::InvalidScale(self.scale));
        }
        let width = (self.scale * source_width as f64).round();
        if width > u32::MAX as f64 {
            return Err(PaletteImageError::TooLarge);
        }
        Ok(width as usize)
    }

    /// Compose the palette image.
    ///
    /// `source` is a row-major RGB buffer of `width x height` pixels. It is
    /// copied, never modified.
    ///
    /// # Example
    ///
    /// ```
    /// use dominant_colors::{PaletteComposer, Rgb};
    ///
    /// let source = vec![200u8; 10 * 4 * 3];
    /// let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
    /// let image = PaletteComposer::new().compose(&source, 10, 4, &colors).unwrap();
    ///
    /// assert_eq!(image.width(), 11);
    /// assert_eq!(image.pixel(10, 0), Rgb::new(255, 0, 0));
    /// assert_eq!(image.pixel(10, 3), Rgb::new(0, 0, 255));
    /// ```
    pub fn compose(
        &self,
        source: &[u8],
        width: usize,
        height: usize,
        colors: &[Rgb],
    ) -> Result<PaletteImage, PaletteImageError> {
        let out_width = self.output_width(width)?;
        if colors.is_empty() {
            return Err(PaletteImageError::NoColors);
        }
        if width == 0 || height == 0 {
            return Err(PaletteImageError::EmptyImage);
        }
        let expected = width * height * 3;
        if source.len() != expected {
            return Err(PaletteImageError::BufferLength {
                expected,
                actual: source.len(),
            });
        }

        let len = out_width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(PaletteImageError::TooLarge)?;
        let mut data = vec![0u8; len];
        let src_row = width * 3;
        let dst_row = out_width * 3;

        for y in 0..height {
            data[y * dst_row..y * dst_row + src_row]
                .copy_from_slice(&source[y * src_row..(y + 1) * src_row]);
        }

        if out_width > width {
            for (color, rows) in colors.iter().zip(block_ranges(height, colors.len())) {
                let px = color.to_bytes();
                for y in rows {
                    let row = &mut data[y * dst_row + src_row..(y + 1) * dst_row];
                    for chunk in row.chunks_exact_mut(3) {
                        chunk.copy_from_slice(&px);
                    }
                }
            }
        }

        Ok(PaletteImage {
            data,
            width: out_width,
            height,
            source_width: width,
        })
    }
}

/// A composed palette image in row-major RGB order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
    source_width: usize,
}

impl PaletteImage {
    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the copied source region.
    #[inline]
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    /// Width of the color strip.
    #[inline]
    pub fn strip_width(&self) -> usize {
        self.width - self.source_width
    }

    /// Pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 3;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Raw RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume into raw RGB bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Copy the pixels out in a target channel order.
    pub fn to_channel_order(&self, order: ChannelOrder) -> Vec<u8> {
        match order {
            ChannelOrder::Rgb => self.data.clone(),
            ChannelOrder::Bgr => self
                .data
                .chunks_exact(3)
                .flat_map(|c| order.layout(Rgb::new(c[0], c[1], c[2])))
                .collect(),
        }
    }
}
