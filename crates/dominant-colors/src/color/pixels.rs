//! Flat pixel sample storage.
//!
//! [`PixelSet`] holds one [`Rgb`] sample per image pixel in a single
//! contiguous byte buffer. Clustering iterates over millions of samples, so
//! there is no per-pixel allocation: sample `i` lives at bytes `3i..3i+3`.

use std::fmt;

use super::Rgb;

/// Byte order of the three color channels in an interleaved buffer.
///
/// Codecs disagree on native order (OpenCV-style decoders hand out BGR,
/// most others RGB). The order is always passed explicitly so the sampler
/// never depends on an implicit codec convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Blue, green, red
    Bgr,
}

impl ChannelOrder {
    /// Reorder one interleaved pixel from this order into canonical RGB.
    #[inline]
    pub fn to_rgb(self, px: [u8; 3]) -> Rgb {
        match self {
            ChannelOrder::Rgb => Rgb::new(px[0], px[1], px[2]),
            ChannelOrder::Bgr => Rgb::new(px[2], px[1], px[0]),
        }
    }

    /// Lay out a canonical RGB color in this channel order.
    #[inline]
    pub fn layout(self, color: Rgb) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => [color.r, color.g, color.b],
            ChannelOrder::Bgr => [color.b, color.g, color.r],
        }
    }
}

/// Error building a [`PixelSet`] from a raw buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelError {
    /// Width or height is zero
    EmptyImage,
    /// Buffer length does not equal `width * height * 3`
    BufferLength {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelError::EmptyImage => write!(f, "image has no pixels"),
            PixelError::BufferLength { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for PixelError {}

/// Every pixel of an image as an RGB sample, in column-major scan order.
///
/// Scan order is fixed: for each `x` in `0..width`, for each `y` in
/// `0..height`, pixel `(x, y)` is emitted. Clustering does not depend on the
/// order, but a fixed order keeps seeded runs reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSet {
    /// Interleaved RGB bytes, three per sample.
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelSet {
    /// Flatten a row-major interleaved buffer into a column-major sample set.
    ///
    /// `data` holds `height` rows of `width` pixels, three bytes each, in
    /// `order`. Output samples are always in RGB order.
    ///
    /// # Errors
    ///
    /// - [`PixelError::EmptyImage`] if `width * height == 0`
    /// - [`PixelError::BufferLength`] if `data.len() != width * height * 3`
    ///
    /// # Example
    ///
    /// ```
    /// use dominant_colors::{ChannelOrder, PixelSet, Rgb};
    ///
    /// // 2x1 image in BGR order: blue pixel, then red pixel
    /// let bgr = [255, 0, 0, 0, 0, 255];
    /// let pixels = PixelSet::from_interleaved(&bgr, 2, 1, ChannelOrder::Bgr).unwrap();
    ///
    /// assert_eq!(pixels.get(0), Rgb::new(0, 0, 255));
    /// assert_eq!(pixels.get(1), Rgb::new(255, 0, 0));
    /// ```
    pub fn from_interleaved(
        data: &[u8],
        width: usize,
        height: usize,
        order: ChannelOrder,
    ) -> Result<Self, PixelError> {
        let count = width * height;
        if count == 0 {
            return Err(PixelError::EmptyImage);
        }
        if data.len() != count * 3 {
            return Err(PixelError::BufferLength {
                expected: count * 3,
                actual: data.len(),
            });
        }

        let mut samples = Vec::with_capacity(count * 3);
        for x in 0..width {
            for y in 0..height {
                let i = (y * width + x) * 3;
                let color = order.to_rgb([data[i], data[i + 1], data[i + 2]]);
                samples.extend_from_slice(&color.to_bytes());
            }
        }

        Ok(Self {
            data: samples,
            width,
            height,
        })
    }

    /// Build a sample set directly from colors, treated as a `len x 1` image.
    ///
    /// # Errors
    ///
    /// Returns [`PixelError::EmptyImage`] if `colors` is empty.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, PixelError> {
        if colors.is_empty() {
            return Err(PixelError::EmptyImage);
        }
        let data = colors.iter().flat_map(|c| c.to_bytes()).collect();
        Ok(Self {
            data,
            width: colors.len(),
            height: 1,
        })
    }

    /// Number of samples (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    /// Always `false`: empty images are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Source image width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Source image height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at scan index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Rgb {
        let base = i * 3;
        Rgb::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// The raw interleaved RGB bytes in scan order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over samples in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }
}
