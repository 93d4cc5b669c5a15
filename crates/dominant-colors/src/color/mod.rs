//! Color sample types
//!
//! - [`Rgb`]: an 8-bit (red, green, blue) sample, the unit every stage works in
//! - [`PixelSet`]: all samples of one image, stored as a flat byte buffer
//! - [`ChannelOrder`]: explicit channel layout of codec buffers
//!
//! # Example
//!
//! ```
//! use dominant_colors::{ChannelOrder, PixelSet, Rgb};
//!
//! let raw = [255, 0, 0, 0, 0, 255]; // 2x1 image, RGB
//! let pixels = PixelSet::from_interleaved(&raw, 2, 1, ChannelOrder::Rgb).unwrap();
//! assert_eq!(pixels.len(), 2);
//! assert_eq!(pixels.get(1), Rgb::new(0, 0, 255));
//! ```

mod pixels;
mod rgb;

pub use pixels::{ChannelOrder, PixelError, PixelSet};
pub use rgb::Rgb;
