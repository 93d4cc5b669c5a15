//! Visual output for extracted colors.
//!
//! [`PaletteComposer`] renders a source image next to a vertical strip of
//! solid color blocks, one per representative color. The result is a
//! [`PaletteImage`] in row-major RGB, convertible to another channel order
//! with [`PaletteImage::to_channel_order`].

mod palette_image;

pub use palette_image::{
    block_ranges, PaletteComposer, PaletteImage, PaletteImageError, DEFAULT_SCALE,
};
