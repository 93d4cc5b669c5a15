//! Test fixtures and constants.

use image::{Rgb, RgbImage};

/// Catalog texts
pub mod catalogs {
    /// The two-row reference catalog
    pub const RED_BLUE: &str = "group,Red,#FF0000,255,0,0\ngroup,Blue,#0000FF,0,0,255\n";

    /// A handful of CSS colors with distinct neighborhoods
    pub const PRIMARIES: &str = "\
# group,name,hex,r,g,b
gray,Black,#000000,0,0,0
gray,White,#FFFFFF,255,255,255
red,Red,#FF0000,255,0,0
green,Lime,#00FF00,0,255,0
blue,Blue,#0000FF,0,0,255
yellow,Yellow,#FFFF00,255,255,0
";

    /// Rows in the quoted style of the larger color-name dataset
    pub const QUOTED: &str = "\
amber,\"Amber\",#ffbf00,255,191,0
air_force_blue_raf,\"Air Force Blue (Raf)\",#5d8aa8,93,138,168
blue_crayola,\"Blue, Crayola\",#1f75fe,31,117,254
";
}

/// Solid image of one color
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Horizontal bands stacked top to bottom, `(rows, color)` each
pub fn bands(width: u32, bands: &[(u32, [u8; 3])]) -> RgbImage {
    let height = bands.iter().map(|(rows, _)| rows).sum();
    let mut image = RgbImage::new(width, height);
    let mut y0 = 0;
    for &(rows, color) in bands {
        for y in y0..y0 + rows {
            for x in 0..width {
                image.put_pixel(x, y, Rgb(color));
            }
        }
        y0 += rows;
    }
    image
}

/// Deterministic noisy image with every channel varying
pub fn noise(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 31 + y * 7) % 256) as u8,
            ((x * 13 + y * 29) % 256) as u8,
            ((x * 5 + y * 17 + 90) % 256) as u8,
        ])
    })
}
