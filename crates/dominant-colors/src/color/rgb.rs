//! 8-bit RGB color sample
//!
//! `Rgb` is the unit of exchange between every stage of the pipeline: pixels
//! are flattened into it, cluster centroids are rounded into it, and catalog
//! entries store their reference color as one.

use std::fmt;
use std::str::FromStr;

use crate::catalog::ParseColorError;

/// A color sample in (red, green, blue) channel order.
///
/// Each channel is an 8-bit intensity, so the `[0, 255]` range invariant is
/// enforced by the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use dominant_colors::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from real-valued channel means.
    ///
    /// Each channel is rounded half-up (values are non-negative, so
    /// `f64::round` rounds .5 upward) and clamped to `[0, 255]`.
    ///
    /// # Example
    /// ```
    /// use dominant_colors::Rgb;
    /// assert_eq!(Rgb::from_mean([127.5, 0.49, 300.0]), Rgb::new(128, 0, 255));
    /// ```
    #[inline]
    pub fn from_mean(mean: [f64; 3]) -> Self {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self::new(channel(mean[0]), channel(mean[1]), channel(mean[2]))
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Exact integer arithmetic; the maximum value is `3 * 255^2`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance `sqrt(dr² + dg² + db²)`.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

/// Formats as `(r, g, b)`, the tuple form used in color reports.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dominant_colors::Rgb;
    ///
    /// let amber: Rgb = "#FFBF00".parse().unwrap();
    /// assert_eq!(amber, Rgb::new(255, 191, 0));
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: each digit expands to a repeated pair (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mean_rounds_half_up() {
        assert_eq!(Rgb::from_mean([0.5, 1.5, 2.5]), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::from_mean([0.49, 1.49, 254.5]), Rgb::new(0, 1, 255));
    }

    #[test]
    fn test_from_mean_clamps() {
        assert_eq!(Rgb::from_mean([-3.0, 255.4, 1000.0]), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_distance_matches_formula() {
        let query = Rgb::new(10, 0, 250);
        let blue = Rgb::new(0, 0, 255);
        let red = Rgb::new(255, 0, 0);

        assert_eq!(query.distance_squared(blue), 125);
        assert!((query.distance(blue) - 11.180).abs() < 1e-3);
        assert!((query.distance(red) - 350.036).abs() < 1e-3);
        assert_eq!(red.distance(red), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Rgb::new(12, 200, 45);
        let b = Rgb::new(250, 3, 99);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn test_max_distance_fits() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    }

    #[test]
    fn test_display_tuple_form() {
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "(255, 0, 0)");
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::new(18, 52, 171);
        assert_eq!(color.to_hex(), "#1234AB");
        assert_eq!(color.to_hex().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("#FF0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("00ff00".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 0));
        assert_eq!("  #00F ".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#GG0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#ÿÿÿ".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }
}
