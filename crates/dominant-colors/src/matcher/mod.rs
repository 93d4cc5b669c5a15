//! Nearest named-color matching.
//!
//! [`NearestColorMatcher`] borrows a loaded [`ColorCatalog`] and answers
//! "which catalog color is closest to this sample?" by Euclidean distance in
//! RGB space. The catalog is never re-read per query.

use crate::catalog::{CatalogEntry, CatalogError, ColorCatalog};
use crate::color::Rgb;

/// A catalog entry paired with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch<'a> {
    /// The closest catalog entry
    pub entry: &'a CatalogEntry,
    /// Euclidean distance from the query color to `entry.color`
    pub distance: f64,
}

impl ColorMatch<'_> {
    /// Name of the matched entry.
    #[inline]
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Finds the closest catalog entry for a color.
///
/// # Tie-breaking
///
/// Entries are scanned in catalog load order and a candidate only replaces
/// the current best when strictly closer, so among equidistant entries the
/// first one loaded wins.
///
/// # Example
///
/// ```
/// use dominant_colors::{CatalogEntry, ColorCatalog, NearestColorMatcher, Rgb};
///
/// let catalog = ColorCatalog::from_entries([
///     CatalogEntry::new("group", "Red", Rgb::new(255, 0, 0)),
///     CatalogEntry::new("group", "Blue", Rgb::new(0, 0, 255)),
/// ]);
/// let matcher = NearestColorMatcher::new(&catalog);
///
/// let found = matcher.find_nearest(Rgb::new(10, 0, 250)).unwrap();
/// assert_eq!(found.name(), "Blue");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NearestColorMatcher<'a> {
    catalog: &'a ColorCatalog,
}

impl<'a> NearestColorMatcher<'a> {
    /// Create a matcher over a loaded catalog.
    pub fn new(catalog: &'a ColorCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this matcher scans.
    #[inline]
    pub fn catalog(&self) -> &'a ColorCatalog {
        self.catalog
    }

    /// Find the catalog entry nearest to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCatalog`] if the catalog has no entries.
    pub fn find_nearest(&self, color: Rgb) -> Result<ColorMatch<'a>, CatalogError> {
        let mut entries = self.catalog.iter();
        let first = entries.next().ok_or(CatalogError::EmptyCatalog)?;

        // Squared integer distances are exact, so equality ties are real ties
        let mut best = first;
        let mut best_dist = color.distance_squared(first.color);

        for entry in entries {
            let dist = color.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }

        Ok(ColorMatch {
            entry: best,
            distance: (best_dist as f64).sqrt(),
        })
    }

    /// Name every color in order, stopping at the first error.
    pub fn match_all(&self, colors: &[Rgb]) -> Result<Vec<ColorMatch<'a>>, CatalogError> {
        colors.iter().map(|&c| self.find_nearest(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_blue() -> ColorCatalog {
        ColorCatalog::from_entries([
            CatalogEntry::new("group", "Red", Rgb::new(255, 0, 0)),
            CatalogEntry::new("group", "Blue", Rgb::new(0, 0, 255)),
        ])
    }

    #[test]
    fn test_exact_match_has_zero_distance() {
        let catalog = red_blue();
        let found = NearestColorMatcher::new(&catalog)
            .find_nearest(Rgb::new(255, 0, 0))
            .unwrap();
        assert_eq!(found.name(), "Red");
        assert_eq!(found.distance, 0.0);
    }

    #[test]
    fn test_nearest_blue_over_red() {
        let catalog = red_blue();
        let matcher = NearestColorMatcher::new(&catalog);
        let query = Rgb::new(10, 0, 250);

        let found = matcher.find_nearest(query).unwrap();
        assert_eq!(found.name(), "Blue");
        assert!((found.distance - query.distance(Rgb::new(0, 0, 255))).abs() < 1e-9);
        assert!(found.distance < query.distance(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_equidistant_first_loaded_wins() {
        // (128, 0, 128) is equidistant from pure red and pure blue
        let query = Rgb::new(128, 0, 128);
        let catalog = red_blue();
        let found = NearestColorMatcher::new(&catalog).find_nearest(query).unwrap();
        assert_eq!(found.name(), "Red");

        let reversed = ColorCatalog::from_entries([
            CatalogEntry::new("group", "Blue", Rgb::new(0, 0, 255)),
            CatalogEntry::new("group", "Red", Rgb::new(255, 0, 0)),
        ]);
        let found = NearestColorMatcher::new(&reversed)
            .find_nearest(query)
            .unwrap();
        assert_eq!(found.name(), "Blue");
    }

    #[test]
    fn test_identical_colors_first_name_wins() {
        let catalog = ColorCatalog::from_entries([
            CatalogEntry::new("x11", "Aqua", Rgb::new(0, 255, 255)),
            CatalogEntry::new("x11", "Cyan", Rgb::new(0, 255, 255)),
        ]);
        let found = NearestColorMatcher::new(&catalog)
            .find_nearest(Rgb::new(0, 255, 255))
            .unwrap();
        assert_eq!(found.name(), "Aqua");
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let catalog = red_blue();
        let matcher = NearestColorMatcher::new(&catalog);
        let query = Rgb::new(90, 10, 120);
        let first = matcher.find_nearest(query).unwrap();
        for _ in 0..10 {
            assert_eq!(matcher.find_nearest(query).unwrap(), first);
        }
    }

    #[test]
    fn test_single_entry_catalog() {
        let catalog =
            ColorCatalog::from_entries([CatalogEntry::new("g", "Only", Rgb::new(1, 2, 3))]);
        let found = NearestColorMatcher::new(&catalog)
            .find_nearest(Rgb::new(250, 250, 250))
            .unwrap();
        assert_eq!(found.name(), "Only");
    }

    #[test]
    fn test_empty_catalog_errors() {
        let catalog = ColorCatalog::new();
        let result = NearestColorMatcher::new(&catalog).find_nearest(Rgb::new(0, 0, 0));
        assert_eq!(result, Err(CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_match_all_preserves_order() {
        let catalog = red_blue();
        let matches = NearestColorMatcher::new(&catalog)
            .match_all(&[Rgb::new(0, 0, 200), Rgb::new(200, 0, 0)])
            .unwrap();
        let names: Vec<&str> = matches.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Blue", "Red"]);
    }
}
