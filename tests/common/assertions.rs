//! Assertion helpers for tests.

use std::path::Path;

use huename::services::ColorReport;
use pretty_assertions::assert_eq;

/// Assert the report prints exactly `expected`, one line per color
pub fn assert_lines(report: &ColorReport, expected: &[&str]) {
    assert_eq!(report.lines(), expected.to_vec());
}

/// Assert cluster populations add up to the pixel count
pub fn assert_populations_sum(report: &ColorReport, pixels: usize) {
    let total: usize = report.colors.iter().map(|c| c.population).sum();
    assert_eq!(total, pixels, "populations should cover every pixel");
}

/// Assert populations never increase down the report
pub fn assert_population_order(report: &ColorReport) {
    for pair in report.colors.windows(2) {
        assert!(
            pair[0].population >= pair[1].population,
            "{} ({}) listed before {} ({})",
            pair[0].name,
            pair[0].population,
            pair[1].name,
            pair[1].population
        );
    }
}

/// Assert an image file exists with the given dimensions
pub fn assert_image_dimensions(path: &Path, width: u32, height: u32) {
    let image = image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    assert_eq!((image.width(), image.height()), (width, height));
}
