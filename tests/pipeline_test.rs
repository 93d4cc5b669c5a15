//! End-to-end tests: image file in, named colors (and palette image) out.

mod common;

use common::fixtures::{self, catalogs};
use common::TestWorkspace;
use dominant_colors::ClusterOptions;
use huename::error::PipelineError;
use huename::rendering::PaletteWriter;

#[test]
fn test_all_red_image_named_red() {
    let ws = TestWorkspace::new();
    let catalog = ws.write_catalog(catalogs::RED_BLUE);
    let image = ws.write_image("red.png", &fixtures::solid(2, 2, [255, 0, 0]));

    let run = ws
        .pipeline(Some(&catalog))
        .describe(&image, 1, &ClusterOptions::default())
        .unwrap();

    common::assert_lines(&run.report, &["Red (255, 0, 0)"]);
    assert_eq!(run.report.colors[0].population, 4);
    assert_eq!(run.report.colors[0].distance, 0.0);
}

#[test]
fn test_bands_reported_by_population() {
    let ws = TestWorkspace::new();
    let catalog = ws.write_catalog(catalogs::RED_BLUE);
    let image = ws.write_image(
        "bands.png",
        &fixtures::bands(4, &[(3, [5, 5, 250]), (9, [250, 5, 5])]),
    );

    let run = ws
        .pipeline(Some(&catalog))
        .describe(&image, 2, &ClusterOptions::default())
        .unwrap();

    common::assert_lines(&run.report, &["Red (250, 5, 5)", "Blue (5, 5, 250)"]);
    common::assert_populations_sum(&run.report, 48);
}

#[test]
fn test_noise_image_with_embedded_catalog() {
    let ws = TestWorkspace::new();
    let image = ws.write_image("noise.png", &fixtures::noise(20, 15));
    let pipeline = ws.pipeline(None);

    let run = pipeline
        .describe(&image, 5, &ClusterOptions::default())
        .unwrap();

    assert_eq!(run.report.colors.len(), 5);
    common::assert_populations_sum(&run.report, 300);
    common::assert_population_order(&run.report);

    let catalog = pipeline.catalog().get().unwrap();
    for color in &run.report.colors {
        assert!(catalog.get(&color.name).is_some(), "unknown name {}", color.name);
    }
}

#[test]
fn test_one_cluster_per_pixel() {
    let ws = TestWorkspace::new();
    let catalog = ws.write_catalog(catalogs::PRIMARIES);
    let image = ws.write_image(
        "four.png",
        &fixtures::bands(
            1,
            &[
                (1, [0, 0, 0]),
                (1, [255, 255, 255]),
                (1, [255, 0, 0]),
                (1, [0, 255, 0]),
            ],
        ),
    );

    let run = ws
        .pipeline(Some(&catalog))
        .describe(&image, 4, &ClusterOptions::default())
        .unwrap();

    let mut names: Vec<&str> = run.report.colors.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Black", "Lime", "Red", "White"]);
    assert!(run.report.colors.iter().all(|c| c.population == 1));
}

#[test]
fn test_pinned_seed_is_reproducible() {
    let ws = TestWorkspace::new();
    let image = ws.write_image("noise.png", &fixtures::noise(32, 24));
    let pipeline = ws.pipeline(None);
    let options = ClusterOptions::new().seed(Some(2024));

    let first = pipeline.describe(&image, 6, &options).unwrap();
    let second = pipeline.describe(&image, 6, &options).unwrap();
    assert_eq!(first.report, second.report);
    assert_eq!(first.report.seed, 2024);
}

#[test]
fn test_jpeg_input() {
    let ws = TestWorkspace::new();
    let catalog = ws.write_catalog(catalogs::RED_BLUE);
    let image = ws.write_image("red.jpg", &fixtures::solid(16, 16, [255, 0, 0]));

    let run = ws
        .pipeline(Some(&catalog))
        .describe(&image, 1, &ClusterOptions::default())
        .unwrap();

    // JPEG is lossy; only the name and population are stable
    assert_eq!(run.report.colors[0].name, "Red");
    assert_eq!(run.report.colors[0].population, 256);
}

#[test]
fn test_grayscale_image_rejected() {
    let ws = TestWorkspace::new();
    let path = ws.path("gray.png");
    image::GrayImage::from_pixel(4, 4, image::Luma([128]))
        .save(&path)
        .unwrap();

    let err = ws
        .pipeline(None)
        .describe(&path, 1, &ClusterOptions::default())
        .unwrap_err();
    assert!(err.is_decode_error(), "unexpected error: {err}");
}

#[test]
fn test_unreadable_file_rejected() {
    let ws = TestWorkspace::new();
    let path = ws.path("not-an-image.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    let err = ws
        .pipeline(None)
        .describe(&path, 1, &ClusterOptions::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Decode { .. }));
}

#[test]
fn test_zero_clusters_rejected() {
    let ws = TestWorkspace::new();
    let image = ws.write_image("red.png", &fixtures::solid(2, 2, [255, 0, 0]));

    let err = ws
        .pipeline(None)
        .describe(&image, 0, &ClusterOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::InvalidClusterCount {
            requested: 0,
            samples: 4
        }
    ));
}

#[test]
fn test_palette_written_beside_image() {
    let ws = TestWorkspace::new();
    let image = ws.write_image("noise.png", &fixtures::noise(50, 30));
    let output = ws.path("output.png");

    let run = ws
        .pipeline(None)
        .describe(&image, 8, &ClusterOptions::default())
        .unwrap();
    let palette = PaletteWriter::new(1.1)
        .unwrap()
        .write(&run.sampled, &run.report.representative_colors(), &output)
        .unwrap();

    common::assert_image_dimensions(&output, 55, 30);
    // Top of the strip is the most populous color
    assert_eq!(palette.pixel(54, 0), run.report.colors[0].color);
    assert_eq!(palette.pixel(54, 29), run.report.colors[7].color);
}
