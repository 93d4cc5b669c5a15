use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dominant_colors::InitMethod;
use huename::assets::{AssetCategory, AssetLoader};
use huename::models::AppConfig;
use huename::rendering::PaletteWriter;
use huename::services::{CatalogStore, ColorPipeline};

#[derive(Parser)]
#[command(name = "huename")]
#[command(about = "Find the dominant colors of an image and name them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Clustering flags shared by `colors` and `palette`
#[derive(clap::Args)]
struct ClusterArgs {
    /// Number of dominant colors (default from config)
    #[arg(short = 'k', long = "clusters")]
    k: Option<usize>,

    /// k-means seed (default from config)
    #[arg(long)]
    seed: Option<u64>,

    /// Centroid initialization: "kmeans++" or "random"
    #[arg(long)]
    init: Option<InitMethod>,

    /// Color catalog file (overrides CATALOG_FILE and config)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the named dominant colors of an image
    Colors {
        /// Image file (JPEG, PNG, ...)
        image: PathBuf,

        #[command(flatten)]
        cluster: ClusterArgs,

        /// Keep cluster order instead of sorting by population
        #[arg(long)]
        unsorted: bool,
    },
    /// Print the named colors and write a palette strip beside the image
    Palette {
        /// Image file (JPEG, PNG, ...)
        image: PathBuf,

        #[command(flatten)]
        cluster: ClusterArgs,

        /// Output image path; format follows the extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width multiplier (must be above 1)
        #[arg(long)]
        scale: Option<f64>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract colors.csv
        #[arg(long)]
        catalog: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Colors {
            image,
            cluster,
            unsorted,
        }) => {
            init_logging();
            run_colors_command(&image, &cluster, unsorted)
        }
        Some(Commands::Palette {
            image,
            cluster,
            output,
            scale,
        }) => {
            init_logging();
            run_palette_command(&image, &cluster, output, scale)
        }
        Some(Commands::Init {
            catalog,
            config,
            all,
            force,
            list,
        }) => run_init_command(catalog, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huename=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load config and build the pipeline, applying the catalog precedence:
/// `--catalog`, then `CATALOG_FILE`, then the config `catalog` key.
fn build_pipeline(catalog_flag: Option<PathBuf>) -> (AppConfig, ColorPipeline) {
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    let catalog = catalog_flag
        .or_else(|| loader.catalog_file().map(Path::to_path_buf))
        .or_else(|| config.catalog.clone());
    let loader = loader.with_catalog_file(catalog);

    (config, ColorPipeline::new(CatalogStore::new(loader)))
}

fn apply_cluster_args(config: &mut AppConfig, args: &ClusterArgs) {
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(init) = args.init {
        config.init = init;
    }
}

/// Name the dominant colors of an image
fn run_colors_command(image: &Path, args: &ClusterArgs, unsorted: bool) -> anyhow::Result<()> {
    let (mut config, pipeline) = build_pipeline(args.catalog.clone());
    apply_cluster_args(&mut config, args);
    if unsorted {
        config.sort_by_population = false;
    }

    let k = args.k.unwrap_or(config.clusters);
    let run = pipeline.describe(image, k, &config.cluster_options())?;
    print!("{}", run.report);

    Ok(())
}

/// Name the dominant colors and write the palette image
fn run_palette_command(
    image: &Path,
    args: &ClusterArgs,
    output: Option<PathBuf>,
    scale: Option<f64>,
) -> anyhow::Result<()> {
    let (mut config, pipeline) = build_pipeline(args.catalog.clone());
    apply_cluster_args(&mut config, args);

    let k = args.k.unwrap_or(config.palette_clusters);
    let output = output.unwrap_or_else(|| config.palette_output.clone());
    let writer = PaletteWriter::new(scale.unwrap_or(config.scale))?;

    // Names first: a failed run writes no palette
    let run = pipeline.describe(image, k, &config.cluster_options())?;
    print!("{}", run.report);

    writer.write(&run.sampled, &run.report.representative_colors(), &output)?;
    println!("Wrote {}", output.display());

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    catalog: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Catalog:");
        for f in AssetLoader::list_embedded(AssetCategory::Catalog) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || catalog {
        categories.push(AssetCategory::Catalog);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --catalog, or --config");
        eprintln!("\nRun 'huename init --list' to see embedded assets.");
        std::process::exit(1);
    }

    // Paths from env vars (or defaults in the working directory)
    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let catalog_file = std::env::var("CATALOG_FILE").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Huename v{VERSION}");
    println!("Dominant color extraction and naming\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CATALOG_FILE = {}",
        catalog_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let store = CatalogStore::new(loader.clone());

    println!("\nAsset Sources:");
    println!("  Config:  {}", loader.source(AssetCategory::Config));
    match store.get() {
        Ok(catalog) => println!("  Catalog: {} ({} colors)", store.source(), catalog.len()),
        Err(e) => println!("  Catalog: {} (error: {e})", store.source()),
    }

    // Effective settings
    println!("\nSettings:");
    println!("  clusters         = {}", config.clusters);
    println!("  palette_clusters = {}", config.palette_clusters);
    println!("  scale            = {}", config.scale);
    println!(
        "  seed             = {}",
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(random)".to_string())
    );
    println!("  init             = {}", config.init);
    println!("  palette_output   = {}", config.palette_output.display());

    // Commands section
    println!("\nCommands:");
    println!("  huename colors <IMAGE>    Print the named dominant colors");
    println!("  huename palette <IMAGE>   Also write a palette strip image");
    println!("  huename init              Extract embedded assets");
    println!("\nRun 'huename --help' for more details.");
}
