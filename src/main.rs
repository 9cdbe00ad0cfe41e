//! tof-png - render raw ToF depth/amplitude frames as PNG images

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tof_png::{
    convert, ConvertConfig, FrameShape, RangeBounds, DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[derive(Parser)]
#[command(name = "tof-png")]
#[command(author, version, about = "Convert ToF depth/amplitude raw floats to PNG images", long_about = None)]
struct Cli {
    /// Raw amplitude frame (little-endian f32, row-major)
    amplitude_file: PathBuf,
    /// Raw depth frame (little-endian f32, row-major)
    depth_file: PathBuf,
    /// Lower bound of the valid depth range
    #[arg(long = "min", allow_hyphen_values = true)]
    min_range: f32,
    /// Upper bound of the valid depth range
    #[arg(long = "max", allow_hyphen_values = true)]
    max_range: f32,
    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Frame height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Minimum amplitude for a depth pixel to be drawn
    #[arg(short, long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    confidence: f32,
    /// Write PNGs here instead of next to the inputs
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let bounds = RangeBounds::new(cli.min_range, cli.max_range).context("Invalid depth range")?;
    let config = ConvertConfig {
        shape: FrameShape::new(cli.height, cli.width).context("Invalid frame size")?,
        confidence_threshold: cli.confidence,
        out_dir: cli.out_dir,
    };

    let start = Instant::now();
    let outputs = convert(&cli.amplitude_file, &cli.depth_file, bounds, &config)
        .context("Failed to convert frame pair")?;
    info!("Processing time: {:.2?}", start.elapsed());

    println!("Depth saved to: {}", outputs.depth.display());
    println!("Amplitude saved to: {}", outputs.amplitude.display());
    Ok(())
}
