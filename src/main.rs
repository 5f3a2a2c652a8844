//! `hologram-cross` CLI - build a four-view pyramid hologram layout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgb;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hologram_cross::{image::parse_hex_color, Config, HologramStyle, Pipeline};

/// Generate a 4-view hologram cross image.
#[derive(Parser, Debug)]
#[command(name = "hologram-cross")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image (PNG/JPEG/etc.).
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output cross image path.
    #[arg(long, default_value = "cross.png", value_name = "PATH")]
    out: PathBuf,

    /// Optional blue hologram output path.
    #[arg(long, value_name = "PATH")]
    holo: Option<PathBuf>,

    /// Square canvas size in pixels (at most 16384).
    #[arg(long, default_value = "1170", value_name = "INT")]
    canvas: u32,

    /// Central blank square size in pixels.
    #[arg(long, default_value = "400", value_name = "INT")]
    blank: u32,

    /// Max width/height of the subject in pixels.
    #[arg(long, default_value = "300", value_name = "INT")]
    size: u32,

    /// Move subjects towards the center by this many pixels (negative moves them out).
    #[arg(long, default_value = "50", value_name = "INT", allow_negative_numbers = true)]
    inset: i32,

    /// Background gray level (0 = black, 255 = white).
    #[arg(long, default_value = "0", value_name = "INT")]
    bg: u8,

    /// Draw a hologram scan line every N rows.
    #[arg(long, default_value = "4", value_name = "INT")]
    scan_step: u32,

    /// Opacity of the hologram scan lines (0.0-1.0).
    #[arg(long, default_value = "0.5", value_name = "FLOAT")]
    scan_strength: f32,

    /// Hologram colour for black.
    #[arg(long, default_value = "#001018", value_name = "HEX", value_parser = parse_color)]
    dark: Rgb<u8>,

    /// Hologram colour for white.
    #[arg(long, default_value = "#58c6ff", value_name = "HEX", value_parser = parse_color)]
    light: Rgb<u8>,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_color(value: &str) -> std::result::Result<Rgb<u8>, String> {
    parse_hex_color(value).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hologram_cross={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let config = Config {
        canvas_size: args.canvas,
        blank_size: args.blank,
        subject_size: args.size,
        inset: args.inset,
        background: args.bg,
        style: HologramStyle {
            dark: args.dark,
            light: args.light,
            scan_step: args.scan_step,
            scan_strength: args.scan_strength,
        },
        output_quality: args.quality,
    };

    let pipeline = Pipeline::new(config).context("Invalid configuration")?;

    let outputs = pipeline
        .process(&args.input, &args.out, args.holo.as_deref())
        .context("Failed to process image")?;

    println!("Saved cross layout -> {}", outputs.cross.display());
    if let Some(holo) = &outputs.hologram {
        println!("Saved blue hologram -> {}", holo.display());
    }

    Ok(())
}
