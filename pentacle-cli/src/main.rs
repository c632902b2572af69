//! CLI for pentagram grids.
//!
//! Provides:
//! - Rendering an N×N grid of arm indices as a hex square (or JSON)
//! - Classifying single points against a pentagram

mod par;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use pentacle_core::{build_pentagram, classify_point, parse_log_level, Grid, R2};

use crate::render::{render_hex, render_json, RenderConfig};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PENTACLE_BUILD_SHA"), ")");

#[derive(Parser)]
#[command(name = "pentacle")]
#[command(about = "Classify grid cells by the pentagram arm containing them", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Log level
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Hex,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every cell of a square grid and print the result
    Grid {
        /// Cells per side
        #[arg(short, long, default_value = "32")]
        side: usize,

        /// Columns per rendered cell
        #[arg(long, default_value = "2", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        spacing: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "hex")]
        format: Format,

        /// Classify cells in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Classify a single point
    Point {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Base circle center x
        #[arg(long, default_value = "15.5")]
        cx: f64,

        /// Base circle center y
        #[arg(long, default_value = "15.5")]
        cy: f64,

        /// Base circle radius
        #[arg(short, long, default_value = "12.5")]
        radius: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(parse_log_level(cli.log_level.as_deref()))
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Grid { side, spacing, format, parallel } => {
            info!("Hello, world!");
            let pentagram = Grid::pentagram(side)
                .with_context(|| format!("building pentagram for {}x{} grid", side, side))?;
            let grid = if parallel {
                par::classify_parallel(side, &pentagram)?
            } else {
                Grid::classify(side, &pentagram)?
            };
            info!("Cells per arm: {:?}", grid.counts());
            match format {
                Format::Hex => print!("{}", render_hex(&grid, &RenderConfig { spacing })),
                Format::Json => print!("{}", render_json(&pentagram, &grid)?),
            }
            info!("Goodbye, world!");
        }
        Commands::Point { x, y, cx, cy, radius } => {
            let pentagram = build_pentagram(R2 { x: cx, y: cy }, radius)
                .with_context(|| format!("building pentagram at ({}, {}) radius {}", cx, cy, radius))?;
            println!("{}", classify_point(&R2 { x, y }, &pentagram));
        }
    }
    Ok(())
}
