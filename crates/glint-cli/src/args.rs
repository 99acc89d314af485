//! Command-line argument definitions for the Glint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the item source, field geometry,
//! filtering, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Glint bubble-field tool
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML file of items; omit to generate a sample catalog
    #[arg(help = "Path to the input items file")]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "field.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field width in pixels
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Field height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Edge margin in pixels
    #[arg(long, default_value_t = 40.0)]
    pub margin: f32,

    /// Placement seed; overrides the configured seed when set
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of generated items when no input file is given
    #[arg(long, default_value_t = 24)]
    pub count: usize,

    /// Rounds of mock quote jitter to apply before layout
    #[arg(long, default_value_t = 0)]
    pub jitter_ticks: usize,

    /// Case-insensitive name filter
    #[arg(long, default_value = "")]
    pub query: String,

    /// Hide items whose percent change is below the small-change cutoff
    #[arg(long)]
    pub hide_small_changes: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
