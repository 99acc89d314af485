//! CLI logic for the Glint bubble-field tool.
//!
//! Loads (or generates) a set of items, optionally jitters their quotes
//! through the mock feed, filters them, lays them out, and writes the field
//! as SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;
use serde::Deserialize;

use glint::{
    FieldBuilder, GlintError,
    feed::{MockFeed, sample_items},
    filter::{FilterOptions, visible},
    geometry::Field,
    item::{Item, TrendSummary},
};

/// Shape of the TOML items file: a top-level `[[items]]` array.
#[derive(Debug, Deserialize)]
struct ItemsFile {
    items: Vec<Item>,
}

fn load_items(path: &str) -> Result<Vec<Item>, GlintError> {
    let content = fs::read_to_string(path)?;
    let file: ItemsFile = toml::from_str(&content)
        .map_err(|err| GlintError::Config(format!("failed to parse items file: {err}")))?;
    Ok(file.items)
}

/// Run the Glint CLI application
///
/// # Errors
///
/// Returns `GlintError` for:
/// - File I/O errors
/// - Configuration loading errors (including items that cannot fit the field)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), GlintError> {
    info!(
        input:? = args.input,
        output = args.output;
        "Processing field"
    );

    // Load configuration; a command-line seed overrides the configured one.
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.seed.is_some() {
        app_config = glint::config::AppConfig::new(
            app_config.layout().clone().with_seed(args.seed),
            app_config.style().clone(),
            app_config.gesture().clone(),
        );
    }

    let field = Field::new(args.width, args.height, args.margin)?;

    // Load or generate the item set
    let mut items = match &args.input {
        Some(path) => load_items(path)?,
        None => sample_items(args.count, args.seed),
    };

    // Optional mock feed warm-up
    if args.jitter_ticks > 0 {
        let mut feed = MockFeed::new(args.seed);
        for _ in 0..args.jitter_ticks {
            feed.tick(&mut items);
        }
        info!(ticks = args.jitter_ticks; "Applied mock feed jitter");
    }

    // Filter down to the visible subset
    let options = FilterOptions {
        query: args.query.clone(),
        show_small_changes: !args.hide_small_changes,
    };
    let visible_items: Vec<Item> = visible(&items, &options).into_iter().cloned().collect();

    let trends = TrendSummary::from_items(&visible_items);
    info!(
        visible = visible_items.len(),
        total = items.len(),
        rising = trends.rising,
        falling = trends.falling,
        neutral = trends.neutral;
        "Item set ready"
    );

    // Layout and render
    let builder = FieldBuilder::new(app_config);
    let state = builder.layout(&visible_items, field)?;
    let svg = builder.render_svg(&visible_items, &state)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
