//! Glint - a bubble-field layout engine with drag relaxation and SVG export.
//!
//! Given a set of items with derived display sizes, Glint scatters them
//! without overlap inside a bounded field, corrects overlap after
//! interactive dragging with a pairwise-repulsion relaxation pass, and
//! renders the result as SVG. Everything runs synchronously on the caller's
//! thread; the position set is a single owned [`layout::LayoutState`]
//! handed out as an immutable snapshot.

pub mod config;
pub mod feed;
pub mod filter;
pub mod gesture;
pub mod layout;

mod error;
mod export;

pub use glint_core::{color, geometry, identifier, item};

pub use error::GlintError;
pub use export::SvgRenderer;

use log::{debug, info};

use glint_core::{geometry::Field, identifier::ItemId, item::Item};

use config::AppConfig;
use layout::{LayoutState, RelaxParams, Scatter};

/// Entry point for laying out and rendering fields.
///
/// # Examples
///
/// ```
/// use glint::{FieldBuilder, config::AppConfig, geometry::Field};
/// use glint::feed::sample_items;
///
/// let items = sample_items(8, Some(1));
/// let field = Field::new(800.0, 600.0, 20.0).expect("valid field");
///
/// let builder = FieldBuilder::new(AppConfig::default());
/// let state = builder.layout(&items, field).expect("layout succeeds");
/// let svg = builder.render_svg(&items, &state).expect("render succeeds");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct FieldBuilder {
    config: AppConfig,
}

impl FieldBuilder {
    /// Create a new field builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Computes a fresh layout for the items inside the field.
    ///
    /// Display sizes are derived from each item's attributes
    /// ([`Item::display_size`]). Called whenever the visible item set
    /// changes or the field is resized; an in-flight drag should finish
    /// against the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Config`] for invalid geometry (an item larger
    /// than the field interior).
    pub fn layout(&self, items: &[Item], field: Field) -> Result<LayoutState, GlintError> {
        info!(
            items = items.len(),
            width = field.width(),
            height = field.height();
            "Laying out field"
        );

        let sized: Vec<(ItemId, f32)> = items
            .iter()
            .map(|item| (item.id(), item.display_size()))
            .collect();

        let layout_config = self.config.layout();
        let state = Scatter::new(layout_config.min_gap(), layout_config.max_attempts())
            .with_seed(layout_config.seed())
            .place(&sized, field)?;

        debug!(slots = state.len(); "Layout complete");
        Ok(state)
    }

    /// Runs relaxation after a drag release, excluding no slot.
    ///
    /// Returns the number of passes run. The relaxation is approximate; use
    /// [`FieldBuilder::layout`] to restore the hard invariant.
    pub fn settle(&self, state: &mut LayoutState) -> usize {
        let params = RelaxParams::from_config(self.config.layout());
        layout::relax_until_stable(state, &params, None)
    }

    /// Renders a layout snapshot to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Export`] if the configured background color
    /// does not parse.
    pub fn render_svg(&self, items: &[Item], state: &LayoutState) -> Result<String, GlintError> {
        let svg = SvgRenderer::new(self.config.style()).render(items, state)?;
        info!(bytes = svg.len(); "SVG rendered");
        Ok(svg)
    }
}
