//! Configuration types for Glint field layout and rendering.
//!
//! This module provides configuration structures that control how fields
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, style, and gesture settings.
//! - [`LayoutConfig`] - Placement and relaxation parameters.
//! - [`StyleConfig`] - Visual styling options such as background color.
//! - [`GestureConfig`] - Click-vs-drag classification thresholds.
//!
//! # Example
//!
//! ```
//! # use glint::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.layout().min_gap(), 20.0);
//! ```

use serde::Deserialize;

use glint_core::color::Color;

use crate::layout::DragPolicy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Gesture classification section.
    #[serde(default)]
    gesture: GestureConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, gesture: GestureConfig) -> Self {
        Self {
            layout,
            style,
            gesture,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the gesture configuration.
    pub fn gesture(&self) -> &GestureConfig {
        &self.gesture
    }
}

/// Placement and relaxation parameters.
///
/// `min_gap` is the fixed minimum clearance between bubble edges; two slots
/// A and B must keep their centers at least `(dA + dB)/2 + min_gap` apart.
/// `seed` makes placement deterministic when set; an unset seed draws from
/// OS entropy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    min_gap: f32,
    max_attempts: usize,
    repulsion_strength: f32,
    relax_tolerance: f32,
    max_relax_passes: usize,
    seed: Option<u64>,
    drag_policy: DragPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_gap: 20.0,
            max_attempts: 200,
            repulsion_strength: 1.0,
            relax_tolerance: 0.5,
            max_relax_passes: 32,
            seed: None,
            drag_policy: DragPolicy::default(),
        }
    }
}

impl LayoutConfig {
    /// Minimum clearance between bubble edges.
    pub fn min_gap(&self) -> f32 {
        self.min_gap
    }

    /// Random-candidate budget per item during placement.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Scale factor applied to penetration depth during relaxation.
    pub fn repulsion_strength(&self) -> f32 {
        self.repulsion_strength
    }

    /// A relaxation run is considered stable once the largest per-pass
    /// displacement drops below this value.
    pub fn relax_tolerance(&self) -> f32 {
        self.relax_tolerance
    }

    /// Upper bound on relaxation passes per run.
    pub fn max_relax_passes(&self) -> usize {
        self.max_relax_passes
    }

    /// Seed for deterministic placement, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns a copy of this configuration with the given seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Policy applied to in-progress drag updates.
    pub fn drag_policy(&self) -> DragPolicy {
        self.drag_policy
    }
}

/// Visual styling configuration for rendered fields.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the field, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Thresholds for click-vs-drag gesture classification.
///
/// A gesture is a click only when its duration stays below
/// `click_max_duration_ms` *and* its displacement stays below
/// `click_max_distance`; everything else is a drag.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    click_max_duration_ms: u64,
    click_max_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_max_duration_ms: 250,
            click_max_distance: 8.0,
        }
    }
}

impl GestureConfig {
    /// Longest press that can still count as a click, in milliseconds.
    pub fn click_max_duration_ms(&self) -> u64 {
        self.click_max_duration_ms
    }

    /// Largest pointer displacement that can still count as a click.
    pub fn click_max_distance(&self) -> f32 {
        self.click_max_distance
    }
}
