//! SVG rendering of a laid-out field.
//!
//! Each slot becomes a circle filled by the item's trend, stroked by its
//! rarity, with the item name and percent change centered inside. Slots
//! that placement could not resolve get a dashed stroke so the degradation
//! stays visible instead of silently overlapping.

use std::collections::HashMap;

use log::{debug, warn};
use svg::{Document, node::element as svg_element};

use glint_core::{
    color::Color,
    identifier::ItemId,
    item::{Item, Rarity, Trend},
};

use crate::{config::StyleConfig, error::GlintError, layout::LayoutState};

const DEFAULT_BACKGROUND: &str = "#0b0f14";
const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Width and opacity of the rarity glow ring behind each bubble.
const HALO_WIDTH: f32 = 6.0;
const HALO_ALPHA: f32 = 0.35;

fn trend_fill(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "#10b981",
        Trend::Falling => "#ef4444",
        Trend::Neutral => "#6b7280",
    }
}

fn rarity_stroke(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "#9ca3af",
        Rarity::Rare => "#60a5fa",
        Rarity::Epic => "#a78bfa",
        Rarity::Legendary => "#f59e0b",
    }
}

/// Renders a [`LayoutState`] and its items to an SVG document string.
pub struct SvgRenderer<'a> {
    style: &'a StyleConfig,
}

impl<'a> SvgRenderer<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Produces the SVG document for one layout snapshot.
    ///
    /// Slots whose id has no matching item are skipped with a warning; that
    /// happens when the caller filters the item list after layout instead
    /// of re-placing.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Export`] if the configured background color
    /// does not parse.
    pub fn render(&self, items: &[Item], state: &LayoutState) -> Result<String, GlintError> {
        let field = state.field();

        let background = self
            .style
            .background_color()
            .map_err(|err| GlintError::Export(err.into()))?
            .unwrap_or_else(|| {
                Color::new(DEFAULT_BACKGROUND).expect("default background is a valid color")
            });

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", field.width(), field.height()))
            .set("width", field.width())
            .set("height", field.height());

        doc = doc.add(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", field.width())
                .set("height", field.height())
                .set("fill", &background),
        );

        let by_id: HashMap<ItemId, &Item> = items.iter().map(|item| (item.id(), item)).collect();

        let mut group = svg_element::Group::new().set("font-family", DEFAULT_FONT_FAMILY);
        for (id, slot) in state.iter() {
            let Some(item) = by_id.get(&id) else {
                warn!(id = id.to_string(); "Slot has no matching item, skipping");
                continue;
            };
            group = group.add(self.render_bubble(item, slot));
        }

        debug!(slots = state.len(); "Rendered field to SVG");
        Ok(doc.add(group).to_string())
    }

    fn render_bubble(&self, item: &Item, slot: &crate::layout::Slot) -> svg_element::Group {
        let center = slot.center();
        let radius = slot.diameter() / 2.0;

        let glow = Color::new(rarity_stroke(item.rarity()))
            .expect("rarity palette colors are valid CSS")
            .with_alpha(HALO_ALPHA);
        let halo = svg_element::Circle::new()
            .set("class", "halo")
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius + HALO_WIDTH)
            .set("fill", &glow);

        let mut circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", trend_fill(item.trend()))
            .set("fill-opacity", 0.85)
            .set("stroke", rarity_stroke(item.rarity()))
            .set("stroke-width", 2);
        if !slot.resolved() {
            circle = circle.set("stroke-dasharray", "4 3");
        }

        let name_size = (slot.diameter() / 7.0).clamp(9.0, 16.0);
        let name = svg_element::Text::new(item.name())
            .set("x", center.x())
            .set("y", center.y() - name_size * 0.35)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("fill", "white")
            .set("font-size", name_size);

        let change = svg_element::Text::new(format!("{:+.1}%", item.percent_change()))
            .set("x", center.x())
            .set("y", center.y() + name_size * 0.85)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("fill", "white")
            .set("fill-opacity", 0.8)
            .set("font-size", name_size * 0.85);

        svg_element::Group::new()
            .set("class", format!("bubble {}", item.rarity().name()))
            .add(halo)
            .add(circle)
            .add(name)
            .add(change)
    }
}
