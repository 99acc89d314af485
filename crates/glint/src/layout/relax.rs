//! Pairwise-repulsion relaxation for overlap introduced by dragging.
//!
//! A relax pass pushes every overlapping pair apart along the line between
//! their centers, proportionally to the penetration depth. It is a
//! correction heuristic, not a converging simulation: one pass reduces
//! overlap, [`relax_until_stable`] iterates until quiet or a pass cap, and
//! callers that need the hard invariant re-place instead.
//!
//! Relaxation runs on trigger events only (drag release, resize), never on
//! an animation tick.

use log::{debug, trace};

use glint_core::{geometry::Point, identifier::ItemId};

use crate::{config::LayoutConfig, layout::state::LayoutState};

/// Below this center distance a pair is treated as coincident and separated
/// along a fixed axis instead of the (undefined) center line.
const COINCIDENT_EPSILON: f32 = 1e-3;

/// Parameters for a relaxation run.
#[derive(Debug, Clone, Copy)]
pub struct RelaxParams {
    min_gap: f32,
    repulsion_strength: f32,
    tolerance: f32,
    max_passes: usize,
}

impl RelaxParams {
    pub fn new(min_gap: f32, repulsion_strength: f32, tolerance: f32, max_passes: usize) -> Self {
        Self {
            min_gap,
            repulsion_strength,
            tolerance,
            max_passes: max_passes.max(1),
        }
    }

    /// Builds relaxation parameters from the layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(
            config.min_gap(),
            config.repulsion_strength(),
            config.relax_tolerance(),
            config.max_relax_passes(),
        )
    }

    pub fn min_gap(&self) -> f32 {
        self.min_gap
    }
}

/// Runs one relaxation pass and returns the largest displacement applied.
///
/// For every pair of slots closer than their required clearance, both are
/// displaced away from each other by `penetration · strength / 2`. A slot
/// matching `dragged` keeps its position (it is authoritative for this
/// tick) but still repels its neighbors. Every resulting center is clamped
/// back into the field.
///
/// A state already satisfying the invariant with no dragged slot is
/// returned bit-for-bit unchanged, so a zero return means stable.
pub fn relax(state: &mut LayoutState, params: &RelaxParams, dragged: Option<ItemId>) -> f32 {
    let ids = state.ids();
    let mut displacements = vec![(0.0f32, 0.0f32); ids.len()];

    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let a = state.get(ids[i]).expect("id came from this state");
            let b = state.get(ids[j]).expect("id came from this state");

            let required = a.required_clearance(b, params.min_gap);
            let distance = a.center().distance(b.center());
            if distance >= required {
                continue;
            }

            let penetration = required - distance;
            let (dx, dy) = if distance > COINCIDENT_EPSILON {
                (
                    (b.center().x() - a.center().x()) / distance,
                    (b.center().y() - a.center().y()) / distance,
                )
            } else {
                // Coincident centers: separate horizontally, first id to the
                // left. Deterministic, so repeated runs agree.
                (1.0, 0.0)
            };

            let shift = penetration * params.repulsion_strength / 2.0;
            if dragged != Some(ids[i]) {
                displacements[i].0 -= dx * shift;
                displacements[i].1 -= dy * shift;
            }
            if dragged != Some(ids[j]) {
                displacements[j].0 += dx * shift;
                displacements[j].1 += dy * shift;
            }
        }
    }

    let mut max_moved = 0.0f32;
    for (id, (dx, dy)) in ids.iter().zip(displacements) {
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        let slot = state.get(*id).expect("id came from this state");
        let proposed = slot.center().offset(dx, dy);
        let clamped = state.field().clamp_center(proposed, slot.diameter());
        let moved = slot.center().distance(clamped);
        state.set_center(*id, clamped);
        max_moved = max_moved.max(moved);
    }

    trace!(max_moved = max_moved; "Relax pass complete");
    max_moved
}

/// Runs relax passes until the largest displacement drops below the
/// tolerance or the pass cap is reached. Returns the number of passes run.
pub fn relax_until_stable(
    state: &mut LayoutState,
    params: &RelaxParams,
    dragged: Option<ItemId>,
) -> usize {
    for pass in 1..=params.max_passes {
        if relax(state, params, dragged) < params.tolerance {
            debug!(passes = pass; "Relaxation stable");
            return pass;
        }
    }
    debug!(passes = params.max_passes; "Relaxation hit pass cap");
    params.max_passes
}
