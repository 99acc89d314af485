//! Random scatter placement honoring the minimum-distance invariant.
//!
//! Items are processed in descending size order (placing large items first
//! leaves fewer failed attempts for the small ones) and each receives up to
//! a bounded number of uniformly random candidate centers inside the field
//! interior. The first candidate clearing every already-placed slot wins.
//! When the budget runs out the best candidate seen is kept and the slot is
//! marked unresolved; crowding is an expected degradation, not a failure.

use std::f32::consts::PI;

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use glint_core::{
    geometry::{Field, Point},
    identifier::ItemId,
};

use crate::{
    error::GlintError,
    layout::state::{LayoutState, Slot},
};

/// Total bubble area beyond this fraction of the interior counts as crowded.
const CROWDING_BOUND: f32 = 0.3;

/// Scatter placement engine.
///
/// # Examples
///
/// ```
/// use glint::layout::Scatter;
/// use glint_core::{geometry::Field, identifier::ItemId};
///
/// let field = Field::new(800.0, 600.0, 20.0).unwrap();
/// let items = vec![
///     (ItemId::new("a"), 100.0),
///     (ItemId::new("b"), 100.0),
///     (ItemId::new("c"), 100.0),
/// ];
///
/// let state = Scatter::new(10.0, 200).with_seed(Some(7)).place(&items, field).unwrap();
/// assert!(state.satisfies_invariant(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct Scatter {
    min_gap: f32,
    max_attempts: usize,
    seed: Option<u64>,
}

impl Scatter {
    /// Creates a placement engine with the given minimum edge gap and
    /// per-item attempt budget.
    pub fn new(min_gap: f32, max_attempts: usize) -> Self {
        Self {
            min_gap,
            max_attempts: max_attempts.max(1),
            seed: None,
        }
    }

    /// Sets the RNG seed. A fixed seed makes placement fully deterministic;
    /// `None` draws from OS entropy.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Assigns every item a position inside the field.
    ///
    /// On an uncrowded field the returned state satisfies the
    /// minimum-distance invariant for all pairs; under crowding, slots that
    /// exhausted their attempt budget keep the best candidate tried and are
    /// marked unresolved (see [`Slot::resolved`]).
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Config`] if any item's diameter is non-finite,
    /// non-positive, or larger than the field interior. Geometry is
    /// validated up front so no coordinate ever goes non-finite.
    pub fn place(
        &self,
        items: &[(ItemId, f32)],
        field: Field,
    ) -> Result<LayoutState, GlintError> {
        for (id, diameter) in items {
            if !field.fits(*diameter) {
                return Err(GlintError::Config(format!(
                    "item `{id}` with size {diameter} does not fit a {}x{} field with margin {}",
                    field.width(),
                    field.height(),
                    field.margin(),
                )));
            }
        }

        let crowding = self.crowding(items, field);
        if crowding > CROWDING_BOUND {
            debug!(crowding = crowding; "Field is crowded, placement may leave unresolved slots");
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Largest first; ties keep input order.
        let mut ordered: Vec<(ItemId, f32)> = items.to_vec();
        ordered.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut state = LayoutState::new(field);
        let mut unresolved = 0usize;

        for (id, diameter) in ordered {
            let slot = self.place_one(&mut rng, &state, field, diameter);
            if !slot.resolved() {
                unresolved += 1;
            }
            trace!(
                id = id.to_string(),
                x = slot.center().x(),
                y = slot.center().y(),
                resolved = slot.resolved();
                "Placed item"
            );
            state.insert(id, slot);
        }

        debug!(
            placed = state.len(),
            unresolved = unresolved;
            "Scatter placement finished"
        );

        Ok(state)
    }

    /// Fraction of the field interior covered by the items' circles. Above
    /// [`CROWDING_BOUND`] the invariant is no longer guaranteed for every
    /// pair.
    pub fn crowding(&self, items: &[(ItemId, f32)], field: Field) -> f32 {
        let bubble_area: f32 = items.iter().map(|(_, d)| PI * d * d / 4.0).sum();
        bubble_area / field.interior_area()
    }

    /// Tries random candidates for a single item against the slots placed
    /// so far, keeping the candidate with the largest minimal clearance as
    /// the fallback.
    fn place_one(
        &self,
        rng: &mut StdRng,
        state: &LayoutState,
        field: Field,
        diameter: f32,
    ) -> Slot {
        let (min, max) = field
            .center_span(diameter)
            .expect("diameters are validated before placement");

        let mut best: Option<(Point, f32)> = None;

        for _ in 0..self.max_attempts {
            let candidate = Point::new(
                sample_axis(rng, min.x(), max.x()),
                sample_axis(rng, min.y(), max.y()),
            );

            // Worst clearance against the already-placed slots; positive
            // means the invariant holds for every pair.
            let clearance = state
                .iter()
                .map(|(_, placed)| {
                    candidate.distance(placed.center())
                        - ((diameter + placed.diameter()) / 2.0 + self.min_gap)
                })
                .fold(f32::INFINITY, f32::min);

            if clearance >= 0.0 {
                return Slot::new(candidate, diameter, true);
            }

            if best.is_none_or(|(_, best_clearance)| clearance > best_clearance) {
                best = Some((candidate, clearance));
            }
        }

        // Attempt budget exhausted: keep the least-bad candidate. The field
        // center is the deterministic fallback if no candidate was sampled,
        // which only happens with a zero attempt budget.
        let center = best.map_or_else(|| field.center(), |(point, _)| point);
        Slot::new(center, diameter, false)
    }
}

/// Uniform sample on `[lo, hi]`, tolerating the degenerate span where an
/// item exactly fills one interior axis.
fn sample_axis(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi - lo <= f32::EPSILON {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}
