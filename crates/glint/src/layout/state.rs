//! The owned position arena for a laid-out field.

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use glint_core::{
    geometry::{Field, Point},
    identifier::ItemId,
};

/// Policy applied when a drag proposes a new position.
///
/// The two variants correspond to the two behaviors observed in bubble
/// dashboards: either any position is accepted while dragging and overlap is
/// corrected on release, or a move that would collide is rejected outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragPolicy {
    /// Accept any in-bounds position; overlap is resolved by relaxation
    /// after the drag ends. This is the default.
    #[default]
    FreeOverlap,
    /// Reject a proposed position that would violate the minimum-distance
    /// invariant against any other slot.
    Blocked,
}

/// Result of a position update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The slot was moved to the (possibly clamped) position.
    Moved,
    /// The position would collide and the policy is [`DragPolicy::Blocked`].
    Rejected,
    /// No slot with that id exists; the state is unchanged.
    UnknownId,
}

/// One item's entry in the layout: its center, drawn diameter, and whether
/// placement managed to honor the minimum-distance invariant for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    center: Point,
    diameter: f32,
    resolved: bool,
}

impl Slot {
    pub(crate) fn new(center: Point, diameter: f32, resolved: bool) -> Self {
        Self {
            center,
            diameter,
            resolved,
        }
    }

    /// Center of the slot's circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Drawn diameter of the slot's circle.
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// False when placement exhausted its attempt budget for this slot and
    /// kept a best-effort position instead. Renderers may flag such slots.
    pub fn resolved(&self) -> bool {
        self.resolved
    }

    /// Minimum center distance this slot must keep from `other`.
    pub fn required_clearance(&self, other: &Slot, min_gap: f32) -> f32 {
        (self.diameter + other.diameter) / 2.0 + min_gap
    }

    /// Whether this slot sits closer to `other` than the invariant allows.
    pub fn overlaps(&self, other: &Slot, min_gap: f32) -> bool {
        self.center.distance(other.center) < self.required_clearance(other, min_gap)
    }
}

/// The single owned arena of item id → slot for one field.
///
/// Iteration order is placement order (largest item first), which keeps
/// rendering and relaxation deterministic. All mutation goes through
/// [`LayoutState::update_position`] and the [`relax`](crate::layout::relax)
/// pass; the renderer receives the state as an immutable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    field: Field,
    slots: IndexMap<ItemId, Slot>,
}

impl LayoutState {
    /// Creates an empty state for the given field.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            slots: IndexMap::new(),
        }
    }

    /// The field this state was computed for.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Number of slots in the state.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the state holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks up one slot by id.
    pub fn get(&self, id: ItemId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    /// Iterates slots in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Slot)> {
        self.slots.iter().map(|(id, slot)| (*id, slot))
    }

    /// Ids in placement order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.slots.keys().copied().collect()
    }

    pub(crate) fn insert(&mut self, id: ItemId, slot: Slot) {
        self.slots.insert(id, slot);
    }

    pub(crate) fn set_center(&mut self, id: ItemId, center: Point) {
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.center = center;
        }
    }

    /// Overwrites one slot's center with externally supplied drag
    /// coordinates.
    ///
    /// The center is clamped so the full circle stays inside the field; the
    /// minimum-distance invariant is *not* enforced under
    /// [`DragPolicy::FreeOverlap`]. An unknown id is a no-op. Updates are
    /// last-write-wins: the latest accepted position is the one that sticks.
    pub fn update_position(
        &mut self,
        id: ItemId,
        center: Point,
        min_gap: f32,
        policy: DragPolicy,
    ) -> UpdateOutcome {
        let Some(slot) = self.slots.get(&id) else {
            debug!(id = id.to_string(); "Position update for unknown id ignored");
            return UpdateOutcome::UnknownId;
        };

        let diameter = slot.diameter();
        let clamped = self.field.clamp_center(center, diameter);

        if policy == DragPolicy::Blocked {
            let candidate = Slot::new(clamped, diameter, true);
            let collides = self
                .slots
                .iter()
                .any(|(other_id, other)| *other_id != id && candidate.overlaps(other, min_gap));
            if collides {
                return UpdateOutcome::Rejected;
            }
        }

        self.set_center(id, clamped);
        UpdateOutcome::Moved
    }

    /// Checks the minimum-distance invariant over every pair of slots.
    pub fn satisfies_invariant(&self, min_gap: f32) -> bool {
        let slots: Vec<&Slot> = self.slots.values().collect();
        for (i, a) in slots.iter().enumerate() {
            for b in slots.iter().skip(i + 1) {
                if a.overlaps(b, min_gap) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(800.0, 600.0, 20.0).expect("valid field")
    }

    fn state_with(slots: &[(&str, f32, f32, f32)]) -> LayoutState {
        let mut state = LayoutState::new(field());
        for (name, x, y, d) in slots {
            state.insert(
                ItemId::new(name),
                Slot::new(Point::new(*x, *y), *d, true),
            );
        }
        state
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut state = state_with(&[("a", 100.0, 100.0, 50.0)]);
        let before = state.clone();

        let outcome = state.update_position(
            ItemId::new("missing"),
            Point::new(1.0, 1.0),
            10.0,
            DragPolicy::FreeOverlap,
        );

        assert_eq!(outcome, UpdateOutcome::UnknownId);
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_clamps_into_field() {
        let mut state = state_with(&[("a", 100.0, 100.0, 50.0)]);

        let outcome = state.update_position(
            ItemId::new("a"),
            Point::new(-500.0, 5000.0),
            10.0,
            DragPolicy::FreeOverlap,
        );

        assert_eq!(outcome, UpdateOutcome::Moved);
        let slot = state.get(ItemId::new("a")).unwrap();
        // margin 20 + radius 25 = 45 inset on each side
        assert_eq!(slot.center(), Point::new(45.0, 555.0));
    }

    #[test]
    fn test_free_overlap_accepts_colliding_position() {
        let mut state = state_with(&[("a", 100.0, 100.0, 50.0), ("b", 400.0, 300.0, 50.0)]);

        let outcome = state.update_position(
            ItemId::new("a"),
            Point::new(400.0, 300.0),
            10.0,
            DragPolicy::FreeOverlap,
        );

        assert_eq!(outcome, UpdateOutcome::Moved);
        assert!(!state.satisfies_invariant(10.0));
    }

    #[test]
    fn test_blocked_rejects_colliding_position() {
        let mut state = state_with(&[("a", 100.0, 100.0, 50.0), ("b", 400.0, 300.0, 50.0)]);

        let outcome = state.update_position(
            ItemId::new("a"),
            Point::new(410.0, 305.0),
            10.0,
            DragPolicy::Blocked,
        );

        assert_eq!(outcome, UpdateOutcome::Rejected);
        // Position unchanged
        assert_eq!(
            state.get(ItemId::new("a")).unwrap().center(),
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_blocked_accepts_clear_position() {
        let mut state = state_with(&[("a", 100.0, 100.0, 50.0), ("b", 400.0, 300.0, 50.0)]);

        let outcome = state.update_position(
            ItemId::new("a"),
            Point::new(600.0, 100.0),
            10.0,
            DragPolicy::Blocked,
        );

        assert_eq!(outcome, UpdateOutcome::Moved);
        assert!(state.satisfies_invariant(10.0));
    }

    #[test]
    fn test_slot_clearance() {
        let a = Slot::new(Point::new(0.0, 0.0), 100.0, true);
        let b = Slot::new(Point::new(105.0, 0.0), 100.0, true);
        assert_eq!(a.required_clearance(&b, 10.0), 110.0);
        assert!(a.overlaps(&b, 10.0));
        assert!(!a.overlaps(&b, 0.0));
    }
}
