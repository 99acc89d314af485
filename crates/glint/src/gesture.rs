//! Drag-vs-click gesture classification.
//!
//! Pointer gestures on a bubble are ambiguous until release: a short, still
//! press is a click (open the detail view), anything longer or farther is a
//! drag (reposition the bubble). The distinction lives in exactly one place,
//! [`classify`], instead of scattered inline threshold checks: a gesture is
//! a click iff its duration is below the duration threshold *and* its
//! displacement stayed below the distance threshold.
//!
//! [`DragTracker`] drives the per-item state machine around it:
//! press → move* → release. The tracker owns no positions; movement is
//! reported to the caller, which feeds
//! [`LayoutState::update_position`](crate::layout::LayoutState::update_position)
//! and runs relaxation once the drag ends.

use std::time::Duration;

use log::trace;

use glint_core::{geometry::Point, identifier::ItemId};

use crate::config::GestureConfig;

/// The outcome of a completed press-release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
}

/// Classifies a finished gesture from its duration and the largest
/// displacement the pointer reached from its origin.
pub fn classify(config: &GestureConfig, duration: Duration, displacement: f32) -> Gesture {
    let within_time = duration < Duration::from_millis(config.click_max_duration_ms());
    let within_distance = displacement < config.click_max_distance();
    if within_time && within_distance {
        Gesture::Click
    } else {
        Gesture::Drag
    }
}

/// A finished gesture, handed to the caller on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOutcome {
    pub id: ItemId,
    pub gesture: Gesture,
    pub end: Point,
}

#[derive(Debug, Clone, Copy)]
struct ActivePress {
    id: ItemId,
    origin: Point,
    pressed_at: Duration,
    max_displacement: f32,
}

/// Tracks at most one in-flight pointer gesture.
///
/// Timestamps are supplied by the caller as durations since an arbitrary
/// epoch (typically app start), which keeps the tracker clock-free and
/// testable.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<ActivePress>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The item currently being pressed or dragged, if any.
    pub fn dragged_id(&self) -> Option<ItemId> {
        self.active.map(|press| press.id)
    }

    /// Starts tracking a press on the given item. A press while another
    /// gesture is in flight supersedes it; the stale gesture is dropped.
    pub fn press(&mut self, id: ItemId, origin: Point, at: Duration) {
        if self.active.is_some() {
            trace!(id = id.to_string(); "Press superseded an unfinished gesture");
        }
        self.active = Some(ActivePress {
            id,
            origin,
            pressed_at: at,
            max_displacement: 0.0,
        });
    }

    /// Records pointer movement. Returns the id of the tracked item so the
    /// caller can apply the proposed position; returns `None` when no
    /// gesture is in flight.
    pub fn move_to(&mut self, position: Point) -> Option<ItemId> {
        let press = self.active.as_mut()?;
        let displacement = press.origin.distance(position);
        press.max_displacement = press.max_displacement.max(displacement);
        Some(press.id)
    }

    /// Finishes the gesture and classifies it. Returns `None` when no
    /// gesture was in flight.
    pub fn release(
        &mut self,
        config: &GestureConfig,
        end: Point,
        at: Duration,
    ) -> Option<GestureOutcome> {
        let mut press = self.active.take()?;
        let displacement = press.origin.distance(end);
        press.max_displacement = press.max_displacement.max(displacement);

        let duration = at.saturating_sub(press.pressed_at);
        let gesture = classify(config, duration, press.max_displacement);
        trace!(
            id = press.id.to_string(),
            duration_ms = duration.as_millis() as u64,
            displacement = press.max_displacement,
            gesture:? = gesture;
            "Gesture finished"
        );

        Some(GestureOutcome {
            id: press.id,
            gesture,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_classify_click() {
        let config = GestureConfig::default();
        assert_eq!(classify(&config, ms(100), 2.0), Gesture::Click);
    }

    #[test]
    fn test_classify_long_press_is_drag() {
        let config = GestureConfig::default();
        // Still pointer, but held past the duration threshold.
        assert_eq!(classify(&config, ms(400), 0.0), Gesture::Drag);
    }

    #[test]
    fn test_classify_far_move_is_drag() {
        let config = GestureConfig::default();
        // Fast gesture, but the pointer traveled.
        assert_eq!(classify(&config, ms(50), 30.0), Gesture::Drag);
    }

    #[test]
    fn test_tracker_click_flow() {
        let config = GestureConfig::default();
        let mut tracker = DragTracker::new();
        let id = ItemId::new("bubble");

        tracker.press(id, Point::new(100.0, 100.0), ms(1000));
        let outcome = tracker.release(&config, Point::new(102.0, 101.0), ms(1080)).unwrap();

        assert_eq!(outcome.id, id);
        assert_eq!(outcome.gesture, Gesture::Click);
        assert_eq!(tracker.dragged_id(), None);
    }

    #[test]
    fn test_tracker_drag_flow() {
        let config = GestureConfig::default();
        let mut tracker = DragTracker::new();
        let id = ItemId::new("bubble");

        tracker.press(id, Point::new(100.0, 100.0), ms(1000));
        assert_eq!(tracker.move_to(Point::new(180.0, 140.0)), Some(id));
        assert_eq!(tracker.dragged_id(), Some(id));

        let outcome = tracker.release(&config, Point::new(200.0, 150.0), ms(1400)).unwrap();
        assert_eq!(outcome.gesture, Gesture::Drag);
        assert_eq!(outcome.end, Point::new(200.0, 150.0));
    }

    #[test]
    fn test_move_out_and_back_is_still_a_drag() {
        let config = GestureConfig::default();
        let mut tracker = DragTracker::new();
        let id = ItemId::new("bubble");

        // Quick gesture that wanders far but releases at the origin: the
        // peak displacement decides, not the endpoint.
        tracker.press(id, Point::new(100.0, 100.0), ms(0));
        tracker.move_to(Point::new(160.0, 100.0));
        let outcome = tracker.release(&config, Point::new(100.0, 100.0), ms(100)).unwrap();

        assert_eq!(outcome.gesture, Gesture::Drag);
    }

    #[test]
    fn test_release_without_press() {
        let config = GestureConfig::default();
        let mut tracker = DragTracker::new();
        assert!(tracker.release(&config, Point::new(0.0, 0.0), ms(10)).is_none());
        assert_eq!(tracker.move_to(Point::new(0.0, 0.0)), None);
    }
}
