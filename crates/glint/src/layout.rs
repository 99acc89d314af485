//! Layout engine for positioning field items.
//!
//! This module owns the position set for a bubble field and every way it can
//! change. Positions live in a single [`LayoutState`] arena and are only
//! mutated through the operations here, which keeps the many callers
//! (renderer, gesture handler, filter) from growing their own copies.
//!
//! # Pipeline Position
//!
//! ```text
//! Items (filter applied)
//!     ↓ placement (Scatter)
//! LayoutState
//!     ↓ update_position / relax (drag events)
//! LayoutState
//!     ↓ export
//! Output
//! ```
//!
//! # Submodules
//!
//! - [`placement`] - Random scatter placement honoring the minimum-distance
//!   invariant
//! - [`relax`] - Pairwise-repulsion overlap correction after drags
//! - [`state`] - The owned id → slot arena
//!
//! # Invariant
//!
//! For any two slots not being dragged, the distance between centers is at
//! least `(dA + dB)/2 + min_gap`. Placement guarantees it on uncrowded
//! fields and degrades softly under crowding; relaxation restores it
//! approximately after drag releases.

pub mod placement;
pub mod relax;
pub mod state;

pub use placement::Scatter;
pub use relax::{RelaxParams, relax, relax_until_stable};
pub use state::{DragPolicy, LayoutState, Slot, UpdateOutcome};
