//! # Drag Engine
//!
//! Pointer-level drag and drop for the board, independent of any renderer.
//!
//! ```text
//!  pointer-down ──► DragSession { active_id, start, current }
//!       │
//!  pointer-move ──► SpatialIndex::resolve_targets_at(point) ──► HitTarget
//!       │                                                          │
//!       │                                  apply_hit(store, ..) ◄──┘
//!       │                                  (lane change or splice, live)
//!  pointer-up   ──► classify_gesture(start, end) ──► Tap | Drag
//! ```
//!
//! Every sample that resolves to a usable target mutates the store
//! immediately. Nothing is staged and nothing is rolled back on release.
//!
//! ## Target precedence
//!
//! A hit can name both a lane (the pointer is inside a lane column) and a
//! card (the pointer is over a card in that column). A lane that differs
//! from the active sponsor's current lane wins. Otherwise a same-lane
//! sibling card triggers a splice. A sibling in another lane, the dragged
//! card itself, and ids that are no longer in the store are all no-ops.

use crate::core::entity::{Lane, SponsorId};
use crate::core::store::SponsorStore;

/// Movement below this distance (in cells) between press and release is a tap.
pub const DEFAULT_TAP_THRESHOLD: f64 = 5.0;

/// Pointer coordinates in screen cells. Signed so offsets can go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        f64::from(other.x - self.x).hypot(f64::from(other.y - self.y))
    }

    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
}

/// Classify a press/release pair by straight-line distance.
pub fn classify_gesture(start: Point, end: Point, threshold: f64) -> Gesture {
    if start.distance_to(end) < threshold {
        Gesture::Tap
    } else {
        Gesture::Drag
    }
}

/// State of one press-to-release interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub active_id: SponsorId,
    pub start: Point,
    pub current: Point,
}

impl DragSession {
    pub fn new(active_id: SponsorId, start: Point) -> Self {
        Self {
            active_id,
            start,
            current: start,
        }
    }
}

/// What lies under a point. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitTarget {
    pub lane: Option<Lane>,
    pub card: Option<SponsorId>,
}

impl HitTarget {
    pub fn lane(lane: Lane) -> Self {
        Self {
            lane: Some(lane),
            card: None,
        }
    }

    pub fn card(lane: Lane, card: impl Into<SponsorId>) -> Self {
        Self {
            lane: Some(lane),
            card: Some(card.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lane.is_none() && self.card.is_none()
    }
}

impl From<&str> for HitTarget {
    fn from(card: &str) -> Self {
        Self {
            lane: None,
            card: Some(card.into()),
        }
    }
}

/// Resolves screen points to semantic drop targets.
///
/// The renderer supplies the implementation (the TUI uses the layout it
/// recorded during the last draw). Implementations must return an empty
/// target rather than fail when their data is stale.
pub trait SpatialIndex {
    fn resolve_targets_at(&self, point: Point) -> HitTarget;
}

/// An index with nothing in it. Used where no layout exists yet.
pub struct NoTargets;

impl SpatialIndex for NoTargets {
    fn resolve_targets_at(&self, _point: Point) -> HitTarget {
        HitTarget::default()
    }
}

/// A mutation applied to the store by one move sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reorder {
    LaneChanged { id: SponsorId, from: Lane, to: Lane },
    Moved { id: SponsorId, from: usize, to: usize },
}

/// Apply the effect of `hit` for the sponsor being dragged.
///
/// Returns the mutation performed, or `None` when the sample changes nothing.
pub fn apply_hit(store: &mut SponsorStore, active_id: &SponsorId, hit: &HitTarget) -> Option<Reorder> {
    let current_lane = store.get(active_id)?.lane;

    if let Some(lane) = hit.lane
        && lane != current_lane
    {
        let from = store.set_lane(active_id, lane)?;
        return Some(Reorder::LaneChanged {
            id: active_id.clone(),
            from,
            to: lane,
        });
    }

    let sibling = hit.card.as_ref()?;
    if sibling == active_id || store.get(sibling)?.lane != current_lane {
        return None;
    }
    let (from, to) = store.move_to(active_id, sibling)?;
    Some(Reorder::Moved {
        id: active_id.clone(),
        from,
        to,
    })
}
