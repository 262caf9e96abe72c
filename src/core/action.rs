//! # Actions
//!
//! Everything that can happen on the board becomes an `Action`.
//! Mouse pressed on a card? That's `Action::PointerDown`.
//! Window lost focus mid-drag? That's `Action::CancelDrag`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what changed.
//! No I/O here.
//!
//! ```text
//! State + Action + SpatialIndex  →  update()  →  New State + Effect
//! ```
//!
//! Drag session lifecycle:
//!
//! ```text
//! Idle --PointerDown(primary, on a card)--> Dragging   Effect::DragStarted
//! Dragging --PointerMove--> Dragging                   Effect::Reordered | None
//! Dragging --PointerUp--> Idle                         Effect::TapResolved | DragEnded
//! Dragging --CancelDrag | Teardown--> Idle             Effect::DragEnded
//! ```
//!
//! A press while a session is already active is ignored, as is the release
//! of any button other than the primary one. After `Teardown`
//! no pointer action is accepted again.

use log::{debug, info};

use crate::core::drag::{self, Gesture, Point, Reorder, SpatialIndex};
use crate::core::entity::{Category, SponsorId};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PointerDown { point: Point, button: PointerButton },
    PointerMove(Point),
    PointerUp { point: Point, button: PointerButton },
    /// Focus lost: end any session without touching the store.
    CancelDrag,
    /// The board is going away: end any session and stop listening.
    Teardown,
    CloseDetail,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    CycleCategory,
    SetCategory(Option<Category>),
    Quit,
}

/// What the adapter needs to react to after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// A drag session started for this sponsor.
    DragStarted(SponsorId),
    /// A move sample changed the store.
    Reordered(Reorder),
    /// The session ended without a tap.
    DragEnded(SponsorId),
    /// The session ended as a tap; the sponsor is now selected.
    TapResolved(SponsorId),
}

pub fn update(app: &mut App, action: Action, targets: &dyn SpatialIndex) -> Effect {
    match action {
        Action::PointerDown { point, button } => pointer_down(app, point, button, targets),
        Action::PointerMove(point) => pointer_move(app, point, targets),
        Action::PointerUp { point, button } => pointer_up(app, point, button),
        Action::CancelDrag => {
            let effect = end_session(app);
            if effect != Effect::None {
                app.status_message = String::from("Drag cancelled");
            }
            effect
        }
        Action::Teardown => {
            let effect = end_session(app);
            app.mounted = false;
            info!("Board torn down");
            effect
        }
        Action::CloseDetail => {
            app.selected = None;
            Effect::None
        }
        Action::SearchInput(c) => {
            if !app.text_selection_suppressed {
                app.filter.query.push(c);
            }
            Effect::None
        }
        Action::SearchBackspace => {
            if !app.text_selection_suppressed {
                app.filter.query.pop();
            }
            Effect::None
        }
        Action::ClearSearch => {
            if !app.text_selection_suppressed {
                app.filter.query.clear();
            }
            Effect::None
        }
        Action::CycleCategory => {
            app.filter.cycle_category();
            Effect::None
        }
        Action::SetCategory(category) => {
            app.filter.category = category;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn pointer_down(app: &mut App, point: Point, button: PointerButton, targets: &dyn SpatialIndex) -> Effect {
    if !app.mounted || button != PointerButton::Primary {
        return Effect::None;
    }
    if let Some(session) = &app.session {
        debug!(
            "Ignoring press at {:?}: drag of {} already active",
            point, session.active_id
        );
        return Effect::None;
    }
    let Some(card) = targets.resolve_targets_at(point).card else {
        return Effect::None;
    };
    let Some(sponsor) = app.sponsors.get(&card) else {
        debug!("Press on stale card {}", card);
        return Effect::None;
    };

    info!("Drag session started for {} ({})", sponsor.name, card);
    app.status_message = format!("Moving {}", sponsor.name);
    app.session = Some(drag::DragSession::new(card.clone(), point));
    app.text_selection_suppressed = true;
    Effect::DragStarted(card)
}

fn pointer_move(app: &mut App, point: Point, targets: &dyn SpatialIndex) -> Effect {
    if !app.mounted {
        return Effect::None;
    }
    let Some(session) = app.session.as_mut() else {
        return Effect::None;
    };
    session.current = point;

    let hit = targets.resolve_targets_at(point);
    match drag::apply_hit(&mut app.sponsors, &session.active_id, &hit) {
        Some(reorder) => {
            debug!("Applied {:?}", reorder);
            if let Reorder::LaneChanged { to, .. } = &reorder {
                app.status_message = format!("Moved to {}", to);
            }
            Effect::Reordered(reorder)
        }
        None => Effect::None,
    }
}

fn pointer_up(app: &mut App, point: Point, button: PointerButton) -> Effect {
    if !app.mounted {
        return Effect::None;
    }
    // The session belongs to the primary button
    if button != PointerButton::Primary {
        if app.session.is_some() {
            debug!("Ignoring {:?} release at {:?} during drag", button, point);
        }
        return Effect::None;
    }
    let Some(session) = app.session.take() else {
        return Effect::None;
    };
    app.text_selection_suppressed = false;

    match drag::classify_gesture(session.start, point, app.tap_threshold) {
        Gesture::Tap => {
            info!("Tap on {}", session.active_id);
            app.selected = Some(session.active_id.clone());
            app.status_message = String::from("Esc to close");
            Effect::TapResolved(session.active_id)
        }
        Gesture::Drag => {
            info!("Drag of {} ended at {:?}", session.active_id, point);
            app.status_message = String::from("Drag a card to move it, click to open it");
            Effect::DragEnded(session.active_id)
        }
    }
}

/// Discard the session, if any. The store keeps whatever the last sample did.
fn end_session(app: &mut App) -> Effect {
    app.text_selection_suppressed = false;
    match app.session.take() {
        Some(session) => {
            info!("Drag session for {} discarded", session.active_id);
            Effect::DragEnded(session.active_id)
        }
        None => Effect::None,
    }
}
