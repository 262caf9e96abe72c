use std::collections::HashMap;

use sponsor_board::core::action::{Action, Effect, PointerButton, update};
use sponsor_board::core::drag::{HitTarget, NoTargets, Point, Reorder, SpatialIndex};
use sponsor_board::core::entity::{Lane, SponsorId};
use sponsor_board::core::roster::{default_roster, parse_roster};
use sponsor_board::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Answers hit tests from a fixed table, like a layout frozen in one frame.
#[derive(Default)]
struct FrozenLayout {
    targets: HashMap<(i32, i32), HitTarget>,
}

impl FrozenLayout {
    fn with(mut self, x: i32, y: i32, target: HitTarget) -> Self {
        self.targets.insert((x, y), target);
        self
    }
}

impl SpatialIndex for FrozenLayout {
    fn resolve_targets_at(&self, point: Point) -> HitTarget {
        self.targets.get(&(point.x, point.y)).cloned().unwrap_or_default()
    }
}

/// Three sponsors: 1 and 2 prospecting, 3 negotiating.
fn scenario_app() -> App {
    let json = r##"[
        {"id":"1","name":"ASICS","category":"Apparel","value":80000,"status":"Prospecting",
         "lastContact":"Today","initials":"AS","color":"#2563EB","owner":{"name":"Sarah Lee"}},
        {"id":"2","name":"Gatorade","category":"Beverage","value":120000,"status":"Prospecting",
         "lastContact":"Today","initials":"GA","color":"#F97316","owner":{"name":"Mike Ross"}},
        {"id":"3","name":"Spotify","category":"Tech","value":60000,"status":"Negotiating",
         "lastContact":"Today","initials":"SP","color":"#22C55E","owner":{"name":"Rachel Zane"}}
    ]"##;
    App::new(parse_roster(json).expect("scenario roster parses"))
}

fn layout() -> FrozenLayout {
    FrozenLayout::default()
        .with(10, 5, HitTarget::card(Lane::Prospecting, "1"))
        .with(10, 10, HitTarget::card(Lane::Prospecting, "2"))
        .with(40, 5, HitTarget::card(Lane::Negotiating, "3"))
        .with(40, 20, HitTarget::lane(Lane::Negotiating))
        .with(70, 20, HitTarget::lane(Lane::Contracted))
}

fn press(x: i32, y: i32) -> Action {
    Action::PointerDown {
        point: Point::new(x, y),
        button: PointerButton::Primary,
    }
}

fn release(x: i32, y: i32) -> Action {
    Action::PointerUp {
        point: Point::new(x, y),
        button: PointerButton::Primary,
    }
}

fn order(app: &App) -> Vec<(String, Lane)> {
    app.sponsors
        .iter()
        .map(|s| (s.id.as_str().to_string(), s.lane))
        .collect()
}

// ============================================================================
// Drag Sequences
// ============================================================================

#[test]
fn test_drag_across_sibling_then_into_other_lane() {
    let mut app = scenario_app();
    let board = layout();

    assert_eq!(update(&mut app, press(10, 5), &board), Effect::DragStarted("1".into()));

    let effect = update(&mut app, Action::PointerMove(Point::new(10, 10)), &board);
    assert_eq!(
        effect,
        Effect::Reordered(Reorder::Moved {
            id: "1".into(),
            from: 0,
            to: 1
        })
    );
    let ids: Vec<&str> = app.sponsors.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);

    update(&mut app, Action::PointerMove(Point::new(40, 20)), &board);
    assert_eq!(
        order(&app),
        vec![
            ("2".to_string(), Lane::Prospecting),
            ("1".to_string(), Lane::Negotiating),
            ("3".to_string(), Lane::Negotiating),
        ]
    );

    assert_eq!(
        update(&mut app, release(40, 20), &board),
        Effect::DragEnded("1".into())
    );
    assert!(app.selected.is_none());
    assert!(!app.is_capturing());
}

#[test]
fn test_repeated_samples_on_same_target_are_idempotent() {
    let mut app = scenario_app();
    let board = layout();
    update(&mut app, press(10, 5), &board);
    update(&mut app, Action::PointerMove(Point::new(70, 20)), &board);
    let once = order(&app);

    for _ in 0..25 {
        assert_eq!(
            update(&mut app, Action::PointerMove(Point::new(70, 20)), &board),
            Effect::None
        );
    }
    assert_eq!(order(&app), once);
}

#[test]
fn test_collection_keeps_every_sponsor_through_any_drag() {
    let mut app = App::new(default_roster());
    let before: Vec<SponsorId> = {
        let mut ids: Vec<SponsorId> = app.sponsors.iter().map(|s| s.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids
    };

    // A layout mapping a grid of points onto every card and lane
    let mut board = FrozenLayout::default();
    for (i, sponsor) in app.sponsors.iter().enumerate() {
        board = board.with(i as i32, 0, HitTarget::card(sponsor.lane, sponsor.id.as_str()));
    }
    for lane in Lane::ALL {
        board = board.with(100 + lane.index() as i32, 0, HitTarget::lane(lane));
    }

    update(&mut app, press(4, 0), &board);
    let path = [0, 7, 101, 3, 12, 103, 15, 100, 1, 9, 102, 2];
    for x in path {
        update(&mut app, Action::PointerMove(Point::new(x, 0)), &board);
        assert_eq!(app.sponsors.len(), before.len());
    }
    update(&mut app, release(2, 0), &board);

    let mut after: Vec<SponsorId> = app.sponsors.iter().map(|s| s.id.clone()).collect();
    after.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    assert_eq!(after, before);
}

// ============================================================================
// Tap Detection
// ============================================================================

#[test]
fn test_short_press_is_a_tap_and_selects() {
    let mut app = scenario_app();
    let board = layout();
    let before = order(&app);

    update(&mut app, press(10, 5), &board);
    let effect = update(&mut app, release(13, 8), &board);

    assert_eq!(effect, Effect::TapResolved("1".into()));
    assert_eq!(app.selected_sponsor().map(|s| s.name.as_str()), Some("ASICS"));
    assert_eq!(order(&app), before);
}

#[test]
fn test_release_at_threshold_is_a_drag() {
    let mut app = scenario_app();
    let board = layout();
    update(&mut app, press(10, 5), &board);
    // 3-4-5 triangle: exactly the default threshold
    let effect = update(&mut app, release(13, 9), &board);
    assert_eq!(effect, Effect::DragEnded("1".into()));
    assert!(app.selected.is_none());
}

#[test]
fn test_tap_threshold_comes_from_app() {
    let mut app = scenario_app();
    app.tap_threshold = 20.0;
    let board = layout();
    update(&mut app, press(10, 5), &board);
    let effect = update(&mut app, release(22, 5), &board);
    assert_eq!(effect, Effect::TapResolved("1".into()));
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[test]
fn test_only_one_session_at_a_time() {
    let mut app = scenario_app();
    let board = layout();
    update(&mut app, press(10, 5), &board);
    assert_eq!(update(&mut app, press(40, 5), &board), Effect::None);
    assert_eq!(app.active_id(), Some(&"1".into()));

    update(&mut app, release(10, 5), &board);
    assert_eq!(update(&mut app, press(40, 5), &board), Effect::DragStarted("3".into()));
}

#[test]
fn test_cancel_keeps_applied_moves() {
    let mut app = scenario_app();
    let board = layout();
    update(&mut app, press(10, 5), &board);
    update(&mut app, Action::PointerMove(Point::new(40, 20)), &board);
    let applied = order(&app);

    assert_eq!(update(&mut app, Action::CancelDrag, &NoTargets), Effect::DragEnded("1".into()));
    assert_eq!(order(&app), applied);
    assert!(app.selected.is_none());
}

#[test]
fn test_teardown_ignores_later_pointer_input() {
    let mut app = scenario_app();
    let board = layout();
    update(&mut app, press(10, 5), &board);
    update(&mut app, Action::Teardown, &NoTargets);
    let frozen = order(&app);

    assert_eq!(update(&mut app, Action::PointerMove(Point::new(40, 20)), &board), Effect::None);
    assert_eq!(update(&mut app, press(40, 5), &board), Effect::None);
    assert_eq!(update(&mut app, release(40, 5), &board), Effect::None);
    assert_eq!(order(&app), frozen);
    assert!(!app.mounted);
}

#[test]
fn test_moves_off_every_target_change_nothing() {
    let mut app = scenario_app();
    let board = layout();
    let before = order(&app);
    update(&mut app, press(10, 5), &board);
    for (x, y) in [(0, 0), (-5, -5), (500, 500), (10, 6)] {
        assert_eq!(update(&mut app, Action::PointerMove(Point::new(x, y)), &board), Effect::None);
    }
    assert_eq!(order(&app), before);
}
