//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates mouse and keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! sees it through one seam: the `BoardLayout` recorded during each draw is
//! the `SpatialIndex` the drag engine resolves pointer samples against.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (drag proxy spring still moving): draws every ~16ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! Pending events are drained before the next draw, except after a reorder
//! or a scroll. Those leave the layout stale, so the drain stops and the
//! board is redrawn before the next pointer sample is hit-tested.

mod component;
mod components;
mod event;
mod format;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, MouseButton,
};
use crossterm::execute;
use rand::Rng;

use crate::core::action::{Action, Effect, PointerButton, update};
use crate::core::config::ResolvedConfig;
use crate::core::drag::Point;
use crate::core::entity::Sponsor;
use crate::core::proxy::{DragProxy, ProxySettings};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::detail_panel::DetailEvent;
use crate::tui::components::{BoardState, DetailPanelState, FilterBarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core board logic)
pub struct TuiState {
    // Persistent component states
    pub board: BoardState,
    pub filter_bar: FilterBarState,
    /// Floating card while a drag is active
    pub proxy: Option<DragProxy>,
    pub proxy_settings: ProxySettings,
    /// Detail overlay (None = hidden)
    pub detail: Option<DetailPanelState>,
}

impl TuiState {
    pub fn new(proxy_settings: ProxySettings) -> Self {
        Self {
            board: BoardState::new(),
            filter_bar: FilterBarState::new(),
            proxy: None,
            proxy_settings,
            detail: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableFocusChange, // FocusLost cancels an active drag
            SetCursorStyle::SteadyBar
        )?;
        info!("Terminal modes enabled (mouse capture, focus change, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig, sponsors: Vec<Sponsor>) -> std::io::Result<()> {
    let mut app = App::from_config(sponsors, &config);
    let mut tui = TuiState::new(config.proxy);
    let mut rng = rand::rng();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let animating = match tui.proxy.as_mut() {
            Some(proxy) => {
                proxy.tick(now - last_tick);
                !proxy.is_settled()
            }
            None => false,
        };
        last_tick = now;

        // Only draw when something changed
        if needs_redraw || animating || tui.board.layout.is_stale() {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, &mut rng, event) {
                should_quit = true;
                break;
            }
            // The store or a scroll offset changed: redraw before hit-testing again
            if tui.board.layout.is_stale() {
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    dispatch(&mut app, &mut tui, Action::Teardown);
    drop(terminal_mode_guard);
    ratatui::restore();
    Ok(())
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event<R: Rng + ?Sized>(app: &mut App, tui: &mut TuiState, rng: &mut R, event: TuiEvent) -> bool {
    match event {
        // Every recorded rect is from the old size until the next draw
        TuiEvent::Resize => {
            tui.board.layout.mark_stale();
            return false;
        }
        // ForceQuit (Ctrl+C) always quits, even with an overlay open
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit) == Effect::Quit,
        TuiEvent::FocusLost => {
            dispatch(app, tui, Action::CancelDrag);
            return false;
        }
        _ => {}
    }

    // When the detail panel is open, route all events to it
    if let Some(detail) = tui.detail.as_mut() {
        if detail.handle_event(&event) == Some(DetailEvent::Dismiss) {
            tui.detail = None;
            dispatch(app, tui, Action::CloseDetail);
        }
        return false;
    }

    match event {
        TuiEvent::MouseDown(button, col, row) => {
            if let Some(action) = tui.filter_bar.handle_event(&event) {
                dispatch(app, tui, action);
                return false;
            }
            dispatch(
                app,
                tui,
                Action::PointerDown {
                    point: to_point(col, row),
                    button: to_button(button),
                },
            );
        }
        TuiEvent::MouseDrag(col, row) | TuiEvent::MouseMove(col, row) => {
            if app.is_capturing() {
                let point = to_point(col, row);
                dispatch(app, tui, Action::PointerMove(point));
                if let Some(proxy) = tui.proxy.as_mut() {
                    proxy.follow(point, rng);
                }
            }
        }
        TuiEvent::MouseUp(button, col, row) => {
            dispatch(
                app,
                tui,
                Action::PointerUp {
                    point: to_point(col, row),
                    button: to_button(button),
                },
            );
        }
        TuiEvent::ScrollUp(..) | TuiEvent::ScrollDown(..) => {
            tui.board.handle_event(&event);
        }
        TuiEvent::Escape => {
            dispatch(app, tui, Action::ClearSearch);
        }
        TuiEvent::InputChar('q') if app.filter.query.is_empty() && !app.is_capturing() => {
            return dispatch(app, tui, Action::Quit) == Effect::Quit;
        }
        TuiEvent::InputChar(c) => {
            dispatch(app, tui, Action::SearchInput(c));
        }
        TuiEvent::Backspace => {
            dispatch(app, tui, Action::SearchBackspace);
        }
        TuiEvent::CycleCategory => {
            dispatch(app, tui, Action::CycleCategory);
        }
        TuiEvent::ForceQuit | TuiEvent::FocusLost | TuiEvent::Resize => {}
    }
    false
}

/// Run `update` against the last drawn layout and apply the effect to
/// presentation state.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(app, action, &tui.board.layout);
    match &effect {
        Effect::DragStarted(id) => {
            let start = app.session.as_ref().map(|s| s.start).unwrap_or_default();
            tui.proxy = Some(DragProxy::new(id.clone(), start, tui.proxy_settings));
        }
        Effect::Reordered(reorder) => {
            debug!("Layout stale after {:?}", reorder);
            tui.board.layout.mark_stale();
        }
        Effect::DragEnded(_) => {
            tui.proxy = None;
        }
        Effect::TapResolved(id) => {
            tui.proxy = None;
            tui.detail = Some(DetailPanelState::new(id.clone()));
        }
        Effect::Quit | Effect::None => {}
    }
    effect
}

fn to_point(col: u16, row: u16) -> Point {
    Point::new(i32::from(col), i32::from(row))
}

fn to_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Lane;
    use crate::test_support::{ids, test_app};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    struct Harness {
        app: App,
        tui: TuiState,
        rng: StdRng,
        terminal: Terminal<TestBackend>,
    }

    impl Harness {
        fn new() -> Self {
            let mut harness = Self {
                app: test_app(),
                tui: TuiState::new(ProxySettings::default()),
                rng: StdRng::seed_from_u64(42),
                terminal: Terminal::new(TestBackend::new(120, 30)).unwrap(),
            };
            harness.draw();
            harness
        }

        fn draw(&mut self) {
            let (app, tui) = (&self.app, &mut self.tui);
            self.terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
        }

        fn send(&mut self, event: TuiEvent) -> bool {
            handle_event(&mut self.app, &mut self.tui, &mut self.rng, event)
        }

        fn card_rect(&self, id: &str) -> Rect {
            self.tui
                .board
                .layout
                .cards
                .iter()
                .find(|c| c.id.as_str() == id)
                .map(|c| c.rect)
                .unwrap()
        }

        fn lane_rect(&self, lane: Lane) -> Rect {
            self.tui
                .board
                .layout
                .lanes
                .iter()
                .find(|(l, _)| *l == lane)
                .map(|(_, r)| *r)
                .unwrap()
        }
    }

    #[test]
    fn test_drag_reorders_within_lane() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        let second = h.card_rect("2");

        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        assert!(h.tui.proxy.is_some());

        h.send(TuiEvent::MouseDrag(second.x + 2, second.y + 2));
        assert_eq!(ids(&h.app.sponsors), vec!["2", "1", "3"]);
        assert!(h.tui.board.layout.is_stale());

        // Until the next draw, further samples hit nothing
        h.send(TuiEvent::MouseDrag(second.x + 2, second.y + 3));
        assert_eq!(ids(&h.app.sponsors), vec!["2", "1", "3"]);

        h.draw();
        h.send(TuiEvent::MouseUp(MouseButton::Left, second.x + 2, second.y + 3));
        assert!(h.tui.proxy.is_none());
        assert!(h.tui.detail.is_none());
        assert!(!h.app.is_capturing());
    }

    #[test]
    fn test_drag_to_other_lane_changes_lane() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        let delivered = h.lane_rect(Lane::Delivered);

        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        h.send(TuiEvent::MouseDrag(delivered.x + 3, delivered.y + 10));
        h.send(TuiEvent::MouseUp(MouseButton::Left, delivered.x + 3, delivered.y + 10));

        assert_eq!(h.app.sponsors.get(&"1".into()).map(|s| s.lane), Some(Lane::Delivered));
        assert_eq!(ids(&h.app.sponsors), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_tap_opens_detail_and_escape_closes_it() {
        let mut h = Harness::new();
        let third = h.card_rect("3");

        h.send(TuiEvent::MouseDown(MouseButton::Left, third.x + 2, third.y + 1));
        h.send(TuiEvent::MouseUp(MouseButton::Left, third.x + 3, third.y + 2));
        assert_eq!(h.tui.detail.as_ref().map(|d| d.sponsor_id.as_str()), Some("3"));
        assert_eq!(h.app.selected, Some("3".into()));

        // Keys go to the panel, not the search box
        h.send(TuiEvent::InputChar('x'));
        assert!(h.app.filter.query.is_empty());

        h.send(TuiEvent::Escape);
        assert!(h.tui.detail.is_none());
        assert!(h.app.selected.is_none());
    }

    #[test]
    fn test_resize_mid_drag_ignores_old_rects() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        let second = h.card_rect("2");

        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        h.send(TuiEvent::Resize);
        assert!(h.tui.board.layout.is_stale());

        h.send(TuiEvent::MouseDrag(second.x + 2, second.y + 2));
        assert_eq!(ids(&h.app.sponsors), vec!["1", "2", "3"]);
        assert!(h.app.is_capturing());
    }

    #[test]
    fn test_right_click_mid_drag_keeps_session() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        let second = h.card_rect("2");

        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        h.send(TuiEvent::MouseDown(MouseButton::Right, first.x + 2, first.y + 1));
        h.send(TuiEvent::MouseUp(MouseButton::Right, first.x + 2, first.y + 1));
        assert!(h.app.is_capturing());
        assert!(h.tui.detail.is_none());
        assert!(h.tui.proxy.is_some());

        h.send(TuiEvent::MouseDrag(second.x + 2, second.y + 2));
        assert_eq!(ids(&h.app.sponsors), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_focus_lost_cancels_drag() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        h.send(TuiEvent::FocusLost);
        assert!(!h.app.is_capturing());
        assert!(h.tui.proxy.is_none());
        assert!(!h.app.text_selection_suppressed);
    }

    #[test]
    fn test_proxy_follows_pointer() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        h.send(TuiEvent::MouseDrag(100, 28));
        assert_eq!(h.tui.proxy.as_ref().map(|p| p.pointer()), Some(Point::new(100, 28)));
    }

    #[test]
    fn test_typing_filters_and_q_quits_only_when_empty() {
        let mut h = Harness::new();
        assert!(!h.send(TuiEvent::InputChar('n')));
        assert!(!h.send(TuiEvent::InputChar('q')));
        assert_eq!(h.app.filter.query, "nq");
        h.send(TuiEvent::Backspace);
        h.send(TuiEvent::Escape);
        assert!(h.app.filter.query.is_empty());
        assert!(h.send(TuiEvent::InputChar('q')));
    }

    #[test]
    fn test_force_quit() {
        let mut h = Harness::new();
        assert!(h.send(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_tab_and_chip_click_set_category() {
        let mut h = Harness::new();
        h.send(TuiEvent::CycleCategory);
        assert!(h.app.filter.category.is_some());

        let (_, all_chip) = h.tui.filter_bar.chips[0];
        h.send(TuiEvent::MouseDown(MouseButton::Left, all_chip.x, all_chip.y));
        assert!(h.app.filter.category.is_none());
        assert!(!h.app.is_capturing());
    }

    #[test]
    fn test_teardown_clears_proxy_and_blocks_input() {
        let mut h = Harness::new();
        let first = h.card_rect("1");
        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        dispatch(&mut h.app, &mut h.tui, Action::Teardown);
        assert!(h.tui.proxy.is_none());

        h.send(TuiEvent::MouseDown(MouseButton::Left, first.x + 2, first.y + 1));
        assert!(h.tui.proxy.is_none());
        assert!(!h.app.is_capturing());
    }
}
