//! # Board Component
//!
//! The four lane columns and their cards.
//!
//! `Board` is a transient component (created each frame) wrapping
//! `&'a mut BoardState` (persistent state) and `&'a App` (props). While
//! rendering it records where every lane and card landed on screen in a
//! `BoardLayout`, which is what the drag engine hit-tests against.
//!
//! ## Stale layouts
//!
//! After the store is reordered or a lane is scrolled, the recorded rects no
//! longer describe what is on screen. The layout is then marked stale and
//! resolves every point to an empty target until the next render refreshes
//! it. Hit-testing a stale rect would apply the same swap twice and make the
//! dragged card oscillate.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::drag::{HitTarget, Point, SpatialIndex};
use crate::core::entity::{Lane, SponsorId};
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::sponsor_card::{CARD_HEIGHT, CardVariant, SponsorCard};
use crate::tui::event::TuiEvent;
use crate::tui::format::compact_value;

/// Persistent board state. Lives in `TuiState`.
#[derive(Default)]
pub struct BoardState {
    /// One scroll position per lane, indexed by `Lane::index()`.
    pub scroll: [ScrollViewState; 4],
    pub layout: BoardLayout,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the lane under `(col, row)`. Returns false if no lane is there.
    pub fn scroll_at(&mut self, col: u16, row: u16, down: bool) -> bool {
        let Some(lane) = self.layout.lane_at(Point::new(i32::from(col), i32::from(row))) else {
            return false;
        };
        let state = &mut self.scroll[lane.index()];
        if down {
            state.scroll_down();
        } else {
            state.scroll_up();
        }
        self.layout.mark_stale();
        true
    }
}

impl EventHandler for BoardState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match *event {
            TuiEvent::ScrollUp(col, row) => {
                self.scroll_at(col, row, false);
                None
            }
            TuiEvent::ScrollDown(col, row) => {
                self.scroll_at(col, row, true);
                None
            }
            _ => None,
        }
    }
}

/// Visible part of one card, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    pub id: SponsorId,
    pub rect: Rect,
}

/// Where lanes and cards were drawn in the last frame.
#[derive(Debug, Default)]
pub struct BoardLayout {
    pub lanes: Vec<(Lane, Rect)>,
    pub cards: Vec<CardSlot>,
    stale: bool,
}

impl BoardLayout {
    pub fn clear(&mut self) {
        self.lanes.clear();
        self.cards.clear();
        self.stale = false;
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    fn lane_at(&self, point: Point) -> Option<Lane> {
        self.lanes
            .iter()
            .find(|(_, rect)| contains(*rect, point))
            .map(|(lane, _)| *lane)
    }
}

impl SpatialIndex for BoardLayout {
    fn resolve_targets_at(&self, point: Point) -> HitTarget {
        if self.stale {
            return HitTarget::default();
        }
        HitTarget {
            lane: self.lane_at(point),
            card: self
                .cards
                .iter()
                .find(|slot| contains(slot.rect, point))
                .map(|slot| slot.id.clone()),
        }
    }
}

fn contains(rect: Rect, point: Point) -> bool {
    match (u16::try_from(point.x), u16::try_from(point.y)) {
        (Ok(x), Ok(y)) => rect.contains(Position { x, y }),
        _ => false,
    }
}

fn lane_color(lane: Lane) -> Color {
    match lane {
        Lane::Prospecting => Color::Blue,
        Lane::Negotiating => Color::Yellow,
        Lane::Contracted => Color::Magenta,
        Lane::Delivered => Color::Green,
    }
}

/// The board: one column per lane.
pub struct Board<'a> {
    pub state: &'a mut BoardState,
    pub app: &'a App,
}

impl<'a> Board<'a> {
    pub fn new(state: &'a mut BoardState, app: &'a App) -> Self {
        Self { state, app }
    }

    fn render_lane(&mut self, frame: &mut Frame, lane: Lane, area: Rect) {
        let app = self.app;
        let summary = app.sponsors.lane_summary(lane, &app.filter);
        let active_lane = app
            .active_id()
            .and_then(|id| app.sponsors.get(id))
            .map(|s| s.lane);

        let border_style = if active_lane == Some(lane) {
            Style::default().fg(lane_color(lane)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(lane_color(lane))),
                Span::styled(lane.title(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {} ", summary.count), Style::default().fg(Color::Gray)),
            ]))
            .title_top(Line::from(format!(" {} ", compact_value(summary.value))).right_aligned());
        let body = block.inner(area);
        frame.render_widget(block, area);
        self.state.layout.lanes.push((lane, area));

        let cards: Vec<_> = app.sponsors.visible_in_lane(lane, &app.filter).collect();
        if cards.is_empty() {
            let placeholder_area = Rect {
                height: body.height.min(CARD_HEIGHT),
                ..body
            };
            let placeholder = Paragraph::new(Line::from("Drop here").centered())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Plain)
                        .border_style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)),
                );
            frame.render_widget(placeholder, placeholder_area);
            return;
        }

        let content_width = body.width.saturating_sub(1); // -1 for scrollbar safe area
        let total_height = CARD_HEIGHT.saturating_mul(cards.len() as u16);

        // Clamp before recording rects so the layout matches what gets drawn
        let scroll_state = &mut self.state.scroll[lane.index()];
        let max_y = total_height.saturating_sub(body.height);
        if scroll_state.offset().y > max_y {
            scroll_state.set_offset(Position { x: 0, y: max_y });
        }
        let offset_y = i32::from(scroll_state.offset().y);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let body_top = i32::from(body.y);
        let body_bottom = i32::from(body.bottom());
        for (i, sponsor) in cards.iter().enumerate() {
            let content_y = i as u16 * CARD_HEIGHT;
            let variant = if app.active_id() == Some(&sponsor.id) {
                CardVariant::Dimmed
            } else {
                CardVariant::Normal
            };
            scroll_view.render_widget(
                SponsorCard::new(sponsor, variant),
                Rect::new(0, content_y, content_width, CARD_HEIGHT),
            );

            let top = (body_top + i32::from(content_y) - offset_y).max(body_top);
            let bottom = (body_top + i32::from(content_y + CARD_HEIGHT) - offset_y).min(body_bottom);
            if bottom > top {
                self.state.layout.cards.push(CardSlot {
                    id: sponsor.id.clone(),
                    // Both bounds lie within `body`, so they fit in u16
                    rect: Rect::new(body.x, top as u16, content_width, (bottom - top) as u16),
                });
            }
        }

        frame.render_stateful_widget(scroll_view, body, scroll_state);
    }
}

impl<'a> Component for Board<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.layout.clear();
        let columns = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
        for (lane, column) in Lane::ALL.into_iter().zip(columns.iter()) {
            self.render_lane(frame, lane, *column);
        }
    }
}
