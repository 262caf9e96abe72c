//! # FilterBar Component
//!
//! One row: category chips on the left, the search field on the right.
//! Chips are clickable; their rects are recorded during render and checked
//! in `handle_event`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::entity::Category;
use crate::core::store::BoardFilter;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::format::truncate_str;
use crossterm::event::MouseButton;

const SEARCH_LABEL: &str = " Search: ";
const SEARCH_WIDTH: u16 = 24;

#[derive(Default)]
pub struct FilterBarState {
    /// Chip hit areas from the last render. `None` is the "All" chip.
    pub chips: Vec<(Option<Category>, Rect)>,
    /// Where the text cursor belongs, if the search field is visible.
    pub cursor: Option<Position>,
}

impl FilterBarState {
    pub fn new() -> Self {
        Self::default()
    }

    fn chip_at(&self, col: u16, row: u16) -> Option<Option<Category>> {
        self.chips
            .iter()
            .find(|(_, rect)| rect.contains(Position { x: col, y: row }))
            .map(|(category, _)| *category)
    }
}

impl EventHandler for FilterBarState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match *event {
            TuiEvent::MouseDown(MouseButton::Left, col, row) => {
                self.chip_at(col, row).map(Action::SetCategory)
            }
            _ => None,
        }
    }
}

pub struct FilterBar<'a> {
    pub state: &'a mut FilterBarState,
    pub filter: &'a BoardFilter,
}

impl<'a> FilterBar<'a> {
    pub fn new(state: &'a mut FilterBarState, filter: &'a BoardFilter) -> Self {
        Self { state, filter }
    }
}

impl<'a> Component for FilterBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.chips.clear();
        self.state.cursor = None;
        if area.height == 0 {
            return;
        }

        let search_width = SEARCH_WIDTH.min(area.width / 3);
        let chips_right = area.right().saturating_sub(search_width);

        let mut spans = Vec::new();
        let mut x = area.x;
        let options = std::iter::once(None).chain(Category::ALL.into_iter().map(Some));
        for category in options {
            let label = format!(" {} ", category.map_or("All", Category::label));
            let width = label.len() as u16;
            if x + width > chips_right {
                break;
            }
            let style = if self.filter.category == category {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(255, 215, 0))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).bg(Color::DarkGray)
            };
            self.state.chips.push((category, Rect::new(x, area.y, width, 1)));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            x += width + 1;
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, area.y, chips_right - area.x, 1));

        if search_width <= SEARCH_LABEL.len() as u16 {
            return;
        }
        let field_width = search_width as usize - SEARCH_LABEL.len();
        let query = if self.filter.query.chars().count() < field_width {
            self.filter.query.clone()
        } else {
            truncate_str(&self.filter.query, field_width.saturating_sub(1))
        };
        let search = Line::from(vec![
            Span::styled(SEARCH_LABEL, Style::default().fg(Color::Gray)),
            Span::styled(query.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let search_area = Rect::new(chips_right, area.y, search_width, 1);
        frame.render_widget(Paragraph::new(search), search_area);
        let typed = unicode_width::UnicodeWidthStr::width(query.as_str()) as u16;
        self.state.cursor = Some(Position {
            x: (chips_right + SEARCH_LABEL.len() as u16 + typed).min(area.right().saturating_sub(1)),
            y: area.y,
        });
    }
}
