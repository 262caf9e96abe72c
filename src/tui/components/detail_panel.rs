//! # Detail Panel Component
//!
//! Centred overlay with the profile of the sponsor that was tapped.
//! Dismissed with Esc or a click outside the panel.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailPanelState` lives in `TuiState`
//! - `DetailPanel` is created each frame with borrowed state

use crossterm::event::MouseButton;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::entity::{Sponsor, SponsorId};
use crate::tui::components::sponsor_card::sponsor_color;
use crate::tui::event::TuiEvent;
use crate::tui::format::compact_value;

/// Persistent state for the detail overlay.
pub struct DetailPanelState {
    pub sponsor_id: SponsorId,
    /// Where the panel was drawn last frame. Empty until the first render.
    pub overlay: Rect,
}

impl DetailPanelState {
    pub fn new(sponsor_id: SponsorId) -> Self {
        Self {
            sponsor_id,
            overlay: Rect::default(),
        }
    }

    /// Handle an event, returning a DetailEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match *event {
            TuiEvent::Escape => Some(DetailEvent::Dismiss),
            TuiEvent::MouseDown(MouseButton::Left, col, row)
                if !self.overlay.contains(Position { x: col, y: row }) =>
            {
                Some(DetailEvent::Dismiss)
            }
            _ => None,
        }
    }
}

/// Events emitted by the detail panel.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailEvent {
    Dismiss,
}

/// Transient render wrapper for the detail overlay.
pub struct DetailPanel<'a> {
    state: &'a mut DetailPanelState,
    sponsor: &'a Sponsor,
}

impl<'a> DetailPanel<'a> {
    pub fn new(state: &'a mut DetailPanelState, sponsor: &'a Sponsor) -> Self {
        Self { state, sponsor }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);
        self.state.overlay = overlay;
        frame.render_widget(Clear, overlay);

        let sponsor = self.sponsor;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(255, 215, 0)))
            .title(format!(" {} ", sponsor.name))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let label = Style::default().fg(Color::DarkGray);
        let field = |name: &'static str, value: String, style: Style| {
            Line::from(vec![
                Span::styled(format!("{name:<14}"), label),
                Span::styled(value, style),
            ])
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", sponsor.initials),
                    Style::default()
                        .fg(Color::Black)
                        .bg(sponsor_color(sponsor))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    sponsor.category.label().to_uppercase(),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Owned by {}", sponsor.owner.name),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::default(),
            field("Current Stage", sponsor.lane.title().to_string(), Style::default()),
            field(
                "Est. Value",
                compact_value(sponsor.value),
                Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD),
            ),
            field("Last Contact", sponsor.last_contact.clone(), Style::default()),
            Line::default(),
        ];

        let wrap_width = (inner.width as usize).max(1);
        lines.extend(
            textwrap::wrap(&profile_text(sponsor), wrap_width)
                .into_iter()
                .map(|line| Line::styled(line.into_owned(), Style::default().fg(Color::Gray))),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn profile_text(sponsor: &Sponsor) -> String {
    format!(
        "{} is a {} partner currently in the {} stage. The account is owned by {}; \
         last contact was {}.",
        sponsor.name,
        sponsor.category.label().to_lowercase(),
        sponsor.lane.title().to_lowercase(),
        sponsor.owner.name,
        sponsor.last_contact.to_lowercase(),
    )
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Lane;
    use crate::test_support::sponsor;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_panel(state: &mut DetailPanelState, sponsor: &Sponsor) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DetailPanel::new(state, sponsor).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_profile() {
        let mut s = sponsor("4", Lane::Contracted);
        s.name = "Red Bull".into();
        s.value = 200_000;
        let mut state = DetailPanelState::new(s.id.clone());
        let text = render_panel(&mut state, &s);
        assert!(text.contains("Red Bull"));
        assert!(text.contains("Contracted"));
        assert!(text.contains("$200k"));
        assert!(text.contains("Owned by Owner"));
        assert!(!state.overlay.is_empty());
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = DetailPanelState::new("1".into());
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(DetailEvent::Dismiss));
    }

    #[test]
    fn test_click_outside_dismisses_inside_does_not() {
        let s = sponsor("1", Lane::Prospecting);
        let mut state = DetailPanelState::new(s.id.clone());
        render_panel(&mut state, &s);
        let overlay = state.overlay;

        let inside = TuiEvent::MouseDown(MouseButton::Left, overlay.x + 2, overlay.y + 2);
        assert_eq!(state.handle_event(&inside), None);

        let outside = TuiEvent::MouseDown(MouseButton::Left, 0, 0);
        assert_eq!(state.handle_event(&outside), Some(DetailEvent::Dismiss));
    }

    #[test]
    fn test_profile_text_mentions_owner() {
        let s = sponsor("1", Lane::Negotiating);
        let text = profile_text(&s);
        assert!(text.contains("Sponsor 1"));
        assert!(text.contains("negotiating"));
        assert!(text.contains("Owner"));
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 60, outer);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 24);
        assert_eq!(rect.x, 20);
    }
}
