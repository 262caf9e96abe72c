//! # TitleBar Component
//!
//! Top status bar: app name and status on the left, the two headline
//! metrics on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     app.status_message.clone(),
//!     app.sponsors.pipeline_value(&app.filter),
//!     app.sponsors.delivered_value(&app.filter),
//! );
//! title_bar.render(frame, area);
//! ```
//!
//! ### Priority on narrow terminals
//!
//! The metrics are right-aligned and drawn after the left side, so when the
//! two overlap the numbers stay readable and the status message is cut.

use crate::tui::component::Component;
use crate::tui::format::dollars;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g., "Moving Nike", "Drag cancelled")
    pub status_message: String,
    /// Open pipeline value of the visible sponsors
    pub pipeline_value: u64,
    /// Delivered value of the visible sponsors
    pub delivered_value: u64,
}

impl TitleBar {
    pub fn new(status_message: String, pipeline_value: u64, delivered_value: u64) -> Self {
        Self {
            status_message,
            pipeline_value,
            delivered_value,
        }
    }

    fn metrics(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("PIPELINE VALUE ", Style::default().fg(Color::Gray)),
            Span::styled(
                dollars(self.pipeline_value),
                Style::default()
                    .fg(Color::Rgb(255, 215, 0))
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::styled("  DELIVERED VALUE ", Style::default().fg(Color::Gray)),
            Span::styled(
                dollars(self.delivered_value),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::raw(" "),
        ])
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            String::from(" Sponsor Board")
        } else {
            format!(" Sponsor Board | {}", self.status_message)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(title_text, Style::default().add_modifier(Modifier::BOLD))),
            area,
        );

        let metrics = self.metrics();
        let width = (metrics.width() as u16).min(area.width);
        let metrics_area = Rect::new(area.right() - width, area.y, width, area.height.min(1));
        frame.render_widget(Paragraph::new(metrics).alignment(Alignment::Right), metrics_area);
    }
}
