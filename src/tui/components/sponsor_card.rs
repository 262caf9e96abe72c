use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::core::entity::Sponsor;
use crate::tui::format::{compact_value, truncate_str};

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 5;

const ACCENT: Color = Color::Rgb(255, 215, 0);

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Normal,
    /// The slot left behind by the card currently being dragged.
    Dimmed,
    /// The floating copy under the pointer.
    Overlay,
}

/// A single sponsor card. Transient: built each frame from a borrowed sponsor.
pub struct SponsorCard<'a> {
    pub sponsor: &'a Sponsor,
    pub variant: CardVariant,
}

impl<'a> SponsorCard<'a> {
    pub fn new(sponsor: &'a Sponsor, variant: CardVariant) -> Self {
        Self { sponsor, variant }
    }
}

/// Card colour from the sponsor's colour string; unknown names fall back to gray.
pub fn sponsor_color(sponsor: &Sponsor) -> Color {
    sponsor.color.parse::<Color>().unwrap_or(Color::Gray)
}

impl Widget for SponsorCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sponsor = self.sponsor;
        let (border_style, text_style) = match self.variant {
            CardVariant::Normal => (Style::default().fg(Color::DarkGray), Style::default()),
            CardVariant::Dimmed => {
                let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
                (dim, dim)
            }
            CardVariant::Overlay => (
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                Style::default().bg(Color::Black),
            ),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(text_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let chip_style = if self.variant == CardVariant::Dimmed {
            text_style
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(sponsor_color(sponsor))
                .add_modifier(Modifier::BOLD)
        };
        let chip = format!(" {} ", sponsor.initials);
        let name_width = width.saturating_sub(chip.len() + 1);
        let header = Line::from(vec![
            Span::styled(chip, chip_style),
            Span::raw(" "),
            Span::styled(
                truncate_str(&sponsor.name, name_width),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ]);

        let category = Line::from(Span::styled(
            sponsor.category.label().to_uppercase(),
            text_style.fg(Color::Gray),
        ));

        let value = compact_value(sponsor.value);
        let gap = width.saturating_sub(value.len() + 1);
        let contact = truncate_str(&sponsor.last_contact, gap);
        let value_style = if self.variant == CardVariant::Dimmed {
            text_style
        } else {
            text_style.fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        let footer = Line::from(vec![
            Span::styled(value.clone(), value_style),
            Span::raw(" ".repeat(width.saturating_sub(value.len() + contact.chars().count()))),
            Span::styled(contact, text_style.fg(Color::Gray)),
        ]);

        let [header_area, category_area, footer_area] =
            Layout::vertical([Constraint::Length(1); 3]).areas(inner);
        Paragraph::new(header).render(header_area, buf);
        Paragraph::new(category).render(category_area, buf);
        Paragraph::new(footer).render(footer_area, buf);
    }
}
