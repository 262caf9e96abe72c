use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Board, DetailPanel, DragProxyView, FilterBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Proxy width when no lane has been laid out yet.
const FALLBACK_PROXY_WIDTH: u16 = 24;
const MIN_PROXY_WIDTH: u16 = 12;

const HELP_TEXT: &str =
    " Drag a card to move it · Click to open · Tab category · Type to search · Esc clear · q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, filter_area, board_area, help_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.status_message.clone(),
        app.sponsors.pipeline_value(&app.filter),
        app.sponsors.delivered_value(&app.filter),
    );
    title_bar.render(frame, title_area);

    FilterBar::new(&mut tui.filter_bar, &app.filter).render(frame, filter_area);
    Board::new(&mut tui.board, app).render(frame, board_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))),
        help_area,
    );

    // Overlays, drawn last so they sit on top
    if let Some(proxy) = &tui.proxy
        && let Some(sponsor) = app.sponsors.get(proxy.sponsor_id())
    {
        let width = tui
            .board
            .layout
            .lanes
            .first()
            .map_or(FALLBACK_PROXY_WIDTH, |(_, rect)| rect.width.saturating_sub(3))
            .max(MIN_PROXY_WIDTH);
        DragProxyView::new(proxy, sponsor, width).render(frame, frame.area());
    }

    if let Some(detail) = tui.detail.as_mut()
        && let Some(sponsor) = app.sponsors.get(&detail.sponsor_id)
    {
        DetailPanel::new(detail, sponsor).render(frame, frame.area());
    }

    if let Some(position) = cursor_position(app, tui) {
        frame.set_cursor_position(position);
    }
}

/// The search cursor, unless a drag or an overlay owns the screen.
fn cursor_position(app: &App, tui: &TuiState) -> Option<Position> {
    if app.text_selection_suppressed || tui.detail.is_some() || tui.proxy.is_some() {
        return None;
    }
    tui.filter_bar.cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drag::Point;
    use crate::core::proxy::{DragProxy, ProxySettings};
    use crate::tui::components::DetailPanelState;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui);
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
    fn test_draw_ui() {
        let app = test_app();
        let mut tui = TuiState::new(ProxySettings::default());
        let text = draw(&app, &mut tui);
        assert!(text.contains("Sponsor Board"));
        assert!(text.contains("Prospecting"));
        assert!(text.contains("Search:"));
        assert!(text.contains("Drag a card"));
        assert_eq!(tui.board.layout.cards.len(), 3);
    }

    #[test]
    fn test_cursor_shown_only_when_idle() {
        let mut app = test_app();
        let mut tui = TuiState::new(ProxySettings::default());
        draw(&app, &mut tui);
        assert!(cursor_position(&app, &tui).is_some());

        app.text_selection_suppressed = true;
        assert!(cursor_position(&app, &tui).is_none());
        app.text_selection_suppressed = false;

        tui.detail = Some(DetailPanelState::new("1".into()));
        assert!(cursor_position(&app, &tui).is_none());
    }

    #[test]
    fn test_draw_with_proxy_and_detail() {
        let mut app = test_app();
        app.selected = Some("3".into());
        let mut tui = TuiState::new(ProxySettings::default());
        tui.proxy = Some(DragProxy::new("1".into(), Point::new(60, 15), ProxySettings::default()));
        tui.detail = Some(DetailPanelState::new("3".into()));
        let text = draw(&app, &mut tui);
        assert!(text.contains("Esc Close"));
        assert!(!tui.detail.as_ref().unwrap().overlay.is_empty());
    }

    #[test]
    fn test_draw_tolerates_stale_overlay_ids() {
        let app = test_app();
        let mut tui = TuiState::new(ProxySettings::default());
        tui.proxy = Some(DragProxy::new("gone".into(), Point::new(10, 10), ProxySettings::default()));
        tui.detail = Some(DetailPanelState::new("gone".into()));
        let text = draw(&app, &mut tui);
        assert!(!text.contains("Esc Close"));
    }
}
