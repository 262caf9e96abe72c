//! The floating card that follows the pointer during a drag.
//!
//! Drawn last, over everything else, and never recorded in the board layout.
//! The spring-driven rotation shows up as a one-column lean.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use crate::core::entity::Sponsor;
use crate::core::proxy::DragProxy;
use crate::tui::component::Component;
use crate::tui::components::sponsor_card::{CARD_HEIGHT, CardVariant, SponsorCard};

pub struct DragProxyView<'a> {
    pub proxy: &'a DragProxy,
    pub sponsor: &'a Sponsor,
    pub width: u16,
}

impl<'a> DragProxyView<'a> {
    pub fn new(proxy: &'a DragProxy, sponsor: &'a Sponsor, width: u16) -> Self {
        Self {
            proxy,
            sponsor,
            width,
        }
    }

    /// Where the proxy lands inside `area`, kept fully on screen when it fits.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = self.width.min(area.width);
        let height = CARD_HEIGHT.min(area.height);
        let origin = self.proxy.origin();

        let max_x = i32::from(area.right()) - i32::from(width);
        let max_y = i32::from(area.bottom()) - i32::from(height);
        let x = (origin.x + self.proxy.lean()).clamp(i32::from(area.x), max_x.max(i32::from(area.x)));
        let y = origin.y.clamp(i32::from(area.y), max_y.max(i32::from(area.y)));

        // Clamped into `area`, so both fit in u16
        Rect::new(x as u16, y as u16, width, height)
    }
}

impl<'a> Component for DragProxyView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = self.placement(area);
        if rect.is_empty() {
            return;
        }
        frame.render_widget(Clear, rect);
        frame.render_widget(SponsorCard::new(self.sponsor, CardVariant::Overlay), rect);
    }
}
