use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::App;

impl App {
    /// Routes mouse clicks: nav-bar tabs switch pages, everything else is
    /// keyboard-driven.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self
            .nav_tab_areas
            .iter()
            .find(|(_, area)| contains(area, event.column, event.row))
            .map(|(page, _)| *page);
        if let Some(page) = hit {
            self.navigate_to(page);
        }
    }
}

fn contains(area: &Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
