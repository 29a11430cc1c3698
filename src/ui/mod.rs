//! Frame composition: one nav bar, the active page, one status bar.

pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::App;
use crate::components;
use crate::definitions::Page;

pub fn render(app: &mut App, f: &mut Frame) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_PRIMARY)),
        f.area(),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    components::navbar::render(app, f, chunks[0]);
    match app.current_page() {
        Page::Home => components::home::render(app, f, chunks[1]),
        Page::Translate => components::translate_page::render(app, f, chunks[1]),
        Page::About => components::pages::render_about(f, chunks[1]),
        Page::Contact => components::pages::render_contact(f, chunks[1]),
    }
    components::status_bar::render(app, f, chunks[2]);
}
