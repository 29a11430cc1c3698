use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::lottie::{Illustration, IllustrationSlot};
use crate::ui::theme;

/// Renders an illustration slot: a summary card for a loaded animation, or
/// the slot's fallback text while loading / after any fetch failure.
pub fn render(app: &App, f: &mut Frame, area: Rect, slot: IllustrationSlot) {
    match app.illustrations.get(slot) {
        Illustration::Animation(descriptor) => {
            let title = descriptor.name.clone().unwrap_or_else(|| String::from("animation"));
            let block = Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(Style::default().fg(theme::ACCENT));
            let lines = vec![
                Line::from("Lottie animation"),
                Line::from(format!("{:.0} fps", descriptor.frame_rate)),
                Line::from(format!(
                    "{} frames · {} layers",
                    descriptor.frame_count(),
                    descriptor.layers.len()
                )),
            ];
            let card = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::FG_PRIMARY))
                .block(block);
            f.render_widget(card, area);
        }
        Illustration::Fallback(text) => {
            let fallback = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(
                    Style::default()
                        .fg(theme::FG_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(fallback, area);
        }
    }
}
