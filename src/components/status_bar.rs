use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::theme;

pub fn render(app: &App, f: &mut Frame, area: Rect) {
    let text = format!(
        " {} | {} | {} ",
        app.status_message,
        app.strings.footer_hint(),
        app.strings.lang_toggle_hint()
    );
    let footer = Paragraph::new(Line::from(Span::raw(text)))
        .style(Style::default().bg(theme::ACCENT_DARK).fg(Color::White));
    f.render_widget(footer, area);
}
