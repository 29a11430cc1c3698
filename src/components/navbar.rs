use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::definitions::Page;
use crate::ui::theme;

/// Renders the horizontal nav bar and records each tab's hit area for mouse
/// routing.
pub fn render(app: &mut App, f: &mut Frame, area: Rect) {
    app.nav_tab_areas.clear();

    let mut spans = vec![Span::styled(" ☰ ", Style::default().fg(theme::FG_DIM))];
    let mut x = area.x + 3;
    for page in Page::ALL {
        let label = format!("  {}  ", page.title(app.strings.as_ref()));
        let width = Span::raw(label.as_str()).width() as u16;
        let style = if page == app.current_page() {
            Style::default()
                .bg(theme::ACCENT)
                .fg(theme::BAR_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::BAR_TEXT)
        };
        spans.push(Span::styled(label.clone(), style));
        app.nav_tab_areas.push((
            page,
            Rect {
                x,
                y: area.y,
                width,
                height: 1,
            },
        ));
        x = x.saturating_add(width);
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BAR_BG));
    f.render_widget(bar, area);
}
