use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::theme;

pub fn render_about(f: &mut Frame, area: Rect) {
    render_stub(
        f,
        area,
        "About Anuvaad",
        "Learn more about Anuvaad and our mission here.",
    );
}

pub fn render_contact(f: &mut Frame, area: Rect) {
    render_stub(
        f,
        area,
        "Contact Us",
        "Get in touch with our team for support or inquiries.",
    );
}

fn render_stub(f: &mut Frame, area: Rect, title: &str, body: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(body.to_string()),
    ];
    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme::FG_PRIMARY));
    f.render_widget(page, area);
}
