use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::illustration;
use crate::app::App;
use crate::lottie::IllustrationSlot;
use crate::ui::theme;

pub fn render(app: &App, f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Min(4),
        ])
        .split(area);

    render_hero(app, f, rows[0]);
    render_features(f, rows[1]);
    render_how_it_works(app, f, rows[2]);
    render_call_to_action(f, rows[3]);
}

fn render_hero(app: &App, f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Anuvaad",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Breaking Language Barriers in Video Content",
            Style::default().fg(theme::FG_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Anuvaad is your go-to solution for translating audio and subtitles in \
             English videos to multiple languages. Our cutting-edge technology ensures \
             accurate and seamless translations, opening up your content to a global \
             audience.",
        ),
        Line::from(
            "Whether you're a content creator, educator, or business professional, \
             Anuvaad helps you reach audiences across language barriers with just a few \
             clicks.",
        ),
        Line::from(""),
        button_line("g", "Get Started"),
    ];
    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme::FG_PRIMARY));
    f.render_widget(hero, columns[0]);

    illustration::render(app, f, columns[1], IllustrationSlot::Hero);
}

fn render_features(f: &mut Frame, area: Rect) {
    let columns = three_columns(area);
    render_feature(
        f,
        columns[0],
        "🎥 Video Translation",
        "Translate both audio and subtitles in your videos with high accuracy. \
         Support for various video formats including MP4, MOV, and AVI.",
    );
    render_feature(
        f,
        columns[1],
        "🌍 Multiple Languages",
        "Support for a wide range of global languages including Hindi, Marathi, \
         Tamil, Telgu, Gujrati. Continuously expanding language offerings to meet \
         global needs.",
    );
    render_feature(
        f,
        columns[2],
        "🚀 Fast & Accurate",
        "State-of-the-art AI technology ensures quick processing with high accuracy \
         translations. Preserve the essence and context of your original content.",
    );
}

fn render_feature(f: &mut Frame, area: Rect, title: &str, body: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER_IDLE));
    let card = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme::FG_PRIMARY))
        .block(block);
    f.render_widget(card, area);
}

fn render_how_it_works(app: &App, f: &mut Frame, area: Rect) {
    let columns = three_columns(area);
    render_step(
        app,
        f,
        columns[0],
        "1. Upload your English video",
        IllustrationSlot::UploadStep,
    );
    render_step(
        app,
        f,
        columns[1],
        "2. Choose target languages",
        IllustrationSlot::LanguagesStep,
    );
    render_step(
        app,
        f,
        columns[2],
        "3. Download your translated video",
        IllustrationSlot::DownloadStep,
    );
}

fn render_step(app: &App, f: &mut Frame, area: Rect, caption: &str, slot: IllustrationSlot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    let label = Paragraph::new(caption)
        .style(Style::default().fg(theme::FG_PRIMARY).add_modifier(Modifier::BOLD));
    f.render_widget(label, rows[0]);
    illustration::render(app, f, rows[1], slot);
}

fn render_call_to_action(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Ready to Go Global?",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(
            "Start translating your videos today and expand your reach to international \
             audiences!",
        ),
        Line::from(""),
        button_line("s", "Start Translating Now"),
    ];
    let cta = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme::FG_PRIMARY));
    f.render_widget(cta, area);
}

fn three_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area)
}

fn button_line(key: &str, label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" [{}] {} ", key, label),
        Style::default()
            .bg(theme::ACCENT)
            .fg(theme::BAR_BG)
            .add_modifier(Modifier::BOLD),
    ))
}
