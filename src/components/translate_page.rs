use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;
use crate::definitions::{SupersRow, TargetLanguage, TranslateSection};
use crate::translate::UploadStage;
use crate::translate::job::SIMULATED_DELAY;
use crate::ui::theme;

pub fn render(app: &mut App, f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Upload Your Video",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Upload your English video for translation."),
    ])
    .style(Style::default().fg(theme::FG_PRIMARY));
    f.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(rows[1]);

    render_picker(app, f, columns[0]);

    let form_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(columns[1]);
    render_file_details(app, f, form_rows[0]);
    render_languages(app, f, form_rows[1]);
    render_supers(app, f, form_rows[2]);
    render_submit(app, f, form_rows[3]);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(theme::BORDER_FOCUS)
    } else {
        Style::default().fg(theme::BORDER_IDLE)
    }
}

fn render_picker(app: &mut App, f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .picker
        .entries
        .iter()
        .map(|entry| {
            let icon = if entry.is_directory { "📁" } else { "🎞" };
            ListItem::new(format!(" {} {}", icon, entry.display_name()))
                .style(Style::default().fg(theme::FG_PRIMARY))
        })
        .collect();

    let focused = app.flow.section == TranslateSection::Picker;
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", app.strings.picker_title()))
                .borders(Borders::ALL)
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(border_style(focused)),
        )
        .highlight_style(
            Style::default()
                .bg(theme::ACCENT)
                .fg(theme::BAR_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" > ");
    let mut state = ListState::default();
    state.select(Some(app.picker.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_file_details(app: &App, f: &mut Frame, area: Rect) {
    let lines = match app.flow.file.as_ref() {
        Some(file) => vec![
            Line::from(Span::styled(
                "File successfully uploaded!",
                Style::default().fg(theme::NOTICE_OK),
            )),
            Line::from(format!("FileName: {}", file.name)),
            Line::from(format!("FileType: {}", file.mime_type)),
            Line::from(Span::styled(
                format!("Stored at {}", file.temp_path().display()),
                Style::default().fg(theme::FG_DIM),
            )),
        ],
        None => vec![
            Line::from("No file selected yet."),
            Line::from(Span::styled(
                "Pick a video on the left to begin.",
                Style::default().fg(theme::FG_DIM),
            )),
        ],
    };
    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme::FG_PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(border_style(false)),
        );
    f.render_widget(details, area);
}

fn render_languages(app: &App, f: &mut Frame, area: Rect) {
    let focused = app.flow.section == TranslateSection::Languages;
    let lines: Vec<Line> = TargetLanguage::ALL
        .iter()
        .enumerate()
        .map(|(i, language)| {
            let marker = if app.flow.languages.contains(language) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if focused && i == app.flow.language_cursor {
                Style::default().bg(theme::ACCENT).fg(theme::BAR_BG)
            } else {
                Style::default().fg(theme::FG_PRIMARY)
            };
            Line::from(Span::styled(
                format!(" {} {} ", marker, language.label()),
                style,
            ))
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", app.strings.languages_title()))
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style(focused)),
    );
    f.render_widget(list, area);
}

fn render_supers(app: &App, f: &mut Frame, area: Rect) {
    let focused = app.flow.section == TranslateSection::Supers;
    let supers = &app.flow.supers;

    let row_style = |row: SupersRow, active: bool| {
        let index = SupersRow::ALL.iter().position(|r| *r == row).unwrap_or(0);
        if focused && index == app.flow.supers_cursor {
            Style::default().bg(theme::ACCENT).fg(theme::BAR_BG)
        } else if active {
            Style::default().fg(theme::FG_PRIMARY)
        } else {
            Style::default().fg(theme::FG_DIM)
        }
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(
                " Do you want to translate the supers?  {} ",
                if supers.enabled { "Yes" } else { "No" }
            ),
            row_style(SupersRow::Enabled, true),
        )),
        Line::from(Span::styled(
            format!(" Supers text color: {} ", supers.color()),
            row_style(SupersRow::Color, supers.enabled),
        )),
        Line::from(Span::styled(
            format!(" Supers text size:  {} ", supers.size.label()),
            row_style(SupersRow::Size, supers.enabled),
        )),
    ];
    let form = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", app.strings.supers_title()))
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style(focused)),
    );
    f.render_widget(form, area);
}

fn render_submit(app: &App, f: &mut Frame, area: Rect) {
    let focused = app.flow.section == TranslateSection::Submit;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.flow.stage() {
        UploadStage::Submitting => {
            let elapsed = app
                .flow
                .submitted_at
                .map(|at| at.elapsed().as_secs_f64())
                .unwrap_or(0.0);
            let ratio = (elapsed / SIMULATED_DELAY.as_secs_f64()).min(0.95);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(theme::ACCENT))
                .label("Translation process initiated. This may take a while...")
                .ratio(ratio);
            f.render_widget(gauge, inner);
        }
        UploadStage::Submitted => {
            let lines = vec![
                Line::from(Span::styled(
                    "Translation complete! (This is a placeholder message)",
                    Style::default().fg(theme::NOTICE_OK),
                )),
                Line::from(Span::styled(
                    format!(" [d] {} ", app.strings.download_label()),
                    Style::default()
                        .bg(theme::ACCENT)
                        .fg(theme::BAR_BG)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
        _ => {
            let ready = app.flow.is_ready();
            let button_style = if ready {
                Style::default()
                    .bg(theme::ACCENT)
                    .fg(theme::BAR_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(theme::BORDER_IDLE).fg(theme::FG_DIM)
            };
            let mut lines = vec![Line::from(Span::styled(
                format!(" [Enter] {} ", app.strings.submit_label()),
                button_style,
            ))];
            if !ready {
                lines.push(Line::from(Span::styled(
                    "Select a video and at least one target language.",
                    Style::default().fg(theme::FG_DIM),
                )));
            }
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
    }
}
