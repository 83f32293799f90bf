/// **Input**: `AppState` (form controller, focus, status line) and ratatui primitives.
/// **Output**: One rendered frame of the task form.
/// **Position**: TUI renderer for the create-task form.
/// **Update**: Revisit when form fields or layout change.
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use tugas_form::{TaskField, messages};

use super::app::AppState;

const FIELD_HEIGHT: u16 = 3;

/// Main render function - called every frame
pub(super) fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3), // Title and collapse indicator
        Constraint::Fill(1),   // Fields
        Constraint::Length(3), // Hotkeys and status
    ])
    .areas(area);

    render_header(frame, header_area, app);
    if !app.form.is_collapsed() {
        render_body(frame, body_area, app);
    }
    render_footer(frame, footer_area, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &AppState) {
    // Chevron points down while the fields are hidden
    let chevron = if app.form.is_collapsed() { "▼" } else { "▲" };
    let title = Line::from(vec![
        Span::styled(
            messages::FORM_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(chevron, Style::default().fg(Color::Cyan)),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &AppState) {
    let mut constraints = Vec::with_capacity(TaskField::ALL.len() + 3);
    if app.form.error().is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend(TaskField::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(1)); // Submit button
    constraints.push(Constraint::Fill(1));

    let rows = Layout::vertical(constraints).split(area);
    let mut rows = rows.iter().copied();

    if let Some(error) = app.form.error() {
        if let Some(banner_area) = rows.next() {
            let banner = Paragraph::new(Span::styled(error, Style::default().fg(Color::Red)))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                );
            frame.render_widget(banner, banner_area);
        }
    }

    for field in TaskField::ALL {
        if let Some(field_area) = rows.next() {
            render_field(frame, field_area, app, field);
        }
    }

    if let Some(button_area) = rows.next() {
        render_submit_button(frame, button_area, app);
    }
}

fn render_field(frame: &mut Frame, area: Rect, app: &AppState, field: TaskField) {
    let focused = app.focused == field;
    let border_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = app.form.value(field);
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(value)]
    };
    if focused {
        spans.push(Span::styled(" █", Style::default().fg(Color::Yellow)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

fn render_submit_button(frame: &mut Frame, area: Rect, app: &AppState) {
    let button = if app.form.is_loading() {
        Span::styled(
            format!("[ {} {} ]", app.spinner(), messages::SUBMIT_LOADING_LABEL),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("[ + {} ]", messages::SUBMIT_LABEL),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(button)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &AppState) {
    let hotkeys = Line::from(vec![
        Span::styled("Tab/↑↓ ", Style::default().fg(Color::Cyan)),
        Span::styled("switch fields  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter ", Style::default().fg(Color::Cyan)),
        Span::styled("submit  ", Style::default().fg(Color::Gray)),
        Span::styled("F2 ", Style::default().fg(Color::Cyan)),
        Span::styled("collapse  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("quit  ", Style::default().fg(Color::Gray)),
        Span::raw("| "),
        Span::raw(app.status_message.as_str()),
    ]);
    let footer = Paragraph::new(hotkeys)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"));
    frame.render_widget(footer, area);
}
