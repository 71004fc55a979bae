use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::widgets::badge::agenda_marker;
use crate::app::App;
use crate::domain::AgendaStatus;

const TOOLS: [&str; 4] = ["Prompt input", "Sort issues", "Record decisions", "Time keeping"];

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    draw_agenda(f, columns[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOOLS.len() as u16 + 2), Constraint::Min(3)])
        .split(columns[1]);
    draw_tools(f, side[0]);
    draw_notes(f, side[1]);
}

fn draw_agenda(f: &mut Frame, area: Rect, app: &App) {
    let fac = &app.facilitation;
    let (state, color) = if fac.is_active() {
        ("● running  [s] pause", Color::Green)
    } else {
        ("○ paused  [s] start", Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(Span::styled(format!(" {state}"), Style::default().fg(color))),
        Line::from(""),
    ];
    for (i, item) in fac.agenda().iter().enumerate() {
        let mut style = match item.status {
            AgendaStatus::Active => Style::default().fg(Color::Yellow),
            AgendaStatus::Completed => Style::default().fg(Color::Green),
            AgendaStatus::Pending => Style::default().fg(Color::White),
        };
        if i == fac.cursor() {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        lines.push(Line::from(vec![
            Span::raw(" "),
            agenda_marker(item.status),
            Span::raw(" "),
            Span::styled(item.title.clone(), style),
            Span::styled(
                format!("  {}min", item.duration),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" planned {}min", fac.planned_minutes()),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("AGENDA");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tools(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = TOOLS
        .iter()
        .map(|tool| {
            Line::from(Span::styled(
                format!(" {tool}"),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("TOOLS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_notes(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("NOTES");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        " (shared notes are not available yet)",
        Style::default().fg(Color::DarkGray),
    )))
    .block(block);
    f.render_widget(paragraph, area);
}
