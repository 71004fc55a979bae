use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod analytics;
pub mod dashboard;
pub mod evaluation;
pub mod facilitation;
pub mod layout;
pub mod meetings;
pub mod tabs;
pub mod todos;
pub mod widgets;

use crate::app::{App, Entry, InputMode, Screen, StatusLevel};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    app.set_viewport_width(size.width);
    let app: &App = app;

    let areas = layout::areas(size);

    tabs::draw_header(f, areas.header, app);
    match app.screen() {
        Screen::Dashboard => dashboard::draw(f, areas.body, app),
        Screen::MeetingList => meetings::draw_list(f, areas.body, app),
        Screen::MeetingDetail => meetings::draw_detail(f, areas.body, app),
        Screen::Facilitation => facilitation::draw(f, areas.body, app),
        Screen::Todos => todos::draw(f, areas.body, app),
        Screen::Analytics => analytics::draw(f, areas.body, app),
        Screen::Evaluations => evaluation::draw(f, areas.body, app),
    }
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.menu_visible() {
        tabs::draw_mobile_menu(f, layout::menu_area(size), app);
    }
    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

/// Where the user is, e.g. `Meetings › システム設計レビュー`.
pub fn breadcrumb(app: &App) -> String {
    match app.screen() {
        Screen::Evaluations => "Evaluations".to_string(),
        Screen::MeetingDetail => match app.meetings.selected() {
            Some(meeting) => format!("{} › {}", app.active_tab().title(), meeting.title),
            None => app.active_tab().title().to_string(),
        },
        _ => app.active_tab().title().to_string(),
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", breadcrumb(app))),
        Span::styled("Facilitator ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.ctx.facilitator)),
        Span::styled("Handoff ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.ctx.base_url.to_string()),
    ];

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to the dashboard"),
        ("meetings", "Go to meeting management"),
        ("facilitation", "Go to facilitation"),
        ("todos", "Go to todos"),
        ("analytics", "Go to analytics"),
        ("back", "Leave the meeting detail"),
        ("menu", "Toggle the menu"),
        ("help", "Show key bindings"),
        ("quit", "Quit"),
    ];

    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(&input))
        .map(|(_, desc)| *desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text =
                command_hint(&app.command.input).unwrap_or("tab id, back, menu, help, quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.screen() {
        Screen::Evaluations => &[
            ("j/k", "move"),
            ("Enter", "open"),
            ("p/c", "sections"),
            ("y", "copy url"),
        ],
        Screen::MeetingList => &[("j/k", "move"), ("Enter", "open"), ("1-5", "tabs")],
        Screen::MeetingDetail => &[("Esc", "back"), ("y", "copy title")],
        Screen::Facilitation => &[("s", "start/pause"), ("j/k", "agenda"), ("1-5", "tabs")],
        Screen::Todos => &[("j/k", "move"), ("1-5", "tabs")],
        Screen::Dashboard | Screen::Analytics => &[("1-5", "tabs"), ("Tab", "next")],
    };

    let mut spans = Vec::new();
    for (key, desc) in hints.iter().copied().chain(common_hints(app)) {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {desc}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn common_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    if app.entry == Entry::Shell && app.is_narrow() {
        hints.push(("m", "menu"));
    }
    hints.extend([(":", "command"), ("?", "help"), ("q", "quit")]);
    hints
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from("Navigation"),
        Line::from("  1-5        Jump to tab"),
        Line::from("  Tab / S-Tab Next / previous tab"),
        Line::from("  m          Toggle menu (narrow terminals)"),
        Line::from("  j / k      Move selection"),
        Line::from("  Enter      Open / toggle section"),
        Line::from("  Esc / b    Back to the meeting list"),
        Line::from("  Mouse      Click tabs, cards, headers"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  s / Space  Start / pause facilitation"),
        Line::from("  p / c      Collapse pending / evaluated"),
        Line::from("  y          Copy url or title"),
        Line::from("  :          Command bar"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
    ];
    if let Some(last) = app.command.last.as_deref() {
        lines.push(Line::from(format!("Last command: {last}")));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
