use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::widgets::stars_text;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_stat_cards(f, chunks[0], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_upcoming(f, lower[0], app);
    draw_recent(f, lower[1], app);
}

fn draw_stat_cards(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.summary;
    let cards = [
        ("This month", summary.meetings_this_month.to_string(), Color::LightRed),
        ("Efficiency", format!("{}%", summary.average_efficiency), Color::Green),
        ("Time saved", format!("{}h", summary.hours_saved), Color::Blue),
        ("Satisfaction", format!("{:.1}", summary.satisfaction), Color::Magenta),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), column) in cards.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(label);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(paragraph, *column);
    }
}

fn draw_upcoming(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for meeting in app.meetings.meetings() {
        lines.push(Line::from(Span::styled(
            format!(" {}", meeting.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("   {}", meeting.time), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(
                format!("{} attendees", meeting.attendee_count()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " No meetings today",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("TODAY");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_recent(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for recent in &app.summary.recent {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}", recent.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", recent.date), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {}", stars_text(recent.rating)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("  efficiency ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}%", recent.efficiency),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("RECENT EVALUATIONS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
