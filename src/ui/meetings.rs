//! Meeting Management: card list and detail view

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{rect_inner, scroll_offset, visible_rows};
use super::widgets::badge;
use crate::app::App;
use crate::domain::ScheduledMeeting;

pub fn draw_list(f: &mut Frame, area: Rect, app: &App) {
    let meetings = app.meetings.meetings();
    let cursor = app.meetings.cursor();
    let offset = scroll_offset(cursor, visible_rows(rect_inner(area)));

    let mut lines = Vec::with_capacity(meetings.len() * 2);
    for (i, meeting) in meetings.iter().enumerate().skip(offset) {
        lines.extend(card_lines(meeting, i == cursor));
    }
    if meetings.is_empty() {
        lines.push(Line::from(Span::styled(
            " No meetings scheduled",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!("MEETINGS ({})", meetings.len()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two lines per card; click hit-testing relies on that.
fn card_lines(meeting: &ScheduledMeeting, selected: bool) -> [Line<'static>; 2] {
    let (prefix, title_style) = if selected {
        (
            "▸",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (" ", Style::default().add_modifier(Modifier::BOLD))
    };
    [
        Line::from(vec![
            Span::styled(format!("{} {} ", prefix, meeting.title), title_style),
            badge(&meeting.status, Color::LightRed),
        ]),
        Line::from(Span::styled(
            format!(
                "   {} {}  {}  {} attendees  {} agenda items",
                meeting.date,
                meeting.time,
                meeting.organizer,
                meeting.attendee_count(),
                meeting.agenda.len()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Heading of the detail view: the meeting title, verbatim.
pub fn detail_heading(meeting: &ScheduledMeeting) -> Line<'static> {
    Line::from(Span::styled(
        meeting.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn detail_lines(meeting: &ScheduledMeeting) -> Vec<Line<'static>> {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        detail_heading(meeting),
        Line::from(""),
        Line::from(vec![
            label("Date       "),
            Span::raw(format!("{} {}", meeting.date, meeting.time)),
        ]),
        Line::from(vec![label("Organizer  "), Span::raw(meeting.organizer.clone())]),
        Line::from(vec![
            label("Attendees  "),
            Span::raw(format!("{}", meeting.attendee_count())),
        ]),
        Line::from(vec![label("Status     "), badge(&meeting.status, Color::LightRed)]),
        Line::from(""),
        Line::from(Span::styled(
            "Participants",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.push(Line::from(format!("  {} (organizer)", meeting.organizer)));
    lines.extend(
        meeting
            .participants
            .iter()
            .map(|name| Line::from(format!("  {name}"))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Agenda",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        meeting
            .agenda
            .iter()
            .enumerate()
            .map(|(i, item)| Line::from(format!("  {}. {}", i + 1, item))),
    );
    lines
}

pub fn draw_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(meeting) = app.meetings.selected() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("MEETING · Esc back");
    let paragraph = Paragraph::new(detail_lines(meeting))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
