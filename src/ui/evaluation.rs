//! Evaluation list: collapsible pending/completed sections plus a preview
//! of the completed evaluation under the cursor.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{self, rect_inner, scroll_offset, visible_rows};
use super::widgets::badge::{badge, category_color, efficiency_color};
use super::widgets::{stars_text, StarRating};
use crate::app::App;
use crate::domain::{rating_emoji, Evaluation, Meeting, MAX_STARS};
use crate::modules::evaluation::{EvaluationList, Row, Section};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let (list_area, preview_area) = layout::evaluation_panes(area);
    draw_list(f, list_area, &app.evaluations);
    if let Some(preview_area) = preview_area {
        draw_preview(f, preview_area, app);
    }
}

fn draw_list(f: &mut Frame, area: Rect, list: &EvaluationList) {
    let rows = list.rows();
    let cursor = list.cursor();
    let offset = scroll_offset(cursor, visible_rows(rect_inner(area)));

    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.iter().enumerate().skip(offset) {
        lines.extend(row_lines(list, *row, i == cursor));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("EVALUATIONS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Every row is two lines tall, headers included.
pub fn row_lines(list: &EvaluationList, row: Row, selected: bool) -> [Line<'static>; 2] {
    let cursor = if selected { "▸" } else { " " };
    match row {
        Row::Header(section) => {
            let open = list.disclosure().is_open(section);
            let count = match section {
                Section::Pending => list.pending().len(),
                Section::Completed => list.completed().len(),
            };
            let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [
                Line::from(vec![
                    Span::raw(format!("{cursor} ")),
                    Span::styled(
                        format!(
                            "{} {} ({})",
                            if open { "▾" } else { "▸" },
                            section.title(),
                            count
                        ),
                        style,
                    ),
                    Span::styled(
                        format!("  [{}]", section.shortcut()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(""),
            ]
        }
        Row::Pending(index) => match list.pending().get(index) {
            Some(meeting) => pending_lines(meeting, cursor, selected),
            None => [Line::from(""), Line::from("")],
        },
        Row::Completed(index) => match list.completed().get(index) {
            Some(evaluation) => completed_lines(evaluation, cursor, selected),
            None => [Line::from(""), Line::from("")],
        },
    }
}

fn title_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

fn pending_lines(meeting: &Meeting, cursor: &str, selected: bool) -> [Line<'static>; 2] {
    let mut first = vec![
        Span::raw(format!("{cursor}   ")),
        Span::styled(meeting.title.clone(), title_style(selected)),
    ];
    if !meeting.category.is_empty() {
        first.push(Span::raw(" "));
        first.push(badge(&meeting.category, category_color(&meeting.category)));
    }
    [
        Line::from(first),
        Line::from(vec![
            Span::styled(
                format!(
                    "      {}  {} attendees  {}",
                    meeting.date, meeting.participants, meeting.duration
                ),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("  Enter: evaluate", Style::default().fg(Color::LightRed)),
        ]),
    ]
}

fn completed_lines(evaluation: &Evaluation, cursor: &str, selected: bool) -> [Line<'static>; 2] {
    [
        Line::from(vec![
            Span::raw(format!("{cursor}   ")),
            Span::styled(evaluation.title().to_string(), title_style(selected)),
            Span::raw(" "),
            badge(
                evaluation.efficiency.label(),
                efficiency_color(&evaluation.efficiency),
            ),
            Span::raw(format!(" {}", rating_emoji(evaluation.rating))),
        ]),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(stars_text(evaluation.rating), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(
                    " {:.1}  satisfaction {:.1}  time {:.1}  {}",
                    evaluation.rating,
                    evaluation.satisfaction,
                    evaluation.time_utilization,
                    evaluation.meeting.date
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]
}

fn draw_preview(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("PREVIEW");
    let mut inner = block.inner(area);
    f.render_widget(block, area);

    let list = &app.evaluations;
    let lines = match list.current_row() {
        Some(Row::Completed(index)) => match list.completed().get(index) {
            Some(evaluation) => {
                // Star row above the text.
                if inner.height > 1 {
                    draw_rating_row(f, inner, evaluation.rating);
                    inner.y += 1;
                    inner.height -= 1;
                }
                preview_lines(evaluation)
            }
            None => Vec::new(),
        },
        Some(row @ Row::Pending(_)) => {
            let url = list
                .route_for(row, &app.ctx.facilitator)
                .map(|route| route.to_url(&app.ctx.base_url).to_string())
                .unwrap_or_default();
            vec![
                Line::from(Span::styled(
                    "Not evaluated yet",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Facilitator ", Style::default().fg(Color::DarkGray)),
                    Span::raw(app.ctx.facilitator.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Form        ", Style::default().fg(Color::DarkGray)),
                    Span::raw(url),
                ]),
            ]
        }
        _ => vec![Line::from(Span::styled(
            "Select a meeting",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}

fn draw_rating_row(f: &mut Frame, inner: Rect, rating: f32) {
    let stars_width = (MAX_STARS as u16).min(inner.width);
    f.render_widget(
        StarRating::new(rating),
        Rect {
            height: 1,
            width: stars_width,
            ..inner
        },
    );
    let rest = Rect {
        x: inner.x + stars_width,
        y: inner.y,
        width: inner.width - stars_width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {rating:.1}"),
            Style::default().fg(Color::Yellow),
        )),
        rest,
    );
}

fn preview_lines(evaluation: &Evaluation) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };
    let details = &evaluation.details;

    let mut lines = vec![
        Line::from(Span::styled(
            evaluation.title().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Agenda"),
    ];
    lines.extend(details.agenda.iter().map(|item| Line::from(format!("  · {item}"))));
    lines.push(Line::from(""));
    lines.push(heading("Feedback"));
    for feedback in &details.participant_feedback {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", feedback.name)),
            Span::styled(
                stars_text(f32::from(feedback.rating)),
                Style::default().fg(Color::Yellow),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", feedback.comment),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("Outcomes"));
    lines.extend(details.outcomes.iter().map(|item| Line::from(format!("  ✓ {item}"))));
    lines.push(Line::from(""));
    lines.push(heading("Improvements"));
    lines.extend(
        details
            .improvements
            .iter()
            .map(|item| Line::from(format!("  → {item}"))),
    );
    lines
}
