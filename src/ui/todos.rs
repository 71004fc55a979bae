use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::layout::{rect_inner, scroll_offset, visible_rows};
use super::widgets::badge::{badge, priority_color, todo_status_color};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let todos = app.todos.todos();
    let cursor = app.todos.cursor();
    let offset = scroll_offset(cursor, visible_rows(rect_inner(area)));

    let mut lines = Vec::new();
    for (i, todo) in todos.iter().enumerate().skip(offset) {
        let selected = i == cursor;
        let title_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(if selected { "▸ " } else { "  " }),
            Span::styled(todo.title.clone(), title_style),
            Span::raw(" "),
            badge(todo.priority.label(), priority_color(todo.priority)),
            Span::raw(" "),
            badge(todo.status.label(), todo_status_color(todo.status)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "    {}  due {}  from {}",
                todo.assignee, todo.due_date, todo.meeting_title
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!("TODOS ({} open)", app.todos.open_count()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
