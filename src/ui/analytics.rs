use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Charts are not available yet",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Meetings this month  ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.summary.meetings_this_month.to_string()),
        ]),
        Line::from(vec![
            Span::styled(" Evaluated meetings   ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.summary.recent.len().to_string()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("ANALYTICS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
