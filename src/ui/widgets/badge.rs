//! Inline label badges

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::domain::{AgendaStatus, Efficiency, Priority, TodoStatus};

pub fn badge(label: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", label.into()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn efficiency_color(efficiency: &Efficiency) -> Color {
    match efficiency {
        Efficiency::Excellent => Color::Green,
        Efficiency::Good => Color::Cyan,
        Efficiency::Fair => Color::Yellow,
        Efficiency::NeedsImprovement => Color::Red,
        Efficiency::Other(_) => Color::Gray,
    }
}

pub fn category_color(category: &str) -> Color {
    match category {
        "regular" => Color::Blue,
        "project" => Color::Magenta,
        "creative" => Color::Green,
        _ => Color::Gray,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn todo_status_color(status: TodoStatus) -> Color {
    match status {
        TodoStatus::Pending => Color::Gray,
        TodoStatus::InProgress => Color::Cyan,
        TodoStatus::Completed => Color::Green,
    }
}

pub fn agenda_marker(status: AgendaStatus) -> Span<'static> {
    match status {
        AgendaStatus::Completed => Span::styled("✓", Style::default().fg(Color::Green)),
        AgendaStatus::Active => Span::styled("▶", Style::default().fg(Color::Yellow)),
        AgendaStatus::Pending => Span::styled("·", Style::default().fg(Color::DarkGray)),
    }
}
