//! Header: tab bar, compact bar and the collapsed menu

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::layout::{self, BRAND, MENU_MARKER, TAB_DIVIDER};
use crate::app::{App, Entry, Tab};

fn brand_span() -> Span<'static> {
    Span::styled(
        BRAND,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Draw the header for the current entry point and width.
pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let bar = block.inner(area);
    f.render_widget(block, area);

    let line = match app.entry {
        Entry::Evaluations => Line::from(vec![
            brand_span(),
            Span::styled("Meeting evaluations", Style::default().fg(Color::White)),
        ]),
        Entry::Shell if app.is_narrow() => compact_bar(app),
        Entry::Shell => tab_bar(app),
    };
    f.render_widget(Paragraph::new(line), bar);

    if app.entry == Entry::Shell && app.is_narrow() {
        let marker_style = if app.nav.is_mobile_menu_open() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        f.render_widget(
            Paragraph::new(Span::styled(MENU_MARKER, marker_style)),
            layout::menu_toggle_area(bar),
        );
    }
}

/// Full tab bar. Span widths line up with `layout::tab_segments`.
fn tab_bar(app: &App) -> Line<'static> {
    let active = app.active_tab();
    let mut spans = vec![brand_span()];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(TAB_DIVIDER, Style::default().fg(Color::DarkGray)));
        }
        let style = if *tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(layout::tab_label(*tab), style));
    }
    Line::from(spans)
}

fn compact_bar(app: &App) -> Line<'static> {
    Line::from(vec![
        brand_span(),
        Span::styled(
            app.active_tab().title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Overlay listing every tab; the cursor row is highlighted.
pub fn draw_mobile_menu(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Clear, area);

    let active = app.active_tab();
    let cursor = app.nav.menu_cursor();
    let lines: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let mut style = if *tab == active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if i == cursor {
                style = style.bg(Color::DarkGray);
            }
            let prefix = if i == cursor { "▸" } else { " " };
            Line::from(Span::styled(
                format!("{} {} {}", prefix, tab.shortcut(), tab.title()),
                style,
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("MENU");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
