use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Tab;

pub const BRAND: &str = " ValueMeet ";
pub const TAB_DIVIDER: &str = " │ ";
pub const MENU_MARKER: &str = " ≡ ";
const MENU_WIDTH: u16 = 24;

/// Each card or row in the list views takes this many terminal lines.
pub const ROW_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub body: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        body: vertical[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

/// Width from which the evaluation list gets a preview pane.
pub const PREVIEW_MIN_WIDTH: u16 = 100;

/// Split the evaluation body into list and optional preview.
pub fn evaluation_panes(body: Rect) -> (Rect, Option<Rect>) {
    if body.width < PREVIEW_MIN_WIDTH {
        return (body, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);
    (chunks[0], Some(chunks[1]))
}

pub fn tab_label(tab: Tab) -> String {
    format!("{}:{}", tab.shortcut(), tab.title())
}

/// Screen cells covered by each tab title in the full tab bar. `bar` is the
/// inner area of the header.
pub fn tab_segments(bar: Rect) -> Vec<(Tab, Rect)> {
    let mut x = bar.x.saturating_add(width_of(BRAND));
    let right = bar.x.saturating_add(bar.width);
    let mut segments = Vec::with_capacity(Tab::ALL.len());
    for tab in Tab::ALL {
        let width = width_of(&tab_label(tab));
        if x >= right {
            break;
        }
        let width = width.min(right - x);
        segments.push((
            tab,
            Rect {
                x,
                y: bar.y,
                width,
                height: 1,
            },
        ));
        x = x.saturating_add(width).saturating_add(width_of(TAB_DIVIDER));
    }
    segments
}

/// The `≡` marker at the right edge of the compact header.
pub fn menu_toggle_area(bar: Rect) -> Rect {
    let width = width_of(MENU_MARKER).min(bar.width);
    Rect {
        x: bar.x + bar.width - width,
        y: bar.y,
        width,
        height: bar.height.min(1),
    }
}

/// Overlay listing the tabs, anchored under the header on the right.
pub fn menu_area(size: Rect) -> Rect {
    let header = areas(size).header;
    let width = MENU_WIDTH.min(size.width);
    let height = (Tab::ALL.len() as u16 + 2).min(size.height.saturating_sub(header.height));
    Rect {
        x: size.x + size.width - width,
        y: header.y + header.height,
        width,
        height,
    }
}

/// First visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if selected >= visible {
        selected + 1 - visible
    } else {
        0
    }
}

/// How many rows of `ROW_HEIGHT` fit in `inner`.
pub fn visible_rows(inner: Rect) -> usize {
    (inner.height / ROW_HEIGHT).max(1) as usize
}

/// Row index under a click at `row` within a bordered list drawn in `area`.
pub fn row_at(area: Rect, selected: usize, len: usize, col: u16, row: u16) -> Option<usize> {
    let inner = rect_inner(area);
    if !rect_contains(inner, col, row) {
        return None;
    }
    let offset = scroll_offset(selected, visible_rows(inner));
    let index = offset + ((row - inner.y) / ROW_HEIGHT) as usize;
    (index < len).then_some(index)
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn width_of(text: &str) -> u16 {
    text.chars().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_segments_do_not_overlap() {
        let bar = Rect::new(1, 1, 118, 1);
        let segments = tab_segments(bar);
        assert_eq!(segments.len(), Tab::ALL.len());
        assert_eq!(segments[0].1.x, 1 + BRAND.chars().count() as u16);
        for pair in segments.windows(2) {
            assert!(pair[0].1.x + pair[0].1.width < pair[1].1.x);
        }
    }

    #[test]
    fn test_row_at_accounts_for_borders_and_row_height() {
        let area = Rect::new(0, 3, 40, 10);
        assert_eq!(row_at(area, 0, 3, 5, 3), None);
        assert_eq!(row_at(area, 0, 3, 5, 4), Some(0));
        assert_eq!(row_at(area, 0, 3, 5, 5), Some(0));
        assert_eq!(row_at(area, 0, 3, 5, 6), Some(1));
        assert_eq!(row_at(area, 0, 3, 5, 10), None);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 4), 0);
        assert_eq!(scroll_offset(3, 4), 0);
        assert_eq!(scroll_offset(5, 4), 2);
    }
}
