//! Star rating widget for 0-5 scores

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::{filled_stars, MAX_STARS};

const FILLED: char = '★';
const EMPTY: char = '☆';

/// A single-line row of stars
pub struct StarRating {
    rating: f32,
    filled_style: Style,
    empty_style: Style,
}

impl StarRating {
    pub fn new(rating: f32) -> Self {
        Self {
            rating,
            filled_style: Style::default().fg(Color::Yellow),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Widget for StarRating {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled = filled_stars(self.rating);
        let visible = MAX_STARS.min(area.width as usize);
        for i in 0..visible {
            let x = area.x + i as u16;
            let (ch, style) = if i < filled {
                (FILLED, self.filled_style)
            } else {
                (EMPTY, self.empty_style)
            };
            buf.get_mut(x, area.y).set_char(ch).set_style(style);
        }
    }
}

/// Stars as plain text, for spans inside paragraphs.
pub fn stars_text(rating: f32) -> String {
    let filled = filled_stars(rating);
    (0..MAX_STARS)
        .map(|i| if i < filled { FILLED } else { EMPTY })
        .collect()
}
