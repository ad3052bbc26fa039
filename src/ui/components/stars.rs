//! Star glyph rendering

use crate::state::{star_fills, Rating, StarFill};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Style of a star in the given fill state
pub fn star_style(fill: StarFill) -> Style {
    match fill {
        StarFill::Filled => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        StarFill::Empty => Style::default().fg(Color::DarkGray),
    }
}

/// Read-only star row for a rating, e.g. in comment listings
pub fn stars_line(rating: Rating) -> Line<'static> {
    let spans: Vec<Span> = star_fills(rating, None)
        .into_iter()
        .map(|fill| Span::styled(fill.glyph(), star_style(fill)))
        .collect();
    Line::from(spans)
}
