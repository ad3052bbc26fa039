//! Offering detail view

use super::components::stars_line;
use crate::state::{AppState, DetailsState, OfferingDetails};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the offering detail view
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(alert) = &state.details_alert {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", alert.title),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(alert.text.clone(), Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(""));
    }

    match &state.details {
        DetailsState::NotLoaded => lines.push(Line::from(Span::styled(
            "Press r to load the offering",
            Style::default().fg(Color::DarkGray),
        ))),
        DetailsState::Loading => lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))),
        DetailsState::Loaded(details) => lines.extend(detail_lines(details)),
    }

    let block = Block::default()
        .title(format!(" {} ", state.offering.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset, 0));

    frame.render_widget(paragraph, area);
}

fn detail_lines(details: &OfferingDetails) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let mut rating = stars_line(details.average_rating());
    rating.spans.insert(0, Span::styled("Rating: ", label));
    rating
        .spans
        .push(Span::styled(format!(" ({:.1})", details.rating), label));

    let mut lines = vec![rating];
    if !details.state.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("State: ", label),
            Span::raw(details.state.clone()),
        ]));
    }
    if let Some(description) = &details.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.clone()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Comments ({})", details.comments.len()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    if details.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet. Press c to add one.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for comment in &details.comments {
        lines.push(Line::from(""));
        let mut header = stars_line(comment.rating);
        header.spans.push(Span::styled(
            format!(" {}", comment.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if !comment.user.is_empty() {
            header.spans.push(Span::styled(
                format!(" by {}", comment.user),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !comment.timestamp.is_empty() {
            header.spans.push(Span::styled(
                format!(" ({})", comment.timestamp),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(header);
        for text in comment.comment.lines() {
            lines.push(Line::from(format!("  {text}")));
        }
    }

    lines
}
