//! Layout components (main area, status bar)

use crate::state::{AppState, ModalBody};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and the one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        get_hints(state),
        Style::default().fg(Color::Gray),
    ));

    if state.submissions_in_flight > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Submitting ({})", state.submissions_in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for whatever currently has input focus
fn get_hints(state: &AppState) -> String {
    match state.modal.as_ref().map(|m| &m.body) {
        None => "c:comment  r:refresh  j/k:scroll  q:quit".to_string(),
        Some(ModalBody::CommentForm(_)) => format!(
            "Tab:next  {}:submit  Esc:cancel",
            crate::platform::SUBMIT_SHORTCUT
        ),
        Some(ModalBody::Message(_)) => "Enter/Esc:dismiss".to_string(),
    }
}
