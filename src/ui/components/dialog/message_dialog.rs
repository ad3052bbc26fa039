//! Message dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a titled message overlay centered on the screen.
///
/// Dialogs titled `Error` use the error palette.
pub fn render_message_dialog(frame: &mut Frame, title: &str, message: &str) {
    let color = if title == "Error" {
        Color::Red
    } else {
        Color::Cyan
    };

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
