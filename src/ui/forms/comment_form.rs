//! Rating and comment form modal
//!
//! The geometry is computed by [`CommentFormLayout`] so that drawing and
//! mouse hit-testing agree on where every star and field sits.
//!
//! ```text
//! ┌ Comment ─────────────────────────────┐
//! │ <error region>                       │
//! │ Rating                               │
//! │ ★  ★  ★  ☆  ☆                        │
//! │                                      │
//! │ ┌ Title ───────────────────────────┐ │
//! │ └──────────────────────────────────┘ │
//! │ ┌ Comment ─────────────────────────┐ │
//! │ │                                  │ │
//! │ └──────────────────────────────────┘ │
//! │                         ┌──────────┐ │
//! │                         │  Submit  │ │
//! │                         └──────────┘ │
//! └──────────────────────────────────────┘
//! ```

use super::field_renderer::draw_field;
use crate::state::{CommentForm, FormFocus, STAR_COUNT};
use crate::ui::components::{centered_rect, render_button, star_style, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const FORM_WIDTH: u16 = 60;
pub const FORM_HEIGHT: u16 = 21;

/// Horizontal padding inside the dialog border
const INNER_PADDING: u16 = 1;
/// Clickable width of one star
const STAR_WIDTH: u16 = 2;
/// Distance between the left edges of two stars
const STAR_SPACING: u16 = 3;
const FIELD_HEIGHT: u16 = 3;
const SUBMIT_WIDTH: u16 = 12;

/// Interactive element under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    Star(usize),
    Title,
    Comment,
    Submit,
}

/// Screen rectangles of every part of the comment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentFormLayout {
    pub dialog: Rect,
    pub error: Rect,
    pub rating_label: Rect,
    pub stars: [Rect; STAR_COUNT],
    pub title: Rect,
    pub comment: Rect,
    pub submit: Rect,
}

impl CommentFormLayout {
    /// Lay the form out centered in `area`
    pub fn new(area: Rect) -> Self {
        let dialog = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);
        let inner = Rect {
            x: dialog.x + 1 + INNER_PADDING,
            y: dialog.y + 1,
            width: dialog.width.saturating_sub(2 + 2 * INNER_PADDING),
            height: dialog.height.saturating_sub(2),
        };
        let row = |offset: u16, height: u16| Rect {
            x: inner.x,
            y: inner.y + offset,
            width: inner.width,
            height,
        };

        let stars_y = inner.y + 2;
        let stars: [Rect; STAR_COUNT] = std::array::from_fn(|i| Rect {
            x: inner.x + i as u16 * STAR_SPACING,
            y: stars_y,
            width: STAR_WIDTH,
            height: 1,
        });

        let submit_y = (inner.y + inner.height).saturating_sub(BUTTON_HEIGHT);
        let submit = Rect {
            x: (inner.x + inner.width).saturating_sub(SUBMIT_WIDTH),
            y: submit_y,
            width: SUBMIT_WIDTH.min(inner.width),
            height: BUTTON_HEIGHT,
        };

        let comment_y = inner.y + 4 + FIELD_HEIGHT;
        let comment = Rect {
            height: submit_y.saturating_sub(comment_y),
            ..row(4 + FIELD_HEIGHT, 0)
        };

        // Small terminals squeeze the dialog; nothing may poke outside it
        let clip = |rect: Rect| rect.intersection(dialog);
        Self {
            dialog,
            error: clip(row(0, 1)),
            rating_label: clip(row(1, 1)),
            stars: stars.map(clip),
            title: clip(row(4, FIELD_HEIGHT)),
            comment: clip(comment),
            submit: clip(submit),
        }
    }

    /// Star index under the given cell, if any
    pub fn star_at(&self, column: u16, row: u16) -> Option<usize> {
        self.stars
            .iter()
            .position(|rect| contains(*rect, column, row))
    }

    /// Interactive element under the given cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<FormHit> {
        if let Some(index) = self.star_at(column, row) {
            return Some(FormHit::Star(index));
        }
        if contains(self.title, column, row) {
            Some(FormHit::Title)
        } else if contains(self.comment, column, row) {
            Some(FormHit::Comment)
        } else if contains(self.submit, column, row) {
            Some(FormHit::Submit)
        } else {
            None
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draw the comment form modal over the current screen
pub fn draw_comment_form(frame: &mut Frame, title: &str, form: &CommentForm) {
    let layout = CommentFormLayout::new(frame.area());

    frame.render_widget(Clear, layout.dialog);

    let hints = Line::from(vec![
        Span::styled(" Tab", Style::default().fg(Color::Cyan)),
        Span::styled(":next  ", Style::default().fg(Color::DarkGray)),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::styled(":submit  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(":cancel ", Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(hints)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, layout.dialog);

    if let Some(alert) = &form.error {
        let error = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}: ", alert.title),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(alert.text.as_str(), Style::default().fg(Color::Red)),
        ]));
        frame.render_widget(error, layout.error);
    }

    let rating_focused = form.focus == FormFocus::Rating;
    let label_style = if rating_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut label = vec![Span::styled("Rating", label_style)];
    if rating_focused {
        label.push(Span::styled(
            "  ←→ preview  Enter set  0-5 direct",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), layout.rating_label);

    for (rect, fill) in layout.stars.iter().zip(form.star_fills()) {
        frame.render_widget(
            Paragraph::new(Span::styled(fill.glyph(), star_style(fill))),
            *rect,
        );
    }

    draw_field(frame, layout.title, &form.title, form.focus == FormFocus::Title);
    draw_field(
        frame,
        layout.comment,
        &form.comment,
        form.focus == FormFocus::Comment,
    );
    render_button(frame, layout.submit, "Submit", form.focus == FormFocus::Submit);
}
