//! Rating and comment form state

use super::field::FormField;
use crate::error::{FormError, SubmissionError};
use crate::state::offering::{CommentSubmission, OfferingContext};
use crate::state::rating::{star_fills, Rating, StarFill, STAR_COUNT};

/// Title + text pair shown by the alert regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub text: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Focusable rows of the comment form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Rating,
    Title,
    Comment,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Rating,
        FormFocus::Title,
        FormFocus::Comment,
        FormFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[pos - 1]
        }
    }
}

/// What the host has to do once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    CloseModal,
    RefreshView,
    ShowMessage { title: String, text: String },
}

/// State of one open comment form
#[derive(Debug, Clone)]
pub struct CommentForm {
    pub offering: OfferingContext,
    rating: Rating,
    hovered: Option<usize>,
    pub title: FormField,
    pub comment: FormField,
    pub focus: FormFocus,
    /// Inline error region at the top of the form
    pub error: Option<Alert>,
}

impl CommentForm {
    pub fn new(offering: OfferingContext) -> Self {
        Self {
            offering,
            rating: Rating::UNRATED,
            hovered: None,
            title: FormField::text("title", "Title"),
            comment: FormField::text_area("comment", "Comment"),
            focus: FormFocus::default(),
            error: None,
        }
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer entered star `index`: preview without committing
    pub fn hover_star(&mut self, index: usize) {
        if index < STAR_COUNT {
            self.hovered = Some(index);
        }
    }

    /// Pointer left the stars: display reverts to the committed rating
    pub fn leave_stars(&mut self) {
        self.hovered = None;
    }

    /// Commit the rating for star `index` (1-based count)
    pub fn click_star(&mut self, index: usize) {
        if index < STAR_COUNT {
            self.rating = Rating::from_star_index(index);
            tracing::debug!("Rating set to {}", self.rating);
        }
    }

    /// Commit an explicit rating value, 0 clears it
    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Move the keyboard preview one star left or right
    pub fn step_hover(&mut self, forward: bool) {
        let next = match self.hovered {
            Some(current) if forward => (current + 1).min(STAR_COUNT - 1),
            Some(current) => current.saturating_sub(1),
            None => {
                let filled = self.rating.value() as usize;
                match (filled, forward) {
                    (0, _) => 0,
                    (n, true) => n.min(STAR_COUNT - 1),
                    (n, false) => (n - 1).saturating_sub(1),
                }
            }
        };
        self.hovered = Some(next);
    }

    /// Commit the star currently previewed from the keyboard
    pub fn commit_hover(&mut self) {
        if let Some(index) = self.hovered {
            self.click_star(index);
        }
    }

    /// Current display state of the five stars
    pub fn star_fills(&self) -> [StarFill; STAR_COUNT] {
        star_fills(self.rating, self.hovered)
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        if self.focus == FormFocus::Rating && focus != FormFocus::Rating {
            self.hovered = None;
        }
        self.focus = focus;
    }

    /// The text field that receives typed characters, if any
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            FormFocus::Title => Some(&mut self.title),
            FormFocus::Comment => Some(&mut self.comment),
            FormFocus::Rating | FormFocus::Submit => None,
        }
    }

    /// Build the submission from the current form contents
    pub fn validate(&self) -> Result<CommentSubmission, FormError> {
        let title = self.title.trimmed();
        let comment = self.comment.trimmed();
        if title.is_empty() || comment.is_empty() {
            for field in [&self.title, &self.comment] {
                if field.trimmed().is_empty() {
                    tracing::debug!("Required field {} is empty", field.name);
                }
            }
            return Err(FormError::MissingFields);
        }
        Ok(CommentSubmission {
            title: title.to_string(),
            comment: comment.to_string(),
            rating: self.rating,
        })
    }

    pub fn show_error(&mut self, alert: Alert) {
        self.error = Some(alert);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Effects to apply when a submission completes
    pub fn outcome_effects(outcome: &Result<(), SubmissionError>) -> Vec<FormEffect> {
        match outcome {
            Ok(()) => vec![FormEffect::CloseModal, FormEffect::RefreshView],
            Err(err) => vec![
                FormEffect::CloseModal,
                FormEffect::ShowMessage {
                    title: "Error".to_string(),
                    text: err.user_message().to_string(),
                },
            ],
        }
    }
}
