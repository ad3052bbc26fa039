//! Application state definitions

use super::forms::{Alert, CommentForm};
use super::offering::{OfferingContext, OfferingDetails};

/// Content of the modal dialog
#[derive(Debug, Clone)]
pub enum ModalBody {
    /// Plain message text
    Message(String),
    /// The rating and comment form
    CommentForm(Box<CommentForm>),
}

/// The single modal dialog slot
#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub body: ModalBody,
}

/// Where an alert is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTarget {
    /// Error region at the top of the open comment form
    CommentForm,
    /// Alert line of the offering detail view
    OfferingDetails,
}

/// Loading state of the offering detail view
#[derive(Debug, Clone, Default)]
pub enum DetailsState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(OfferingDetails),
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub offering: OfferingContext,
    pub details: DetailsState,
    pub modal: Option<Modal>,
    /// Alert region of the detail view
    pub details_alert: Option<Alert>,
    /// Comment submissions that have not settled yet
    pub submissions_in_flight: usize,
    pub status_message: Option<String>,
    /// Scroll offset of the comment list
    pub scroll_offset: u16,
}

impl AppState {
    pub fn new(offering: OfferingContext) -> Self {
        Self {
            offering,
            details: DetailsState::default(),
            modal: None,
            details_alert: None,
            submissions_in_flight: 0,
            status_message: None,
            scroll_offset: 0,
        }
    }

    /// Show the modal dialog, replacing whatever it held
    pub fn show_modal(&mut self, title: impl Into<String>, body: ModalBody) {
        self.modal = Some(Modal {
            title: title.into(),
            body,
        });
    }

    pub fn hide_modal(&mut self) {
        self.modal = None;
    }

    /// Open the modal with a plain message
    pub fn show_message(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.show_modal(title, ModalBody::Message(text.into()));
    }

    /// Show an error inside a specific region instead of a dialog.
    ///
    /// Alerts aimed at the comment form are dropped when no form is open.
    pub fn show_alert_error(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        target: AlertTarget,
    ) {
        let alert = Alert::new(title, text);
        match target {
            AlertTarget::CommentForm => {
                if let Some(form) = self.comment_form_mut() {
                    form.show_error(alert);
                }
            }
            AlertTarget::OfferingDetails => self.details_alert = Some(alert),
        }
    }

    pub fn comment_form(&self) -> Option<&CommentForm> {
        match &self.modal {
            Some(Modal {
                body: ModalBody::CommentForm(form),
                ..
            }) => Some(form.as_ref()),
            _ => None,
        }
    }

    pub fn comment_form_mut(&mut self) -> Option<&mut CommentForm> {
        match &mut self.modal {
            Some(Modal {
                body: ModalBody::CommentForm(form),
                ..
            }) => Some(form.as_mut()),
            _ => None,
        }
    }

    pub fn loaded_details(&self) -> Option<&OfferingDetails> {
        match &self.details {
            DetailsState::Loaded(details) => Some(details),
            _ => None,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}
