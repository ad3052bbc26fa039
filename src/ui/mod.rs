//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod offering;

pub use forms::{CommentFormLayout, FormHit};

use crate::state::{AppState, ModalBody};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let (main_area, status_area) = layout::create_layout(area);

    offering::draw(frame, main_area, state);
    layout::draw_status_bar(frame, status_area, state);

    // Modal goes on top of everything else
    if let Some(modal) = &state.modal {
        match &modal.body {
            ModalBody::CommentForm(form) => forms::draw_comment_form(frame, &modal.title, form),
            ModalBody::Message(text) => {
                components::render_message_dialog(frame, &modal.title, text)
            }
        }
    }
}
