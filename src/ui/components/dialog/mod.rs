//! Dialog components for TUI

mod base;
mod message_dialog;

pub use base::centered_rect;
pub use message_dialog::render_message_dialog;
