//! Reusable UI components

mod button;
mod dialog;
mod stars;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{centered_rect, render_message_dialog};
pub use stars::{star_style, stars_line};
