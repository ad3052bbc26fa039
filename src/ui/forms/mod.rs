//! Form views

mod comment_form;
mod field_renderer;

pub use comment_form::{draw_comment_form, CommentFormLayout, FormHit};
