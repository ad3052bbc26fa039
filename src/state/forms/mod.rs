//! Form domain layer

mod comment_form;
mod field;

pub use comment_form::{Alert, CommentForm, FormEffect, FormFocus};
pub use field::FormField;
