//! Application state module

mod app_state;
mod forms;
mod offering;
mod rating;

pub use app_state::*;
pub use forms::*;
pub use offering::*;
pub use rating::*;
