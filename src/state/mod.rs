//! Application state module

mod app_state;
mod fade_state;
mod forms;

pub use app_state::*;
pub use fade_state::*;
pub use forms::*;
