//! Application state module

mod app_state;
mod forms;
mod reveal;
mod toast;

pub use app_state::*;
pub use forms::*;
pub use reveal::*;
pub use toast::*;
