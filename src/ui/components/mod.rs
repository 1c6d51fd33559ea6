//! Reusable UI components

mod button;
mod card;

pub use button::{render_button, BUTTON_HEIGHT};
pub use card::{card_block, columns_for, grid, reveal_area};
