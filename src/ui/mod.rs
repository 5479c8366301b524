//! Input surface state and bubble rendering.

pub mod render;
pub mod state;

pub use render::{ERROR_BUBBLE, Renderer, bubbles};
pub use state::{InputSurface, MENU_OPTIONS, UiState};
