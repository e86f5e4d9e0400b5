//! Terminal presentation layer.
//!
//! Renders the RGB framebuffer into a real terminal using half-block glyphs
//! (two image rows per terminal row) with diff-based redraws, plus a small
//! HUD that doubles as the streaming observability surface.

pub mod hud;
pub mod renderer;
pub mod view;

pub use wled_raycaster_render as render;
pub use wled_raycaster_types as types;

pub use hud::status_lines;
pub use renderer::TerminalRenderer;
pub use view::{preview, Viewport};
