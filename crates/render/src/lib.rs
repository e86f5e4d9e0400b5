//! Scene rendering into an RGB framebuffer.
//!
//! Everything here is pure: the renderer reads core state and writes pixels,
//! no I/O. The same buffer feeds both the terminal preview and (after
//! downsampling) the LED matrix streamer.
//!
//! Z-order per frame: sky/floor, wall strips, bullet impacts, weapon overlay.

pub mod downsample;
pub mod fb;
pub mod scene;
pub mod weapon;

pub use wled_raycaster_core as core;
pub use wled_raycaster_types as types;

pub use downsample::downsample;
pub use fb::PixelBuffer;
pub use scene::render_scene;
pub use weapon::draw_weapon;
