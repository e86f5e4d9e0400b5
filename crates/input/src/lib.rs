//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`types::GameAction`] and tracks which
//! actions are currently held, producing one [`types::ActionSet`] snapshot
//! per tick. Works in terminals without key-release events by auto-releasing
//! after a short timeout.

pub mod held;
pub mod map;

pub use wled_raycaster_types as types;

pub use held::HeldActions;
pub use map::{map_key, should_quit};
