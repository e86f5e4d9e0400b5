//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the world grid, the ray caster and the
//! player/controller state. It performs no I/O, making it:
//!
//! - **Deterministic**: the same inputs always produce the same state
//! - **Testable**: every rule has unit tests
//! - **Portable**: runs headless, in the terminal binary, or in benches
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular wall/empty occupancy grid
//! - [`raycast`]: fixed-step ray march against the grid
//! - [`player`]: position, heading, weapon timers and bullet impacts

pub mod grid;
pub mod player;
pub mod raycast;

pub use wled_raycaster_types as types;

pub use grid::{Cell, GridError, GridMap};
pub use player::{Impact, PlayerState};
pub use raycast::{cast, RayHit};
