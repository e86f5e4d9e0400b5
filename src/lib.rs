//! WLED raycaster (workspace facade crate).
//!
//! This package keeps a single `wled_raycaster::{core,render,matrix,input,term,types}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use wled_raycaster_core as core;
pub use wled_raycaster_input as input;
pub use wled_raycaster_matrix as matrix;
pub use wled_raycaster_render as render;
pub use wled_raycaster_term as term;
pub use wled_raycaster_types as types;
