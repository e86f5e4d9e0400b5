//! LED matrix addressing and WLED streaming.
//!
//! Three layers, outermost last:
//!
//! - [`layout`]: pure (x, y) -> device index mapping for the physical wiring
//! - [`protocol`]: the WLED `/json/state` write payload
//! - [`streamer`]: rate-gated bridge from the sync game loop to an async
//!   network task; failures land in counters, never in the loop
//!
//! The layout mapping is deliberately exposed as a pure callable so a
//! calibration tool can drive test patterns through it without touching the
//! game at all.

pub mod layout;
pub mod protocol;
pub mod streamer;

pub use wled_raycaster_types as types;

pub use layout::{LayoutError, MatrixLayout, PanelConfig, ScanDirection};
pub use protocol::{Segment, StateUpdate};
pub use streamer::{build_pixel_array, StreamError, StreamStats, Streamer, StreamerConfig};
