//! WLED JSON API payload types.
//!
//! The device accepts a single write operation on `/json/state`. Only the
//! fields this project uses are modeled; WLED ignores anything it is not
//! sent.

use serde::{Deserialize, Serialize};

/// One segment update. `i` carries per-LED colors in device pixel order and
/// must cover the full pixel count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: u32,
    pub i: Vec<[u8; 3]>,
}

/// The `/json/state` write payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    pub on: bool,
    pub bri: u8,
    pub seg: Vec<Segment>,
}

impl StateUpdate {
    /// Frame payload: power on, one segment with every pixel set.
    pub fn frame(pixels: Vec<[u8; 3]>, brightness: u8) -> Self {
        Self {
            on: true,
            bri: brightness,
            seg: vec![Segment { id: 0, i: pixels }],
        }
    }

    /// All-pixels-off payload, sent once at teardown.
    pub fn blackout(pixel_count: usize) -> Self {
        Self::frame(vec![[0, 0, 0]; pixel_count], 255)
    }
}
