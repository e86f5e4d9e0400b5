//! Held-action tracking for terminal environments.
//!
//! Movement and rotation are continuous: the controller wants to know what
//! is held *now*, every tick. Terminals deliver key presses (and repeats)
//! but often no releases, so each action remembers its last press time and
//! auto-releases after a short timeout; terminal auto-repeat keeps refreshing
//! held keys well within it.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use crate::map::map_key;
use crate::types::{ActionSet, GameAction};

// Long enough to bridge the gap before terminal auto-repeat kicks in, short
// enough that letting go stops the player within a few ticks.
const DEFAULT_RELEASE_TIMEOUT: Duration = Duration::from_millis(400);

/// Tracks which actions are currently held.
#[derive(Debug, Clone)]
pub struct HeldActions {
    last_press: [Option<Instant>; GameAction::ALL.len()],
    release_timeout: Duration,
}

impl HeldActions {
    pub fn new() -> Self {
        Self::with_release_timeout(DEFAULT_RELEASE_TIMEOUT)
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            last_press: [None; GameAction::ALL.len()],
            release_timeout,
        }
    }

    /// Record a key press (or terminal auto-repeat).
    pub fn key_press(&mut self, key: KeyEvent, now: Instant) {
        if let Some(action) = map_key(key) {
            self.last_press[action.index()] = Some(now);
        }
    }

    /// Record an explicit key release, on terminals that send them.
    pub fn key_release(&mut self, code: KeyCode) {
        if let Some(action) = map_key(KeyEvent::from(code)) {
            self.last_press[action.index()] = None;
        }
    }

    /// Current snapshot of held actions; expires stale presses as a side
    /// effect.
    pub fn snapshot(&mut self, now: Instant) -> ActionSet {
        let mut set = ActionSet::empty();
        for action in GameAction::ALL {
            let slot = &mut self.last_press[action.index()];
            if let Some(pressed) = *slot {
                if now.duration_since(pressed) > self.release_timeout {
                    *slot = None;
                } else {
                    set.insert(action);
                }
            }
        }
        set
    }

    pub fn reset(&mut self) {
        self.last_press = [None; GameAction::ALL.len()];
    }
}

impl Default for HeldActions {
    fn default() -> Self {
        Self::new()
    }
}
