//! Player/controller state and the per-tick update rules.
//!
//! One exclusively-owned aggregate holds everything the tick mutates:
//! position, heading, weapon timers and the active bullet impacts. The loop
//! feeds it an [`ActionSet`] snapshot once per tick, then advances timers.

use arrayvec::ArrayVec;

use crate::grid::GridMap;
use crate::raycast::cast;
use crate::types::{
    ActionSet, GameAction, FIRE_COOLDOWN_TICKS, FIRE_HIT_RANGE, FRAME_WIDTH, IMPACT_TTL_TICKS,
    MAX_IMPACTS, MOVE_SPEED, MUZZLE_FLASH_TICKS, ROT_SPEED,
};

/// A bullet impact decorating a wall for a few ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impact {
    /// Screen column the impact is anchored to.
    pub column: usize,
    /// Remaining lifetime in ticks.
    pub ttl: u8,
}

/// Player position, heading and weapon state.
///
/// Invariant: `(x, y)` truncated to a cell is never a wall. Moves that would
/// break this are rejected wholesale (full stop, no sliding).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    /// Heading in radians. Never explicitly wrapped; only consumed through
    /// cos/sin, which normalize implicitly.
    pub heading: f64,
    pub fire_cooldown: u8,
    pub muzzle_flash: u8,
    impacts: ArrayVec<Impact, MAX_IMPACTS>,
}

impl PlayerState {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading,
            fire_cooldown: 0,
            muzzle_flash: 0,
            impacts: ArrayVec::new(),
        }
    }

    /// Active bullet impacts, read-only for the renderer.
    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    /// Apply one tick's worth of held actions.
    pub fn apply_actions(&mut self, actions: ActionSet, grid: &GridMap) {
        if actions.contains(GameAction::RotateLeft) {
            self.heading -= ROT_SPEED;
        }
        if actions.contains(GameAction::RotateRight) {
            self.heading += ROT_SPEED;
        }

        if actions.contains(GameAction::MoveForward) {
            self.try_move(self.heading, grid);
        }
        if actions.contains(GameAction::MoveBackward) {
            self.try_move(self.heading + std::f64::consts::PI, grid);
        }
        if actions.contains(GameAction::StrafeLeft) {
            self.try_move(self.heading - std::f64::consts::FRAC_PI_2, grid);
        }
        if actions.contains(GameAction::StrafeRight) {
            self.try_move(self.heading + std::f64::consts::FRAC_PI_2, grid);
        }

        if actions.contains(GameAction::Fire) {
            self.try_fire(grid);
        }
    }

    /// Propose a step along `direction`; commit only when the destination
    /// cell is empty.
    fn try_move(&mut self, direction: f64, grid: &GridMap) {
        let new_x = self.x + direction.cos() * MOVE_SPEED;
        let new_y = self.y + direction.sin() * MOVE_SPEED;
        if grid.is_empty_cell(new_x as i64, new_y as i64) {
            self.x = new_x;
            self.y = new_y;
        }
    }

    /// Fire if the cooldown allows it. A successful shot resets the cooldown,
    /// starts the muzzle flash and, when the center ray reaches a wall within
    /// range, records an impact at the center column.
    fn try_fire(&mut self, grid: &GridMap) {
        if self.fire_cooldown > 0 {
            return;
        }
        self.fire_cooldown = FIRE_COOLDOWN_TICKS;
        self.muzzle_flash = MUZZLE_FLASH_TICKS;

        let hit = cast(self.x, self.y, self.heading, grid);
        if hit.distance < FIRE_HIT_RANGE {
            // Shots always land dead center; the impact list is bounded and
            // a full list simply drops the decoration.
            let _ = self.impacts.try_push(Impact {
                column: FRAME_WIDTH / 2,
                ttl: IMPACT_TTL_TICKS,
            });
        }
    }

    /// Decrement all running timers, then drop expired impacts.
    pub fn tick_timers(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
        if self.muzzle_flash > 0 {
            self.muzzle_flash -= 1;
        }
        for impact in &mut self.impacts {
            if impact.ttl > 0 {
                impact.ttl -= 1;
            }
        }
        self.impacts.retain(|impact| impact.ttl > 0);
    }
}
