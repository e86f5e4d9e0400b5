//! Core types shared across the application.
//! Pure data and constants, no external dependencies.

/// Full render resolution (pixels).
pub const FRAME_WIDTH: usize = 320;
pub const FRAME_HEIGHT: usize = 200;

/// Physical LED matrix resolution.
pub const MATRIX_WIDTH: usize = 16;
pub const MATRIX_HEIGHT: usize = 8;

/// Game loop timing. ~35 Hz render/update, 20 Hz device streaming.
pub const TICK_MS: u64 = 28;
pub const STREAM_INTERVAL_MS: u64 = 50;

/// Horizontal field of view (60 degrees).
pub const FOV: f64 = std::f64::consts::FRAC_PI_3;

/// Ray march granularity: step length in grid-cell units and step budget.
/// 200 steps at 0.02 units gives a maximum reach of 4 cells.
pub const RAY_STEP: f64 = 0.02;
pub const MAX_RAY_STEPS: u32 = 200;

/// Sentinel distance reported when a ray hits nothing within its budget.
pub const NO_HIT_DISTANCE: f64 = 100.0;

/// Per-tick movement and rotation increments.
pub const MOVE_SPEED: f64 = 0.05;
pub const ROT_SPEED: f64 = 0.05;

/// Weapon timing (ticks) and hit-test range (grid units).
pub const FIRE_COOLDOWN_TICKS: u8 = 10;
pub const MUZZLE_FLASH_TICKS: u8 = 5;
pub const IMPACT_TTL_TICKS: u8 = 10;
pub const FIRE_HIT_RANGE: f64 = 10.0;

/// Wall shading fades linearly to black over this distance.
pub const SHADE_FALLOFF_DISTANCE: f64 = 8.0;

/// Upper bound on simultaneously visible bullet impacts.
pub const MAX_IMPACTS: usize = 16;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by a factor clamped to [0, 1].
    pub fn scaled(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 * f) as u8,
            g: (self.g as f64 * f) as u8,
            b: (self.b as f64 * f) as u8,
        }
    }
}

/// Scene palette.
pub const SKY_COLOR: Rgb = Rgb::new(50, 50, 100);
pub const FLOOR_COLOR: Rgb = Rgb::new(100, 100, 100);
/// Wall colors indexed by surface parity, alternating per grid cell.
pub const WALL_COLORS: [Rgb; 2] = [Rgb::new(200, 50, 50), Rgb::new(150, 30, 30)];
pub const IMPACT_COLOR: Rgb = Rgb::new(255, 255, 0);

/// Discrete game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Fire,
}

impl GameAction {
    pub const ALL: [GameAction; 7] = [
        GameAction::RotateLeft,
        GameAction::RotateRight,
        GameAction::MoveForward,
        GameAction::MoveBackward,
        GameAction::StrafeLeft,
        GameAction::StrafeRight,
        GameAction::Fire,
    ];

    /// Stable index for per-action bookkeeping.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::StrafeLeft => "strafeLeft",
            GameAction::StrafeRight => "strafeRight",
            GameAction::Fire => "fire",
        }
    }
}

/// A per-tick snapshot of currently active actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, action: GameAction) {
        self.0 |= 1 << action.index();
    }

    pub fn contains(&self, action: GameAction) -> bool {
        self.0 & (1 << action.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
