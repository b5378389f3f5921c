//! Fruit Farm - a turn-based fruit catching and animal feeding game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (feeding, leveling, turns, spawning)
//! - `renderer`: Presentation-facing contracts and HUD status text
//! - `platform`: Headless stage and fixed-step frame driver
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Turn defaults
    pub const MAX_TURN: u32 = 10;
    pub const TURN_DURATION_SECS: f32 = 30.0;

    /// Spawn cadence: seconds between spawns, tightened every turn
    pub const INITIAL_SPAWN_RATE: f32 = 2.0;
    pub const MIN_SPAWN_RATE: f32 = 0.5;
    pub const SPAWN_RATE_STEP: f32 = 0.1;

    /// Fall speed, increased every turn
    pub const INITIAL_FALL_SPEED: f32 = 2.0;
    pub const FALL_SPEED_STEP: f32 = 0.5;

    /// Spawn area
    pub const SPAWN_HEIGHT: f32 = 6.0;
    pub const MIN_SPAWN_X: f32 = -7.0;
    pub const MAX_SPAWN_X: f32 = 7.0;
    /// Uncollected fruit is discarded by the stage after this long
    pub const FRUIT_LIFETIME_SECS: f32 = 10.0;

    /// Player movement
    pub const PLAYER_MIN_X: f32 = -8.0;
    pub const PLAYER_MAX_X: f32 = 8.0;
    pub const PLAYER_MOVE_SPEED: f32 = 5.0;
    /// Height of the player's catch line
    pub const PLAYER_Y: f32 = -4.0;
    pub const PICKUP_RADIUS: f32 = 0.75;

    /// Hunger gained per elapsed second
    pub const HUNGER_DRIFT_PER_SEC: f32 = 2.0;
    /// Level that wins the game
    pub const MAX_LEVEL: u8 = 3;
}

/// Clamp a horizontal coordinate into `[min_x, max_x]`
#[inline]
pub fn clamp_x(x: f32, min_x: f32, max_x: f32) -> f32 {
    x.max(min_x).min(max_x)
}
