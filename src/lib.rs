//! Pixel Quest - A 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Headless display-list presentation
//! - `clock`: Fixed-rate tick cadence
//! - `settings`: Tunable physics and run configuration
//! - `error`: Construction and configuration errors

pub mod clock;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use clock::FixedClock;
pub use error::{ConfigError, LevelError};
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_W: i32 = 800;
    pub const SCREEN_H: i32 = 600;

    /// Simulation rate. All physics constants are calibrated per tick at this rate.
    pub const TICK_RATE_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical launch velocity (pixels/tick, negative is up)
    pub const JUMP_FORCE: f32 = -14.0;
    /// Horizontal walking speed (pixels/tick)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Fall speed cap (pixels/tick)
    pub const TERMINAL_VELOCITY: f32 = 20.0;
    /// Horizontal velocity multiplier per tick with no directional input
    pub const FRICTION: f32 = 0.75;
    /// Below this horizontal speed the player stops outright
    pub const STOP_THRESHOLD: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_WIDTH: i32 = 32;
    pub const PLAYER_HEIGHT: i32 = 48;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Invincibility after a hit (~1.5 s)
    pub const INVINCIBLE_TICKS: u32 = 90;
    /// Blink half-period while invincible (ticks)
    pub const BLINK_TICKS: u32 = 5;

    /// Enemy defaults
    pub const ENEMY_WIDTH: i32 = 36;
    pub const ENEMY_HEIGHT: i32 = 42;
    pub const ENEMY_SPEED: i32 = 2;
    /// Damage dealt on enemy contact
    pub const CONTACT_DAMAGE: i32 = 20;

    /// Coin defaults
    pub const COIN_SIZE: i32 = 20;
    pub const COIN_VALUE: u32 = 10;
    /// Bob amplitude (pixels)
    pub const COIN_BOB_AMPLITUDE: f32 = 3.0;
    /// Bob angular step (degrees/tick), one full cycle per second
    pub const COIN_BOB_DEGREES_PER_TICK: f32 = 6.0;
    /// Upper bound (inclusive) of the randomized starting bob phase
    pub const COIN_BOB_STAGGER: u32 = 60;

    /// How far below the screen the player may drop before dying
    pub const FALL_MARGIN: i32 = 50;
}
