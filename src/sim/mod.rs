//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-based fixed ticks only (no delta time)
//! - Seeded RNG only
//! - Stable iteration order (container order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    HorizontalHit, VerticalHit, first_overlap, overlaps, resolve_horizontal, resolve_vertical,
};
pub use level::{Level, build_level};
pub use rect::Rect;
pub use state::{
    ActorState, Coin, Enemy, Footing, GamePhase, GameState, Platform, PlatformKind, Player,
    Vulnerability,
};
pub use tick::{TickControl, TickInput, tick};
