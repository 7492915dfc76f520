//! Game state and core simulation types
//!
//! Everything the tick loop mutates lives in [`GameState`]; there is no
//! ambient or static state.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::{first_overlap, resolve_horizontal, resolve_vertical};
use super::level::{Level, build_level};
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;
use crate::error::LevelError;
use crate::settings::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Player died, waiting for confirm
    GameOver,
    /// All coins collected, waiting for confirm
    Win,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
            GamePhase::Win => "win",
        }
    }
}

/// Platform color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Full-width ground strip
    Ground,
    /// Floating ledge
    #[default]
    Ledge,
}

/// Immovable terrain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(rect: Rect, kind: PlatformKind) -> Self {
        Self { rect, kind }
    }
}

/// A collectible coin with an idle bob animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    /// Resting center y; the bob offset is applied around it
    pub anchor_y: i32,
    /// Animation tick counter, staggered per coin
    pub bob_phase: u32,
}

impl Coin {
    /// The coin rests at `center` until its first tick
    pub fn new(center: IVec2, bob_phase: u32) -> Result<Self, LevelError> {
        Ok(Self {
            rect: Rect::from_center(center, COIN_SIZE, COIN_SIZE)?,
            anchor_y: center.y,
            bob_phase,
        })
    }

    /// Vertical bob offset for the current phase (pixels, truncated)
    pub fn bob_offset(&self) -> i32 {
        let degrees = (self.bob_phase % 60) as f32 * COIN_BOB_DEGREES_PER_TICK;
        (COIN_BOB_AMPLITUDE * degrees.to_radians().cos()) as i32
    }

    pub fn advance_one_tick(&mut self) {
        self.bob_phase = self.bob_phase.wrapping_add(1);
        self.apply_bob();
    }

    fn apply_bob(&mut self) {
        self.rect.set_center_y(self.anchor_y + self.bob_offset());
    }
}

/// A patrolling enemy: walks between two x bounds and follows the ground
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Signed walking speed (pixels/tick)
    pub vel_x: i32,
    /// Left patrol boundary (x)
    pub patrol_min: i32,
    /// Right patrol boundary (x)
    pub patrol_max: i32,
}

impl Enemy {
    pub fn new(x: i32, y: i32, patrol_min: i32, patrol_max: i32) -> Result<Self, LevelError> {
        if patrol_min >= patrol_max {
            return Err(LevelError::InvalidPatrol {
                min: patrol_min,
                max: patrol_max,
            });
        }
        Ok(Self {
            rect: Rect::try_new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT)?,
            vel_x: ENEMY_SPEED,
            patrol_min,
            patrol_max,
        })
    }

    /// Walk, bounce at the patrol bounds, then snap onto the ground below
    pub fn advance_one_tick(&mut self, platforms: &[Platform]) {
        self.rect.x += self.vel_x;

        if self.rect.left() <= self.patrol_min || self.rect.right() >= self.patrol_max {
            self.vel_x = -self.vel_x;
            // Nudge back inside so the bound isn't re-hit next tick
            self.rect.x += self.vel_x * 2;
        }

        // Enemies never fall: without ground one pixel below, stay put
        let probe = self.rect.translated(0, 1);
        if let Some(ground) = first_overlap(&probe, platforms) {
            self.rect.set_bottom(ground.rect.top());
        }
    }
}

/// Whether the actor is standing on something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Footing {
    Grounded,
    Airborne,
}

/// Whether the actor can currently be hurt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vulnerability {
    Normal,
    Invincible { ticks_remaining: u32 },
}

/// Explicit view of the player's implicit state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorState {
    pub footing: Footing,
    pub vulnerability: Vulnerability,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Velocity (pixels/tick); positions move by its truncated value
    pub vel: Vec2,
    pub on_ground: bool,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    /// Ticks of damage immunity left after a hit
    pub invincible_ticks: u32,
    pub facing_right: bool,
    /// Cosmetic walk cycle counter
    pub walk_frame: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            score: 0,
            invincible_ticks: 0,
            facing_right: true,
            walk_frame: 0,
        }
    }

    /// Apply horizontal intent and jump
    ///
    /// Right wins when both directions are held.
    pub fn consume_input(&mut self, input: &TickInput, tuning: &Tuning) {
        let moving = if input.move_right {
            self.vel.x = tuning.player_speed;
            self.facing_right = true;
            true
        } else if input.move_left {
            self.vel.x = -tuning.player_speed;
            self.facing_right = false;
            true
        } else {
            self.vel.x *= tuning.friction;
            if self.vel.x.abs() < tuning.stop_threshold {
                self.vel.x = 0.0;
            }
            false
        };

        if input.jump && self.on_ground {
            self.vel.y = tuning.jump_force;
            self.on_ground = false;
        }

        if moving && self.on_ground {
            self.walk_frame = self.walk_frame.wrapping_add(1);
        }
    }

    pub fn apply_gravity(&mut self, tuning: &Tuning) {
        self.vel.y = (self.vel.y + tuning.gravity).min(tuning.terminal_velocity);
    }

    /// Move one axis at a time and push out of every overlapping platform
    pub fn move_and_resolve(&mut self, platforms: &[Platform]) {
        // `as` truncates toward zero, same as the frame-based reference physics
        self.rect.x += self.vel.x as i32;
        for platform in platforms {
            if self.rect.overlaps(&platform.rect) {
                let hit = resolve_horizontal(self.rect, &platform.rect, self.vel.x);
                self.rect = hit.rect;
                self.vel.x = hit.vx;
            }
        }

        self.on_ground = false;
        self.rect.y += self.vel.y as i32;
        for platform in platforms {
            if self.rect.overlaps(&platform.rect) {
                let hit = resolve_vertical(self.rect, &platform.rect, self.vel.y);
                self.rect = hit.rect;
                self.vel.y = hit.vy;
                if hit.grounded {
                    self.on_ground = true;
                }
            }
        }
    }

    /// Lose `amount` health unless invincible. Returns true if damage landed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.invincible_ticks > 0 {
            return false;
        }
        self.health = (self.health - amount).clamp(0, self.max_health);
        self.invincible_ticks = INVINCIBLE_TICKS;
        true
    }

    pub fn kill(&mut self) {
        self.health = 0;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Full per-tick update for the player
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform], tuning: &Tuning) {
        self.consume_input(input, tuning);
        self.apply_gravity(tuning);
        self.move_and_resolve(platforms);

        if self.invincible_ticks > 0 {
            self.invincible_ticks -= 1;
        }

        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
        if self.rect.right() > SCREEN_W {
            self.rect.set_right(SCREEN_W);
        }
    }

    /// False during the "off" half of the invincibility blink
    pub fn is_visible(&self) -> bool {
        !(self.invincible_ticks > 0 && (self.invincible_ticks / BLINK_TICKS) % 2 == 0)
    }

    pub fn actor_state(&self) -> ActorState {
        ActorState {
            footing: if self.on_ground {
                Footing::Grounded
            } else {
                Footing::Airborne
            },
            vulnerability: if self.invincible_ticks > 0 {
                Vulnerability::Invincible {
                    ticks_remaining: self.invincible_ticks,
                }
            } else {
                Vulnerability::Normal
            },
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Base seed; each run derives its level seed from it
    pub seed: u64,
    /// Number of levels built by restarts
    pub runs: u32,
    /// Ticks spent in the Playing phase this run
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub tuning: Tuning,
    /// World entities; meaningful while Playing and right after a rebuild
    pub level: Level,
}

impl GameState {
    /// Create a new game sitting on the start screen
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            runs: 0,
            time_ticks: 0,
            phase: GamePhase::Start,
            tuning,
            level: build_level(seed),
        }
    }

    /// Seed used for the level of the current run
    pub fn level_seed(&self) -> u64 {
        self.seed.wrapping_add(self.runs as u64)
    }

    /// Throw the current world away, build a fresh one and start playing
    pub fn restart(&mut self) {
        self.runs = self.runs.wrapping_add(1);
        self.level = build_level(self.level_seed());
        self.time_ticks = 0;
        log::info!(
            "Run {} started (level seed {}, {} coins)",
            self.runs,
            self.level_seed(),
            self.level.total_coins
        );
        self.set_phase(GamePhase::Playing);
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {} -> {}", self.phase.as_str(), phase.as_str());
            self.phase = phase;
        }
    }

    /// Advance player, enemies and coins by one tick
    ///
    /// Does nothing outside the Playing phase.
    pub fn step_entities(&mut self, input: &TickInput) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let level = &mut self.level;
        level.player.update(input, &level.platforms, &self.tuning);
        for enemy in &mut level.enemies {
            enemy.advance_one_tick(&level.platforms);
        }
        for coin in &mut level.coins {
            coin.advance_one_tick();
        }
    }

    pub fn collected_coins(&self) -> usize {
        self.level.collected()
    }

    pub fn player(&self) -> &Player {
        &self.level.player
    }
}
