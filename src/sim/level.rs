//! Level assembly
//!
//! One hand-placed layout: a ground strip, ten ledges, thirteen coins and
//! five patrolling enemies. The only randomness is the per-coin bob stagger,
//! drawn from an explicitly seeded PCG so a seed always rebuilds the same level.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Coin, Enemy, Platform, PlatformKind, Player};
use crate::consts::COIN_BOB_STAGGER;
use crate::error::LevelError;

/// Enemy placement: top-left position and patrol bounds
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawn {
    pub x: i32,
    pub y: i32,
    pub patrol_min: i32,
    pub patrol_max: i32,
}

/// Static description of a level
#[derive(Debug, Clone, Copy)]
pub struct LevelLayout {
    /// (x, y, w, h)
    pub ground: (i32, i32, i32, i32),
    /// (x, y, w, h)
    pub ledges: &'static [(i32, i32, i32, i32)],
    /// Coin centers
    pub coins: &'static [(i32, i32)],
    pub enemies: &'static [EnemySpawn],
    /// Player top-left spawn
    pub spawn: (i32, i32),
}

const fn spawn(x: i32, y: i32, patrol_min: i32, patrol_max: i32) -> EnemySpawn {
    EnemySpawn {
        x,
        y,
        patrol_min,
        patrol_max,
    }
}

/// The one built-in level
pub const DEFAULT_LAYOUT: LevelLayout = LevelLayout {
    ground: (0, 560, 800, 40),
    ledges: &[
        (100, 460, 140, 18),
        (280, 380, 120, 18),
        (430, 460, 110, 18),
        (570, 350, 130, 18),
        (680, 430, 100, 18),
        (200, 280, 100, 18),
        (350, 210, 120, 18),
        (520, 260, 90, 18),
        (620, 170, 110, 18),
        (0, 300, 80, 18),
    ],
    // Placed just above platforms
    coins: &[
        (170, 435),
        (310, 355),
        (490, 435),
        (620, 320),
        (740, 405),
        (250, 255),
        (410, 185),
        (570, 235),
        (670, 145),
        (40, 275),
        (400, 535),
        (600, 535),
        (200, 535),
    ],
    enemies: &[
        spawn(110, 518, 50, 260),  // ground, left section
        spawn(400, 518, 300, 700), // ground, right section
        spawn(283, 338, 280, 400), // ledge at (280, 380)
        spawn(571, 308, 570, 700), // ledge at (570, 350)
        spawn(203, 238, 200, 300), // ledge at (200, 280)
    ],
    spawn: (60, 490),
};

/// Every entity of one run, built together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    /// Coin count at build time
    pub total_coins: usize,
}

impl Level {
    /// Build a level from a layout, validating every entity
    pub fn from_layout(layout: &LevelLayout, seed: u64) -> Result<Self, LevelError> {
        let mut rng = Pcg32::seed_from_u64(seed);

        let (gx, gy, gw, gh) = layout.ground;
        let mut platforms = Vec::with_capacity(layout.ledges.len() + 1);
        platforms.push(Platform::new(Rect::try_new(gx, gy, gw, gh)?, PlatformKind::Ground));
        for &(x, y, w, h) in layout.ledges {
            platforms.push(Platform::new(Rect::try_new(x, y, w, h)?, PlatformKind::Ledge));
        }

        let coins = layout
            .coins
            .iter()
            .map(|&(cx, cy)| Coin::new(IVec2::new(cx, cy), rng.random_range(0..=COIN_BOB_STAGGER)))
            .collect::<Result<Vec<_>, _>>()?;

        let enemies = layout
            .enemies
            .iter()
            .map(|e| Enemy::new(e.x, e.y, e.patrol_min, e.patrol_max))
            .collect::<Result<Vec<_>, _>>()?;

        let (px, py) = layout.spawn;
        let total_coins = coins.len();

        Ok(Self {
            player: Player::new(px, py),
            platforms,
            coins,
            enemies,
            total_coins,
        })
    }

    /// Coins picked up so far
    pub fn collected(&self) -> usize {
        self.total_coins - self.coins.len()
    }
}

/// Build a fresh copy of the built-in level
pub fn build_level(seed: u64) -> Level {
    let level = Level::from_layout(&DEFAULT_LAYOUT, seed)
        .expect("built-in level layout has valid sizes and patrol bounds");
    log::debug!(
        "Built level: {} platforms, {} coins, {} enemies",
        level.platforms.len(),
        level.coins.len(),
        level.enemies.len()
    );
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_counts() {
        let level = build_level(1);
        assert_eq!(level.platforms.len(), 11);
        assert_eq!(level.platforms[0].kind, PlatformKind::Ground);
        assert_eq!(level.coins.len(), 13);
        assert_eq!(level.total_coins, 13);
        assert_eq!(level.enemies.len(), 5);
        assert_eq!(level.collected(), 0);
        assert_eq!(level.player.rect, Rect::new(60, 490, 32, 48));
        assert_eq!(level.player.health, 100);
        assert_eq!(level.player.score, 0);
    }

    #[test]
    fn test_same_seed_same_level() {
        assert_eq!(build_level(42), build_level(42));
    }

    #[test]
    fn test_bob_stagger_varies_with_seed() {
        let phases = |seed| {
            build_level(seed)
                .coins
                .iter()
                .map(|c| c.bob_phase)
                .collect::<Vec<_>>()
        };
        let a = phases(1);
        assert!(a.iter().all(|&p| p <= COIN_BOB_STAGGER));
        assert!((2..20).any(|seed| phases(seed) != a));
    }

    #[test]
    fn test_enemies_start_inside_patrol() {
        for enemy in build_level(3).enemies {
            assert!(enemy.patrol_min < enemy.patrol_max);
            let cx = enemy.rect.center_x();
            assert!(cx >= enemy.patrol_min && cx <= enemy.patrol_max);
        }
    }

    #[test]
    fn test_invalid_layout_fails_fast() {
        let layout = LevelLayout {
            enemies: &[EnemySpawn {
                x: 0,
                y: 0,
                patrol_min: 300,
                patrol_max: 200,
            }],
            ..DEFAULT_LAYOUT
        };
        assert_eq!(
            Level::from_layout(&layout, 0),
            Err(LevelError::InvalidPatrol { min: 300, max: 200 })
        );

        let layout = LevelLayout {
            ground: (0, 560, 800, 0),
            ..DEFAULT_LAYOUT
        };
        assert!(matches!(
            Level::from_layout(&layout, 0),
            Err(LevelError::InvalidSize { .. })
        ));
    }
}
