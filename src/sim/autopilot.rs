//! Idle/demo mode autopilot
//!
//! Replaces the movement intent with a simple coin-chasing policy. It reads
//! the world and never mutates it, so a run in idle mode stays deterministic.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Horizontal distance (pixels) considered "lined up" with a target
const ALIGN_TOLERANCE: i32 = 8;
/// Jump when the target sits this far above the player's feet
const JUMP_HEIGHT_TRIGGER: i32 = 30;
/// Jump over enemies closer than this ahead of the player
const ENEMY_LOOKAHEAD: i32 = 70;

/// Build the input the autopilot would press this tick
///
/// Quit and idle flags pass through; everything else is decided here.
pub fn drive(state: &GameState, input: &TickInput) -> TickInput {
    let mut out = TickInput {
        quit: input.quit,
        idle_mode: input.idle_mode,
        ..Default::default()
    };

    if state.phase != GamePhase::Playing {
        out.confirm = true;
        return out;
    }

    let level = &state.level;
    let player = &level.player;
    let feet = player.rect.bottom();
    let pc = player.rect.center();

    // Nearest coin by straight-line distance
    let target = level
        .coins
        .iter()
        .min_by_key(|c| (c.rect.center() - pc).length_squared());

    let Some(coin) = target else {
        return out;
    };

    let dx = coin.rect.center_x() - pc.x;
    let dir = if dx > ALIGN_TOLERANCE {
        out.move_right = true;
        1
    } else if dx < -ALIGN_TOLERANCE {
        out.move_left = true;
        -1
    } else {
        0
    };

    let coin_above = coin.rect.center_y() < feet - JUMP_HEIGHT_TRIGGER;
    // A held direction with no horizontal speed means a wall stopped us
    let blocked = dir != 0 && player.vel.x == 0.0 && player.on_ground;
    let enemy_ahead = dir != 0
        && level.enemies.iter().any(|e| {
            let ex = e.rect.center_x() - pc.x;
            ex.signum() == dir
                && ex.abs() < ENEMY_LOOKAHEAD
                && (e.rect.bottom() - feet).abs() < player.rect.h / 2
        });

    out.jump = coin_above || blocked || enemy_ahead;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    use crate::sim::state::{Coin, Enemy};
    use crate::sim::tick::{TickControl, tick};

    fn idle() -> TickInput {
        TickInput {
            idle_mode: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_confirms_outside_playing() {
        let state = GameState::new(1);
        let out = drive(&state, &idle());
        assert!(out.confirm);
        assert!(!out.move_left && !out.move_right && !out.jump);
    }

    #[test]
    fn test_heads_toward_nearest_coin() {
        let mut state = GameState::new(1);
        state.restart();
        // Spawn is at x=60; the nearest coins are to the right
        let out = drive(&state, &idle());
        assert!(out.move_right);
        assert!(!out.move_left);
        assert!(!out.confirm);
    }

    #[test]
    fn test_jumps_over_enemy_ahead() {
        let mut state = GameState::new(1);
        state.restart();
        let level = &mut state.level;
        level.player.rect.y = 512;
        level.player.on_ground = false;
        // Coin level with the feet, so only the enemy can trigger a jump
        level.coins = vec![Coin::new(IVec2::new(400, 550), 0).unwrap()];
        level.enemies = vec![Enemy::new(110, 518, 50, 260).unwrap()];

        let out = drive(&state, &idle());
        assert!(out.move_right);
        assert!(out.jump);

        state.level.enemies.clear();
        let out = drive(&state, &idle());
        assert!(out.move_right);
        assert!(!out.jump);
    }

    #[test]
    fn test_passes_quit_through() {
        let state = GameState::new(1);
        let input = TickInput {
            quit: true,
            idle_mode: true,
            ..Default::default()
        };
        assert!(drive(&state, &input).quit);
    }

    #[test]
    fn test_idle_run_is_deterministic() {
        let run = |seed| {
            let mut state = GameState::new(seed);
            for _ in 0..1200 {
                assert_eq!(tick(&mut state, &idle()), TickControl::Continue);
            }
            state
        };
        let a = run(11);
        let b = run(11);
        assert_eq!(a.level, b.level);
        assert_eq!(a.runs, b.runs);
        assert!(a.runs >= 1);
    }
}
