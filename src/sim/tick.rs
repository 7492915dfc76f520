//! Fixed-step simulation tick
//!
//! Core game loop step: handle phase inputs, advance the world, resolve
//! contacts and evaluate win/lose.

use serde::{Deserialize, Serialize};

use super::autopilot;
use super::state::{GamePhase, GameState};
use crate::consts::{FALL_MARGIN, SCREEN_H};

/// Input intent for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Walk left (held)
    pub move_left: bool,
    /// Walk right (held)
    pub move_right: bool,
    /// Jump (held; only takes effect on the ground)
    pub jump: bool,
    /// Start / restart (edge-triggered)
    pub confirm: bool,
    /// Quit (edge-triggered)
    pub quit: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Quit,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickControl {
    if input.quit {
        log::info!("Quit requested during {}", state.phase.as_str());
        return TickControl::Quit;
    }

    let input = if input.idle_mode {
        autopilot::drive(state, input)
    } else {
        input.clone()
    };

    // Confirm (re)builds the level; the new run is simulated this same tick
    if input.confirm && state.phase != GamePhase::Playing {
        state.restart();
    }

    if state.phase != GamePhase::Playing {
        return TickControl::Continue;
    }

    state.time_ticks += 1;
    state.step_entities(&input);
    resolve_contacts(state);

    TickControl::Continue
}

/// Coin pickups, enemy damage, falling, and the resulting phase change
fn resolve_contacts(state: &mut GameState) {
    let coin_value = state.tuning.coin_value;
    let contact_damage = state.tuning.contact_damage;
    let level = &mut state.level;
    let player = &mut level.player;

    let before = level.coins.len();
    level.coins.retain(|coin| !coin.rect.overlaps(&player.rect));
    let picked = (before - level.coins.len()) as u32;
    if picked > 0 {
        player.score = player.score.saturating_add(picked.saturating_mul(coin_value));
        log::debug!(
            "Picked up {} coin(s), score {}, {}/{} collected",
            picked,
            player.score,
            level.total_coins - level.coins.len(),
            level.total_coins
        );
    }
    let all_collected = level.coins.is_empty();

    let touching_enemy = level.enemies.iter().any(|e| e.rect.overlaps(&player.rect));
    if touching_enemy && player.take_damage(contact_damage) {
        log::debug!("Enemy contact, health {}/{}", player.health, player.max_health);
    }

    if player.rect.top() > SCREEN_H + FALL_MARGIN {
        log::debug!("Fell off screen at y={}", player.rect.top());
        player.kill();
    }
    let dead = player.is_dead();
    let score = player.score;

    if all_collected {
        state.set_phase(GamePhase::Win);
    }
    // Death in the same tick as the last coin still loses
    if dead {
        state.set_phase(GamePhase::GameOver);
    }

    match state.phase {
        GamePhase::Win => log::info!("All coins collected, score {}", score),
        GamePhase::GameOver => log::info!("Game over, score {}", score),
        _ => {}
    }
}
