//! HUD model: health bar, HP, score and coin counter

use glam::IVec2;

use super::{Color, DrawCommand, Frame, TextAlign};
use crate::consts::SCREEN_W;
use crate::sim::{Player, Rect};

/// Full width of the health bar fill (pixels)
pub const HEALTH_BAR_WIDTH: i32 = 200;
/// At or below this health the bar turns red
pub const LOW_HEALTH: i32 = 40;

/// Everything the HUD shows, derived from the player and coin counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudModel {
    /// Health fill width, scaled to `health / max_health`
    pub bar_width: i32,
    pub bar_color: Color,
    pub hp_text: String,
    pub score_text: String,
    pub coin_text: String,
}

impl HudModel {
    pub fn new(player: &Player, collected: usize, total: usize) -> Self {
        let max = player.max_health.max(1);
        let health = player.health.clamp(0, max);
        Self {
            bar_width: HEALTH_BAR_WIDTH * health / max,
            bar_color: if player.health > LOW_HEALTH {
                Color::HEALTH_GREEN
            } else {
                Color::HEALTH_RED
            },
            hp_text: format!("HP  {}/{}", player.health, player.max_health),
            score_text: format!("Score: {}", player.score),
            coin_text: format!("Coins: {}/{}", collected, total),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        frame.push(DrawCommand::FillRect {
            rect: Rect::new(10, 10, HEALTH_BAR_WIDTH + 4, 22),
            color: Color::DARK,
            radius: 5,
        });
        if self.bar_width > 0 {
            frame.push(DrawCommand::FillRect {
                rect: Rect::new(12, 12, self.bar_width, 18),
                color: self.bar_color,
                radius: 4,
            });
        }
        frame.push(DrawCommand::StrokeRect {
            rect: Rect::new(10, 10, HEALTH_BAR_WIDTH + 4, 22),
            color: Color::WHITE,
            width: 2,
            radius: 5,
        });
        frame.push(DrawCommand::Text {
            text: self.hp_text.clone(),
            pos: IVec2::new(220, 12),
            size: 28,
            color: Color::WHITE,
            align: TextAlign::Left,
        });
        frame.push(DrawCommand::Text {
            text: self.score_text.clone(),
            pos: IVec2::new(SCREEN_W - 12, 12),
            size: 28,
            color: Color::YELLOW,
            align: TextAlign::Right,
        });
        frame.push(DrawCommand::Text {
            text: self.coin_text.clone(),
            pos: IVec2::new(10, 40),
            size: 26,
            color: Color::YELLOW,
            align: TextAlign::Left,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_health() {
        let player = Player::new(0, 0);
        let hud = HudModel::new(&player, 0, 13);
        assert_eq!(hud.bar_width, 200);
        assert_eq!(hud.bar_color, Color::HEALTH_GREEN);
        assert_eq!(hud.hp_text, "HP  100/100");
        assert_eq!(hud.score_text, "Score: 0");
        assert_eq!(hud.coin_text, "Coins: 0/13");
    }

    #[test]
    fn test_low_health_turns_red() {
        let mut player = Player::new(0, 0);
        player.health = 40;
        player.score = 70;
        let hud = HudModel::new(&player, 7, 13);
        assert_eq!(hud.bar_width, 80);
        assert_eq!(hud.bar_color, Color::HEALTH_RED);
        assert_eq!(hud.score_text, "Score: 70");
        assert_eq!(hud.coin_text, "Coins: 7/13");
    }

    #[test]
    fn test_empty_bar_is_not_drawn() {
        let mut player = Player::new(0, 0);
        player.health = 0;
        let hud = HudModel::new(&player, 0, 13);
        assert_eq!(hud.bar_width, 0);
        let mut frame = Frame::default();
        hud.draw(&mut frame);
        let fills = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(fills, 1);
    }
}
