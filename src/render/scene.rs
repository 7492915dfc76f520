//! Frame building: background, world sprites, HUD and screen overlays
//!
//! Everything here reads the game state through a [`FrameView`] and appends
//! to a [`Frame`]; nothing touches the simulation.

use glam::IVec2;

use super::hud::HudModel;
use super::{Color, DrawCommand, Frame, TextAlign};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::sim::{Coin, Enemy, GamePhase, GameState, Platform, PlatformKind, Player, Rect};

/// Decorative clouds (x, y, w, h)
const CLOUDS: [(i32, i32, i32, i32); 4] = [
    (80, 60, 120, 40),
    (280, 40, 90, 30),
    (500, 80, 110, 35),
    (680, 50, 100, 32),
];

/// Read-only view of everything a frame needs
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub platforms: &'a [Platform],
    pub coins: &'a [Coin],
    pub enemies: &'a [Enemy],
    pub collected: usize,
    pub total_coins: usize,
}

impl<'a> From<&'a GameState> for FrameView<'a> {
    fn from(state: &'a GameState) -> Self {
        let level = &state.level;
        Self {
            phase: state.phase,
            player: &level.player,
            platforms: &level.platforms,
            coins: &level.coins,
            enemies: &level.enemies,
            collected: level.collected(),
            total_coins: level.total_coins,
        }
    }
}

impl FrameView<'_> {
    /// Build the display list for this view
    pub fn to_frame(&self) -> Frame {
        let mut frame = Frame::default();
        draw_background(&mut frame);

        if self.phase == GamePhase::Start {
            draw_start_screen(&mut frame);
            return frame;
        }

        for platform in self.platforms {
            draw_platform(&mut frame, platform);
        }
        for coin in self.coins {
            draw_coin(&mut frame, coin);
        }
        for enemy in self.enemies {
            draw_enemy(&mut frame, enemy);
        }
        if self.player.is_visible() {
            draw_player(&mut frame, self.player);
        }
        HudModel::new(self.player, self.collected, self.total_coins).draw(&mut frame);

        match self.phase {
            GamePhase::GameOver => draw_result_screen(
                &mut frame,
                160,
                ("GAME OVER", 90, Color::RED),
                format!("Final Score: {}", self.player.score),
                "Press ENTER to Restart   |   ESC to Quit",
            ),
            GamePhase::Win => draw_result_screen(
                &mut frame,
                150,
                ("YOU WIN!", 80, Color::GREEN),
                format!("Score: {}", self.player.score),
                "Press ENTER to Play Again   |   ESC to Quit",
            ),
            _ => {}
        }
        frame
    }
}

/// Build the display list for the current game state
pub fn build_frame(state: &GameState) -> Frame {
    FrameView::from(state).to_frame()
}

/// Maps sprite-local coordinates to screen space, mirroring if needed
struct Sprite {
    origin: IVec2,
    width: i32,
    flip: bool,
}

impl Sprite {
    fn new(rect: &Rect, flip: bool) -> Self {
        Self {
            origin: IVec2::new(rect.x, rect.y),
            width: rect.w,
            flip,
        }
    }

    fn rect(&self, x: i32, y: i32, w: i32, h: i32) -> Rect {
        let x = if self.flip { self.width - x - w } else { x };
        Rect::new(self.origin.x + x, self.origin.y + y, w, h)
    }

    fn point(&self, x: i32, y: i32) -> IVec2 {
        let x = if self.flip { self.width - x } else { x };
        self.origin + IVec2::new(x, y)
    }

    fn fill(&self, frame: &mut Frame, (x, y, w, h): (i32, i32, i32, i32), color: Color, radius: i32) {
        frame.push(DrawCommand::FillRect {
            rect: self.rect(x, y, w, h),
            color,
            radius,
        });
    }

    fn ellipse(&self, frame: &mut Frame, (x, y, w, h): (i32, i32, i32, i32), color: Color) {
        frame.push(DrawCommand::Ellipse {
            rect: self.rect(x, y, w, h),
            color,
        });
    }

    fn circle(&self, frame: &mut Frame, (x, y): (i32, i32), radius: i32, color: Color) {
        frame.push(DrawCommand::Circle {
            center: self.point(x, y),
            radius,
            color,
        });
    }

    fn polygon(&self, frame: &mut Frame, points: &[(i32, i32)], color: Color) {
        frame.push(DrawCommand::Polygon {
            points: points.iter().map(|&(x, y)| self.point(x, y)).collect(),
            color,
        });
    }
}

fn draw_background(frame: &mut Frame) {
    frame.push(DrawCommand::Clear(Color::SKY));
    frame.push(DrawCommand::FillRect {
        rect: Rect::new(0, 0, SCREEN_W, 150),
        color: Color::SKY_TOP,
        radius: 0,
    });
    for (x, y, w, h) in CLOUDS {
        frame.push(DrawCommand::Ellipse {
            rect: Rect::new(x, y, w, h),
            color: Color::CLOUD,
        });
        frame.push(DrawCommand::Ellipse {
            rect: Rect::new(x + 10, y - 10, w - 20, h + 5),
            color: Color::WHITE,
        });
    }
}

fn draw_platform(frame: &mut Frame, platform: &Platform) {
    let rect = platform.rect;
    frame.push(DrawCommand::FillRect {
        rect,
        color: match platform.kind {
            PlatformKind::Ground => Color::GROUND,
            PlatformKind::Ledge => Color::LEDGE,
        },
        radius: 0,
    });
    // Highlight along the top edge
    frame.push(DrawCommand::Line {
        from: IVec2::new(rect.left(), rect.top()),
        to: IVec2::new(rect.right(), rect.top()),
        color: Color::WHITE,
        width: 2,
    });
}

fn draw_coin(frame: &mut Frame, coin: &Coin) {
    let center = coin.rect.center();
    frame.push(DrawCommand::Circle {
        center,
        radius: 9,
        color: Color::YELLOW,
    });
    frame.push(DrawCommand::Circle {
        center,
        radius: 6,
        color: Color::ORANGE,
    });
}

fn draw_enemy(frame: &mut Frame, enemy: &Enemy) {
    let s = Sprite::new(&enemy.rect, false);
    s.fill(frame, (6, 16, 24, 20), Color::RED, 4);
    s.ellipse(frame, (4, 2, 28, 22), Color::RED);
    s.circle(frame, (12, 10), 5, Color::WHITE);
    s.circle(frame, (24, 10), 5, Color::WHITE);
    s.circle(frame, (13, 10), 3, Color::BLACK);
    s.circle(frame, (25, 10), 3, Color::BLACK);
    // Horns
    s.polygon(frame, &[(8, 4), (4, -4), (12, 2)], Color::DARK);
    s.polygon(frame, &[(28, 4), (32, -4), (24, 2)], Color::DARK);
    s.fill(frame, (8, 36, 8, 6), Color::DARK, 2);
    s.fill(frame, (20, 36, 8, 6), Color::DARK, 2);
}

fn draw_player(frame: &mut Frame, player: &Player) {
    let s = Sprite::new(&player.rect, !player.facing_right);
    // Cape / body
    s.fill(frame, (4, 20, 24, 22), Color::PURPLE, 4);
    s.ellipse(frame, (6, 2, 20, 20), Color::SKIN);
    s.ellipse(frame, (6, 2, 20, 10), Color::DARK);
    s.circle(frame, (12, 12), 3, Color::WHITE);
    s.circle(frame, (20, 12), 3, Color::WHITE);
    s.circle(frame, (13, 12), 2, Color::DARK);
    s.circle(frame, (21, 12), 2, Color::DARK);
    s.fill(frame, (6, 42, 8, 6), Color::DARK, 2);
    s.fill(frame, (18, 42, 8, 6), Color::DARK, 2);
    // Sword on the facing side
    s.fill(frame, (27, 18, 4, 18), Color::GREY, 1);
    s.fill(frame, (24, 22, 8, 3), Color::YELLOW, 0);
}

fn centered_text(frame: &mut Frame, text: impl Into<String>, y: i32, size: u32, color: Color) {
    frame.push(DrawCommand::Text {
        text: text.into(),
        pos: IVec2::new(SCREEN_W / 2, y),
        size,
        color,
        align: TextAlign::Center,
    });
}

fn draw_start_screen(frame: &mut Frame) {
    frame.push(DrawCommand::Clear(Color::DARK));
    centered_text(frame, "PIXEL QUEST", 180, 72, Color::YELLOW);
    centered_text(
        frame,
        "Press ENTER to Start   |   ESC to Quit",
        280,
        36,
        Color::WHITE,
    );
    let tips = [
        "Arrow Keys / A D  →  Move",
        "SPACE / UP        →  Jump",
        "Collect coins, avoid enemies!",
    ];
    for (i, tip) in tips.iter().enumerate() {
        centered_text(frame, *tip, 340 + i as i32 * 32, 28, Color::GREY);
    }
}

fn draw_result_screen(
    frame: &mut Frame,
    dim_alpha: u8,
    (title, title_size, title_color): (&str, u32, Color),
    score_line: String,
    prompt: &str,
) {
    frame.push(DrawCommand::FillRect {
        rect: Rect::new(0, 0, SCREEN_W, SCREEN_H),
        color: Color::rgba(0, 0, 0, dim_alpha),
        radius: 0,
    });
    centered_text(frame, title, 200, title_size, title_color);
    centered_text(frame, score_line, 310, 42, Color::YELLOW);
    centered_text(frame, prompt, 390, 32, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FrameRecorder, RenderSink};

    fn has_text(frame: &Frame, needle: &str) -> bool {
        frame.texts().any(|t| t == needle)
    }

    fn player_body_count(frame: &Frame) -> usize {
        frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == Color::PURPLE))
            .count()
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(5);
        state.restart();
        state
    }

    #[test]
    fn test_start_screen_has_no_world() {
        let state = GameState::new(5);
        let frame = build_frame(&state);
        assert!(matches!(frame.commands[0], DrawCommand::Clear(Color::SKY)));
        assert!(has_text(&frame, "PIXEL QUEST"));
        assert!(!frame.texts().any(|t| t.starts_with("Score")));
        assert_eq!(player_body_count(&frame), 0);
    }

    #[test]
    fn test_playing_frame_draws_world_and_hud() {
        let state = playing_state();
        let frame = build_frame(&state);
        assert!(has_text(&frame, "HP  100/100"));
        assert!(has_text(&frame, "Score: 0"));
        assert!(has_text(&frame, "Coins: 0/13"));
        assert_eq!(player_body_count(&frame), 1);

        let coin_rings = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == Color::ORANGE))
            .count();
        assert_eq!(coin_rings, 13);

        let ground = frame.commands.iter().any(|c| {
            matches!(c, DrawCommand::FillRect { color, rect, .. }
                if *color == Color::GROUND && *rect == Rect::new(0, 560, 800, 40))
        });
        assert!(ground);
    }

    #[test]
    fn test_blinking_player_is_skipped() {
        let mut state = playing_state();
        state.level.player.invincible_ticks = 90;
        assert_eq!(player_body_count(&build_frame(&state)), 0);
        state.level.player.invincible_ticks = 89;
        assert_eq!(player_body_count(&build_frame(&state)), 1);
    }

    #[test]
    fn test_player_sprite_mirrors() {
        let sword_x = |state: &GameState| {
            build_frame(state)
                .commands
                .iter()
                .find_map(|c| match c {
                    DrawCommand::FillRect { rect, color, .. } if *color == Color::GREY => {
                        Some(rect.x - state.level.player.rect.x)
                    }
                    _ => None,
                })
                .unwrap()
        };
        let mut state = playing_state();
        assert_eq!(sword_x(&state), 27);
        state.level.player.facing_right = false;
        assert_eq!(sword_x(&state), 1);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = playing_state();
        state.level.player.score = 40;
        state.phase = GamePhase::GameOver;
        let frame = build_frame(&state);
        assert!(has_text(&frame, "GAME OVER"));
        assert!(has_text(&frame, "Final Score: 40"));
        assert!(has_text(&frame, "Score: 40"));
    }

    #[test]
    fn test_win_overlay() {
        let mut state = playing_state();
        state.level.player.score = 130;
        state.level.coins.clear();
        state.phase = GamePhase::Win;
        let frame = build_frame(&state);
        assert!(has_text(&frame, "YOU WIN!"));
        assert!(has_text(&frame, "Coins: 13/13"));
        let dim = frame.commands.iter().any(|c| {
            matches!(c, DrawCommand::FillRect { color, .. } if *color == Color::rgba(0, 0, 0, 150))
        });
        assert!(dim);
    }

    #[test]
    fn test_rendering_does_not_mutate_state() {
        let state = playing_state();
        let before = state.level.clone();
        let mut sink = FrameRecorder::default();
        sink.present(&build_frame(&state));
        assert_eq!(state.level, before);
        assert_eq!(sink.presented, 1);
        assert!(!sink.last.unwrap().is_empty());
    }
}
