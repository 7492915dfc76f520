//! Headless presentation
//!
//! The simulation never draws. Each frame is turned into a flat display list
//! of primitive shapes and text, and a [`RenderSink`] (window, terminal, test
//! recorder...) decides what to do with it.

pub mod hud;
pub mod scene;

pub use hud::HudModel;
pub use scene::{FrameView, build_frame};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const SKY: Color = Color::rgb(30, 144, 255);
    pub const SKY_TOP: Color = Color::rgb(20, 90, 180);
    pub const CLOUD: Color = Color::rgb(220, 235, 255);
    pub const GROUND: Color = Color::rgb(34, 139, 34);
    pub const LEDGE: Color = Color::rgb(80, 80, 80);
    pub const RED: Color = Color::rgb(220, 50, 47);
    pub const YELLOW: Color = Color::rgb(255, 215, 0);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const DARK: Color = Color::rgb(20, 20, 20);
    pub const GREY: Color = Color::rgb(160, 160, 160);
    pub const GREEN: Color = Color::rgb(0, 200, 0);
    pub const SKIN: Color = Color::rgb(255, 200, 150);
    pub const HEALTH_RED: Color = Color::rgb(200, 30, 30);
    pub const HEALTH_GREEN: Color = Color::rgb(30, 200, 30);
}

/// Horizontal anchoring of a text command's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One drawing primitive, in screen pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Color),
    /// Filled rectangle with optional rounded corners
    FillRect { rect: Rect, color: Color, radius: i32 },
    /// Rectangle outline
    StrokeRect {
        rect: Rect,
        color: Color,
        width: i32,
        radius: i32,
    },
    /// Filled ellipse inscribed in `rect`
    Ellipse { rect: Rect, color: Color },
    Circle { center: IVec2, radius: i32, color: Color },
    Line {
        from: IVec2,
        to: IVec2,
        color: Color,
        width: i32,
    },
    Polygon { points: Vec<IVec2>, color: Color },
    /// Text line; `pos.y` is the top, `pos.x` depends on `align`
    Text {
        text: String,
        pos: IVec2,
        size: u32,
        color: Color,
        align: TextAlign,
    },
}

/// A complete display list for one frame, in paint order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn this frame, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Consumer of finished frames
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Sink that keeps the most recent frame, for tests and tooling
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub last: Option<Frame>,
    pub presented: u64,
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &Frame) {
        self.last = Some(frame.clone());
        self.presented += 1;
    }
}
