//! Collision detection and response for axis-aligned bodies
//!
//! Movement is resolved one axis at a time: move, then push the mover out of
//! each obstacle it now overlaps. Each obstacle is handled independently in
//! container order, so with overlapping obstacles a later one can override an
//! earlier one.

use super::rect::Rect;
use super::state::Platform;

/// Result of resolving horizontal penetration against one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalHit {
    /// Mover after snapping flush against the obstacle
    pub rect: Rect,
    /// Horizontal velocity after the hit (always zero)
    pub vx: f32,
}

/// Result of resolving vertical penetration against one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalHit {
    /// Mover after snapping flush against the obstacle
    pub rect: Rect,
    /// Vertical velocity after the hit
    pub vy: f32,
    /// True when the mover landed on top of the obstacle
    pub grounded: bool,
}

/// Check whether two rectangles overlap
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Snap the mover's leading horizontal edge against the obstacle
///
/// Moving right puts the mover's right edge on the obstacle's left edge;
/// moving left puts its left edge on the obstacle's right edge. With no
/// horizontal velocity the position is kept. Velocity is zeroed either way.
pub fn resolve_horizontal(mover: Rect, obstacle: &Rect, vx: f32) -> HorizontalHit {
    let mut rect = mover;
    if vx > 0.0 {
        rect.set_right(obstacle.left());
    } else if vx < 0.0 {
        rect.set_left(obstacle.right());
    }
    HorizontalHit { rect, vx: 0.0 }
}

/// Snap the mover's leading vertical edge against the obstacle
///
/// Falling lands on the obstacle's top and reports `grounded`; rising bumps
/// the obstacle's bottom. With no vertical velocity nothing changes.
pub fn resolve_vertical(mover: Rect, obstacle: &Rect, vy: f32) -> VerticalHit {
    let mut rect = mover;
    if vy > 0.0 {
        rect.set_bottom(obstacle.top());
        VerticalHit {
            rect,
            vy: 0.0,
            grounded: true,
        }
    } else if vy < 0.0 {
        rect.set_top(obstacle.bottom());
        VerticalHit {
            rect,
            vy: 0.0,
            grounded: false,
        }
    } else {
        VerticalHit {
            rect,
            vy,
            grounded: false,
        }
    }
}

/// First platform (in container order) overlapping `rect`
pub fn first_overlap<'a>(rect: &Rect, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms.iter().find(|p| p.rect.overlaps(rect))
}
