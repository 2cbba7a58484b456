//! Hit testing and playfield bounds
//!
//! Everything here is axis-aligned: targets are rectangles, shots are points.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Target;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point-in-rectangle test, edges inclusive
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Shift horizontally (camera offset applied to world rects)
    pub fn translated_x(&self, dx: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x + dx, self.pos.y),
            size: self.size,
        }
    }
}

/// Index of the first target containing `world_point`
///
/// Targets are tested in slice order, which the simulation keeps as spawn
/// order, so the oldest overlapping target takes the shot.
pub fn first_hit(targets: &[Target], world_point: Vec2) -> Option<usize> {
    targets
        .iter()
        .position(|target| target.rect().contains_point(world_point))
}

/// Result of keeping a span inside `[0, limit]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsCheck {
    /// Corrected left edge
    pub x: f32,
    /// Whether the span touched a wall and must reverse
    pub bounced: bool,
}

/// Clamp a horizontal span of width `width` at `x` into `[0, limit]`
pub fn keep_inside(x: f32, width: f32, limit: f32) -> BoundsCheck {
    let max_x = (limit - width).max(0.0);
    if x < 0.0 {
        BoundsCheck { x: 0.0, bounced: true }
    } else if x > max_x {
        BoundsCheck {
            x: max_x,
            bounced: true,
        }
    } else {
        BoundsCheck { x, bounced: false }
    }
}
