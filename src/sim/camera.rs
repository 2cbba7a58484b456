//! Edge-scrolling camera
//!
//! The background is wider than the screen. Resting the pointer near either
//! screen edge scrolls toward that edge. The offset is the horizontal
//! displacement applied to world coordinates when drawing, so it lives in
//! `[-max_offset, 0]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_EDGE_MARGIN, CAMERA_SCROLL_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current horizontal offset (always within `[-max_offset, 0]`)
    pub offset_x: f32,
    /// Largest allowed scroll distance
    pub max_offset: f32,
    /// Visible width used to locate the right edge
    pub screen_width: f32,
}

impl Camera {
    pub fn new(max_offset: f32, screen_width: f32) -> Self {
        Self {
            offset_x: 0.0,
            max_offset: max_offset.max(0.0),
            screen_width,
        }
    }

    /// Scroll toward the edge the pointer is resting on
    pub fn follow_pointer(&mut self, pointer: Vec2, dt: f32) {
        let step = CAMERA_SCROLL_SPEED * dt;
        if pointer.x < CAMERA_EDGE_MARGIN {
            // Reveal more of the left side
            self.offset_x += step;
        } else if pointer.x > self.screen_width - CAMERA_EDGE_MARGIN {
            self.offset_x -= step;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        self.offset_x = self.offset_x.clamp(-self.max_offset, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scrolls_right_then_stops() {
        let mut camera = Camera::new(800.0, 800.0);
        camera.follow_pointer(Vec2::new(790.0, 300.0), 0.5);
        assert_eq!(camera.offset_x, -200.0);

        for _ in 0..20 {
            camera.follow_pointer(Vec2::new(799.0, 300.0), 0.5);
        }
        assert_eq!(camera.offset_x, -800.0);
    }

    #[test]
    fn test_centre_pointer_does_not_scroll() {
        let mut camera = Camera::new(800.0, 800.0);
        camera.follow_pointer(Vec2::new(400.0, 300.0), 1.0);
        assert_eq!(camera.offset_x, 0.0);
    }

    #[test]
    fn test_left_edge_cannot_pass_zero() {
        let mut camera = Camera::new(800.0, 800.0);
        camera.follow_pointer(Vec2::new(5.0, 300.0), 1.0);
        assert_eq!(camera.offset_x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_in_bounds(
            xs in proptest::collection::vec(-100.0f32..900.0, 0..200),
            dt in 0.0f32..0.2,
        ) {
            let mut camera = Camera::new(800.0, 800.0);
            for x in xs {
                camera.follow_pointer(Vec2::new(x, 300.0), dt);
                prop_assert!(camera.offset_x <= 0.0);
                prop_assert!(camera.offset_x >= -800.0);
            }
        }
    }
}
