//! Read-only view of a run for the presentation layer

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::GameState;
use crate::consts::{MAX_AMMO, RELOAD_DURATION};

/// A target as it should be drawn this frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    /// Screen-space rectangle (camera offset applied)
    pub rect: Rect,
    /// Sprite scale factor
    pub scale: f32,
    /// Mirror the sprite when walking left
    pub facing_left: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub level_name: String,
    /// Background scroll offset
    pub camera_offset_x: f32,
    /// Targets overlapping the screen, in draw order
    pub targets: Vec<TargetView>,
    pub score: u64,
    /// Seconds left, never negative
    pub time_left: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    /// Reload completion in `[0, 1]` (1 when not reloading)
    pub reload_progress: f32,
    pub game_over: bool,
    pub victory: bool,
}

/// Build the frame snapshot for the current state
pub fn snapshot(state: &GameState) -> Frame {
    let offset = state.camera.offset_x;
    let screen_width = state.camera.screen_width;

    let targets = state
        .targets
        .iter()
        .map(|target| (target, target.rect().translated_x(offset)))
        .filter(|(_, rect)| rect.max().x >= 0.0 && rect.min().x <= screen_width)
        .map(|(target, rect)| TargetView {
            id: target.id,
            rect,
            scale: target.scale,
            facing_left: target.velocity < 0.0,
        })
        .collect();

    let reload_progress = if state.reloading {
        ((state.clock - state.last_shot_time) / RELOAD_DURATION).clamp(0.0, 1.0)
    } else {
        1.0
    };

    Frame {
        level_name: state.level.name.clone(),
        camera_offset_x: offset,
        targets,
        score: state.score,
        time_left: state.time_left.max(0.0),
        ammo: state.ammo,
        max_ammo: MAX_AMMO,
        reloading: state.reloading,
        reload_progress,
        game_over: !state.running(),
        victory: state.victory(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConfig;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(
            LevelConfig {
                name: "Snapshot".into(),
                game_time: 10.0,
                spawn_interval: 1000.0,
                max_targets: 4,
                target_speed: 50.0,
                required_score: None,
            },
            3,
        )
    }

    #[test]
    fn test_offscreen_targets_culled() {
        let mut state = state();
        state.insert_target(Vec2::new(100.0, 200.0), 1.0, -20.0);
        state.insert_target(Vec2::new(1400.0, 200.0), 1.0, 0.0);

        let frame = snapshot(&state);
        assert_eq!(frame.targets.len(), 1);
        assert!(frame.targets[0].facing_left);

        state.camera.offset_x = -800.0;
        let frame = snapshot(&state);
        assert_eq!(frame.targets.len(), 1);
        assert_eq!(frame.targets[0].rect.pos, Vec2::new(600.0, 200.0));
    }

    #[test]
    fn test_hud_values() {
        let mut state = state();
        state.time_left = -0.01;
        state.ammo = 0;
        state.reloading = true;
        state.clock = 0.75;
        state.last_shot_time = 0.0;

        let frame = snapshot(&state);
        assert_eq!(frame.time_left, 0.0);
        assert_eq!(frame.max_ammo, MAX_AMMO);
        assert!((frame.reload_progress - 0.5).abs() < 1e-6);
        assert!(!frame.game_over);
    }
}
