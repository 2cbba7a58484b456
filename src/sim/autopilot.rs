//! Idle/demo mode
//!
//! Plays a run through ordinary input events: scrolls toward the oldest
//! target and clicks its centre every few ticks.

use glam::Vec2;

use super::state::GameState;
use super::tick::InputEvent;
use crate::consts::AUTOPILOT_FIRE_TICKS;
use crate::world_to_screen;

/// Inputs the autopilot would send before the next step
pub fn autopilot(state: &GameState) -> Vec<InputEvent> {
    if !state.running() || state.reloading {
        return Vec::new();
    }
    if state.time_ticks % AUTOPILOT_FIRE_TICKS != 0 {
        return Vec::new();
    }

    let Some(target) = state.targets.first() else {
        return Vec::new();
    };

    let screen_width = state.camera.screen_width;
    let aim = world_to_screen(target.rect().center(), state.camera.offset_x);

    if aim.x < 0.0 {
        // Rest on the left edge until it scrolls into view
        vec![InputEvent::PointerMoved(Vec2::new(1.0, aim.y))]
    } else if aim.x > screen_width {
        vec![InputEvent::PointerMoved(Vec2::new(screen_width - 1.0, aim.y))]
    } else {
        vec![InputEvent::Click(aim)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConfig;
    use crate::sim::tick::step;

    fn state() -> GameState {
        GameState::new(
            LevelConfig {
                name: "Demo".into(),
                game_time: 30.0,
                spawn_interval: 400.0,
                max_targets: 3,
                target_speed: 60.0,
                required_score: None,
            },
            42,
        )
    }

    #[test]
    fn test_clicks_visible_target() {
        let mut state = state();
        state.insert_target(Vec2::new(200.0, 200.0), 1.0, 0.0);
        assert_eq!(
            autopilot(&state),
            vec![InputEvent::Click(Vec2::new(250.0, 250.0))]
        );
    }

    #[test]
    fn test_scrolls_toward_offscreen_target() {
        let mut state = state();
        state.insert_target(Vec2::new(1400.0, 200.0), 1.0, 0.0);
        assert!(matches!(
            autopilot(&state)[..],
            [InputEvent::PointerMoved(p)] if p.x > 750.0
        ));
    }

    #[test]
    fn test_idle_between_shots() {
        let mut state = state();
        state.insert_target(Vec2::new(200.0, 200.0), 1.0, 0.0);
        state.time_ticks = 1;
        assert!(autopilot(&state).is_empty());
    }

    #[test]
    fn test_demo_run_scores() {
        let mut state = state();
        while state.running() {
            let events = autopilot(&state);
            step(&mut state, crate::consts::SIM_DT, &events);
        }
        assert!(state.stats.hits > 0);
        assert!(state.score > 0);
    }
}
