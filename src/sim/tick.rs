//! Simulation step
//!
//! Advances a run by one time delta given the input events collected since
//! the previous step. No frame pacing happens here; see [`super::clock`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{first_hit, keep_inside};
use super::state::{GameEvent, GameState, RunOutcome, Target};
use crate::consts::*;
use crate::{hit_points, screen_to_world};

/// Discrete input from the presentation layer (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed or player bailed out
    Quit,
    /// Pointer moved without clicking
    PointerMoved(Vec2),
    /// Primary click: one shot at this point
    Click(Vec2),
}

/// Advance the game state by `dt` seconds
pub fn step(state: &mut GameState, dt: f32, events: &[InputEvent]) {
    state.events.clear();

    // Nothing moves once the run is over
    if !state.running() {
        return;
    }

    state.time_ticks += 1;
    state.clock += dt;
    finish_reload(state);

    for event in events {
        match *event {
            InputEvent::Quit => {
                end_run(state, RunOutcome::Aborted);
                return;
            }
            InputEvent::PointerMoved(pos) => state.pointer = Some(pos),
            InputEvent::Click(pos) => {
                state.pointer = Some(pos);
                handle_shot(state, pos);
            }
        }
    }

    advance_camera(state, dt);

    if state.spawner.tick(dt) {
        state.stats.spawn_attempts += 1;
        if state.has_spawn_room() {
            spawn_target(state);
        } else {
            state.events.push(GameEvent::SpawnBlocked);
        }
    }

    advance_targets(state, dt);

    state.time_left -= dt;

    if let Some(outcome) = outcome(state) {
        end_run(state, outcome);
    }
}

/// Refill the magazine once the reload window has passed
fn finish_reload(state: &mut GameState) {
    if state.reloading && state.clock - state.last_shot_time >= RELOAD_DURATION {
        state.reloading = false;
        state.ammo = MAX_AMMO;
        state.events.push(GameEvent::Reloaded);
        log::debug!("Reloaded at {:.2}s", state.clock);
    }
}

/// Fire one shot at a screen-space point
///
/// Rejected without side effects while the magazine is empty and the
/// reload window is still running. Ignored once the run is over.
pub fn handle_shot(state: &mut GameState, screen_point: Vec2) {
    if !state.running() {
        return;
    }

    finish_reload(state);

    if state.ammo == 0 {
        state.stats.rejected_shots += 1;
        state.events.push(GameEvent::ShotRejected);
        return;
    }

    state.ammo -= 1;
    state.last_shot_time = state.clock;
    state.stats.shots += 1;
    if state.ammo == 0 {
        state.reloading = true;
        state.events.push(GameEvent::ReloadStarted);
    }

    let world_point = screen_to_world(screen_point, state.camera.offset_x);
    match first_hit(&state.targets, world_point) {
        Some(index) => {
            let target = state.targets.remove(index);
            let points = hit_points(target.scale);
            state.score += points;
            state.stats.hits += 1;
            state.events.push(GameEvent::Hit {
                id: target.id,
                points,
            });
            log::debug!("Hit target {} (scale {:.2}) for {}", target.id, target.scale, points);
        }
        None => {
            state.score = state.score.saturating_sub(MISS_PENALTY);
            state.stats.misses += 1;
            state.events.push(GameEvent::Miss {
                penalty: MISS_PENALTY,
            });
        }
    }
}

/// Spawn a target somewhere inside the world, below the HUD
///
/// Callers check the spawn budget first.
pub fn spawn_target(state: &mut GameState) {
    let max_x = state.world_width;
    let max_y = state.screen_height;
    let base_speed = state.level.target_speed;

    let rng = &mut state.rng;
    let scale = rng.random_range(TARGET_MIN_SCALE..=TARGET_MAX_SCALE);
    let size = Target::size_for_scale(scale);
    let x = random_between(rng, 0.0, max_x - size.x);
    let y = random_between(rng, HUD_HEIGHT, max_y - size.y);
    let moving = rng.random_bool(MOVING_CHANCE);
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

    let velocity = if moving {
        Target::speed_for_scale(base_speed, scale) * direction
    } else {
        0.0
    };

    let id = state.insert_target(Vec2::new(x, y), scale, velocity);
    state.stats.spawns += 1;
    state.events.push(GameEvent::Spawned { id });
    log::debug!(
        "Spawned target {} at ({:.0}, {:.0}) scale {:.2} velocity {:.1}",
        id,
        x,
        y,
        scale,
        velocity
    );
}

fn random_between(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Walk moving targets, bouncing them off the world edges
pub fn advance_targets(state: &mut GameState, dt: f32) {
    let world_width = state.world_width;
    for target in state.targets.iter_mut().filter(|t| t.is_moving()) {
        let check = keep_inside(target.pos.x + target.velocity * dt, target.size.x, world_width);
        target.pos.x = check.x;
        if check.bounced {
            target.velocity = -target.velocity;
        }
    }
}

/// Scroll the camera when the pointer rests near a screen edge
pub fn advance_camera(state: &mut GameState, dt: f32) {
    if let Some(pointer) = state.pointer {
        state.camera.follow_pointer(pointer, dt);
    }
}

/// Terminal condition for the current state, if any
///
/// Reaching the required score wins even on the step the clock runs out.
pub fn outcome(state: &GameState) -> Option<RunOutcome> {
    if let Some(outcome) = state.outcome {
        return Some(outcome);
    }
    if state
        .level
        .required_score
        .is_some_and(|required| state.score >= required)
    {
        return Some(RunOutcome::Victory);
    }
    if state.time_left <= 0.0 {
        return Some(RunOutcome::TimeExpired);
    }
    None
}

fn end_run(state: &mut GameState, outcome: RunOutcome) {
    state.outcome = Some(outcome);
    state.events.push(GameEvent::RunEnded(outcome));
    log::info!(
        "Level '{}' ended: {:?}, score {}, {} hits / {} shots",
        state.level.name,
        outcome,
        state.score,
        state.stats.hits,
        state.stats.shots
    );
}
