//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (targets kept in spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod frame;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use camera::Camera;
pub use clock::FrameClock;
pub use collision::{Rect, first_hit};
pub use frame::{Frame, TargetView, snapshot};
pub use spawner::SpawnTimer;
pub use state::{GameEvent, GameState, RunOutcome, RunStats, Target};
pub use tick::{
    InputEvent, advance_camera, advance_targets, handle_shot, outcome, spawn_target, step,
};
