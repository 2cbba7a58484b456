//! Campus Frenzy - A 2D arcade shooting gallery
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, shots, camera, run state)
//! - `config`: Per-level configuration loaded from JSON
//! - `settings`: Global settings document
//! - `highscores`: Persisted top-10 scoreboard
//! - `menu`: Main menu / level select state machine

pub mod config;
pub mod error;
pub mod highscores;
pub mod menu;
pub mod settings;
pub mod sim;

pub use config::{LevelConfig, LevelsFile};
pub use error::ConfigError;
pub use highscores::Scoreboard;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Visible screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Background (world) width; the camera scrolls across the difference
    pub const WORLD_WIDTH: f32 = 1600.0;
    /// Targets never spawn inside the HUD band at the top of the screen
    pub const HUD_HEIGHT: f32 = 130.0;

    /// Pointer distance from a screen edge that starts scrolling
    pub const CAMERA_EDGE_MARGIN: f32 = 50.0;
    /// Camera scroll rate (pixels/second)
    pub const CAMERA_SCROLL_SPEED: f32 = 400.0;

    /// Magazine size
    pub const MAX_AMMO: u32 = 6;
    /// Reload window after the magazine empties (seconds since last shot)
    pub const RELOAD_DURATION: f32 = 1.5;

    /// Base sprite size at scale 1.0
    pub const TARGET_BASE_SIZE: f32 = 100.0;
    /// Floor applied to each axis of a scaled target
    pub const MIN_TARGET_SIZE: f32 = 40.0;
    /// Random scale range for spawned targets
    pub const TARGET_MIN_SCALE: f32 = 0.4;
    pub const TARGET_MAX_SCALE: f32 = 1.0;
    /// Chance a freshly spawned target walks instead of standing still
    pub const MOVING_CHANCE: f64 = 0.7;

    /// Base points for a hit (plus up to 10 more for small targets)
    pub const HIT_BASE_POINTS: u64 = 10;
    /// Points lost on a miss (score floors at zero)
    pub const MISS_PENALTY: u64 = 5;

    /// Autopilot fires once every this many ticks
    pub const AUTOPILOT_FIRE_TICKS: u64 = 45;
}

/// Maximum camera displacement for a world of the given width
#[inline]
pub fn max_camera_offset(world_width: f32, screen_width: f32) -> f32 {
    (world_width - screen_width).max(0.0)
}

/// Map a screen-space point into world space for a camera offset
#[inline]
pub fn screen_to_world(point: Vec2, camera_offset_x: f32) -> Vec2 {
    Vec2::new(point.x - camera_offset_x, point.y)
}

/// Map a world-space point onto the screen for a camera offset
#[inline]
pub fn world_to_screen(point: Vec2, camera_offset_x: f32) -> Vec2 {
    Vec2::new(point.x + camera_offset_x, point.y)
}

/// Points awarded for hitting a target of the given scale
///
/// Smaller (farther) targets are worth more: `10 + floor(10 * (1 - scale))`.
#[inline]
pub fn hit_points(scale: f32) -> u64 {
    // Decimal scales like 0.6 are stored slightly high in f32
    let bonus = (10.0 * (1.0 - scale) + 1e-4).floor().max(0.0) as u64;
    consts::HIT_BASE_POINTS + bonus
}
