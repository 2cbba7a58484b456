//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; nothing is shared.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::Rect;
use super::spawner::SpawnTimer;
use crate::config::LevelConfig;
use crate::consts::*;
use crate::max_camera_offset;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Timer reached zero before any required score
    TimeExpired,
    /// Required score reached
    Victory,
    /// Player quit mid-run
    Aborted,
}

/// A target sprite ("classmate")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Spawn-order id, also the hit-test priority
    pub id: u32,
    /// Top-left corner in world space
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed horizontal speed (pixels/second), 0 when standing still
    pub velocity: f32,
    /// Random scale in `[TARGET_MIN_SCALE, TARGET_MAX_SCALE]`
    pub scale: f32,
}

impl Target {
    /// Sprite size for a scale, floored per axis
    pub fn size_for_scale(scale: f32) -> Vec2 {
        Vec2::splat(TARGET_BASE_SIZE * scale).max(Vec2::splat(MIN_TARGET_SIZE))
    }

    /// Walking speed for a scale; smaller targets move faster
    pub fn speed_for_scale(base_speed: f32, scale: f32) -> f32 {
        base_speed * (1.5 - scale)
    }

    /// World-space bounding box
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != 0.0
    }
}

/// Things that happened during the most recent step
///
/// The presentation layer uses these to play sounds and flash the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32 },
    SpawnBlocked,
    Hit { id: u32, points: u64 },
    Miss { penalty: u64 },
    ShotRejected,
    ReloadStarted,
    Reloaded,
    RunEnded(RunOutcome),
}

/// Running counters for the results screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub rejected_shots: u32,
    pub spawn_attempts: u32,
    pub spawns: u32,
}

impl RunStats {
    /// Hit ratio in `[0, 1]` (0 before the first shot)
    pub fn accuracy(&self) -> f32 {
        if self.shots == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots as f32
        }
    }
}

/// Complete per-run state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Level this run was built from
    pub level: LevelConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Score, never negative
    pub score: u64,
    /// Seconds left on the clock (may dip below zero on the final step)
    pub time_left: f32,
    /// Seconds since the run began
    pub clock: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rounds left in the magazine
    pub ammo: u32,
    /// Magazine empty and waiting out the reload window
    pub reloading: bool,
    /// `clock` value of the last accepted shot
    pub last_shot_time: f32,
    pub camera: Camera,
    pub spawner: SpawnTimer,
    /// Live targets, in spawn order
    pub targets: Vec<Target>,
    /// Last known pointer position (screen space)
    pub pointer: Option<Vec2>,
    /// World (background) width the targets roam in
    pub world_width: f32,
    /// Screen height; targets stay between the HUD band and this
    pub screen_height: f32,
    /// Set once the run is over
    pub outcome: Option<RunOutcome>,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
    pub stats: RunStats,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a run for `level` on the default screen and background
    pub fn new(level: LevelConfig, seed: u64) -> Self {
        Self::with_dimensions(level, seed, SCREEN_WIDTH, SCREEN_HEIGHT, WORLD_WIDTH)
    }

    /// Create a run with explicit screen and background sizes
    pub fn with_dimensions(
        level: LevelConfig,
        seed: u64,
        screen_width: f32,
        screen_height: f32,
        world_width: f32,
    ) -> Self {
        let world_width = world_width.max(screen_width);
        log::info!("Starting level '{}' (seed {})", level.name, seed);

        Self {
            seed,
            score: 0,
            time_left: level.game_time,
            clock: 0.0,
            time_ticks: 0,
            ammo: MAX_AMMO,
            reloading: false,
            last_shot_time: 0.0,
            camera: Camera::new(max_camera_offset(world_width, screen_width), screen_width),
            spawner: SpawnTimer::new(level.spawn_interval_secs()),
            targets: Vec::new(),
            pointer: None,
            world_width,
            screen_height,
            outcome: None,
            events: Vec::new(),
            stats: RunStats::default(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            level,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Still accepting steps
    pub fn running(&self) -> bool {
        self.outcome.is_none()
    }

    /// Run ended by reaching the required score
    pub fn victory(&self) -> bool {
        self.outcome == Some(RunOutcome::Victory)
    }

    /// Spawn budget has room for another target
    pub fn has_spawn_room(&self) -> bool {
        self.targets.len() < self.level.max_targets
    }

    /// Place a target directly (bypasses the spawner)
    ///
    /// Size is derived from `scale`; returns the new target's id.
    pub fn insert_target(&mut self, pos: Vec2, scale: f32, velocity: f32) -> u32 {
        let id = self.next_entity_id();
        self.targets.push(Target {
            id,
            pos,
            size: Target::size_for_scale(scale),
            velocity,
            scale,
        });
        id
    }
}
