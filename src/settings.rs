//! Game settings and preferences
//!
//! Loaded from `settings.json` next to the level file. The simulation does
//! not depend on any of these; they configure the frame driver and the
//! presentation layer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Window width in pixels
    pub screen_width: f32,
    /// Window height in pixels
    pub screen_height: f32,
    /// Target frames per second for the frame driver
    pub fps: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Player ===
    /// Name recorded on the scoreboard
    pub player_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: 60,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,

            player_name: "Player1".to_string(),
        }
    }
}

impl Settings {
    /// Seconds per rendered frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = fs::read_to_string(path) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(err) => log::warn!("Ignoring malformed settings {}: {}", path.display(), err),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
