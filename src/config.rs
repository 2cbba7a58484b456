//! Level configuration
//!
//! Loaded once from `levels.json`. Every level is immutable after loading;
//! the simulation only ever sees a validated [`LevelConfig`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters for a single level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Unique level name (menu label and lookup key)
    pub name: String,
    /// Run length in seconds
    pub game_time: f32,
    /// Time between spawn attempts in milliseconds
    #[serde(alias = "spawn_interval_ms")]
    pub spawn_interval: f32,
    /// Spawn budget: maximum simultaneously live targets
    #[serde(rename = "max_classmates", alias = "max_targets")]
    pub max_targets: usize,
    /// Base horizontal target speed (pixels/second)
    #[serde(rename = "classmate_speed", alias = "target_speed")]
    pub target_speed: f32,
    /// Score that ends the run in victory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_score: Option<u64>,
}

impl LevelConfig {
    /// Spawn interval converted to seconds
    pub fn spawn_interval_secs(&self) -> f32 {
        self.spawn_interval / 1000.0
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            level: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if !is_positive_finite(self.game_time) {
            return Err(invalid("game_time must be a positive number"));
        }
        if !is_positive_finite(self.spawn_interval) {
            return Err(invalid("spawn_interval must be a positive number"));
        }
        if self.max_targets == 0 {
            return Err(invalid("max_classmates must be at least 1"));
        }
        if !self.target_speed.is_finite() || self.target_speed < 0.0 {
            return Err(invalid("classmate_speed must be a non-negative number"));
        }
        Ok(())
    }
}

fn is_positive_finite(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// The whole `levels.json` document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelsFile {
    pub levels: Vec<LevelConfig>,
}

impl LevelsFile {
    /// Parse and validate a levels document from a JSON string
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: LevelsFile =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if file.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for level in &file.levels {
            level.validate()?;
        }
        Ok(file)
    }

    /// Load levels from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_json(&json, path)?;
        log::info!("Loaded {} levels from {}", file.levels.len(), path.display());
        Ok(file)
    }

    /// Look up a level by name
    pub fn find(&self, name: &str) -> Result<&LevelConfig, ConfigError> {
        self.levels
            .iter()
            .find(|level| level.name == name)
            .ok_or_else(|| ConfigError::UnknownLevel(name.to_string()))
    }

    /// Level names in document order (menu entries)
    pub fn names(&self) -> Vec<String> {
        self.levels.iter().map(|level| level.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &str = r#"{
        "levels": [
            {"name": "Easy", "game_time": 60, "spawn_interval": 1500,
             "max_classmates": 3, "classmate_speed": 80},
            {"name": "Hard", "game_time": 45, "spawn_interval": 600,
             "max_classmates": 6, "classmate_speed": 160, "required_score": 300}
        ]
    }"#;

    fn parse(json: &str) -> Result<LevelsFile, ConfigError> {
        LevelsFile::from_json(json, Path::new("levels.json"))
    }

    #[test]
    fn test_parse_levels() {
        let file = parse(LEVELS).unwrap();
        assert_eq!(file.names(), vec!["Easy".to_string(), "Hard".to_string()]);

        let easy = file.find("Easy").unwrap();
        assert_eq!(easy.max_targets, 3);
        assert_eq!(easy.required_score, None);
        assert!((easy.spawn_interval_secs() - 1.5).abs() < 1e-6);

        let hard = file.find("Hard").unwrap();
        assert_eq!(hard.required_score, Some(300));
        assert_eq!(hard.target_speed, 160.0);
    }

    #[test]
    fn test_unknown_level_is_error() {
        let file = parse(LEVELS).unwrap();
        let err = file.find("Nightmare").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLevel(ref name) if name == "Nightmare"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse("{\"levels\": [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_level_list() {
        let err = parse(r#"{"levels": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLevels));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let err = parse(
            r#"{"levels": [{"name": "Broken", "game_time": 0, "spawn_interval": 500,
                "max_classmates": 3, "classmate_speed": 10}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref level, .. } if level == "Broken"));

        let err = parse(
            r#"{"levels": [{"name": "Empty", "game_time": 10, "spawn_interval": 500,
                "max_classmates": 0, "classmate_speed": 10}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_infinite_times_rejected() {
        let base = LevelConfig {
            name: "Forever".into(),
            game_time: 30.0,
            spawn_interval: 500.0,
            max_targets: 3,
            target_speed: 10.0,
            required_score: None,
        };
        assert!(base.validate().is_ok());

        let endless = LevelConfig {
            game_time: f32::INFINITY,
            ..base.clone()
        };
        assert!(matches!(endless.validate(), Err(ConfigError::Invalid { .. })));

        let never_spawns = LevelConfig {
            spawn_interval: f32::INFINITY,
            ..base.clone()
        };
        assert!(matches!(never_spawns.validate(), Err(ConfigError::Invalid { .. })));

        let nan_time = LevelConfig {
            game_time: f32::NAN,
            ..base
        };
        assert!(nan_time.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LevelsFile::load(Path::new("/definitely/not/here/levels.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
