//! High score leaderboard system
//!
//! Persisted to a JSON file, tracks top 10 scores.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player's name
    pub name: String,
    /// Player's score
    pub score: u64,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// High score leaderboard
///
/// Repeated names produce separate entries; there is no dedup.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
    /// Backing file (None for in-memory boards)
    path: Option<PathBuf>,
}

impl Scoreboard {
    /// Create empty in-memory leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries, best first
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (0 when empty)
    pub fn top_score(&self) -> u64 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Has to beat the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a score, keep the list sorted and capped, then persist
    ///
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn add_score(&mut self, name: impl Into<String>, score: u64) -> Option<usize> {
        let entry = ScoreEntry::new(name, score);

        // Insert after any equal scores so earlier entries keep their rank
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        self.save();

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Record a finished run; only a new best score is kept
    pub fn record_run(&mut self, name: &str, score: u64) -> Option<usize> {
        if score <= self.top_score() {
            log::info!("Run score {} does not beat top score {}", score, self.top_score());
            return None;
        }
        log::info!("New top score {} by {}", score, name);
        self.add_score(name, score)
    }

    /// Load high scores from a file
    ///
    /// A missing or corrupt file yields an empty board bound to `path`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let entries = match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(mut entries) => {
                    entries.sort_by(|a, b| b.score.cmp(&a.score));
                    entries.truncate(MAX_HIGH_SCORES);
                    log::info!("Loaded {} high scores", entries.len());
                    entries
                }
                Err(err) => {
                    log::warn!("Corrupt scoreboard {}: {}", path.display(), err);
                    Vec::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Vec::new()
            }
        };

        Self {
            entries,
            path: Some(path.to_path_buf()),
        }
    }

    /// Rewrite the backing file in full (no-op for in-memory boards)
    pub fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not serialize high scores: {}", err);
                return;
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = fs::create_dir_all(parent) {
                    log::warn!("Could not create {}: {}", parent.display(), err);
                }
            }
        }
        match fs::write(path, json) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(err) => log::warn!("Could not save high scores to {}: {}", path.display(), err),
        }
    }
}
