//! High score leaderboard system
//!
//! Persisted as JSON next to the game, tracks the top 10 distances.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::sim::ScoreSink;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Distance climbed (meters)
    pub distance: u32,
    /// Wall-clock time (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a distance qualifies for the leaderboard
    pub fn qualifies(&self, distance: u32) -> bool {
        if distance == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if distance beats the lowest entry
        self.entries.last().is_none_or(|e| distance > e.distance)
    }

    /// Get the rank a distance would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, distance: u32) -> Option<usize> {
        if !self.qualifies(distance) {
            return None;
        }
        let rank = self.entries.iter().position(|e| distance > e.distance);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new distance to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, distance: u32, timestamp: f64) -> Option<usize> {
        let rank = self.potential_rank(distance)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                distance,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the best distance (if any)
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.distance)
    }

    /// Load high scores from a JSON file; a missing file is an empty board
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No high scores found, starting fresh");
            return Ok(Self::new());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read high scores {}", path.display()))?;
        let scores: HighScores = serde_json::from_str(&json)
            .with_context(|| format!("corrupt high scores {}", path.display()))?;
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    /// Save high scores to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write high scores {}", path.display()))?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

impl ScoreSink for HighScores {
    fn report_score(&mut self, distance: u32, now_ms: f64) {
        if let Some(rank) = self.add_score(distance, now_ms) {
            log::info!("New high score: {}m (rank {})", distance, rank);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_never_qualifies() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.add_score(0, 0.0), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_entries_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(10, 1.0), Some(1));
        assert_eq!(scores.add_score(30, 2.0), Some(1));
        assert_eq!(scores.add_score(20, 3.0), Some(2));
        // Ties rank below the existing entry
        assert_eq!(scores.add_score(20, 4.0), Some(3));

        let distances: Vec<u32> = scores.entries.iter().map(|e| e.distance).collect();
        assert_eq!(distances, vec![30, 20, 20, 10]);
        assert_eq!(scores.best(), Some(30));
    }

    #[test]
    fn test_board_is_capped() {
        let mut scores = HighScores::new();
        for d in 1..=MAX_HIGH_SCORES as u32 {
            scores.add_score(d * 10, d as f64);
        }
        assert!(!scores.qualifies(5));
        assert_eq!(scores.potential_rank(15), Some(MAX_HIGH_SCORES));

        scores.report_score(1000, 99.0);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.best(), Some(1000));
        assert_eq!(scores.entries.last().map(|e| e.distance), Some(20));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("wall-cat-scores-{}.json", std::process::id()));
        let mut scores = HighScores::new();
        scores.add_score(42, 123.0);
        scores.save(&path).unwrap();

        let loaded = HighScores::load(&path).unwrap();
        assert_eq!(loaded, scores);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_is_empty() {
        let scores = HighScores::load("/nonexistent/wall-cat-scores.json").unwrap();
        assert!(scores.is_empty());
    }
}
