//! Fading pose history for motion-blur rendering
//!
//! Trails fade on wall-clock time, not simulation time, so the fade rate is
//! the same at any frame rate. Creation times only ever increase, so the
//! oldest trail is always the most faded one and pruning only looks at the
//! front of the buffer.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::player::Direction;
use crate::consts::{TRAIL_BASE_ALPHA, TRAIL_INTERVAL_MS};

/// Snapshot of a past pose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    /// Wall-clock creation time (ms)
    pub created_ms: f64,
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub rotation: f32,
}

impl Trail {
    pub fn new(created_ms: f64, x: f32, y: f32, direction: Direction, rotation: f32) -> Self {
        Self {
            created_ms,
            x,
            y,
            // Idle trails face right
            direction: if direction == Direction::Idle {
                Direction::Right
            } else {
                direction
            },
            rotation,
        }
    }

    /// Opacity at `now_ms`; zero or negative once fully faded
    pub fn alpha(&self, now_ms: f64, fade_duration: f32) -> f32 {
        let age_secs = (now_ms - self.created_ms) / 1000.0;
        TRAIL_BASE_ALPHA * (1.0 - (age_secs / fade_duration as f64) as f32)
    }
}

/// Oldest-first trail history owned by the player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailBuffer {
    trails: VecDeque<Trail>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop fully faded trails from the front
    pub fn prune(&mut self, now_ms: f64, fade_duration: f32) {
        while self
            .trails
            .front()
            .is_some_and(|t| t.alpha(now_ms, fade_duration) <= 0.0)
        {
            self.trails.pop_front();
        }
    }

    /// Append a trail unless the last one is too recent.
    /// Returns true if a trail was recorded.
    pub fn record(&mut self, trail: Trail) -> bool {
        let due = self
            .last_created_ms()
            .is_none_or(|last| trail.created_ms - last >= TRAIL_INTERVAL_MS);
        if due {
            self.trails.push_back(trail);
        }
        due
    }

    pub fn last_created_ms(&self) -> Option<f64> {
        self.trails.back().map(|t| t.created_ms)
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}
