//! Gameplay tuning
//!
//! Loaded from a JSON file on native; any missing field falls back to the
//! tuned default.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

/// Tunable gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield width (world units)
    pub width: f32,
    /// Distance of each wall from its playfield edge
    pub wall_x: f32,
    /// Horizontal travel speed (units/s)
    pub horizontal_speed: f32,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Upward speed cap (units/s)
    pub max_vy: f32,
    /// Upward velocity granted by a jump
    pub jump_impulse: f32,
    /// Camera shake length after death (seconds)
    pub shake_duration: f32,
    /// Time for a trail to fade out (seconds)
    pub trail_fade_duration: f32,
    /// World units per meter of climbed distance
    pub px_per_meter: f32,
    /// Half extent of the entity's collision box
    pub hitbox_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1000.0,
            wall_x: 100.0,
            horizontal_speed: 1400.0,
            gravity: 2000.0,
            max_vy: 1500.0,
            jump_impulse: 1200.0,
            shake_duration: 0.1,
            trail_fade_duration: 0.3,
            px_per_meter: 100.0,
            hitbox_radius: 20.0,
        }
    }
}

impl Config {
    /// X coordinate of the left wall
    #[inline]
    pub fn left_wall(&self) -> f32 {
        self.wall_x
    }

    /// X coordinate of the right wall
    #[inline]
    pub fn right_wall(&self) -> f32 {
        self.width - self.wall_x
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Config = serde_json::from_str(json).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default config: {err:#}");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        let positive = [
            ("width", self.width),
            ("horizontal_speed", self.horizontal_speed),
            ("gravity", self.gravity),
            ("max_vy", self.max_vy),
            ("jump_impulse", self.jump_impulse),
            ("trail_fade_duration", self.trail_fade_duration),
            ("px_per_meter", self.px_per_meter),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                bail!("{name} must be positive, got {value}");
            }
        }
        if self.wall_x < 0.0 || self.shake_duration < 0.0 || self.hitbox_radius < 0.0 {
            bail!("wall_x, shake_duration and hitbox_radius must not be negative");
        }
        if self.left_wall() >= self.right_wall() {
            bail!(
                "walls leave no playfield (wall_x {} in width {})",
                self.wall_x,
                self.width
            );
        }
        Ok(())
    }
}
