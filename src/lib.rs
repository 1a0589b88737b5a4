//! Wall Cat - A wall-jumping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (motion, jumps, trails, death)
//! - `config`: Tunable gameplay constants loaded from JSON
//! - `highscores`: Distance leaderboard fed by the simulation

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::Config;
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Delay between death and the menu appearing
    pub const MENU_TRANSITION_DELAY_MS: f64 = 1000.0;

    /// Minimum wall-clock spacing between recorded trails (30 per second)
    pub const TRAIL_INTERVAL_MS: f64 = 1000.0 / 30.0;
    /// Opacity of a freshly recorded trail
    pub const TRAIL_BASE_ALPHA: f32 = 0.25;

    /// Airborne spin rate (radians/s)
    pub const SPIN_RATE: f32 = std::f32::consts::PI * 8.0;
    /// Super-lucky power drain per second
    pub const POWER_DECAY_RATE: f32 = 0.5;
    /// Horizontal speed multiplier once dead
    pub const DEAD_SPEED_FACTOR: f32 = 0.2;
    /// Fresh sessions start with the super-lucky cooldown already elapsed
    pub const INITIAL_TIME_SINCE_SUPER_LUCKY: f32 = 9.0;
}

/// Sign of a value, with zero mapping to zero
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }
}
