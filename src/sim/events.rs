//! Effects emitted by the simulation for the host to apply

use serde::{Deserialize, Serialize};

/// Where and how far the entity got when it died
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub x: f32,
    pub y: f32,
    pub distance: u32,
}

/// Side effects of a frame, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Shake the camera until this wall-clock time (ms)
    CameraShake { until_ms: f64 },
    /// Append to the session's death history
    Died(DeathRecord),
    /// Final distance for score persistence
    Score { distance: u32 },
    /// Switch to the menu after a delay
    MenuTransition { delay_ms: f64 },
}
