//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Time arrives as explicit `dt` and wall-clock `now_ms` values
//! - Host state is passed in per frame, never read from globals
//! - Delayed effects go through the `Scheduler`, not timers

pub mod collision;
pub mod events;
pub mod input;
pub mod player;
pub mod schedule;
pub mod session;
pub mod trail;

pub use collision::{Aabb, EntityProbe, Hazard, Obstacle};
pub use events::{DeathRecord, GameEvent};
pub use input::InputSignal;
pub use player::{Direction, FrameContext, PlayerState, PoseSnapshot, TrailPose, WorldBounds};
pub use schedule::{HostEvent, ScheduledEvent, Scheduler};
pub use session::{ScoreSink, Session};
pub use trail::{Trail, TrailBuffer};
