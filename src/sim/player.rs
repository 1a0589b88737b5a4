//! The wall-jumping entity
//!
//! Owns position, velocity, spin, the super-lucky power mode, death state and
//! the trail buffer. `update` runs once per frame; everything it needs from
//! the outside world arrives through a `FrameContext`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, EntityProbe, Obstacle};
use super::events::{DeathRecord, GameEvent};
use super::input::InputSignal;
use super::trail::{Trail, TrailBuffer};
use crate::config::Config;
use crate::consts::*;
use crate::sign;

/// Horizontal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    /// Before the first jump
    #[default]
    Idle,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Idle => 0.0,
            Direction::Right => 1.0,
        }
    }

    /// Opposite heading; the first jump always goes right
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Idle => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_sign(value: f32) -> Self {
        match sign(value) {
            s if s > 0.0 => Direction::Right,
            s if s < 0.0 => Direction::Left,
            _ => Direction::Idle,
        }
    }
}

/// Vertical threshold of the visible world (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Falling to or past this y kills the entity
    pub lower_visible_y: f32,
}

impl WorldBounds {
    pub fn new(lower_visible_y: f32) -> Self {
        Self { lower_visible_y }
    }
}

/// Everything a frame reads from, or reports to, the host
pub struct FrameContext<'a> {
    pub config: &'a Config,
    pub input: &'a mut InputSignal,
    pub obstacles: &'a [Box<dyn Obstacle>],
    pub bounds: WorldBounds,
    /// Jumps are ignored while a menu is showing
    pub in_menu: bool,
    /// Wall-clock time (ms), used for trails and camera shake
    pub now_ms: f64,
    pub events: &'a mut Vec<GameEvent>,
}

/// A trail as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPose {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub rotation: f32,
    pub alpha: f32,
}

/// Read-only pose handed to the renderer after a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub rotation: f32,
    pub dead: bool,
    pub on_wall: bool,
    pub super_lucky: bool,
    pub power: f32,
    pub distance: u32,
    /// Visible trails, oldest first
    pub trails: Vec<TrailPose>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    /// Height; 0 is the start line and climbing goes negative
    pub y: f32,
    pub vy: f32,
    pub direction: Direction,
    /// Spin angle (radians, unbounded)
    pub rotation: f32,
    pub dead: bool,
    pub power: f32,
    pub super_lucky: bool,
    pub time_since_super_lucky: f32,
    /// Highest point reached (lowest y)
    pub min_y: f32,
    #[serde(skip)]
    pub trails: TrailBuffer,
}

impl PlayerState {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.width / 2.0,
            y: 0.0,
            vy: 0.0,
            direction: Direction::Idle,
            rotation: 0.0,
            dead: false,
            power: 0.0,
            super_lucky: false,
            time_since_super_lucky: INITIAL_TIME_SINCE_SUPER_LUCKY,
            min_y: 0.0,
            trails: TrailBuffer::new(),
        }
    }

    /// Back to the start line for a new session
    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(config);
    }

    /// Pinned against either wall (exact, the motion clamp lands on the bound)
    #[inline]
    pub fn on_wall(&self, config: &Config) -> bool {
        self.x == config.left_wall() || self.x == config.right_wall()
    }

    /// Best height in meters
    #[inline]
    pub fn distance(&self, config: &Config) -> u32 {
        (-self.min_y / config.px_per_meter).round().max(0.0) as u32
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center(Vec2::new(self.x, self.y), config.hitbox_radius)
    }

    /// Charge the power meter
    pub fn add_power(&mut self, amount: f32) {
        self.power = (self.power + amount).max(0.0);
    }

    /// Enter super-lucky mode; needs a charged meter
    pub fn activate_super_lucky(&mut self) -> bool {
        if self.dead || self.power <= 0.0 {
            return false;
        }
        self.super_lucky = true;
        true
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32, ctx: &mut FrameContext<'_>) {
        let config = ctx.config;

        let mut speed = config.horizontal_speed;
        if self.dead {
            speed *= DEAD_SPEED_FACTOR;
        }

        self.update_power(dt);

        self.x += self.direction.sign() * speed * dt;
        self.x = self.x.max(config.left_wall()).min(config.right_wall());

        let on_wall = self.on_wall(config);
        let gravity = if self.vy < 0.0 && on_wall {
            config.gravity * 4.0
        } else if on_wall {
            config.gravity * 0.5
        } else if ctx.input.held() || self.super_lucky {
            0.0
        } else {
            config.gravity
        };

        self.vy += gravity * dt;
        self.vy = self.vy.max(-config.max_vy);

        self.y += self.vy * dt;
        self.y = self.y.min(0.0);

        let can_jump = !ctx.in_menu && (on_wall || self.direction == Direction::Idle);
        if can_jump && (self.super_lucky || ctx.input.consume_edge()) {
            if self.jump(config) {
                // Keep the upward cap after stacking the impulse
                self.vy = self.vy.max(-config.max_vy);
            }
            ctx.input.latch();
        }

        if on_wall {
            self.rotation = 0.0;
        } else {
            self.rotation += dt * SPIN_RATE * self.direction.sign();
        }

        self.trails.prune(ctx.now_ms, config.trail_fade_duration);
        if !self.dead && !on_wall && self.y != 0.0 {
            self.trails.record(Trail::new(
                ctx.now_ms,
                self.x,
                self.y,
                self.direction,
                self.rotation,
            ));
        }

        let probe = EntityProbe {
            bounds: self.bounds(config),
            super_lucky: self.super_lucky,
        };
        if ctx.obstacles.iter().any(|o| o.intersects(&probe)) {
            self.die(config, ctx.now_ms, ctx.events);
        }

        if self.y >= ctx.bounds.lower_visible_y {
            self.die(config, ctx.now_ms, ctx.events);
        }

        self.min_y = self.min_y.min(self.y);
    }

    fn update_power(&mut self, dt: f32) {
        if self.super_lucky {
            self.power -= dt * POWER_DECAY_RATE;
            if self.power <= 0.0 {
                self.power = 0.0;
                self.super_lucky = false;
                log::debug!("Super-lucky mode ended");
            }
            self.time_since_super_lucky = 0.0;
        } else {
            self.time_since_super_lucky += dt;
        }
    }

    /// Push off the wall (or the start line). Returns false if nothing happened.
    pub fn jump(&mut self, config: &Config) -> bool {
        if self.y != 0.0 && !self.on_wall(config) {
            return false;
        }
        if self.dead {
            return false;
        }

        self.direction = self.direction.flipped();
        self.vy = -config.jump_impulse + self.vy.min(0.0);
        log::debug!(
            "Jump {:?} at ({:.1}, {:.1}) vy={:.1}",
            self.direction,
            self.x,
            self.y,
            self.vy
        );
        true
    }

    /// Kill the entity. Only the first call has any effect.
    pub fn die(&mut self, config: &Config, now_ms: f64, events: &mut Vec<GameEvent>) -> bool {
        if self.dead {
            return false;
        }

        self.dead = true;
        self.vy = self.vy.max(0.0);
        // Topple toward the middle of the playfield
        self.direction = Direction::from_sign(config.width / 2.0 - self.x);

        let distance = self.distance(config);
        events.push(GameEvent::CameraShake {
            until_ms: now_ms + config.shake_duration as f64 * 1000.0,
        });
        events.push(GameEvent::Died(DeathRecord {
            x: self.x,
            y: self.y,
            distance,
        }));
        events.push(GameEvent::MenuTransition {
            delay_ms: MENU_TRANSITION_DELAY_MS,
        });
        events.push(GameEvent::Score { distance });

        log::info!("Died at ({:.1}, {:.1}) after {}m", self.x, self.y, distance);
        true
    }

    pub fn snapshot(&self, now_ms: f64, config: &Config) -> PoseSnapshot {
        let trails = self
            .trails
            .iter()
            .map(|t| TrailPose {
                x: t.x,
                y: t.y,
                direction: t.direction,
                rotation: t.rotation,
                alpha: t.alpha(now_ms, config.trail_fade_duration),
            })
            .filter(|t| t.alpha > 0.0)
            .collect();

        PoseSnapshot {
            x: self.x,
            y: self.y,
            direction: self.direction,
            rotation: self.rotation,
            dead: self.dead,
            on_wall: self.on_wall(config),
            super_lucky: self.super_lucky,
            power: self.power,
            distance: self.distance(config),
            trails,
        }
    }
}
