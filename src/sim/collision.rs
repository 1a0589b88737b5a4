//! Obstacle collision tests
//!
//! Obstacles only answer whether they overlap the entity this frame; the
//! player decides what a hit means.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in world space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box of the given half extent centered on a point
    pub fn from_center(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overlap test (touching edges count as overlap)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// What an obstacle gets to see of the entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityProbe {
    pub bounds: Aabb,
    /// Power mode active; hazards let the entity pass
    pub super_lucky: bool,
}

/// Anything the entity can die on
pub trait Obstacle {
    fn intersects(&self, probe: &EntityProbe) -> bool;
}

/// A bare box is lethal regardless of power mode
impl Obstacle for Aabb {
    fn intersects(&self, probe: &EntityProbe) -> bool {
        Aabb::intersects(self, &probe.bounds)
    }
}

/// Wall spike or flying debris; harmless while super-lucky
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub bounds: Aabb,
}

impl Hazard {
    pub fn new(bounds: Aabb) -> Self {
        Self { bounds }
    }
}

impl Obstacle for Hazard {
    fn intersects(&self, probe: &EntityProbe) -> bool {
        !probe.super_lucky && self.bounds.intersects(&probe.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_at(x: f32, y: f32, super_lucky: bool) -> EntityProbe {
        EntityProbe {
            bounds: Aabb::from_center(Vec2::new(x, y), 10.0),
            super_lucky,
        }
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 5.0), Vec2::new(20.0, 20.0));
        let c = Aabb::new(Vec2::new(10.1, 5.0), Vec2::new(20.0, 20.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_new_orders_corners() {
        let a = Aabb::new(Vec2::new(5.0, -5.0), Vec2::new(-5.0, 5.0));
        assert_eq!(a.min, Vec2::new(-5.0, -5.0));
        assert_eq!(a.max, Vec2::new(5.0, 5.0));
        assert_eq!(a.center(), Vec2::ZERO);
    }

    #[test]
    fn test_hazard_exempts_super_lucky() {
        let hazard = Hazard::new(Aabb::from_center(Vec2::new(100.0, -50.0), 15.0));
        assert!(hazard.intersects(&probe_at(100.0, -50.0, false)));
        assert!(!hazard.intersects(&probe_at(100.0, -50.0, true)));
        assert!(!hazard.intersects(&probe_at(300.0, -50.0, false)));
    }

    #[test]
    fn test_plain_box_ignores_super_lucky() {
        let wall = Aabb::from_center(Vec2::new(0.0, 0.0), 5.0);
        assert!(Obstacle::intersects(&wall, &probe_at(8.0, 0.0, true)));
    }
}
