//! Axis-aligned geometry for ships and projectiles
//!
//! Screen-style coordinates: origin at the arena's top-left corner, +y down.
//! An entity's position is the top-left corner of its bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position / velocity vector
pub type Vector2 = Vec2;

/// Width and height of an entity or the arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSize {
    pub width: f32,
    pub height: f32,
}

impl BoundingSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both extents finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left(top_left: Vec2, size: BoundingSize) -> Self {
        Self {
            min: top_left,
            max: top_left + size.as_vec2(),
        }
    }

    /// Strict overlap; rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}
