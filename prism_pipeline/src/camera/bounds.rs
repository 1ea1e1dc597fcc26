/// Axis-aligned bounding box of the visible content.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    /// Bounds used when a renderer has no visible content
    pub const UNIT_CUBE: AABB = AABB {
        min: Vec3::splat(-1.0),
        max: Vec3::splat(1.0),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the sphere through the box corners
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}
