//! Base positional entity and axis-aligned box geometry
//!
//! Every live object is an [`Entity`]: a top-left position plus the extent of
//! the sprite that represents it. Behavior lives with the owning type; this
//! module only answers "where is it and how big is it".

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{Sprite, SpriteKey};

/// Axis-aligned box with exclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Same center, extents scaled by `factor`
    pub fn shrunk(&self, factor: f32) -> Self {
        let center = self.center();
        let half = Vec2::new(self.width(), self.height()) * factor * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test; boxes that merely touch do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Positional sprite entity: top-left corner plus sprite extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub sprite: SpriteKey,
    pub size: Vec2,
}

impl Entity {
    pub fn new(pos: Vec2, sprite: SpriteKey, extent: Sprite) -> Self {
        Self {
            pos,
            sprite,
            size: extent.size(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrunk_keeps_center() {
        let b = Aabb::from_pos_size(Vec2::new(10.0, 20.0), Vec2::new(40.0, 60.0));
        let s = b.shrunk(0.5);
        assert_eq!(s.center(), b.center());
        assert!((s.width() - 20.0).abs() < 1e-5);
        assert!((s.height() - 30.0).abs() < 1e-5);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));

        let c = Aabb::from_pos_size(Vec2::new(9.9, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&c));
    }

    #[test]
    fn entity_bounds_match_pos_and_extent() {
        let e = Entity::new(
            Vec2::new(5.0, 6.0),
            SpriteKey::Enemy,
            Sprite::new(50, 40),
        );
        let b = e.bounds();
        assert_eq!(b.min, Vec2::new(5.0, 6.0));
        assert_eq!(b.max, Vec2::new(55.0, 46.0));
        assert_eq!(e.center(), Vec2::new(30.0, 26.0));
    }
}
