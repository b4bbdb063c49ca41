//! Projectiles and the removal policy.

use crate::types::{Rect, Vec2};

/// A spawned entity moving at a constant per-tick velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Advance one tick: `position += velocity`.
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Area covered by the projectile when drawn with `size`.
    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::at(self.position, size)
    }
}

/// What happens to projectiles that leave the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectilePolicy {
    /// Keep every projectile forever; the collection only grows.
    #[default]
    Retain,
    /// Drop projectiles once their rectangle no longer overlaps the world bounds.
    CullOffscreen,
}

impl ProjectilePolicy {
    /// Whether a projectile drawn with `size` survives inside `bounds`.
    pub fn keeps(&self, projectile: &Projectile, size: Vec2, bounds: &Rect) -> bool {
        match self {
            ProjectilePolicy::Retain => true,
            ProjectilePolicy::CullOffscreen => projectile.rect(size).intersects(bounds),
        }
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO)
    }
}
