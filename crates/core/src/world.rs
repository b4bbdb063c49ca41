//! World module - owns the player and the projectile collection
//!
//! The world is the only mutable game state. Input paths call
//! [`World::apply_action`], which may only append projectiles; gameplay never
//! moves the player. The frame path calls [`World::tick`], which advances
//! (and, under [`ProjectilePolicy::CullOffscreen`], removes) projectiles.

use std::hash::Hasher;

use tracing::{debug, trace};

use crate::fingerprint::Fnv1aHasher;
use crate::player::Player;
use crate::projectile::{Projectile, ProjectilePolicy};
use crate::types::{
    GameAction, Rect, Rgb, Vec2, PLAYER_COLOR, PLAYER_SIZE, PROJECTILE_SIZE, PROJECTILE_VELOCITY,
};

/// Gameplay tuning for a world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Player square edge length in pixels.
    pub player_size: f64,
    pub player_color: Rgb,
    /// Velocity given to every new projectile (pixels per tick).
    pub projectile_velocity: Vec2,
    /// Projectile rectangle used for drawing and culling.
    pub projectile_size: Vec2,
    pub policy: ProjectilePolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_color: PLAYER_COLOR,
            projectile_velocity: PROJECTILE_VELOCITY,
            projectile_size: PROJECTILE_SIZE,
            policy: ProjectilePolicy::Retain,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    bounds: Rect,
    player: Player,
    projectiles: Vec<Projectile>,
    config: WorldConfig,
    /// Number of completed ticks.
    tick_count: u64,
    /// Number of projectiles ever spawned (unaffected by culling).
    fired: u64,
}

impl World {
    /// Create a world of `width` x `height` pixels with default tuning.
    ///
    /// The player starts at the center of the world.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(width, height, WorldConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: WorldConfig) -> Self {
        let player = Player::new(Vec2::new(width / 2.0, height / 2.0))
            .with_size(config.player_size)
            .with_color(config.player_color);
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            player,
            projectiles: Vec::new(),
            config,
            tick_count: 0,
            fired: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Projectiles in insertion order.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Pre-allocate room for `additional` projectiles.
    pub fn reserve_projectiles(&mut self, additional: usize) {
        self.projectiles.reserve(additional);
    }

    /// Apply an action. Returns true when the world changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Fire => {
                self.fire();
                true
            }
        }
    }

    /// Append one projectile at the player's current position.
    pub fn fire(&mut self) {
        let projectile = Projectile::new(self.player.position, self.config.projectile_velocity);
        self.projectiles.push(projectile);
        self.fired += 1;
        debug!(
            x = projectile.position.x,
            y = projectile.position.y,
            count = self.projectiles.len(),
            "projectile spawned"
        );
    }

    /// Advance the simulation by one tick.
    ///
    /// Every projectile moves by its velocity; the removal policy runs afterwards.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        for projectile in self.projectiles.iter_mut() {
            projectile.advance();
        }

        if self.config.policy != ProjectilePolicy::Retain {
            let before = self.projectiles.len();
            let policy = self.config.policy;
            let size = self.config.projectile_size;
            let bounds = self.bounds;
            self.projectiles.retain(|p| policy.keeps(p, size, &bounds));

            let culled = before - self.projectiles.len();
            if culled > 0 {
                trace!(culled, remaining = self.projectiles.len(), "culled projectiles");
            }
        }
    }

    /// Stable hash of everything that affects rendering.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        h.write_f64(self.player.position.x);
        h.write_f64(self.player.position.y);
        h.write_f64(self.player.size);
        h.write_usize(self.projectiles.len());
        for p in &self.projectiles {
            h.write_f64(p.position.x);
            h.write_f64(p.position.y);
        }
        h.finish()
    }

    /// No projectile is in flight, so consecutive frames only differ on input.
    pub fn is_static(&self) -> bool {
        self.projectiles.is_empty()
    }
}
