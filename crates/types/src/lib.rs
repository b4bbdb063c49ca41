//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, input mapping).
//!
//! # Coordinates
//!
//! The world is measured in logical pixels with the origin at the top-left
//! corner, `x` growing to the right and `y` growing downwards. The terminal
//! renderer maps world pixels onto character cells.
//!
//! Coordinates are `f64`: projectiles are never bounded, and `f32` stops
//! representing a +5 step exactly once `x` passes 2^24.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MAX_CATCH_UP_TICKS` | 4 | Ticks run at most per loop iteration |
//! | `PLAYER_SIZE` | 50 | Player square edge length (px) |
//! | `PROJECTILE_VELOCITY` | (5, 0) | Per-tick projectile displacement (px) |
//! | `PROJECTILE_SIZE` | 10x4 | Projectile rectangle (px) |
//!
//! # Examples
//!
//! ```
//! use tui_shooter_types::{GameAction, Vec2, PROJECTILE_VELOCITY};
//!
//! let pos = Vec2::new(400.0, 300.0);
//! assert_eq!(pos + PROJECTILE_VELOCITY, Vec2::new(405.0, 300.0));
//! assert_eq!(GameAction::Fire.as_str(), "fire");
//! ```

use std::ops::{Add, AddAssign};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Upper bound on ticks executed for a single loop iteration.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Player square edge length in world pixels.
pub const PLAYER_SIZE: f64 = 50.0;

/// Default projectile velocity: 5px to the right per tick.
pub const PROJECTILE_VELOCITY: Vec2 = Vec2::new(5.0, 0.0);

/// Projectile rectangle (width, height) in world pixels.
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(10.0, 4.0);

/// Player fill color.
pub const PLAYER_COLOR: Rgb = Rgb::new(70, 130, 255);

/// Projectile fill color.
pub const PROJECTILE_COLOR: Rgb = Rgb::new(255, 60, 60);

/// Surface color used when clearing.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);


/// 2D vector in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Axis-aligned rectangle in world pixels.
///
/// `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at `pos` with extent `size`.
    pub const fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// True when the two rectangles share a non-empty area.
    ///
    /// Edges are exclusive, so rectangles that merely touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Actions that can be applied to the world.
///
/// Produced by the key mapping, consumed by `World::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Spawn a projectile at the player's position
    Fire,
}

impl GameAction {
    /// Name used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Fire => "fire",
        }
    }
}
