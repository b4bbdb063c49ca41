//! The player square.

use crate::types::{Rect, Rgb, Vec2, PLAYER_COLOR, PLAYER_SIZE};

/// The player square.
///
/// `position` is the top-left corner of the square; projectiles spawn there.
/// Gameplay never moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub size: f64,
    pub color: Rgb,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: PLAYER_SIZE,
            color: PLAYER_COLOR,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Area covered by the square.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, self.size)
    }
}
