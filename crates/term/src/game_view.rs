//! GameView: draws a `core::World` onto a [`Canvas`].
//!
//! This module is pure (no I/O). Drawing only reads the world, so rendering
//! the same world twice issues identical calls.

use crate::canvas::{Canvas, CellCanvas};
use crate::core::World;
use crate::fb::FrameBuffer;
use crate::types::{Rgb, BACKGROUND_COLOR, PROJECTILE_COLOR};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the shooter.
#[derive(Debug, Clone)]
pub struct GameView {
    /// World pixels per terminal column.
    cell_w: u16,
    /// World pixels per terminal row.
    cell_h: u16,
    projectile_color: Rgb,
    background: Rgb,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x16 matches the usual terminal glyph aspect ratio.
        Self::new(8, 16)
    }
}

impl GameView {
    /// Zero cell sizes are clamped to 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            projectile_color: PROJECTILE_COLOR,
            background: BACKGROUND_COLOR,
        }
    }

    pub fn with_projectile_color(mut self, color: Rgb) -> Self {
        self.projectile_color = color;
        self
    }

    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// World size in pixels covered by `viewport`.
    pub fn world_size(&self, viewport: Viewport) -> (f64, f64) {
        (
            f64::from(viewport.width) * f64::from(self.cell_w),
            f64::from(viewport.height) * f64::from(self.cell_h),
        )
    }

    /// Draw one frame: clear, then the player, then every projectile in
    /// insertion order.
    pub fn draw<C: Canvas + ?Sized>(&self, world: &World, canvas: &mut C) {
        canvas.clear();

        let player = world.player();
        canvas.fill_rect(player.rect(), player.color);

        let size = world.config().projectile_size;
        for projectile in world.projectiles() {
            canvas.fill_rect(projectile.rect(size), self.projectile_color);
        }
    }

    /// Render the world into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames; it is only resized when the viewport changes.
    pub fn render_into(&self, world: &World, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let mut canvas =
            CellCanvas::new(fb, self.cell_w, self.cell_h).with_background(self.background);
        self.draw(world, &mut canvas);
    }

    pub fn render(&self, world: &World, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }
}
