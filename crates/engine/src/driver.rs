//! The frame driver: owns the world and turns input and ticks into frames.

use tracing::trace;

use crate::core::{World, WorldConfig};
use crate::term::{Canvas, FrameBuffer, GameView, Viewport};
use crate::types::GameAction;

/// Owns the world and the view.
///
/// Input goes through [`FrameDriver::handle`]; the per-refresh routine is
/// [`FrameDriver::frame`], which advances every projectile and redraws.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    world: World,
    view: GameView,
}

impl FrameDriver {
    pub fn new(world: World, view: GameView) -> Self {
        Self { world, view }
    }

    /// Driver whose world exactly covers `viewport`.
    pub fn for_viewport(viewport: Viewport, view: GameView, config: WorldConfig) -> Self {
        let (w, h) = view.world_size(viewport);
        Self::new(World::with_config(w, h, config), view)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Apply one input action. Returns true when the world changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        trace!(action = action.as_str(), "input");
        self.world.apply_action(action)
    }

    /// Per-tick update without drawing.
    pub fn step(&mut self) {
        self.world.tick();
    }

    /// One full frame: advance the world, then clear the canvas and draw the
    /// player followed by every projectile.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.step();
        self.draw(canvas);
    }

    /// Draw the current world without advancing it.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.view.draw(&self.world, canvas);
    }

    /// Draw the current world into a terminal framebuffer.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.view.render_into(&self.world, viewport, fb);
    }
}
