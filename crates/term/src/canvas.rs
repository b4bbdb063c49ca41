//! Drawing surfaces addressed in world pixels.
//!
//! [`Canvas`] is the seam between the game view and whatever actually shows
//! pixels. [`CellCanvas`] scales onto a terminal [`FrameBuffer`]; [`DrawLog`]
//! records the calls so rendering can be checked without a terminal.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rect, Rgb, BACKGROUND_COLOR};

/// A drawing surface with clear and fill-rectangle primitives.
pub trait Canvas {
    /// Clear the entire surface.
    fn clear(&mut self);

    /// Fill `rect` (world pixels) with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
}

/// Canvas backed by a terminal framebuffer.
///
/// One cell covers `cell_w` x `cell_h` world pixels. Every cell a rectangle
/// overlaps is filled, so any non-empty rectangle on screen shows at least one
/// cell.
pub struct CellCanvas<'a> {
    fb: &'a mut FrameBuffer,
    cell_w: f64,
    cell_h: f64,
    background: Rgb,
}

impl<'a> CellCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, cell_w: u16, cell_h: u16) -> Self {
        Self {
            fb,
            cell_w: f64::from(cell_w.max(1)),
            cell_h: f64::from(cell_h.max(1)),
            background: BACKGROUND_COLOR,
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Cell span `[start, end)` covered by `[lo, hi)` pixels, clipped to `limit`.
    fn span(lo: f64, hi: f64, cell: f64, limit: u16) -> Option<(u16, u16)> {
        let limit = f64::from(limit);
        let start = (lo / cell).floor().clamp(0.0, limit);
        let end = (hi / cell).ceil().clamp(0.0, limit);
        if start < end {
            Some((start as u16, end as u16))
        } else {
            None
        }
    }
}

impl Canvas for CellCanvas<'_> {
    fn clear(&mut self) {
        self.fb.clear(CellStyle::solid(self.background).into_cell(' '));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if !(rect.w > 0.0 && rect.h > 0.0) {
            return;
        }
        let Some((x0, x1)) = Self::span(rect.x, rect.right(), self.cell_w, self.fb.width()) else {
            return;
        };
        let Some((y0, y1)) = Self::span(rect.y, rect.bottom(), self.cell_h, self.fb.height())
        else {
            return;
        };
        self.fb
            .fill_rect(x0, y0, x1 - x0, y1 - y0, CellStyle::solid(color).into_cell(' '));
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect { rect: Rect, color: Rgb },
}

/// Canvas that records every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawLog {
    calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Rectangles filled since the last clear, in call order.
    pub fn visible_fills(&self) -> Vec<(Rect, Rgb)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Clear)
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match *c {
                DrawCall::FillRect { rect, color } => Some((rect, color)),
                DrawCall::Clear => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for DrawLog {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }
}
