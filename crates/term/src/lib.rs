//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead draws through the [`Canvas`]
//! trait into a framebuffer that is flushed to the terminal as diffs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw in world pixels; map to character cells only at the edge
//! - Allow precise control over aspect ratio (8x16 px per cell by default)

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_shooter_core as core;
pub use tui_shooter_types as types;

pub use canvas::{Canvas, CellCanvas, DrawCall, DrawLog};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
