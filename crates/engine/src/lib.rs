//! Frame driving: scheduling, per-tick update and rendering.
//!
//! The host owns the run loop. Each iteration it feeds elapsed time to a
//! [`FrameClock`], runs the ticks that are due on the [`FrameDriver`], and
//! renders the resulting world. Nothing here reschedules itself.

pub mod clock;
pub mod config;
pub mod driver;

pub use tui_shooter_core as core;
pub use tui_shooter_term as term;
pub use tui_shooter_types as types;

pub use clock::FrameClock;
pub use config::EngineConfig;
pub use driver::FrameDriver;
