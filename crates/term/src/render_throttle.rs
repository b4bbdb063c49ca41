//! Skips redundant redraws while nothing is moving.

/// Decides whether a frame needs to be flushed to the terminal.
///
/// - A moving scene (`is_static == false`) is always rendered.
/// - A static scene is rendered as soon as its fingerprint changes, and
///   otherwise refreshed at most once per `min_static_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// Time and fingerprint of the last rendered frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Forget the last frame so the next call renders unconditionally.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(250)
    }
}
