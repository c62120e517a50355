//! Frame throttling for screens that do not animate.

use crate::core::GameSnapshot;

/// Redraw policy: any change to the snapshot renders; menu, pause and game-over
/// screens also refresh at most once per interval.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Forget the last frame so the next call renders, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snap.fingerprint(), snap.is_static())
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: render when the fingerprint changed.
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = fingerprint != self.last_fingerprint;
        let interval_elapsed =
            now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        let render = !self.has_rendered || changed || (is_static && interval_elapsed);
        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}
