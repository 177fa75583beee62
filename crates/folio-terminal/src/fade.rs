//! The exit fade shown while the terminal waits to navigate away.
//!
//! The fade holds no clock of its own. It remembers the scheduler time at
//! which the transition began and derives opacity from the current
//! scheduler time, so it reaches zero exactly when the navigation task
//! falls due, however the frames happen to be sliced.

/// Quadratic ease-in: slow start, fast finish.
fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Opacity ramp from 1.0 to 0.0 over the transition delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitFade {
    started_ms: u64,
    duration_ms: u32,
}

impl ExitFade {
    /// Begin a fade at scheduler time `started_ms`.
    pub fn new(started_ms: u64, duration_ms: u32) -> Self {
        Self {
            started_ms,
            duration_ms,
        }
    }

    /// Linear progress in `[0.0, 1.0]` at scheduler time `now_ms`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms);
        (elapsed as f64 / f64::from(self.duration_ms)).min(1.0) as f32
    }

    /// Terminal opacity at scheduler time `now_ms`.
    pub fn opacity(&self, now_ms: u64) -> f32 {
        1.0 - ease_in(self.progress(now_ms))
    }
}
