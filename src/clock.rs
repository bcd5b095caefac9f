use std::time::{Duration, Instant};

/// Caps the main loop at a fixed frame rate by sleeping off whatever is
/// left of each frame's time budget.
pub struct FrameClock {
    last_tick: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Sleeps until at least one frame at `fps` has passed since the previous
    /// tick and returns the full frame time, sleep included.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let wait = remaining(self.last_tick.elapsed(), fps);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        frame_time
    }
}

/// Time available per frame. A zero rate means "don't limit".
pub fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs(1) / fps
}

/// How long to sleep after a frame that took `elapsed`
pub fn remaining(elapsed: Duration, fps: u32) -> Duration {
    frame_budget(fps).saturating_sub(elapsed)
}
