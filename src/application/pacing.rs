use std::time::{Duration, Instant};

use tracing::debug;

/// Caps the frame rate by sleeping off whatever is left of each frame's
/// budget. Frames that already ran over budget are followed immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    /// Returns `None` for a zero target
    pub fn new(target_fps: u32) -> Option<Self> {
        (target_fps > 0).then(|| Self {
            budget: Duration::from_secs(1) / target_fps,
        })
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn target_fps(&self) -> f32 {
        1.0 / self.budget.as_secs_f32()
    }

    /// Time left to sleep after `work` took the given duration, or `None`
    /// when the next frame should start right away.
    pub fn remaining(&self, work: Duration) -> Option<Duration> {
        self.budget.checked_sub(work).filter(|rest| !rest.is_zero())
    }

    /// Sleep until the frame that started at `started` has used its budget
    pub fn wait(&self, started: Instant) -> Duration {
        let work = started.elapsed();
        match self.remaining(work) {
            Some(rest) => std::thread::sleep(rest),
            None => debug!(
                work_ms = work.as_secs_f32() * 1000.0,
                budget_ms = self.budget.as_secs_f32() * 1000.0,
                "frame over budget"
            ),
        }
        work
    }

    /// Run one frame of work and pace it. Returns the work's result and how
    /// long the work itself took.
    pub fn cycle<T>(&self, work: impl FnOnce() -> T) -> (T, Duration) {
        let started = Instant::now();
        let result = work();
        let elapsed = self.wait(started);
        (result, elapsed)
    }
}
