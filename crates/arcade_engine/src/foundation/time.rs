//! Frame pacing utilities

use std::time::{Duration, Instant};

/// Frame-rate limiter for presentation surfaces
///
/// Sleeps away whatever is left of the frame budget when a frame finishes early.
/// A limit of zero disables pacing.
pub struct FrameLimiter {
    frame_budget: Option<Duration>,
    last_frame: Instant,
    frame_count: u64,
}

impl FrameLimiter {
    /// Create a limiter for the given frames-per-second cap (0 = unlimited)
    pub fn new(frames_per_second: u32) -> Self {
        let frame_budget = (frames_per_second > 0)
            .then(|| Duration::from_secs_f64(1.0 / f64::from(frames_per_second)));
        Self {
            frame_budget,
            last_frame: Instant::now(),
            frame_count: 0,
        }
    }

    /// Create a limiter that never sleeps
    pub fn unlimited() -> Self {
        Self::new(0)
    }

    /// Mark the end of a frame, sleeping if the frame finished inside its budget
    pub fn wait(&mut self) {
        if let Some(budget) = self.frame_budget {
            let elapsed = self.last_frame.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.last_frame = Instant::now();
        self.frame_count += 1;
    }

    /// Per-frame budget, if limited
    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }

    /// Number of frames paced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::unlimited()
    }
}
