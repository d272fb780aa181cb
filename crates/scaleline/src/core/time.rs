/// Frame limiter.
/// The host calls in at its own refresh rate; only whole frame intervals
/// at the target rate let a frame through. Missed frames are dropped,
/// not replayed, since nothing here advances with time.
pub struct FrameLimiter {
    /// Minimum time between processed frames.
    frame_dt: f32,
    /// Time accumulated since the last processed frame.
    accumulator: f32,
}

impl FrameLimiter {
    pub fn new(target_fps: f32) -> Self {
        let fps = if target_fps > 0.0 {
            target_fps
        } else {
            log::warn!("target_fps {} is not positive, limiting to 60", target_fps);
            60.0
        };
        Self {
            frame_dt: 1.0 / fps,
            accumulator: 0.0,
        }
    }

    /// Add elapsed host time. Returns true when a frame should be processed.
    pub fn ready(&mut self, elapsed: f32) -> bool {
        self.accumulator += elapsed.max(0.0);
        if self.accumulator < self.frame_dt {
            return false;
        }
        if self.accumulator >= 2.0 * self.frame_dt {
            // Stalled for more than a frame: drop the backlog.
            self.accumulator = 0.0;
        } else {
            self.accumulator -= self.frame_dt;
        }
        true
    }

    /// The minimum frame interval in seconds.
    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_exact() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(limiter.ready(1.0 / 60.0));
    }

    #[test]
    fn waits_for_partial_frames() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(!limiter.ready(0.008)); // half a frame
        assert!(limiter.ready(0.010)); // over one frame total
    }

    #[test]
    fn long_stall_yields_a_single_frame() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(limiter.ready(1.0));
        // Backlog is dropped: the next tiny tick is not a frame.
        assert!(!limiter.ready(0.001));
    }

    #[test]
    fn cadence_resumes_after_a_stall() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(limiter.ready(0.5));
        assert!(!limiter.ready(0.010));
        assert!(limiter.ready(0.010));
        assert!(!limiter.ready(0.005));
    }

    #[test]
    fn caps_fast_hosts_at_target_rate() {
        let mut limiter = FrameLimiter::new(60.0);
        let frames = (0..100).filter(|_| limiter.ready(0.01)).count();
        // One simulated second of 100 Hz ticks.
        assert!((58..=60).contains(&frames), "frames = {}", frames);
    }

    #[test]
    fn non_positive_target_falls_back_to_sixty() {
        let limiter = FrameLimiter::new(0.0);
        assert!((limiter.frame_dt() - 1.0 / 60.0).abs() < 1e-7);
    }
}
