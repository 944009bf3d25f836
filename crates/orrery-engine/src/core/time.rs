/// Anything that can report how much simulation time has elapsed.
///
/// Readings must be monotonically non-decreasing across frames.
pub trait ClockSource {
    fn elapsed_time(&self) -> f64;
}

/// Frame clock driven by the host's per-frame delta.
/// Accumulates elapsed time in f64 so long sessions keep sub-millisecond precision.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Seconds since the clock started.
    elapsed: f64,
    /// Number of frames advanced so far.
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Negative or non-finite deltas count as zero so the
    /// reading never goes backwards.
    pub fn advance(&mut self, frame_dt: f64) {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.elapsed += frame_dt;
        }
        self.frame += 1;
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl ClockSource for FrameClock {
    fn elapsed_time(&self) -> f64 {
        self.elapsed
    }
}
