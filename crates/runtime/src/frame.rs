use foundation::time::Time;

/// Deterministic frame metadata.
///
/// This is the primary timebase for the render loop. It is intentionally
/// small and pure so animation behavior can be replayed in tests without a
/// wall clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (seconds).
    pub dt_s: f64,
    /// Elapsed time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    /// Seconds between this frame and some earlier reference time.
    pub fn elapsed_since(&self, earlier: Time) -> f64 {
        self.time.since(earlier)
    }
}
