use crate::frame::Frame;

/// Target cadence of the host animation callback.
pub const FRAME_DT_60HZ: f64 = 1.0 / 60.0;

/// Fixed-step animation clock.
///
/// The host pumps this from its animation callback (or a test loop); each
/// `tick` yields the next [`Frame`]. The clock never reads wall time, so a
/// test can step it as fast or as slow as it likes and get identical
/// animation behavior.
///
/// Cancellation is permanent: after `cancel()` no further frames are
/// produced. A disposed view cancels its clock, which guarantees no draw can
/// be scheduled past disposal.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    dt_s: f64,
    next_index: u64,
    cancelled: bool,
}

impl AnimationClock {
    pub fn new(dt_s: f64) -> Self {
        Self {
            dt_s,
            next_index: 0,
            cancelled: false,
        }
    }

    /// Produce the next frame, or `None` once cancelled.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.cancelled {
            return None;
        }
        let frame = Frame::new(self.next_index, self.dt_s);
        self.next_index += 1;
        Some(frame)
    }

    /// Stop the clock. Irreversible.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(FRAME_DT_60HZ)
    }
}
