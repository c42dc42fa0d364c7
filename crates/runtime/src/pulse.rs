use foundation::time::Time;

/// Sinusoidal marker pulse.
///
/// `0.7 + 0.3·sin(3·(t + offset))`, so the amplitude breathes in
/// `[0.4, 1.0]`. The offset staggers markers so they do not all beat in
/// sync; callers pass the marker index (in seconds) as the offset.
pub fn pulse_amplitude(time: Time, offset_s: f64) -> f64 {
    0.7 + 0.3 * (3.0 * (time.0 + offset_s)).sin()
}
