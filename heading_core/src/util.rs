//! Time helpers for the estimator loop.

use std::time::Duration;

/// Number of microseconds in one second.
pub const MICROS_PER_SEC: u64 = 1_000_000;

/// Elapsed seconds between two wrapping tick readings.
///
/// When `now_us < prev_us` the counter has wrapped; the interval degenerates
/// to the nominal loop period for that iteration instead of going negative.
#[inline]
pub fn dt_secs(prev_us: u32, now_us: u32, nominal: Duration) -> f64 {
    if now_us < prev_us {
        return nominal.as_secs_f64();
    }
    f64::from(now_us - prev_us) / MICROS_PER_SEC as f64
}
