use std::thread;
use std::time::{Duration, Instant};

/// Monotonic tick source for control-loop timing.
///
/// - now_us(): microsecond counter with a fixed u32 wraparound width
/// - sleep(): sleeps for the provided duration (implementations may simulate)
///
/// The counter wraps roughly every 71.6 minutes; consumers detect the wrap
/// by observing `now_us() < previous` and fall back to their nominal period
/// for that interval.
pub trait Clock {
    fn now_us(&self) -> u32;
    fn sleep(&self, d: Duration);
}

/// Default, real-time clock backed by std::time::Instant.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[inline]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_us(&self) -> u32 {
        // Truncation to u32 is the wraparound; elapsed micros past u32::MAX
        // roll over exactly like a fixed-width hardware counter.
        self.origin.elapsed().as_micros() as u32
    }

    #[inline]
    fn sleep(&self, d: Duration) {
        if d.is_zero() {
            return;
        }
        thread::sleep(d);
    }
}
